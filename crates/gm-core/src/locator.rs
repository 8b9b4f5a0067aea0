//! Splitting raw gallery URLs and paths into identity segments.

use url::Url;

use crate::error::{GalleryError, Result};
use crate::models::GalleryIdentity;

/// True when `raw` starts with `scheme://`, the scheme being
/// `[A-Za-z][A-Za-z0-9+.-]*`.
fn has_scheme_prefix(raw: &str) -> bool {
    let Some((scheme, _)) = raw.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

/// Non-blank path segments of `raw`.
///
/// Full URLs (anything with a `scheme://` prefix) go through a URL parser and
/// have their segments percent-decoded; everything else is split on `/` as-is.
pub fn path_segments(raw: &str) -> Result<Vec<String>> {
    let segments: Vec<String> = if has_scheme_prefix(raw) {
        let url = Url::parse(raw).map_err(|e| GalleryError::malformed(raw, e.to_string()))?;
        match url.path_segments() {
            Some(parts) => parts
                .map(|s| {
                    urlencoding::decode(s)
                        .map(|d| d.into_owned())
                        .unwrap_or_else(|_| s.to_string())
                })
                .collect(),
            None => Vec::new(),
        }
    } else {
        raw.split('/').map(str::to_string).collect()
    };

    Ok(segments.into_iter().filter(|s| !s.trim().is_empty()).collect())
}

/// Identifier at segment 1, token at segment 2 (after blank removal).
pub fn parse_identity(raw: &str) -> Result<GalleryIdentity> {
    let mut segments = path_segments(raw)?.into_iter().skip(1);
    match (segments.next(), segments.next()) {
        (Some(id), Some(token)) => Ok(GalleryIdentity { id, token }),
        _ => Err(GalleryError::malformed(raw, "expected at least three path segments")),
    }
}
