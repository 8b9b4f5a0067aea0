//! Provider-independent pieces of the metadata -> display record mapping.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::{PublicationStatus, TagList};

/// Placeholder written into `DisplayRecord::description`.
pub const DESCRIPTION_PLACEHOLDER: &str = "meta";

/// Title endings that mark a gallery as still running. Kept narrow: a false
/// "ongoing" is worse than a missed one.
pub const DEFAULT_ONGOING_SUFFIXES: &[&str] = &["[ongoing]", "(ongoing)", "{ongoing}", "<ongoing>", "##ongoing"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingOptions {
    /// Prefer the localized (Japanese) title over the primary one
    pub prefer_localized_title: bool,
    pub ongoing_suffixes: Vec<String>,
}

impl Default for MappingOptions {
    fn default() -> Self {
        Self {
            prefer_localized_title: false,
            ongoing_suffixes: DEFAULT_ONGOING_SUFFIXES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Picks the display title.
///
/// With `prefer_localized` the alternate title wins and the primary one is the
/// fallback. Without it only the primary title is used: a missing primary
/// title yields `None` even when an alternate title exists.
pub fn resolve_title<'a>(
    title: Option<&'a str>,
    alt_title: Option<&'a str>,
    prefer_localized: bool,
) -> Option<&'a str> {
    if prefer_localized {
        alt_title.or(title)
    } else {
        title
    }
}

/// `Ongoing` if the title ends with one of `ongoing_suffixes` (ignoring
/// case), `Completed` otherwise.
pub fn classify_status<S: AsRef<str>>(title: Option<&str>, ongoing_suffixes: &[S]) -> PublicationStatus {
    let Some(title) = title else {
        return PublicationStatus::Completed;
    };
    let title = title.to_lowercase();
    let ongoing = ongoing_suffixes
        .iter()
        .map(|s| s.as_ref().to_lowercase())
        .any(|suffix| !suffix.is_empty() && title.ends_with(&suffix));

    if ongoing {
        PublicationStatus::Ongoing
    } else {
        PublicationStatus::Completed
    }
}

/// Comma-separated names of the tags in `artist_namespace`, insertion order.
pub fn derive_artist(tags: &TagList, artist_namespace: &str) -> String {
    tags.of_namespace(artist_namespace)
        .map(|t| t.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Comma-separated names of the tags in `genre_namespace`, sorted and
/// de-duplicated so the result only depends on the tag set.
pub fn derive_genre_string(tags: &TagList, genre_namespace: &str) -> String {
    tags.of_namespace(genre_namespace)
        .map(|t| t.name.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect::<Vec<_>>()
        .join(", ")
}
