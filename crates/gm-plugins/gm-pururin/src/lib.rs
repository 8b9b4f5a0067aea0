//! # gm-pururin
//!
//! Pururin implementation of `SearchMetadata`.
//! Locators have the shape `/gallery/{id}/{short_link}`.

use gm_core::error::{GalleryError, Result};
use gm_core::format::format_rating;
use gm_core::locator::parse_identity;
use gm_core::mapping::{classify_status, derive_artist, derive_genre_string, MappingOptions, DESCRIPTION_PLACEHOLDER};
use gm_core::models::{DisplayRecord, GalleryIdentity, TagList};
use gm_core::traits::SearchMetadata;
use serde::{Deserialize, Serialize};

pub const BASE_URL: &str = "https://pururin.io";

pub const TAG_NAMESPACE_ARTIST: &str = "artist";
pub const TAG_NAMESPACE_CATEGORY: &str = "category";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PururinSearchMetadata {
    pub id: Option<u32>,
    pub short_link: Option<String>,

    /// English title
    pub title: Option<String>,
    /// Japanese title
    pub alt_title: Option<String>,

    pub thumbnail_url: Option<String>,

    /// Uploader name as rendered on the page
    pub uploader_display: Option<String>,
    pub uploader: Option<String>,

    pub pages: Option<u32>,
    /// Already human readable on the site ("12.3 MB")
    pub file_size: Option<String>,

    pub rating_count: Option<u32>,
    pub average_rating: Option<f64>,

    pub tags: TagList,
}

pub fn build_locator(id: u32, short_link: &str) -> String {
    format!("/gallery/{id}/{short_link}")
}

/// Numeric id and short link of a Pururin URL or path.
fn parse_id_and_link(url: &str) -> Result<(u32, String)> {
    let identity = parse_identity(url)?;
    match identity.id.parse::<u32>() {
        Ok(id) => Ok((id, identity.token)),
        Err(_) => {
            tracing::debug!(id = %identity.id, "rejected non-numeric pururin id");
            Err(GalleryError::malformed(url, "gallery id is not numeric"))
        }
    }
}

/// Splits a Pururin URL or path into `(id, short_link)`.
///
/// The id must be numeric.
pub fn parse_locator(url: &str) -> Result<GalleryIdentity> {
    let (id, short_link) = parse_id_and_link(url)?;
    Ok(GalleryIdentity::new(id.to_string(), short_link))
}

pub fn normalize_url(url: &str) -> Result<String> {
    let (id, short_link) = parse_id_and_link(url)?;
    Ok(build_locator(id, &short_link))
}

impl PururinSearchMetadata {
    pub fn from_url(url: &str) -> Result<Self> {
        let (id, short_link) = parse_id_and_link(url)?;
        Ok(Self {
            id: Some(id),
            short_link: Some(short_link),
            ..Self::default()
        })
    }
}

impl SearchMetadata for PururinSearchMetadata {
    fn tags(&self) -> &TagList {
        &self.tags
    }

    fn copy_to(&self, record: &mut DisplayRecord, options: &MappingOptions) {
        if let (Some(id), Some(short_link)) = (self.id, &self.short_link) {
            record.url = build_locator(id, short_link);
        }

        // Pururin always lists the English title first, so fall back to the
        // Japanese one regardless of preference
        if let Some(title) = self.title.as_ref().or(self.alt_title.as_ref()) {
            record.title = title.clone();
        }

        if let Some(thumbnail_url) = &self.thumbnail_url {
            record.thumbnail_url = Some(thumbnail_url.clone());
        }

        record.artist = Some(derive_artist(&self.tags, TAG_NAMESPACE_ARTIST));
        record.genre = Some(derive_genre_string(&self.tags, TAG_NAMESPACE_CATEGORY));
        record.status = classify_status(self.title.as_deref(), &options.ongoing_suffixes);
        record.description = Some(DESCRIPTION_PLACEHOLDER.to_string());
    }

    fn extra_info_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        let mut push = |label: &str, value: String| pairs.push((label.to_string(), value));

        if let Some(id) = self.id {
            push("ID", id.to_string());
        }
        if let Some(title) = &self.title {
            push("Title", title.clone());
        }
        if let Some(alt_title) = &self.alt_title {
            push("Alternate title", alt_title.clone());
        }
        if let Some(thumbnail_url) = &self.thumbnail_url {
            push("Thumbnail URL", thumbnail_url.clone());
        }
        if let Some(uploader_display) = &self.uploader_display {
            push("Uploader display name", uploader_display.clone());
        }
        if let Some(uploader) = &self.uploader {
            push("Uploader", uploader.clone());
        }
        if let Some(pages) = self.pages {
            push("Page count", pages.to_string());
        }
        if let Some(file_size) = &self.file_size {
            push("Gallery size", file_size.clone());
        }
        if let Some(rating_count) = self.rating_count {
            push("Total ratings", rating_count.to_string());
        }
        if let Some(average_rating) = self.average_rating {
            push("Average rating", format_rating(average_rating));
        }

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gm_core::models::{PublicationStatus, Tag};

    #[test]
    fn test_locator_shape() {
        assert_eq!(build_locator(42, "my-gallery"), "/gallery/42/my-gallery");
        assert_eq!(
            normalize_url("https://pururin.io/gallery/42/my-gallery").unwrap(),
            "/gallery/42/my-gallery"
        );
        assert!(parse_locator("/gallery/abc/my-gallery").is_err());
    }

    #[test]
    fn test_normalize_matches_build_locator() {
        for url in ["https://pururin.io/gallery/0042/my-gallery/", "gallery/42/my-gallery"] {
            assert_eq!(normalize_url(url).unwrap(), build_locator(42, "my-gallery"));
        }
        assert_eq!(parse_locator("/gallery/0042/x").unwrap(), GalleryIdentity::new("42", "x"));
        assert!(normalize_url("/gallery/4294967296/x").is_err());
        assert!(PururinSearchMetadata::from_url("/gallery/-1/x").is_err());
    }

    #[test]
    fn test_from_url() {
        let meta = PururinSearchMetadata::from_url("/gallery/42/my-gallery").unwrap();
        assert_eq!(meta.id, Some(42));
        assert_eq!(meta.short_link.as_deref(), Some("my-gallery"));
    }

    #[test]
    fn test_title_falls_back_to_alt() {
        let meta = PururinSearchMetadata {
            alt_title: Some("Japanese".into()),
            ..Default::default()
        };
        let record = meta.into_display_record(&MappingOptions::default());
        assert_eq!(record.title, "Japanese");
        assert_eq!(record.url, "");
    }

    #[test]
    fn test_artist_always_assigned() {
        let meta = PururinSearchMetadata {
            id: Some(1),
            short_link: Some("x".into()),
            tags: vec![Tag::new("category", "Doujinshi"), Tag::new("parody", "Original")].into(),
            ..Default::default()
        };
        let record = meta.into_display_record(&MappingOptions::default());
        assert_eq!(record.artist.as_deref(), Some(""));
        assert_eq!(record.genre.as_deref(), Some("Doujinshi"));
        assert_eq!(record.status, PublicationStatus::Completed);
    }

    #[test]
    fn test_extra_info_pairs() {
        let meta = PururinSearchMetadata {
            id: Some(7),
            uploader: Some("someone".into()),
            file_size: Some("12.3 MB".into()),
            average_rating: Some(3.0),
            ..Default::default()
        };
        assert_eq!(
            meta.extra_info_pairs(),
            vec![
                ("ID".to_string(), "7".to_string()),
                ("Uploader".to_string(), "someone".to_string()),
                ("Gallery size".to_string(), "12.3 MB".to_string()),
                ("Average rating".to_string(), "3.0".to_string()),
            ]
        );
    }
}
