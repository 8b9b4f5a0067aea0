//! # gm-ehentai
//!
//! E-Hentai / ExHentai implementation of `SearchMetadata`.
//! Owns the `/g/{id}/{token}/?nw=always` locator format.

use chrono::{DateTime, Utc};
use gm_core::error::Result;
use gm_core::format::{format_date, format_rating, format_size, yes_no};
use gm_core::locator::parse_identity;
use gm_core::mapping::{
    classify_status, derive_artist, derive_genre_string, resolve_title, MappingOptions, DESCRIPTION_PLACEHOLDER,
};
use gm_core::models::{DisplayRecord, GalleryIdentity, TagList};
use gm_core::traits::SearchMetadata;
use serde::{Deserialize, Serialize};

pub const EH_GENRE_NAMESPACE: &str = "genre";
pub const EH_ARTIST_NAMESPACE: &str = "artist";

/// Everything the E-Hentai scraper knows about one gallery.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EHentaiSearchMetadata {
    pub gid: Option<String>,
    pub token: Option<String>,
    /// Scraped from ExHentai rather than E-Hentai
    pub exh: Option<bool>,
    pub thumbnail_url: Option<String>,

    pub title: Option<String>,
    /// Japanese title
    pub alt_title: Option<String>,

    /// Gallery category (e.g. "Doujinshi")
    pub genre: Option<String>,
    pub uploader: Option<String>,

    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub date_posted: Option<DateTime<Utc>>,
    pub parent: Option<String>,
    /// Not a boolean: the site shows "Yes" or a reason ("No (Replaced)")
    pub visible: Option<String>,
    pub language: Option<String>,
    pub translated: Option<bool>,
    /// Bytes
    pub size: Option<u64>,
    /// Pages
    pub length: Option<u32>,
    pub favorites: Option<u32>,
    pub rating_count: Option<u32>,
    pub average_rating: Option<f64>,

    pub aged: bool,
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub last_update_check: Option<DateTime<Utc>>,

    pub tags: TagList,
}

/// Splits a gallery URL or path into `(gid, token)`.
pub fn parse_locator(url: &str) -> Result<GalleryIdentity> {
    parse_identity(url).inspect_err(|e| tracing::debug!(error = %e, "rejected gallery locator"))
}

pub fn gallery_id(url: &str) -> Result<String> {
    parse_locator(url).map(|identity| identity.id)
}

pub fn gallery_token(url: &str) -> Result<String> {
    parse_locator(url).map(|identity| identity.token)
}

pub fn id_and_token_to_url(id: &str, token: &str) -> String {
    format!("/g/{id}/{token}/?nw=always")
}

pub fn build_locator(identity: &GalleryIdentity) -> String {
    id_and_token_to_url(&identity.id, &identity.token)
}

/// Rewrites any accepted URL or path into the canonical locator.
pub fn normalize_url(url: &str) -> Result<String> {
    parse_locator(url).map(|identity| build_locator(&identity))
}

impl EHentaiSearchMetadata {
    /// Starts a record from a gallery URL, filling `gid` and `token`.
    pub fn from_url(url: &str) -> Result<Self> {
        let identity = parse_locator(url)?;
        Ok(Self {
            gid: Some(identity.id),
            token: Some(identity.token),
            ..Self::default()
        })
    }

    pub fn identity(&self) -> Option<GalleryIdentity> {
        match (&self.gid, &self.token) {
            (Some(id), Some(token)) => Some(GalleryIdentity::new(id.clone(), token.clone())),
            _ => None,
        }
    }
}

impl SearchMetadata for EHentaiSearchMetadata {
    fn tags(&self) -> &TagList {
        &self.tags
    }

    fn copy_to(&self, record: &mut DisplayRecord, options: &MappingOptions) {
        if let Some(identity) = self.identity() {
            record.url = build_locator(&identity);
        }
        if let Some(thumbnail_url) = &self.thumbnail_url {
            record.thumbnail_url = Some(thumbnail_url.clone());
        }

        let title = resolve_title(
            self.title.as_deref(),
            self.alt_title.as_deref(),
            options.prefer_localized_title,
        );
        if let Some(title) = title {
            record.title = title.to_string();
        }

        let artist = derive_artist(&self.tags, EH_ARTIST_NAMESPACE);
        if !artist.is_empty() {
            record.artist = Some(artist);
        }

        record.genre = Some(derive_genre_string(&self.tags, EH_GENRE_NAMESPACE));

        // Only the primary title carries the "(ongoing)" marker
        record.status = classify_status(self.title.as_deref(), &options.ongoing_suffixes);

        record.description = Some(DESCRIPTION_PLACEHOLDER.to_string());
    }

    fn extra_info_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        let mut push = |label: &str, value: String| pairs.push((label.to_string(), value));

        if let Some(gid) = &self.gid {
            push("ID", gid.clone());
        }
        if let Some(token) = &self.token {
            push("Token", token.clone());
        }
        if let Some(exh) = self.exh {
            push("Is ExHentai gallery", yes_no(exh));
        }
        if let Some(thumbnail_url) = &self.thumbnail_url {
            push("Thumbnail URL", thumbnail_url.clone());
        }
        if let Some(title) = &self.title {
            push("Title", title.clone());
        }
        if let Some(alt_title) = &self.alt_title {
            push("Alternate title", alt_title.clone());
        }
        if let Some(genre) = &self.genre {
            push("Genre", genre.clone());
        }
        if let Some(uploader) = &self.uploader {
            push("Uploader", uploader.clone());
        }
        if let Some(date_posted) = &self.date_posted {
            push("Date posted", format_date(date_posted));
        }
        if let Some(parent) = &self.parent {
            push("Parent", parent.clone());
        }
        if let Some(visible) = &self.visible {
            push("Visible", visible.clone());
        }
        if let Some(language) = &self.language {
            push("Language", language.clone());
        }
        if let Some(translated) = self.translated {
            push("Translated", yes_no(translated));
        }
        if let Some(size) = self.size {
            push("Gallery size", format_size(size));
        }
        if let Some(length) = self.length {
            push("Page count", length.to_string());
        }
        if let Some(favorites) = self.favorites {
            push("Total favorites", favorites.to_string());
        }
        if let Some(rating_count) = self.rating_count {
            push("Total ratings", rating_count.to_string());
        }
        if let Some(average_rating) = self.average_rating {
            push("Average rating", format_rating(average_rating));
        }
        push("Aged", yes_no(self.aged));
        if let Some(last_update_check) = &self.last_update_check {
            push("Last update check", format_date(last_update_check));
        }

        pairs
    }
}
