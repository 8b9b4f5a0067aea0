//! Shared fixtures for the cross-crate tests in `tests/`.

use std::sync::Mutex;

use chrono::{TimeZone, Utc};
use gm_core::models::{Tag, TagWeight};
use gm_core::traits::StartMigrationListener;
use gm_ehentai::EHentaiSearchMetadata;
use gm_pururin::PururinSearchMetadata;

/// A fully scraped E-Hentai gallery.
pub fn ehentai_gallery() -> EHentaiSearchMetadata {
    EHentaiSearchMetadata {
        gid: Some("1234567".into()),
        token: Some("0a1b2c3d4e".into()),
        exh: Some(false),
        thumbnail_url: Some("https://ehgt.org/t/aa/bb/cover.jpg".into()),
        title: Some("[Circle (Artist)] Long Running Story [Ongoing]".into()),
        alt_title: Some("長期連載".into()),
        genre: Some("Manga".into()),
        uploader: Some("scanlator".into()),
        date_posted: Some(Utc.with_ymd_and_hms(2021, 6, 1, 12, 30, 0).unwrap()),
        parent: None,
        visible: Some("Yes".into()),
        language: Some("English".into()),
        translated: Some(true),
        size: Some(52_428_800),
        length: Some(24),
        favorites: Some(310),
        rating_count: Some(88),
        average_rating: Some(4.62),
        aged: false,
        last_update_check: None,
        tags: vec![
            Tag::new("artist", "artist one"),
            Tag::new("group", "circle"),
            Tag::new("artist", "artist two").with_weight(TagWeight::Light),
            Tag::new("genre", "manga"),
            Tag::new("female", "glasses").with_weight(TagWeight::Weak),
        ]
        .into(),
    }
}

pub fn pururin_gallery() -> PururinSearchMetadata {
    PururinSearchMetadata {
        id: Some(48213),
        short_link: Some("summer-days".into()),
        title: Some("Summer Days".into()),
        alt_title: Some("夏の日".into()),
        thumbnail_url: Some("https://cdn.pururin.io/assets/images/data/48213/cover.jpg".into()),
        uploader_display: Some("Uploader".into()),
        uploader: Some("uploader".into()),
        pages: Some(32),
        file_size: Some("18.4 MB".into()),
        rating_count: Some(12),
        average_rating: Some(4.0),
        tags: vec![
            Tag::new("artist", "someone"),
            Tag::new("category", "Doujinshi"),
            Tag::new("category", "Artbook"),
        ]
        .into(),
    }
}

/// Records every `start_migration` call.
#[derive(Default)]
pub struct RecordingListener {
    pub calls: Mutex<Vec<Option<String>>>,
}

impl StartMigrationListener for RecordingListener {
    fn start_migration(&self, extra_search_param: Option<String>) {
        self.calls.lock().unwrap().push(extra_search_param);
    }
}
