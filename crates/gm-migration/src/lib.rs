//! # gm-migration
//!
//! State behind the migration bottom sheet: which data to carry over and how
//! to search for the target. Every toggle is written straight through to the
//! injected `PreferenceStore`.

use std::sync::Arc;

use gm_core::error::{GalleryError, Result};
use gm_core::traits::{PreferenceStore, StartMigrationListener};
use serde::{Deserialize, Serialize};

pub const PREF_MIGRATE_FLAGS: &str = "migrate_flags";
pub const PREF_SMART_MIGRATE: &str = "smart_migrate";
pub const PREF_USE_SOURCE_WITH_MOST: &str = "use_source_with_most";
pub const PREF_SKIP_PRE_MIGRATION: &str = "skip_pre_migration";

pub const SKIP_PRE_MIGRATION_NOTICE: &str =
    "Migration will start right away next time. This can be changed in the settings.";

/// Which parts of a manga are copied to the migration target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MigrationFlags(u32);

impl MigrationFlags {
    pub const CHAPTERS: MigrationFlags = MigrationFlags(0b0001);
    pub const CATEGORIES: MigrationFlags = MigrationFlags(0b0010);
    pub const TRACK: MigrationFlags = MigrationFlags(0b0100);
    pub const EXTRA: MigrationFlags = MigrationFlags(0b1000);

    pub const fn empty() -> Self {
        MigrationFlags(0)
    }

    pub const fn all() -> Self {
        MigrationFlags(0b1111)
    }

    /// Unknown bits are dropped.
    pub const fn from_bits_truncate(bits: u32) -> Self {
        MigrationFlags(bits & Self::all().0)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: MigrationFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn set(&mut self, other: MigrationFlags, enabled: bool) {
        if enabled {
            self.0 |= other.0;
        } else {
            self.0 &= !other.0;
        }
    }

    pub const fn has_chapters(self) -> bool {
        self.contains(Self::CHAPTERS)
    }

    pub const fn has_categories(self) -> bool {
        self.contains(Self::CATEGORIES)
    }

    pub const fn has_tracks(self) -> bool {
        self.contains(Self::TRACK)
    }

    pub const fn has_extra(self) -> bool {
        self.contains(Self::EXTRA)
    }
}

impl std::ops::BitOr for MigrationFlags {
    type Output = MigrationFlags;

    fn bitor(self, rhs: MigrationFlags) -> MigrationFlags {
        MigrationFlags(self.0 | rhs.0)
    }
}

/// Everything the sheet shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationSheetState {
    pub flags: MigrationFlags,
    pub smart_search: bool,
    pub extra_search_param_enabled: bool,
    pub extra_search_param: String,
    /// Radio group: index 0 = first source found, index 1 = source with most chapters
    pub use_source_with_most: bool,
    pub skip_pre_migration: bool,
}

pub struct MigrationSheet {
    prefs: Arc<dyn PreferenceStore>,
    state: MigrationSheetState,
}

fn pref_error(e: anyhow::Error) -> GalleryError {
    GalleryError::Preference(e.to_string())
}

impl MigrationSheet {
    /// Loads the sheet from stored preferences. The extra search parameter
    /// always starts hidden and empty.
    pub fn open(prefs: Arc<dyn PreferenceStore>) -> Self {
        let stored = prefs.get_int(PREF_MIGRATE_FLAGS, i64::from(MigrationFlags::all().bits()));
        let flags = u32::try_from(stored)
            .map(MigrationFlags::from_bits_truncate)
            .unwrap_or_else(|_| MigrationFlags::all());

        let state = MigrationSheetState {
            flags,
            smart_search: prefs.get_bool(PREF_SMART_MIGRATE, false),
            extra_search_param_enabled: false,
            extra_search_param: String::new(),
            use_source_with_most: prefs.get_bool(PREF_USE_SOURCE_WITH_MOST, false),
            skip_pre_migration: prefs.get_bool(PREF_SKIP_PRE_MIGRATION, false),
        };
        tracing::debug!(?state, "migration sheet opened");
        Self { prefs, state }
    }

    pub fn state(&self) -> &MigrationSheetState {
        &self.state
    }

    /// Toggles one data flag and persists the full flag set.
    pub fn set_flag(&mut self, flag: MigrationFlags, checked: bool) -> Result<MigrationFlags> {
        let mut flags = self.state.flags;
        flags.set(flag, checked);
        self.prefs
            .set_int(PREF_MIGRATE_FLAGS, i64::from(flags.bits()))
            .map_err(pref_error)?;
        self.state.flags = flags;
        Ok(flags)
    }

    pub fn set_smart_search(&mut self, checked: bool) -> Result<()> {
        self.prefs.set_bool(PREF_SMART_MIGRATE, checked).map_err(pref_error)?;
        self.state.smart_search = checked;
        Ok(())
    }

    pub fn source_index(&self) -> usize {
        usize::from(self.state.use_source_with_most)
    }

    pub fn select_source(&mut self, index: usize) -> Result<()> {
        if index > 1 {
            return Err(GalleryError::Validation(format!("no source option at index {index}")));
        }
        let use_most = index == 1;
        self.prefs
            .set_bool(PREF_USE_SOURCE_WITH_MOST, use_most)
            .map_err(pref_error)?;
        self.state.use_source_with_most = use_most;
        Ok(())
    }

    pub fn set_extra_search_param_enabled(&mut self, enabled: bool) {
        self.state.extra_search_param_enabled = enabled;
    }

    pub fn set_extra_search_param(&mut self, text: impl Into<String>) {
        self.state.extra_search_param = text.into();
    }

    /// Not persisted until `confirm`. Returns a notice to show when the
    /// pre-migration step gets switched off.
    pub fn set_skip_pre_migration(&mut self, checked: bool) -> Option<&'static str> {
        self.state.skip_pre_migration = checked;
        checked.then_some(SKIP_PRE_MIGRATION_NOTICE)
    }

    /// Extra query text handed to the migration, if smart search uses one.
    pub fn extra_search_param(&self) -> Option<String> {
        let text = &self.state.extra_search_param;
        (self.state.smart_search && !text.trim().is_empty()).then(|| text.clone())
    }

    /// Persists the skip flag and starts the migration. Consumes the sheet.
    pub fn confirm(self, listener: &dyn StartMigrationListener) -> Result<()> {
        self.prefs
            .set_bool(PREF_SKIP_PRE_MIGRATION, self.state.skip_pre_migration)
            .map_err(pref_error)?;
        let extra = self.extra_search_param();
        tracing::info!(flags = self.state.flags.bits(), extra = ?extra, "starting migration");
        listener.start_migration(extra);
        Ok(())
    }
}
