//! Migration sheet against the in-memory preference store.

use std::sync::Arc;

use gm_core::traits::PreferenceStore;
use gm_migration::{
    MigrationFlags, MigrationSheet, PREF_MIGRATE_FLAGS, PREF_SKIP_PRE_MIGRATION, PREF_SMART_MIGRATE,
    PREF_USE_SOURCE_WITH_MOST,
};
use gm_prefs_memory::MemoryPreferenceStore;
use integration_tests::RecordingListener;

#[test]
fn choices_survive_reopening_the_sheet() {
    let prefs = Arc::new(MemoryPreferenceStore::new());

    let mut sheet = MigrationSheet::open(prefs.clone());
    sheet.set_flag(MigrationFlags::CATEGORIES, false).unwrap();
    sheet.set_flag(MigrationFlags::EXTRA, false).unwrap();
    sheet.set_smart_search(true).unwrap();
    sheet.select_source(1).unwrap();
    sheet.set_skip_pre_migration(true);
    sheet.confirm(&RecordingListener::default()).unwrap();

    let reopened = MigrationSheet::open(prefs.clone());
    let state = reopened.state();
    assert_eq!(state.flags, MigrationFlags::CHAPTERS | MigrationFlags::TRACK);
    assert!(state.smart_search);
    assert!(state.use_source_with_most);
    assert!(state.skip_pre_migration);
    assert!(state.extra_search_param.is_empty());

    assert_eq!(prefs.get_int(PREF_MIGRATE_FLAGS, -1), 0b0101);
    assert!(prefs.get_bool(PREF_SMART_MIGRATE, false));
    assert!(prefs.get_bool(PREF_USE_SOURCE_WITH_MOST, false));
    assert!(prefs.get_bool(PREF_SKIP_PRE_MIGRATION, false));
}

#[test]
fn abandoned_sheet_does_not_persist_skip_flag() {
    let prefs = Arc::new(MemoryPreferenceStore::new());
    let mut sheet = MigrationSheet::open(prefs.clone());
    sheet.set_skip_pre_migration(true);
    drop(sheet);
    assert!(!prefs.get_bool(PREF_SKIP_PRE_MIGRATION, false));
}

#[test]
fn listener_receives_extra_param_only_with_smart_search() {
    let prefs = Arc::new(MemoryPreferenceStore::new());
    let listener = RecordingListener::default();

    let mut sheet = MigrationSheet::open(prefs.clone());
    sheet.set_extra_search_param_enabled(true);
    sheet.set_extra_search_param("chapter 5");
    sheet.confirm(&listener).unwrap();

    let mut sheet = MigrationSheet::open(prefs.clone());
    sheet.set_smart_search(true).unwrap();
    sheet.set_extra_search_param_enabled(true);
    sheet.set_extra_search_param("chapter 5");
    sheet.confirm(&listener).unwrap();

    assert_eq!(
        *listener.calls.lock().unwrap(),
        vec![None, Some("chapter 5".to_string())]
    );
}

#[test]
fn out_of_range_flags_are_truncated() {
    let prefs = Arc::new(MemoryPreferenceStore::new());
    prefs.set_int(PREF_MIGRATE_FLAGS, 0b1_0001).unwrap();
    let sheet = MigrationSheet::open(prefs);
    assert_eq!(sheet.state().flags, MigrationFlags::CHAPTERS);
}
