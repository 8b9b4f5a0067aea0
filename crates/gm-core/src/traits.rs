//! # Core Traits (Ports)
//!
//! Providers implement `SearchMetadata`; everything else here is a
//! collaborator that the login and migration flows receive from their caller.

use std::sync::Arc;

use async_trait::async_trait;

use crate::mapping::MappingOptions;
use crate::models::{DisplayRecord, TagList};

/// Mapping contract for one provider's scraped metadata.
pub trait SearchMetadata {
    fn tags(&self) -> &TagList;

    /// Writes the display fields into a record owned by the caller.
    fn copy_to(&self, record: &mut DisplayRecord, options: &MappingOptions);

    /// One (label, value) pair per populated field, in declared order.
    fn extra_info_pairs(&self) -> Vec<(String, String)>;

    /// Consumes the metadata and produces a fresh display record.
    fn into_display_record(self, options: &MappingOptions) -> DisplayRecord
    where
        Self: Sized,
    {
        let mut record = DisplayRecord::default();
        self.copy_to(&mut record, options);
        record.extra_info = self.extra_info_pairs();
        tracing::debug!(url = %record.url, pairs = record.extra_info.len(), "mapped gallery metadata");
        record
    }
}

/// Key/value settings backing UI toggles.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait PreferenceStore: Send + Sync {
    fn get_bool(&self, key: &str, default: bool) -> bool;
    fn set_bool(&self, key: &str, value: bool) -> anyhow::Result<()>;
    fn get_int(&self, key: &str, default: i64) -> i64;
    fn set_int(&self, key: &str, value: i64) -> anyhow::Result<()>;
    fn get_string(&self, key: &str) -> Option<String>;
    fn set_string(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Arc<T> {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        (**self).get_bool(key, default)
    }

    fn set_bool(&self, key: &str, value: bool) -> anyhow::Result<()> {
        (**self).set_bool(key, value)
    }

    fn get_int(&self, key: &str, default: i64) -> i64 {
        (**self).get_int(key, default)
    }

    fn set_int(&self, key: &str, value: i64) -> anyhow::Result<()> {
        (**self).set_int(key, value)
    }

    fn get_string(&self, key: &str) -> Option<String> {
        (**self).get_string(key)
    }

    fn set_string(&self, key: &str, value: &str) -> anyhow::Result<()> {
        (**self).set_string(key, value)
    }
}

/// Tracker account whose credentials mirror a source login.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait TrackingService: Send + Sync {
    fn username(&self) -> Option<String>;
    fn password(&self) -> Option<String>;
    fn set_credentials(&self, username: &str, password: &str) -> anyhow::Result<()>;
}

/// Remote source that accepts a username/password login.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait SiteLogin: Send + Sync {
    /// Returns `Ok(false)` when the site rejected the credentials.
    /// `two_factor_code` is empty when two-factor is not in use.
    async fn login(&self, username: &str, password: &str, two_factor_code: &str) -> anyhow::Result<bool>;
}

/// Receives the go-ahead from the migration sheet.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait StartMigrationListener: Send + Sync {
    fn start_migration(&self, extra_search_param: Option<String>);
}
