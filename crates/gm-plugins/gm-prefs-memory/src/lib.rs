//! # gm-prefs-memory
//!
//! In-process implementations of `PreferenceStore` and `TrackingService`.
//! Nothing is written to disk; values live as long as the store.

use dashmap::DashMap;
use gm_core::traits::{PreferenceStore, TrackingService};

#[derive(Debug, Clone, PartialEq)]
enum PrefValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl PrefValue {
    fn kind(&self) -> &'static str {
        match self {
            PrefValue::Bool(_) => "bool",
            PrefValue::Int(_) => "int",
            PrefValue::Text(_) => "string",
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: DashMap<String, PrefValue>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `value` unless the key already holds a different type.
    fn put(&self, key: &str, value: PrefValue) -> anyhow::Result<()> {
        if let Some(existing) = self.values.get(key) {
            if std::mem::discriminant(existing.value()) != std::mem::discriminant(&value) {
                anyhow::bail!(
                    "preference {key:?} holds a {} value, refusing to store a {}",
                    existing.kind(),
                    value.kind()
                );
            }
        }
        tracing::debug!(key, ?value, "preference updated");
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.values.get(key).as_deref() {
            Some(PrefValue::Bool(v)) => *v,
            _ => default,
        }
    }

    fn set_bool(&self, key: &str, value: bool) -> anyhow::Result<()> {
        self.put(key, PrefValue::Bool(value))
    }

    fn get_int(&self, key: &str, default: i64) -> i64 {
        match self.values.get(key).as_deref() {
            Some(PrefValue::Int(v)) => *v,
            _ => default,
        }
    }

    fn set_int(&self, key: &str, value: i64) -> anyhow::Result<()> {
        self.put(key, PrefValue::Int(value))
    }

    fn get_string(&self, key: &str) -> Option<String> {
        match self.values.get(key).as_deref() {
            Some(PrefValue::Text(v)) => Some(v.clone()),
            _ => None,
        }
    }

    fn set_string(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.put(key, PrefValue::Text(value.to_string()))
    }
}

/// Tracker credentials kept in a `PreferenceStore` under a per-service prefix.
pub struct StoredTrackingService<P> {
    prefs: P,
    service_id: String,
}

impl<P: PreferenceStore> StoredTrackingService<P> {
    pub fn new(prefs: P, service_id: impl Into<String>) -> Self {
        Self {
            prefs,
            service_id: service_id.into(),
        }
    }

    fn key(&self, field: &str) -> String {
        format!("track_{field}_{}", self.service_id)
    }
}

impl<P: PreferenceStore> TrackingService for StoredTrackingService<P> {
    fn username(&self) -> Option<String> {
        self.prefs.get_string(&self.key("username")).filter(|s| !s.is_empty())
    }

    fn password(&self) -> Option<String> {
        self.prefs.get_string(&self.key("password")).filter(|s| !s.is_empty())
    }

    fn set_credentials(&self, username: &str, password: &str) -> anyhow::Result<()> {
        self.prefs.set_string(&self.key("username"), username)?;
        self.prefs.set_string(&self.key("password"), password)
    }
}
