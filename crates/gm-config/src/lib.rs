//! # gm-config
//!
//! Layered settings: built-in defaults, then an optional `gallery-meta.toml`,
//! then `GALLERY_META__*` environment variables (a `.env` file is loaded first).

use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use gm_core::mapping::{MappingOptions, DEFAULT_ONGOING_SUFFIXES};
use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_FILE: &str = "gallery-meta";
pub const ENV_PREFIX: &str = "GALLERY_META";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not load settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid setting {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Prefer the Japanese title when a gallery has one
    pub use_japanese_title: bool,
    pub ongoing_suffixes: Vec<String>,
    /// `EnvFilter` directive, e.g. `info,gm_login=debug`
    pub log_filter: String,
    pub log_json: bool,
}

impl Settings {
    /// Reads `.env`, the optional config file and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let builder = Self::defaults()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("ongoing_suffixes")
                    .try_parsing(true),
            );
        Self::finish(builder.build()?)
    }

    /// Defaults overlaid with an inline TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let built = Self::defaults()?
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?;
        Self::finish(built)
    }

    fn defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let suffixes: Vec<String> = DEFAULT_ONGOING_SUFFIXES.iter().map(|s| s.to_string()).collect();
        Ok(Config::builder()
            .set_default("use_japanese_title", false)?
            .set_default("ongoing_suffixes", suffixes)?
            .set_default("log_filter", "info")?
            .set_default("log_json", false)?)
    }

    fn finish(built: Config) -> Result<Self, ConfigError> {
        let settings: Settings = built.try_deserialize()?;
        if settings.ongoing_suffixes.iter().any(|s| s.trim().is_empty()) {
            return Err(ConfigError::Invalid {
                key: "ongoing_suffixes",
                reason: "a blank suffix would mark every title as ongoing".into(),
            });
        }
        Ok(settings)
    }

    pub fn mapping_options(&self) -> MappingOptions {
        MappingOptions {
            prefer_localized_title: self.use_japanese_title,
            ongoing_suffixes: self.ongoing_suffixes.clone(),
        }
    }
}
