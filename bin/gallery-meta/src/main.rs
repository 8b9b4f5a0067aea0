//! # gallery-meta
//!
//! Command-line front end: maps scraped metadata dumps into display records
//! and normalizes gallery locators. Providers are picked at compile time.

use std::path::Path;

use anyhow::{bail, Context};
use gm_config::Settings;
use gm_core::mapping::MappingOptions;
#[cfg(any(feature = "ehentai", feature = "pururin"))]
use gm_core::traits::SearchMetadata;
use gm_core::DisplayRecord;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage:
  gallery-meta map <provider> <metadata.json>
  gallery-meta normalize <provider> <url>";

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);
    if settings.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[cfg_attr(not(any(feature = "ehentai", feature = "pururin")), allow(unused_variables))]
fn map_file(provider: &str, path: &Path, options: &MappingOptions) -> anyhow::Result<DisplayRecord> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    match provider {
        #[cfg(feature = "ehentai")]
        "ehentai" => {
            let meta: gm_ehentai::EHentaiSearchMetadata =
                serde_json::from_str(&raw).context("parsing e-hentai metadata")?;
            Ok(meta.into_display_record(options))
        }
        #[cfg(feature = "pururin")]
        "pururin" => {
            let meta: gm_pururin::PururinSearchMetadata =
                serde_json::from_str(&raw).context("parsing pururin metadata")?;
            Ok(meta.into_display_record(options))
        }
        other => bail!("unknown or disabled provider {other:?}"),
    }
}

#[cfg_attr(not(any(feature = "ehentai", feature = "pururin")), allow(unused_variables))]
fn normalize(provider: &str, url: &str) -> anyhow::Result<String> {
    match provider {
        #[cfg(feature = "ehentai")]
        "ehentai" => Ok(gm_ehentai::normalize_url(url)?),
        #[cfg(feature = "pururin")]
        "pururin" => Ok(gm_pururin::normalize_url(url)?),
        other => bail!("unknown or disabled provider {other:?}"),
    }
}

fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("loading settings")?;
    init_tracing(&settings);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        ["map", provider, path] => {
            let record = map_file(provider, Path::new(path), &settings.mapping_options())?;
            tracing::info!(provider, url = %record.url, "mapped gallery");
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        ["normalize", provider, url] => {
            println!("{}", normalize(provider, url)?);
        }
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    }

    Ok(())
}
