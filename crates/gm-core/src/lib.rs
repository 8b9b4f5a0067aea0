//! gallery-meta/crates/gm-core/src/lib.rs
//!
//! The central domain logic and interface definitions for gallery metadata.

pub mod models;
pub mod traits;
pub mod error;
pub mod mapping;
pub mod locator;
pub mod format;

// Re-exporting for easier access in other crates
pub use models::*;
pub use traits::*;
pub use error::*;
pub use mapping::*;
