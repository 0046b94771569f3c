//! Locale-aware resource resolution.
//!
//! Resources live in a path-addressed tree (`locales/<locale>/<name>.yml`,
//! `shared/<name>.yml`, with overrides mirrored under `custom/`). The
//! [`ResourceStore`] loads each one lazily, decodes it according to its
//! [`ResourceKind`](cldr_layout::ResourceKind), merges custom overrides into
//! structured data, and memoizes the result.

mod backend;
mod binary;
mod cache;
mod error;
mod merge;
mod path;
mod store;
mod value;
mod yaml;

pub use backend::{FsBackend, MemoryBackend, ResourceBackend};
pub use binary::encode_binary;
pub use cache::MemoCache;
pub use error::ResourceError;
pub use merge::deep_merge;
pub use path::{ResourcePath, canonical_locale};
pub use store::{Preload, ResourceStore};
pub use value::{Pattern, RangeValue, ResourceValue};
