//! Locale resource resolution and CLDR number formatting.
//!
//! - [`resources`]: a lazily memoizing store over a tree of locale and shared
//!   resource files, with custom overrides and allow-listed decoding.
//! - [`numbers`]: the locale-aware number formatting pipeline.
//! - [`transforms`]: the rule interface of transliteration rule chains.

pub mod numbers;
pub mod resources;
pub mod transforms;

pub use numbers::{
    FormatOptions, NumberDataError, NumberDataProvider, NumberFormatter, NumberStyle,
    PatternError, PatternTable, Sign, SignPattern, SymbolTable, parse_pattern,
};
pub use resources::{
    FsBackend, MemoCache, MemoryBackend, Preload, ResourceBackend, ResourceError, ResourcePath,
    ResourceStore, ResourceValue, deep_merge,
};
pub use transforms::{Cursor, NullTransform, TransformRule};

pub use cldr_layout::ResourceKind;
