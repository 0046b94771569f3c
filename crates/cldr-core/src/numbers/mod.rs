//! Locale-aware number formatting.
//!
//! A [`NumberFormatter`] combines a locale [`SymbolTable`] with a
//! [`PatternTable`] and renders numbers through a fixed pipeline: sign
//! selection, normalization, rounding, digit grouping and affix assembly.
//! Symbols and patterns can be supplied directly or read from a
//! [`ResourceStore`](crate::resources::ResourceStore) through
//! [`NumberDataProvider`].

mod error;
mod formatter;
mod pattern;
mod provider;
mod symbols;

pub use error::{NumberDataError, PatternError};
pub use formatter::{
    DEFAULT_GROUPING_SIZE, DefaultsFn, FormatOptions, MAX_PRECISION, NormalizeFn,
    NumberFormatter, identity, integer_defaults, no_defaults, percent, precision_from, round_to,
};
pub use pattern::{PatternTable, Sign, SignPattern, parse_pattern};
pub use provider::{NumberDataProvider, NumberStyle};
pub use symbols::SymbolTable;
