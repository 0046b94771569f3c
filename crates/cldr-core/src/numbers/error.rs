//! Error types for number pattern parsing and locale number data.

use thiserror::Error;

use crate::numbers::NumberStyle;
use crate::resources::ResourceError;

/// An error that occurred while parsing a CLDR number pattern.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    /// A syntax error with its 1-based column.
    #[error("syntax error at column {column} in pattern {pattern:?}: {message}")]
    Syntax {
        pattern: String,
        column: usize,
        message: String,
    },
}

/// Errors that occur while reading number data for a locale.
#[derive(Debug, Error)]
pub enum NumberDataError {
    /// The locale's number resource could not be loaded.
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// The locale's pattern string is not a valid CLDR number pattern.
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// The locale defines no default pattern for the requested style.
    #[error("no {style:?} pattern for locale '{locale}'")]
    MissingPattern { locale: String, style: NumberStyle },
}
