//! Error types for resource loading.

use std::io;

use thiserror::Error;

/// Errors that occur while resolving or loading a resource.
///
/// Loader errors propagate unchanged from [`ResourceStore::get`] to its caller
/// and are never cached.
///
/// [`ResourceStore::get`]: crate::resources::ResourceStore::get
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resolved key does not exist in backing storage.
    #[error("resource '{key}' not found")]
    NotFound { key: String },

    /// Structured data tried to reconstruct a type outside the allow-list.
    #[error("resource '{key}': tag '{tag}' is not an allowed type")]
    DeserializationRejected { key: String, tag: String },

    /// Structured text could not be decoded.
    #[error("resource '{key}': {message}")]
    Malformed { key: String, message: String },

    /// A pre-serialized binary resource could not be decoded.
    #[error("resource '{key}': invalid binary payload: {message}")]
    Binary { key: String, message: String },

    /// Backing storage failed while reading an existing resource.
    #[error("failed to read resource '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },

    /// Locale code could not be canonicalized.
    #[error("invalid locale code '{locale}'")]
    InvalidLocale { locale: String },
}

impl ResourceError {
    /// The storage key this error refers to, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            ResourceError::NotFound { key }
            | ResourceError::DeserializationRejected { key, .. }
            | ResourceError::Malformed { key, .. }
            | ResourceError::Binary { key, .. }
            | ResourceError::Io { key, .. } => Some(key),
            ResourceError::InvalidLocale { .. } => None,
        }
    }
}
