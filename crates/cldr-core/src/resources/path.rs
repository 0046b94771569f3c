//! Resource addressing.

use std::fmt;

use cldr_layout::{
    CUSTOM_ROOT, DEFAULT_EXTENSION, LOCALES_ROOT, ResourceKind, SHARED_ROOT, extension_of,
    kind_for_extension,
};
use icu_locale_core::Locale;

use crate::resources::ResourceError;

/// An immutable, normalized address of a stored resource.
///
/// Segments are joined with `/` into a storage key. When the key carries no
/// recognized extension the default `.yml` is appended, so `["locales", "en",
/// "numbers"]` addresses `locales/en/numbers.yml`. The decoding kind is fixed
/// here, once, and never re-derived from the key.
///
/// # Example
///
/// ```
/// use cldr_core::{ResourceKind, ResourcePath};
///
/// let path = ResourcePath::new(["shared", "numbering_systems"]);
/// assert_eq!(path.key(), "shared/numbering_systems.yml");
/// assert_eq!(path.kind(), ResourceKind::Structured);
///
/// let dump = ResourcePath::new(["shared", "segments", "root.dump"]);
/// assert_eq!(dump.kind(), ResourceKind::Binary);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourcePath {
    segments: Vec<String>,
    key: String,
    kind: ResourceKind,
}

impl ResourcePath {
    /// Build a path from naming segments, resolving its kind from the
    /// extension of the joined key.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments = collect_segments(segments);
        let mut key = segments.join("/");
        let kind = match extension_of(&key).and_then(kind_for_extension) {
            Some(kind) => kind,
            None => {
                key.push_str(DEFAULT_EXTENSION);
                ResourceKind::Structured
            }
        };
        Self {
            segments,
            key,
            kind,
        }
    }

    /// Register a path whose payload is returned verbatim.
    ///
    /// The key is used exactly as joined; no default extension is appended.
    pub fn raw<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments = collect_segments(segments);
        let key = segments.join("/");
        Self {
            segments,
            key,
            kind: ResourceKind::Raw,
        }
    }

    /// Build a path from a `/`-separated key.
    pub fn parse(key: &str) -> Self {
        Self::new(key.split('/'))
    }

    /// Address a named resource of a locale: `locales/<locale>/<name>`.
    ///
    /// The locale code is canonicalized first, so `en_us` and `en-US` address
    /// the same resource.
    pub fn for_locale(locale: &str, name: &str) -> Result<Self, ResourceError> {
        let locale = canonical_locale(locale)?;
        Ok(Self::new([LOCALES_ROOT, &locale, name]))
    }

    /// Address a locale-independent resource: `shared/<name>`.
    pub fn shared(name: &str) -> Self {
        Self::new([SHARED_ROOT, name])
    }

    /// The mirrored override location: `custom/<key>`.
    pub fn custom(&self) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.push(CUSTOM_ROOT.to_string());
        segments.extend(self.segments.iter().cloned());
        Self {
            segments,
            key: format!("{CUSTOM_ROOT}/{}", self.key),
            kind: self.kind,
        }
    }

    /// The normalized storage key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// How this resource is decoded.
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// The normalized naming segments.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

/// Split segments on `/` and keep only plain names.
///
/// Empty, `.` and `..` components are dropped, so a key never climbs out of
/// the resource root and never starts at the filesystem root.
fn collect_segments<I, S>(segments: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    segments
        .into_iter()
        .map(Into::<String>::into)
        .flat_map(|segment| {
            segment
                .split(['/', '\\'])
                .filter(|part| !matches!(*part, "" | "." | ".."))
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Canonicalize a locale code (`en_us` -> `en-US`, `ZH-hant` -> `zh-Hant`).
pub fn canonical_locale(locale: &str) -> Result<String, ResourceError> {
    let normalized = locale.replace('_', "-");
    let parsed = normalized
        .parse::<Locale>()
        .map_err(|_| ResourceError::InvalidLocale {
            locale: locale.to_string(),
        })?;
    Ok(parsed.to_string())
}
