//! Shared storage layout tables for CLDR resource files.
//!
//! This crate centralizes the on-disk conventions (directory roots, file
//! extensions, allow-listed YAML tags and default number symbols) so that the
//! runtime loader and the tools that write resource trees never drift apart.

/// Directory holding per-locale resources: `locales/<locale>/<name>.<ext>`.
pub const LOCALES_ROOT: &str = "locales";

/// Directory holding locale-independent resources: `shared/<name>.<ext>`.
pub const SHARED_ROOT: &str = "shared";

/// Directory mirroring the resource tree with local overrides.
pub const CUSTOM_ROOT: &str = "custom";

/// Extension appended to keys that carry no recognized extension.
pub const DEFAULT_EXTENSION: &str = ".yml";

/// How a stored resource is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// YAML text, decoded through the rich-type allow-list and merged with
    /// custom overrides.
    Structured,
    /// Pre-serialized MessagePack object graph, trusted as final.
    Binary,
    /// Opaque payload returned byte-for-byte.
    Raw,
}

impl ResourceKind {
    /// Whether resources of this kind consult the `custom/` mirror.
    pub fn merges_custom(self) -> bool {
        matches!(self, ResourceKind::Structured)
    }
}

/// Extensions recognized when normalizing a resource key.
const RECOGNIZED_EXTENSIONS: &[(&str, ResourceKind)] = &[
    (".yml", ResourceKind::Structured),
    (".yaml", ResourceKind::Structured),
    (".dump", ResourceKind::Binary),
];

/// Resolve a file extension (including the leading dot) to a resource kind.
///
/// Returns `None` for extensions that are not recognized; callers append
/// [`DEFAULT_EXTENSION`] in that case.
pub fn kind_for_extension(extension: &str) -> Option<ResourceKind> {
    RECOGNIZED_EXTENSIONS
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, kind)| *kind)
}

/// Returns the extension of the last path component, including the dot.
///
/// A leading dot (hidden file) is not treated as an extension.
pub fn extension_of(key: &str) -> Option<&str> {
    let file = key.rsplit('/').next().unwrap_or(key);
    match file.rfind('.') {
        Some(0) | None => None,
        Some(idx) => Some(&file[idx..]),
    }
}

/// All recognized extensions, in lookup order.
pub fn recognized_extensions() -> impl Iterator<Item = &'static str> {
    RECOGNIZED_EXTENSIONS.iter().map(|(ext, _)| *ext)
}

/// Canonical rich types that structured resources may reconstruct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RichType {
    Range,
    Regexp,
    Symbol,
    Timestamp,
}

/// Tags of the rich types, including the Ruby-flavored forms written by
/// the resource importer.
const RICH_TAGS: &[(&str, RichType)] = &[
    ("range", RichType::Range),
    ("ruby/range", RichType::Range),
    ("regexp", RichType::Regexp),
    ("ruby/regexp", RichType::Regexp),
    ("symbol", RichType::Symbol),
    ("ruby/symbol", RichType::Symbol),
    ("ruby/sym", RichType::Symbol),
    ("timestamp", RichType::Timestamp),
];

/// Resolve a YAML tag (with or without a single leading `!`) to an
/// allow-listed rich type. Every tag not listed here must be rejected by the
/// decoder.
pub fn resolve_rich_type(tag: &str) -> Option<RichType> {
    let name = tag.strip_prefix('!').unwrap_or(tag);
    RICH_TAGS
        .iter()
        .find(|(accepted, _)| *accepted == name)
        .map(|(_, rich)| *rich)
}

/// Tag names accepted by [`resolve_rich_type`].
pub fn accepted_rich_tags() -> impl Iterator<Item = &'static str> {
    RICH_TAGS.iter().map(|(tag, _)| *tag)
}

/// Prefix marking a plain scalar as a symbol (`:numbers`).
pub const SYMBOL_PREFIX: char = ':';

/// Default number symbols used when locale data omits a key.
pub const DEFAULT_GROUP: &str = ",";
pub const DEFAULT_DECIMAL: &str = ".";
pub const DEFAULT_PLUS_SIGN: &str = "+";
pub const DEFAULT_MINUS_SIGN: &str = "-";

/// Resource name holding number symbols and patterns for a locale.
pub const NUMBERS_RESOURCE: &str = "numbers";
