//! Structured-text decoding with an explicit rich-type allow-list.
//!
//! YAML documents decode into [`ResourceValue`]. Plain scalars, sequences and
//! mappings are always accepted. Tagged nodes are accepted only when the tag
//! resolves to an allow-listed [`RichType`]; every other tag aborts the whole
//! decode with [`ResourceError::DeserializationRejected`]. There is no lenient
//! mode.
//!
//! Resource trees written by the importer use Ruby conventions: ranges are
//! `!ruby/range` (a `13..19` scalar or a `begin`/`end`/`excl` mapping),
//! regexps are `!ruby/regexp /src/flags`, and symbols are plain `:name`
//! scalars, including mapping keys such as `:en:`. Plain `:name` scalars
//! decode as [`ResourceValue::Symbol`] and symbol keys as their bare name.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use cldr_layout::{RichType, SYMBOL_PREFIX, resolve_rich_type};
use serde_yaml::Value as Yaml;
use serde_yaml::value::TaggedValue;
use tracing::warn;

use crate::resources::ResourceError;
use crate::resources::value::{Pattern, RangeValue, ResourceValue};

/// Decode a structured resource payload.
pub(crate) fn decode_structured(key: &str, bytes: &[u8]) -> Result<ResourceValue, ResourceError> {
    let document: Yaml = serde_yaml::from_slice(bytes).map_err(|e| ResourceError::Malformed {
        key: key.to_string(),
        message: e.to_string(),
    })?;
    convert(key, document)
}

fn convert(key: &str, node: Yaml) -> Result<ResourceValue, ResourceError> {
    match node {
        Yaml::Null => Ok(ResourceValue::Null),
        Yaml::Bool(b) => Ok(ResourceValue::Bool(b)),
        Yaml::Number(n) => Ok(match n.as_i64() {
            Some(i) => ResourceValue::Integer(i),
            None => ResourceValue::Float(n.as_f64().unwrap_or(f64::NAN)),
        }),
        Yaml::String(s) => Ok(match symbol_name(&s) {
            Some(name) => ResourceValue::Symbol(name.to_string()),
            None => ResourceValue::String(s),
        }),
        Yaml::Sequence(items) => items
            .into_iter()
            .map(|item| convert(key, item))
            .collect::<Result<Vec<_>, _>>()
            .map(ResourceValue::Sequence),
        Yaml::Mapping(entries) => {
            let mut map = BTreeMap::new();
            for (k, v) in entries {
                map.insert(mapping_key(key, k)?, convert(key, v)?);
            }
            Ok(ResourceValue::Mapping(map))
        }
        Yaml::Tagged(tagged) => convert_tagged(key, *tagged),
    }
}

fn convert_tagged(key: &str, tagged: TaggedValue) -> Result<ResourceValue, ResourceError> {
    let tag = tagged.tag.to_string();
    let Some(rich) = resolve_rich_type(&tag) else {
        warn!(key, tag = %tag, "rejected disallowed type in structured resource");
        return Err(ResourceError::DeserializationRejected {
            key: key.to_string(),
            tag,
        });
    };
    if let (RichType::Range, Yaml::Mapping(fields)) = (rich, &tagged.value) {
        return range_from_fields(fields)
            .map(ResourceValue::Range)
            .ok_or_else(|| malformed(key, &tag, "mapping"));
    }
    let text = scalar_text(key, &tag, tagged.value)?;
    match rich {
        RichType::Symbol => Ok(ResourceValue::Symbol(
            symbol_name(&text).map_or(text.clone(), str::to_string),
        )),
        RichType::Range => parse_range(&text)
            .map(ResourceValue::Range)
            .ok_or_else(|| malformed(key, &tag, &text)),
        RichType::Regexp => parse_regexp(&text)
            .map(ResourceValue::Regex)
            .map_err(|e| ResourceError::Malformed {
                key: key.to_string(),
                message: format!("{tag} {text:?}: {e}"),
            }),
        RichType::Timestamp => parse_timestamp(&text)
            .map(ResourceValue::Timestamp)
            .ok_or_else(|| malformed(key, &tag, &text)),
    }
}

/// Mapping keys are flattened to strings; only scalar keys are allowed.
fn mapping_key(key: &str, node: Yaml) -> Result<String, ResourceError> {
    match node {
        Yaml::String(s) => Ok(match symbol_name(&s) {
            Some(name) => name.to_string(),
            None => s,
        }),
        Yaml::Number(n) => Ok(n.to_string()),
        Yaml::Bool(b) => Ok(b.to_string()),
        Yaml::Null => Ok(String::new()),
        Yaml::Tagged(tagged) => match convert_tagged(key, *tagged)? {
            ResourceValue::Symbol(name) => Ok(name),
            other => Err(ResourceError::Malformed {
                key: key.to_string(),
                message: format!("unsupported mapping key {other:?}"),
            }),
        },
        Yaml::Sequence(_) | Yaml::Mapping(_) => Err(ResourceError::Malformed {
            key: key.to_string(),
            message: "mapping keys must be scalars".to_string(),
        }),
    }
}

fn scalar_text(key: &str, tag: &str, node: Yaml) -> Result<String, ResourceError> {
    match node {
        Yaml::String(s) => Ok(s),
        Yaml::Number(n) => Ok(n.to_string()),
        Yaml::Bool(b) => Ok(b.to_string()),
        _ => Err(ResourceError::Malformed {
            key: key.to_string(),
            message: format!("{tag} expects a scalar"),
        }),
    }
}

fn malformed(key: &str, tag: &str, text: &str) -> ResourceError {
    ResourceError::Malformed {
        key: key.to_string(),
        message: format!("invalid {tag} value {text:?}"),
    }
}

/// The name of a `:name` or `:"quoted name"` symbol scalar.
fn symbol_name(text: &str) -> Option<&str> {
    let name = text.strip_prefix(SYMBOL_PREFIX)?;
    if let Some(quoted) = name.strip_prefix('"').and_then(|n| n.strip_suffix('"')) {
        return (!quoted.is_empty()).then_some(quoted);
    }
    let plain = !name.is_empty()
        && !name.starts_with(SYMBOL_PREFIX)
        && !name.contains(|c: char| c.is_whitespace() || c == '"');
    plain.then_some(name)
}

/// A range dumped as a `begin`/`end`/`excl` mapping.
fn range_from_fields(fields: &serde_yaml::Mapping) -> Option<RangeValue> {
    Some(RangeValue {
        start: fields.get("begin")?.as_i64()?,
        end: fields.get("end")?.as_i64()?,
        exclusive: fields
            .get("excl")
            .map_or(Some(false), Yaml::as_bool)?,
    })
}

/// `1..5` is inclusive, `1...5` excludes the end.
fn parse_range(text: &str) -> Option<RangeValue> {
    let (start, end, exclusive) = match text.split_once("...") {
        Some((start, end)) => (start, end, true),
        None => {
            let (start, end) = text.split_once("..")?;
            (start, end, false)
        }
    };
    Some(RangeValue {
        start: start.trim().parse().ok()?,
        end: end.trim().parse().ok()?,
        exclusive,
    })
}

/// Accepts `/source/flags` or a bare source. Flags `i`, `m` and `x` map to
/// case-insensitive, dot-matches-newline and verbose mode.
fn parse_regexp(text: &str) -> Result<Pattern, regex::Error> {
    let delimited = text
        .strip_prefix('/')
        .and_then(|rest| rest.rfind('/').map(|end| (&rest[..end], &rest[end + 1..])));
    let Some((source, flags)) = delimited else {
        return Pattern::new(text);
    };
    let mut inline = String::new();
    for flag in flags.chars() {
        match flag {
            'i' => inline.push('i'),
            'm' => inline.push('s'),
            'x' => inline.push('x'),
            _ => {}
        }
    }
    if inline.is_empty() {
        Pattern::new(source)
    } else {
        Pattern::new(&format!("(?{inline}){source}"))
    }
}

fn parse_timestamp(text: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(text)
        .or_else(|_| DateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f %z"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_forms() {
        assert_eq!(
            parse_range("1..5"),
            Some(RangeValue {
                start: 1,
                end: 5,
                exclusive: false
            })
        );
        assert_eq!(
            parse_range("-3...3"),
            Some(RangeValue {
                start: -3,
                end: 3,
                exclusive: true
            })
        );
        assert_eq!(parse_range("a..b"), None);
        assert_eq!(parse_range("15"), None);
    }

    #[test]
    fn regexp_flags_become_inline_modifiers() {
        let pattern = parse_regexp("/abc/i").unwrap();
        assert_eq!(pattern.as_str(), "(?i)abc");
        assert!(pattern.regex().is_match("ABC"));

        let bare = parse_regexp("[0-9]+").unwrap();
        assert_eq!(bare.as_str(), "[0-9]+");
    }

    #[test]
    fn symbol_scalars() {
        assert_eq!(symbol_name(":en"), Some("en"));
        assert_eq!(symbol_name(":zh-Hant"), Some("zh-Hant"));
        assert_eq!(symbol_name(":\"two words\""), Some("two words"));
        assert_eq!(symbol_name("en"), None);
        assert_eq!(symbol_name(":"), None);
        assert_eq!(symbol_name("::"), None);
        assert_eq!(symbol_name(": spaced"), None);
    }

    #[test]
    fn range_mapping_form() {
        let fields: serde_yaml::Mapping =
            serde_yaml::from_str("begin: 13\nend: 19\nexcl: true\n").unwrap();
        assert_eq!(
            range_from_fields(&fields),
            Some(RangeValue {
                start: 13,
                end: 19,
                exclusive: true
            })
        );

        let open: serde_yaml::Mapping = serde_yaml::from_str("begin: 1\n").unwrap();
        assert_eq!(range_from_fields(&open), None);
    }

    #[test]
    fn timestamp_forms() {
        assert!(parse_timestamp("2013-02-01T12:30:00Z").is_some());
        assert!(parse_timestamp("2013-02-01 12:30:00 +0100").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }
}
