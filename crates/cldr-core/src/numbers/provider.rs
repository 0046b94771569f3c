//! Locale number data sourced from resources.
//!
//! A locale's `numbers` resource is laid out as:
//!
//! ```yaml
//! numbers:
//!   symbols:
//!     group: "."
//!     decimal: ","
//!   formats:
//!     decimal:
//!       patterns:
//!         default: "#,##0.###"
//!     percent:
//!       patterns:
//!         default: "#,##0 %"
//! ```
//!
//! Trees written by the importer nest the same layout under the locale
//! (`:de:` → `:numbers:` → ...); both shapes are read.

use cldr_layout::NUMBERS_RESOURCE;
use tracing::debug;

use crate::numbers::formatter::{
    DefaultsFn, NormalizeFn, identity, integer_defaults, no_defaults, percent,
};
use crate::numbers::{NumberDataError, NumberFormatter, PatternTable, SymbolTable, parse_pattern};
use crate::resources::{ResourceBackend, ResourceStore, ResourceValue, canonical_locale};

/// The kind of number format to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberStyle {
    Decimal,
    Percent,
}

impl NumberStyle {
    /// Key of this style below `numbers.formats`.
    pub fn key(self) -> &'static str {
        match self {
            NumberStyle::Decimal => "decimal",
            NumberStyle::Percent => "percent",
        }
    }

    /// Normalization step for this style.
    pub fn normalizer(self) -> NormalizeFn {
        match self {
            NumberStyle::Decimal => identity,
            NumberStyle::Percent => percent,
        }
    }

    /// Default options for this style.
    pub fn defaults(self) -> DefaultsFn {
        match self {
            NumberStyle::Decimal => no_defaults,
            NumberStyle::Percent => integer_defaults,
        }
    }
}

/// Source of locale number symbols and patterns.
pub trait NumberDataProvider {
    fn symbols(&self, locale: &str) -> Result<SymbolTable, NumberDataError>;

    fn patterns(&self, locale: &str, style: NumberStyle) -> Result<PatternTable, NumberDataError>;
}

impl<B: ResourceBackend> NumberDataProvider for ResourceStore<B> {
    fn symbols(&self, locale: &str) -> Result<SymbolTable, NumberDataError> {
        let data = self.get_locale_resource(locale, NUMBERS_RESOURCE)?;
        Ok(locale_section(&data, locale)
            .lookup(&["numbers", "symbols"])
            .map(SymbolTable::from_resource)
            .unwrap_or_default())
    }

    fn patterns(&self, locale: &str, style: NumberStyle) -> Result<PatternTable, NumberDataError> {
        let data = self.get_locale_resource(locale, NUMBERS_RESOURCE)?;
        let pattern = locale_section(&data, locale)
            .lookup(&["numbers", "formats", style.key(), "patterns", "default"])
            .and_then(ResourceValue::as_str)
            .ok_or_else(|| NumberDataError::MissingPattern {
                locale: locale.to_string(),
                style,
            })?;
        let symbols = self.symbols(locale)?;
        Ok(parse_pattern(pattern, &symbols)?)
    }
}

/// The subtree holding `numbers`: the locale entry when the data is nested
/// under its locale code, the document root otherwise.
fn locale_section<'a>(data: &'a ResourceValue, locale: &str) -> &'a ResourceValue {
    let canonical = canonical_locale(locale).ok();
    [canonical.as_deref(), Some(locale)]
        .into_iter()
        .flatten()
        .filter_map(|code| data.get(code))
        .find(|section| section.get(NUMBERS_RESOURCE).is_some())
        .unwrap_or(data)
}

impl NumberFormatter {
    /// Build a formatter for `locale` from a data provider.
    ///
    /// Grouping sizes come from the integer part of the positive pattern.
    pub fn for_locale(
        provider: &impl NumberDataProvider,
        locale: &str,
        style: NumberStyle,
    ) -> Result<NumberFormatter, NumberDataError> {
        let symbols = provider.symbols(locale)?;
        let patterns = provider.patterns(locale, style)?;
        let (grouping_size, secondary) = patterns.positive.grouping_sizes();
        debug!(locale, style = style.key(), grouping_size, "built number formatter");
        Ok(NumberFormatter::builder()
            .symbols(symbols)
            .patterns(patterns)
            .grouping_size(grouping_size)
            .maybe_secondary_grouping_size(secondary)
            .normalize(style.normalizer())
            .defaults(style.defaults())
            .build())
    }
}
