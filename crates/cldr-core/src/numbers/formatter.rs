//! The number formatting pipeline.

use bon::Builder;

use crate::numbers::{PatternTable, Sign, SymbolTable};

/// Default digit group width.
pub const DEFAULT_GROUPING_SIZE: usize = 3;

/// Largest fractional precision that is rendered; larger requests are clamped.
pub const MAX_PRECISION: usize = 20;

/// Text rendered for NaN between the affixes.
const NAN_TEXT: &str = "NaN";

/// Text rendered for infinities between the affixes.
const INFINITY_TEXT: &str = "∞";

/// Largest magnitude at which every integer is exactly representable.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Normalization applied to the raw number before rounding.
pub type NormalizeFn = fn(f64) -> f64;

/// Per-number default options, merged under the caller's options.
pub type DefaultsFn = fn(f64) -> FormatOptions;

/// Leave the number unchanged.
pub fn identity(value: f64) -> f64 {
    value
}

/// Scale a ratio to a percentage.
pub fn percent(value: f64) -> f64 {
    value * 100.0
}

/// Defaults that select nothing, leaving precision to be derived.
pub fn no_defaults(_value: f64) -> FormatOptions {
    FormatOptions::default()
}

/// Defaults that render whole numbers.
pub fn integer_defaults(_value: f64) -> FormatOptions {
    FormatOptions::with_precision(0)
}

/// Caller options for a single `format` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Builder)]
pub struct FormatOptions {
    /// Number of fractional digits. Derived from the number when unset.
    pub precision: Option<usize>,
}

impl FormatOptions {
    pub fn with_precision(precision: usize) -> Self {
        Self {
            precision: Some(precision),
        }
    }

    /// Merge `overrides` over these options; set values in `overrides` win.
    pub fn merge(self, overrides: &FormatOptions) -> Self {
        Self {
            precision: overrides.precision.or(self.precision),
        }
    }
}

/// Renders numbers with a locale's symbols and sign patterns.
///
/// Rendering is a pure function of the number, the options and the
/// formatter's configuration:
/// 1. caller options are merged over `defaults(number)`;
/// 2. the sign pattern is chosen by [`Sign::of`];
/// 3. `normalize` is applied;
/// 4. precision is the explicit option or the number's own fractional digit
///    count, clamped to [`MAX_PRECISION`];
/// 5. the absolute value is rounded half away from zero and split at the
///    decimal point;
/// 6. integer digits are grouped from the right: the first group holds
///    `grouping_size` digits, later groups `secondary_grouping_size` digits
///    (the primary size when unset);
/// 7. a non-empty fraction is appended after the decimal symbol;
/// 8. prefix and suffix wrap the result.
///
/// # Example
///
/// ```
/// use cldr_core::{FormatOptions, NumberFormatter, PatternTable, SymbolTable};
///
/// let symbols = SymbolTable::builder().group(".").decimal(",").build();
/// let formatter = NumberFormatter::builder()
///     .patterns(PatternTable::signed(&symbols))
///     .symbols(symbols)
///     .build();
///
/// assert_eq!(formatter.format(1234.5, &FormatOptions::default()), "1.234,5");
/// assert_eq!(formatter.format(-1234.5, &FormatOptions::with_precision(2)), "-1.234,50");
/// ```
#[derive(Debug, Clone, Builder)]
pub struct NumberFormatter {
    #[builder(default)]
    symbols: SymbolTable,

    patterns: PatternTable,

    #[builder(default = identity as NormalizeFn)]
    normalize: NormalizeFn,

    #[builder(default = no_defaults as DefaultsFn)]
    defaults: DefaultsFn,

    /// Digits per group; `0` disables grouping.
    #[builder(default = DEFAULT_GROUPING_SIZE)]
    grouping_size: usize,

    /// Width of the groups left of the first one, as in `#,##,##0`.
    secondary_grouping_size: Option<usize>,
}

impl NumberFormatter {
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn patterns(&self) -> &PatternTable {
        &self.patterns
    }

    pub fn grouping_size(&self) -> usize {
        self.grouping_size
    }

    pub fn secondary_grouping_size(&self) -> usize {
        self.secondary_grouping_size
            .filter(|&size| size > 0)
            .unwrap_or(self.grouping_size)
    }

    /// Format `number` according to `options`.
    pub fn format(&self, number: f64, options: &FormatOptions) -> String {
        let options = (self.defaults)(number).merge(options);
        let pattern = self.patterns.for_sign(Sign::of(number));
        let normalized = (self.normalize)(number);

        let body = if normalized.is_nan() {
            NAN_TEXT.to_string()
        } else if normalized.is_infinite() {
            INFINITY_TEXT.to_string()
        } else {
            self.format_digits(normalized, &options)
        };

        format!("{}{body}{}", pattern.prefix, pattern.suffix)
    }

    /// Format with derived precision.
    pub fn format_default(&self, number: f64) -> String {
        self.format(number, &FormatOptions::default())
    }

    fn format_digits(&self, value: f64, options: &FormatOptions) -> String {
        let precision = options
            .precision
            .unwrap_or_else(|| precision_from(value))
            .min(MAX_PRECISION);
        let rounded = round_to(value, precision).abs();
        let fixed = format!("{rounded:.precision$}");
        let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

        let mut result = group_digits(
            integer,
            &self.symbols.group,
            self.grouping_size,
            self.secondary_grouping_size(),
        );
        if !fraction.is_empty() {
            result.push_str(&self.symbols.decimal);
            result.push_str(fraction);
        }
        result
    }
}

/// Number of fractional digits in the shortest decimal form of `value`.
pub fn precision_from(value: f64) -> usize {
    value
        .to_string()
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len())
}

/// Round half away from zero at `precision` fractional digits.
///
/// Values too large for the scaled form to be exact already carry no digits
/// at that precision and are returned unchanged.
pub fn round_to(value: f64, precision: usize) -> f64 {
    let factor = 10f64.powi(i32::try_from(precision).unwrap_or(i32::MAX));
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= MAX_EXACT_INTEGER {
        return value;
    }
    scaled.round() / factor
}

/// Insert `separator` between digit groups counted from the right: one group
/// of `primary` digits, then groups of `secondary` digits.
fn group_digits(digits: &str, separator: &str, primary: usize, secondary: usize) -> String {
    let chars: Vec<char> = digits.chars().collect();
    if primary == 0 || chars.len() <= primary {
        return digits.to_string();
    }
    let secondary = if secondary == 0 { primary } else { secondary };

    let (mut rest, last) = chars.split_at(chars.len() - primary);
    let mut groups: Vec<String> = vec![last.iter().collect()];
    while !rest.is_empty() {
        let (head, group) = rest.split_at(rest.len().saturating_sub(secondary));
        groups.push(group.iter().collect());
        rest = head;
    }
    groups.reverse();
    groups.join(separator)
}
