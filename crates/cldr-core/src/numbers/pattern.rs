//! Sign patterns and the CLDR number pattern parser.
//!
//! A CLDR pattern such as `#,##0.###;(#,##0.###)` holds a positive and an
//! optional negative subpattern. Each subpattern is a prefix, a numeric part
//! built from `# 0-9 , . @`, and a suffix. Affix text may be quoted with `'`;
//! `''` is a literal apostrophe. Unquoted `-` and `+` in affixes are replaced
//! by the locale's minus and plus signs.

use bon::Builder;
use winnow::combinator::{alt, delimited, opt, preceded, repeat};
use winnow::prelude::*;
use winnow::token::{none_of, take_while};

use crate::numbers::{PatternError, SymbolTable};

/// Which pattern a value is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// Classify a value: positive when its absolute value equals itself.
    ///
    /// Zero and negative zero are positive. NaN is treated as positive.
    pub fn of(value: f64) -> Sign {
        if value.is_nan() || value.abs() == value {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// The literal text around a number, and the numeric pattern between them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(on(String, into))]
pub struct SignPattern {
    #[builder(default)]
    pub prefix: String,

    /// Numeric part, e.g. `#,##0.###`.
    #[builder(default)]
    pub pattern: String,

    #[builder(default)]
    pub suffix: String,
}

impl SignPattern {
    /// Primary and secondary digit group widths of the numeric part.
    ///
    /// `#,##0.###` groups by 3, `#,##,##0` by 3 then 2, and a pattern
    /// without `,` (`0.###`) does not group.
    ///
    /// ```
    /// use cldr_core::SignPattern;
    ///
    /// let indian = SignPattern::builder().pattern("#,##,##0.###").build();
    /// assert_eq!(indian.grouping_sizes(), (3, Some(2)));
    /// ```
    pub fn grouping_sizes(&self) -> (usize, Option<usize>) {
        let integer = self.pattern.split('.').next().unwrap_or_default();
        let groups: Vec<&str> = integer.split(',').collect();
        match groups.as_slice() {
            [] | [_] => (0, None),
            [_, primary] => (primary.chars().count(), None),
            [.., secondary, primary] => {
                (primary.chars().count(), Some(secondary.chars().count()))
            }
        }
    }
}

/// Positive and negative patterns of a locale number format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternTable {
    pub positive: SignPattern,
    pub negative: SignPattern,
}

impl PatternTable {
    pub fn new(positive: SignPattern, negative: SignPattern) -> Self {
        Self { positive, negative }
    }

    /// Bare digits for positive values, the minus sign prefixed for negative.
    pub fn signed(symbols: &SymbolTable) -> Self {
        Self {
            positive: SignPattern::default(),
            negative: SignPattern::builder()
                .prefix(symbols.minus_sign.as_str())
                .build(),
        }
    }

    pub fn for_sign(&self, sign: Sign) -> &SignPattern {
        match sign {
            Sign::Positive => &self.positive,
            Sign::Negative => &self.negative,
        }
    }
}

/// Parse a CLDR number pattern into sign patterns.
///
/// Without an explicit negative subpattern the negative pattern is the
/// positive one with the locale minus sign prefixed. With one, only its
/// affixes are used; the numeric part always comes from the positive
/// subpattern.
///
/// # Example
///
/// ```
/// use cldr_core::{SymbolTable, parse_pattern};
///
/// let table = parse_pattern("#,##0.00 ¤;(#,##0.00 ¤)", &SymbolTable::default()).unwrap();
/// assert_eq!(table.negative.prefix, "(");
/// assert_eq!(table.negative.suffix, " ¤)");
/// ```
pub fn parse_pattern(input: &str, symbols: &SymbolTable) -> Result<PatternTable, PatternError> {
    let mut remaining = input;
    let parsed = pattern(&mut remaining);
    let (positive, negative) = match parsed {
        Ok(subpatterns) if remaining.is_empty() => subpatterns,
        Ok(_) => {
            return Err(syntax_error(
                input,
                remaining,
                format!(
                    "unexpected character: '{}'",
                    remaining.chars().next().unwrap_or('?')
                ),
            ));
        }
        Err(e) => return Err(syntax_error(input, remaining, format!("parse error: {e}"))),
    };

    let positive_pattern = SignPattern {
        prefix: render_affix(&positive.prefix, symbols),
        pattern: positive.numeric.clone(),
        suffix: render_affix(&positive.suffix, symbols),
    };
    let negative_pattern = match negative {
        Some(negative) => SignPattern {
            prefix: render_affix(&negative.prefix, symbols),
            pattern: positive.numeric,
            suffix: render_affix(&negative.suffix, symbols),
        },
        None => SignPattern {
            prefix: format!("{}{}", symbols.minus_sign, positive_pattern.prefix),
            pattern: positive_pattern.pattern.clone(),
            suffix: positive_pattern.suffix.clone(),
        },
    };
    Ok(PatternTable::new(positive_pattern, negative_pattern))
}

fn syntax_error(original: &str, remaining: &str, message: String) -> PatternError {
    let consumed = original.len() - remaining.len();
    PatternError::Syntax {
        pattern: original.to_string(),
        column: original[..consumed].chars().count() + 1,
        message,
    }
}

/// One unit of prefix or suffix text.
#[derive(Debug, Clone, PartialEq, Eq)]
enum AffixToken {
    Literal(String),
    MinusSign,
    PlusSign,
}

struct Subpattern {
    prefix: Vec<AffixToken>,
    numeric: String,
    suffix: Vec<AffixToken>,
}

fn render_affix(tokens: &[AffixToken], symbols: &SymbolTable) -> String {
    tokens
        .iter()
        .map(|token| match token {
            AffixToken::Literal(text) => text.as_str(),
            AffixToken::MinusSign => symbols.minus_sign.as_str(),
            AffixToken::PlusSign => symbols.plus_sign.as_str(),
        })
        .collect()
}

/// Parse a positive subpattern and an optional `;`-separated negative one.
fn pattern(input: &mut &str) -> ModalResult<(Subpattern, Option<Subpattern>)> {
    (subpattern, opt(preceded(';', subpattern))).parse_next(input)
}

fn subpattern(input: &mut &str) -> ModalResult<Subpattern> {
    let prefix: Vec<AffixToken> = repeat(0.., affix_token).parse_next(input)?;
    let numeric = take_while(1.., is_numeric_char).parse_next(input)?;
    let suffix: Vec<AffixToken> = repeat(0.., affix_token).parse_next(input)?;
    Ok(Subpattern {
        prefix,
        numeric: numeric.to_string(),
        suffix,
    })
}

fn affix_token(input: &mut &str) -> ModalResult<AffixToken> {
    alt((
        "''".value(AffixToken::Literal("'".to_string())),
        quoted,
        '-'.value(AffixToken::MinusSign),
        '+'.value(AffixToken::PlusSign),
        none_of(|c: char| is_numeric_char(c) || c == ';' || c == '\'')
            .map(|c: char| AffixToken::Literal(c.to_string())),
    ))
    .parse_next(input)
}

/// Parse quoted affix text: 'text', with '' standing for an apostrophe.
fn quoted(input: &mut &str) -> ModalResult<AffixToken> {
    delimited('\'', repeat(1.., alt(("''".value('\''), none_of('\'')))), '\'')
        .map(AffixToken::Literal)
        .parse_next(input)
}

/// Check if a character belongs to the numeric part of a pattern.
fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '#' | ',' | '.' | '@')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affix_tokens_split_on_quotes() {
        let mut input = "'#'-x''#";
        let tokens: Vec<AffixToken> = repeat(0.., affix_token).parse_next(&mut input).unwrap();
        assert_eq!(
            tokens,
            vec![
                AffixToken::Literal("#".to_string()),
                AffixToken::MinusSign,
                AffixToken::Literal("x".to_string()),
                AffixToken::Literal("'".to_string()),
            ]
        );
        assert_eq!(input, "#");
    }

    #[test]
    fn grouping_sizes_from_numeric_part() {
        let sizes = |pattern: &str| {
            SignPattern::builder()
                .pattern(pattern)
                .build()
                .grouping_sizes()
        };
        assert_eq!(sizes("#,##0.###"), (3, None));
        assert_eq!(sizes("#,##,##0"), (3, Some(2)));
        assert_eq!(sizes("#,####"), (4, None));
        assert_eq!(sizes("0.###"), (0, None));
        assert_eq!(sizes(""), (0, None));
    }

    #[test]
    fn numeric_chars() {
        for c in ['#', '0', '9', ',', '.', '@'] {
            assert!(is_numeric_char(c));
        }
        for c in ['%', '-', ' ', '¤', 'E'] {
            assert!(!is_numeric_char(c));
        }
    }
}
