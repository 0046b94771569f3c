use bon::Builder;
use cldr_layout::{DEFAULT_DECIMAL, DEFAULT_GROUP, DEFAULT_MINUS_SIGN, DEFAULT_PLUS_SIGN};

use crate::resources::ResourceValue;

/// Locale number symbols.
///
/// Every symbol the locale data leaves out falls back to the default table
/// (`,` `.` `+` `-`).
///
/// # Example
///
/// ```
/// use cldr_core::SymbolTable;
///
/// let german = SymbolTable::builder().group(".").decimal(",").build();
/// assert_eq!(german.minus_sign, "-");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(on(String, into))]
pub struct SymbolTable {
    /// Digit group separator.
    #[builder(default = DEFAULT_GROUP.to_string())]
    pub group: String,

    /// Decimal separator.
    #[builder(default = DEFAULT_DECIMAL.to_string())]
    pub decimal: String,

    #[builder(default = DEFAULT_PLUS_SIGN.to_string())]
    pub plus_sign: String,

    #[builder(default = DEFAULT_MINUS_SIGN.to_string())]
    pub minus_sign: String,
}

impl Default for SymbolTable {
    fn default() -> Self {
        SymbolTable::builder().build()
    }
}

impl SymbolTable {
    /// Read symbols from a locale's `symbols` mapping.
    ///
    /// Keys that are missing or not text keep their default.
    pub fn from_resource(value: &ResourceValue) -> Self {
        let text = |key: &str| value.get(key).and_then(ResourceValue::as_str);
        SymbolTable::builder()
            .maybe_group(text("group"))
            .maybe_decimal(text("decimal"))
            .maybe_plus_sign(text("plus_sign"))
            .maybe_minus_sign(text("minus_sign"))
            .build()
    }

    /// Look up a symbol by its data key.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "group" => Some(self.group.as_str()),
            "decimal" => Some(self.decimal.as_str()),
            "plus_sign" => Some(self.plus_sign.as_str()),
            "minus_sign" => Some(self.minus_sign.as_str()),
            _ => None,
        }
    }
}
