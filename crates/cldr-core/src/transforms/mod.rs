//! The rule interface consumed by transliteration rule chains.

mod cursor;
mod rule;

pub use cursor::Cursor;
pub use rule::{NullTransform, TransformRule};
