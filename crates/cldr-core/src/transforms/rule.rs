use std::fmt::Debug;

use crate::transforms::Cursor;

/// A single step of a text transform.
///
/// A rule reads the cursor's text from its position and may rewrite the text,
/// advance the position, or both. Applying a rule is all-or-nothing: it never
/// leaves a partial rewrite behind, so the method has no failure path.
pub trait TransformRule: Debug {
    fn apply_to(&self, cursor: &mut Cursor);

    /// Apply this rule to a fresh cursor over `text` and return the result.
    fn apply_to_text(&self, text: &str) -> String {
        let mut cursor = Cursor::new(text);
        self.apply_to(&mut cursor);
        cursor.into_text()
    }
}

/// The identity rule: leaves the text and position untouched.
///
/// Used as an inert placeholder step inside rule chains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullTransform;

impl TransformRule for NullTransform {
    fn apply_to(&self, _cursor: &mut Cursor) {}
}
