use unicode_segmentation::UnicodeSegmentation;

/// Text under transformation and the position of the next unit to process.
///
/// The position is a byte offset that always sits on a character boundary.
///
/// # Example
///
/// ```
/// use cldr_core::Cursor;
///
/// let mut cursor = Cursor::new("e\u{301}x");
/// assert!(cursor.advance());
/// assert_eq!(cursor.remaining(), "x");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    text: String,
    position: usize,
}

impl Cursor {
    /// Create a cursor at the start of `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            position: 0,
        }
    }

    /// Create a cursor at `position`, clamped to a character boundary.
    pub fn with_position(text: impl Into<String>, position: usize) -> Self {
        let mut cursor = Self::new(text);
        cursor.set_position(position);
        cursor
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Move to `position`, clamped to the text and to a character boundary.
    pub fn set_position(&mut self, position: usize) {
        self.position = floor_boundary(&self.text, position);
    }

    /// Text from the position to the end.
    pub fn remaining(&self) -> &str {
        &self.text[self.position..]
    }

    pub fn is_eof(&self) -> bool {
        self.position >= self.text.len()
    }

    /// Step over the next grapheme cluster. Returns false at the end.
    pub fn advance(&mut self) -> bool {
        match self.remaining().graphemes(true).next() {
            Some(grapheme) => {
                self.position += grapheme.len();
                true
            }
            None => false,
        }
    }

    /// Move back to the start of the text.
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Replace `length` bytes after the position with `replacement`.
    ///
    /// The replaced span is clamped to the text and to character
    /// boundaries. The position is left in front of the replacement.
    pub fn replace(&mut self, length: usize, replacement: &str) {
        let end = floor_boundary(&self.text, self.position.saturating_add(length));
        self.text.replace_range(self.position..end, replacement);
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// The largest character boundary not past `index`.
fn floor_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}
