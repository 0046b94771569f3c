//! Tests for the transform rule interface and the null rule.

use cldr_core::{Cursor, NullTransform, TransformRule};

// =========================================================================
// NullTransform
// =========================================================================

#[test]
fn null_transform_leaves_cursor_untouched() {
    let cases = [
        Cursor::new(""),
        Cursor::new("hello"),
        Cursor::with_position("hello", 3),
        Cursor::with_position("hello", 5),
        Cursor::with_position("Ελληνικά", 4),
        Cursor::new("e\u{301}\u{1f600}"),
    ];
    for original in cases {
        let mut cursor = original.clone();
        NullTransform.apply_to(&mut cursor);
        assert_eq!(cursor, original);
    }
}

#[test]
fn null_transform_is_idempotent() {
    let mut cursor = Cursor::with_position("abc", 1);
    for _ in 0..3 {
        NullTransform.apply_to(&mut cursor);
    }
    assert_eq!(cursor.text(), "abc");
    assert_eq!(cursor.position(), 1);
}

#[test]
fn null_transform_on_text() {
    assert_eq!(NullTransform.apply_to_text("Привет"), "Привет");
    assert_eq!(NullTransform.apply_to_text(""), "");
}

#[test]
fn null_transform_in_a_rule_chain() {
    #[derive(Debug)]
    struct Upper;

    impl TransformRule for Upper {
        fn apply_to(&self, cursor: &mut Cursor) {
            let upper = cursor.remaining().to_uppercase();
            let length = cursor.remaining().len();
            cursor.replace(length, &upper);
        }
    }

    let chain: Vec<Box<dyn TransformRule>> =
        vec![Box::new(NullTransform), Box::new(Upper), Box::new(NullTransform)];
    let mut cursor = Cursor::new("abc");
    for rule in &chain {
        rule.apply_to(&mut cursor);
    }
    assert_eq!(cursor.text(), "ABC");
    assert_eq!(cursor.position(), 0);
}

// =========================================================================
// Cursor
// =========================================================================

#[test]
fn advance_steps_over_grapheme_clusters() {
    let mut cursor = Cursor::new("e\u{301}a");
    assert!(cursor.advance());
    assert_eq!(cursor.position(), 3);
    assert!(cursor.advance());
    assert!(cursor.is_eof());
    assert!(!cursor.advance());
    assert_eq!(cursor.remaining(), "");
}

#[test]
fn set_position_clamps_to_char_boundary() {
    let mut cursor = Cursor::new("aé");
    cursor.set_position(2);
    assert_eq!(cursor.position(), 1);
    cursor.set_position(99);
    assert_eq!(cursor.position(), 3);
    assert!(cursor.is_eof());
    cursor.reset();
    assert_eq!(cursor.position(), 0);
}

#[test]
fn replace_rewrites_after_position() {
    let mut cursor = Cursor::with_position("hello world", 6);
    cursor.replace(5, "there");
    assert_eq!(cursor.text(), "hello there");
    assert_eq!(cursor.position(), 6);

    cursor.replace(100, "!");
    assert_eq!(cursor.into_text(), "hello !");
}
