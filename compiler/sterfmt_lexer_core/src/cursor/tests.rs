use super::*;
use crate::SourceBuffer;
use pretty_assertions::assert_eq;

// === Basic Navigation ===

#[test]
fn starts_at_zero_with_next_at_one() {
    let buf = SourceBuffer::new("<b>");
    let cursor = buf.cursor();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.next_pos(), 1);
    assert_eq!(cursor.current(), b'<');
    assert_eq!(cursor.current_char(), Some('<'));
}

#[test]
fn advance_through_entire_source() {
    let buf = SourceBuffer::new("hi");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.current(), b'h');
    cursor.advance();
    assert_eq!(cursor.current(), b'i');
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
    assert_eq!(cursor.current_char(), None);
}

#[test]
fn advance_is_idempotent_at_eof() {
    let buf = SourceBuffer::new("x");
    let mut cursor = buf.cursor();
    cursor.advance();
    for _ in 0..10 {
        cursor.advance();
        assert_eq!(cursor.pos(), 1);
        assert!(cursor.is_eof());
    }
    assert_eq!(cursor.next_pos(), 2);
}

#[test]
fn empty_source_is_eof_immediately() {
    let buf = SourceBuffer::new("");
    let mut cursor = buf.cursor();
    assert!(cursor.is_eof());
    cursor.advance();
    assert_eq!(cursor.pos(), 0);
}

// === Code Points ===

#[test]
fn advance_moves_by_code_point() {
    let buf = SourceBuffer::new("é<");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.current_char(), Some('é'));
    assert_eq!(cursor.next_pos(), 2);
    cursor.advance();
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current_char(), Some('<'));
}

#[test]
fn four_byte_code_point() {
    let buf = SourceBuffer::new("🎨");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.current_char(), Some('🎨'));
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 4);
}

#[test]
fn utf8_widths() {
    assert_eq!(Cursor::utf8_char_width(b'a'), 1);
    assert_eq!(Cursor::utf8_char_width(0xC3), 2);
    assert_eq!(Cursor::utf8_char_width(0xE2), 3);
    assert_eq!(Cursor::utf8_char_width(0xF0), 4);
    assert_eq!(Cursor::utf8_char_width(0x80), 1);
}

// === Interior Null ===

#[test]
fn interior_null_is_not_eof() {
    let buf = SourceBuffer::new("a\0b");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
    assert_eq!(cursor.current_char(), Some('\0'));
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
}

// === Bulk Scanning ===

#[test]
fn eat_whitespace_consumes_full_run() {
    let buf = SourceBuffer::new(" \t\r\n\x0B\x0Cbold");
    let mut cursor = buf.cursor();
    cursor.eat_whitespace();
    assert_eq!(cursor.pos(), 6);
    assert_eq!(cursor.current(), b'b');
}

#[test]
fn eat_while_stops_at_eof_even_if_pred_accepts_nul() {
    let buf = SourceBuffer::new("ab");
    let mut cursor = buf.cursor();
    cursor.eat_while(|_| true);
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn slice_covers_scanned_range() {
    let buf = SourceBuffer::new("<bold>");
    let mut cursor = buf.cursor();
    cursor.advance();
    let start = cursor.pos();
    cursor.eat_while(|b| b.is_ascii_alphabetic());
    assert_eq!(cursor.slice(start, cursor.pos()), "bold");
    assert_eq!(cursor.slice(0, 1), "<");
}

mod proptest_cursor {
    use crate::SourceBuffer;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn advance_never_passes_source_len(source in ".{0,64}", steps in 0usize..100) {
            let buf = SourceBuffer::new(&source);
            let mut cursor = buf.cursor();
            for _ in 0..steps {
                let before = cursor.pos();
                cursor.advance();
                prop_assert!(cursor.pos() <= buf.len());
                prop_assert!(cursor.pos() > before || cursor.is_eof());
                prop_assert!(cursor.pos() < cursor.next_pos());
            }
        }

        #[test]
        fn advancing_visits_every_char(source in ".{0,32}") {
            let buf = SourceBuffer::new(&source);
            let mut cursor = buf.cursor();
            let mut seen = String::new();
            while let Some(c) = cursor.current_char() {
                seen.push(c);
                cursor.advance();
            }
            prop_assert_eq!(seen, source);
        }
    }
}
