#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use crate::{ErrorCode, LexError, MemorySource, Position, StreamCursor};

fn cursor(text: &str) -> StreamCursor<MemorySource> {
    StreamCursor::from_bytes(text).unwrap()
}

fn syntax(err: LexError) -> crate::SyntaxError {
    match err {
        LexError::Syntax(err) => err,
        LexError::Cursor(err) => panic!("expected syntax error, got {err}"),
    }
}

// === match_literal ===

#[test]
fn match_literal_consumes_on_success() {
    let mut c = cursor("quit now");
    assert!(c.match_literal("quit").unwrap());
    assert_eq!(c.current(), Some(b' '));
    assert_eq!(c.column(), 5);
}

#[test]
fn match_literal_restores_on_partial_match() {
    let mut c = cursor("quilt");
    let before = c.snapshot();
    assert!(!c.match_literal("quit").unwrap());
    assert_eq!(c.snapshot(), before);
}

#[test]
fn match_literal_at_end_of_input() {
    let mut c = cursor("qu");
    let before = c.snapshot();
    assert!(!c.match_literal("quit").unwrap());
    assert_eq!(c.snapshot(), before);
    assert!(c.is_active());
}

#[test]
fn match_literal_consuming_to_end() {
    let mut c = cursor("end");
    assert!(c.match_literal("end").unwrap());
    assert!(!c.is_active());
    assert_eq!(c.current(), None);
}

#[test]
fn match_literal_empty_text_always_matches() {
    let mut c = cursor("x");
    let before = c.snapshot();
    assert!(c.match_literal("").unwrap());
    assert_eq!(c.snapshot(), before);
}

#[test]
fn eat_is_match_literal() {
    let mut c = cursor("quit");
    assert!(!c.eat("quiet").unwrap());
    assert!(c.eat("quit").unwrap());
    assert!(!c.is_active());
}

// === match_literal_or_fail ===

#[test]
fn match_literal_or_fail_success() {
    let mut c = cursor("let x");
    c.match_literal_or_fail("let").unwrap();
    assert_eq!(c.current(), Some(b' '));
}

#[test]
fn match_literal_or_fail_reports_position_and_excerpt() {
    let mut c = cursor("ab\nlex y = 1");
    c.match_literal("ab\n").unwrap();
    let before = c.snapshot();
    let err = syntax(c.match_literal_or_fail("let").unwrap_err());
    assert_eq!(c.snapshot(), before);
    assert_eq!(err.code, ErrorCode::E1001);
    assert_eq!(err.position, Position::new(2, 1));
    assert_eq!(err.message, "expected \"let\", but found 'lex y = 1' instead");
    assert_eq!(
        err.render(),
        "parse error: expected \"let\", but found 'lex y = 1' instead near line 2, char 1\n"
    );
}

#[test]
fn match_literal_or_fail_escapes_newlines_in_excerpt() {
    let mut c = StreamCursor::with_options(
        std::io::Cursor::new(b"a\nb\nc\nd".to_vec()),
        crate::CursorOptions::default().with_context_width(2),
    )
    .unwrap();
    let err = syntax(c.match_literal_or_fail("ab").unwrap_err());
    assert_eq!(err.context.as_deref(), Some("a\\nb\\n"));
}

// === match_char_in ===

#[test]
fn match_char_in_consumes_one_byte() {
    let mut c = cursor("+1");
    assert!(c.match_char_in("+-*/").unwrap());
    assert_eq!(c.current(), Some(b'1'));
    assert!(!c.match_char_in("+-*/").unwrap());
    assert_eq!(c.current(), Some(b'1'));
}

#[test]
fn match_char_in_at_end_of_input() {
    let mut c = cursor("");
    assert!(!c.match_char_in("abc").unwrap());
}

#[test]
fn match_char_in_or_fail_default_message() {
    let mut c = cursor("x+1");
    let before = c.snapshot();
    let err = syntax(c.match_char_in_or_fail("0123456789", None).unwrap_err());
    assert_eq!(c.snapshot(), before);
    assert_eq!(err.message, "expected one of '0123456789' but found 'x+1'");
    assert_eq!(err.position, Position::new(1, 1));
}

#[test]
fn match_char_in_or_fail_custom_message() {
    let mut c = cursor("?");
    let err = syntax(c.match_char_in_or_fail("q", Some("expected quit")).unwrap_err());
    assert_eq!(err.message, "expected quit");
    assert_eq!(err.context.as_deref(), Some("?"));
}

#[test]
fn match_char_in_or_fail_success() {
    let mut c = cursor("q");
    c.match_char_in_or_fail("q", None).unwrap();
    assert!(!c.is_active());
}

// === test_literal / test_char_in ===

#[test]
fn test_literal_reports_length_without_consuming() {
    let mut c = cursor("while(1)");
    let before = c.snapshot();
    assert_eq!(c.test_literal("while").unwrap(), Some(5));
    assert_eq!(c.snapshot(), before);
    assert_eq!(c.test_literal("whale").unwrap(), None);
    assert_eq!(c.snapshot(), before);
    assert_eq!(c.test_literal("while(1)").unwrap(), Some(8));
    assert_eq!(c.snapshot(), before);
}

#[test]
fn test_char_in_is_pure() {
    let c = cursor("7");
    let before = c.snapshot();
    assert!(c.test_char_in("0123456789"));
    assert!(!c.test_char_in("abc"));
    assert_eq!(c.snapshot(), before);
}

#[test]
fn test_char_in_at_end_is_false() {
    let c = cursor("");
    assert!(!c.test_char_in("abc"));
}

// === match_while ===

#[test]
fn match_while_takes_maximal_run() {
    let mut c = cursor("123+4");
    let digits = c.match_while(|b| b.is_ascii_digit()).unwrap();
    assert_eq!(digits, b"123");
    assert_eq!(c.current(), Some(b'+'));
}

#[test]
fn match_while_empty_run_is_noop() {
    let mut c = cursor("+4");
    let before = c.snapshot();
    assert!(c.match_while(|b| b.is_ascii_digit()).unwrap().is_empty());
    assert_eq!(c.snapshot(), before);
}

#[test]
fn match_while_runs_to_end() {
    let mut c = cursor("999");
    assert_eq!(c.match_while(|b| b.is_ascii_digit()).unwrap(), b"999");
    assert!(!c.is_active());
}
