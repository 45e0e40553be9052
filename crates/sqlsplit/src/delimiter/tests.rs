use super::*;

// === Construction ===

#[test]
fn parse_trims_and_keeps_text() {
    let d = Delimiter::parse("  ;  ");
    assert_eq!(d, Ok(Delimiter::standard()));
}

#[test]
fn parse_rejects_empty() {
    assert_eq!(Delimiter::parse(""), Err(DelimiterError::Empty));
    assert_eq!(Delimiter::parse("   \t "), Err(DelimiterError::Empty));
}

#[test]
fn new_carries_single_line_flag() {
    let d = Delimiter::new("GO", true);
    match d {
        Ok(d) => {
            assert_eq!(d.text(), "GO");
            assert!(d.is_single_line());
        }
        Err(e) => panic!("unexpected error: {e}"),
    }
}

#[test]
fn standard_is_semicolon() {
    let d = Delimiter::standard();
    assert_eq!(d.text(), ";");
    assert!(!d.is_single_line());
}

#[test]
fn equality_includes_flag() {
    let a = Delimiter::new(";", false);
    let b = Delimiter::new(";", true);
    assert_ne!(a, b);
}

#[test]
fn error_message() {
    assert_eq!(
        DelimiterError::Empty.to_string(),
        "statement delimiter must not be empty"
    );
}

// === Matching ===

fn must(d: Result<Delimiter, DelimiterError>) -> Delimiter {
    match d {
        Ok(d) => d,
        Err(e) => panic!("bad test delimiter: {e}"),
    }
}

#[test]
fn semicolon_matches_anywhere() {
    let d = Delimiter::standard();
    let src = b"a; b";
    assert_eq!(d.match_len(src, 1, false), Some(1));
    assert_eq!(d.match_len(src, 0, true), None);
}

#[test]
fn match_is_case_insensitive() {
    let d = must(Delimiter::parse("GO"));
    assert_eq!(d.match_len(b"go", 0, true), Some(2));
    assert_eq!(d.match_len(b"Go;", 0, true), Some(2));
}

#[test]
fn word_delimiter_respects_word_boundary() {
    let d = must(Delimiter::parse("GO"));
    assert_eq!(d.match_len(b"GOTO 1", 0, true), None);
    assert_eq!(d.match_len(b"GO TO", 0, true), Some(2));
    assert_eq!(d.match_len(b"GO", 0, true), Some(2));
}

#[test]
fn match_past_end_is_none() {
    let d = Delimiter::standard();
    assert_eq!(d.match_len(b";", 1, false), None);
    assert_eq!(d.match_len(b";", 99, false), None);
}

// === Single-Line Matching ===

#[test]
fn single_line_requires_line_start() {
    let d = must(Delimiter::new("\\.", true));
    assert_eq!(d.match_len(b"\\.\n", 0, true), Some(2));
    assert_eq!(d.match_len(b"x \\.\n", 2, false), None);
}

#[test]
fn single_line_owns_the_line() {
    let d = must(Delimiter::new("\\.", true));
    // Trailing blanks are fine, trailing content is not.
    assert_eq!(d.match_len(b"\\. \t\nrest", 0, true), Some(2));
    assert_eq!(d.match_len(b"\\. x\n", 0, true), None);
}

#[test]
fn single_line_at_eof_without_newline() {
    let d = must(Delimiter::new("\\.", true));
    assert_eq!(d.match_len(b"\\.", 0, true), Some(2));
}

#[test]
fn single_line_go_does_not_match_goto_line() {
    let d = must(Delimiter::new("GO", true));
    assert_eq!(d.match_len(b"GOTO\n", 0, true), None);
    assert_eq!(d.match_len(b"GO\n", 0, true), Some(2));
}
