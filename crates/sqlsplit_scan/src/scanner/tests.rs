use super::*;
use crate::{RawTag, SourceBuffer};

/// Scan the whole source, returning `(tag, text)` pairs.
fn scan_all(source: &str) -> Vec<(RawTag, String)> {
    let buf = SourceBuffer::new(source);
    let mut scanner = Scanner::new(buf.cursor());
    let mut out = Vec::new();
    loop {
        let start = scanner.pos();
        let token = scanner.next_token();
        if token.tag == RawTag::Eof {
            break;
        }
        let cursor = buf.cursor();
        out.push((token.tag, cursor.slice(start, start + token.len).to_owned()));
    }
    out
}

fn tags(source: &str) -> Vec<RawTag> {
    scan_all(source).into_iter().map(|(t, _)| t).collect()
}

// === Basics ===

#[test]
fn empty_source_is_eof() {
    let buf = SourceBuffer::new("");
    let mut scanner = Scanner::new(buf.cursor());
    assert_eq!(scanner.next_token().tag, RawTag::Eof);
    // EOF repeats
    assert_eq!(scanner.next_token().tag, RawTag::Eof);
    assert_eq!(scanner.next_token().len, 0);
}

#[test]
fn simple_statement() {
    assert_eq!(
        tags("SELECT 1;"),
        vec![
            RawTag::Word,
            RawTag::Whitespace,
            RawTag::Word,
            RawTag::Punct,
        ]
    );
}

#[test]
fn word_includes_underscore_dollar_hash() {
    let toks = scan_all("my_table t$1 #tmp");
    assert_eq!(toks[0], (RawTag::Word, "my_table".into()));
    assert_eq!(toks[2], (RawTag::Word, "t$1".into()));
    assert_eq!(toks[4], (RawTag::Word, "#tmp".into()));
}

#[test]
fn multibyte_identifiers_are_words() {
    let toks = scan_all("sélect straße 名前");
    assert_eq!(toks[0], (RawTag::Word, "sélect".into()));
    assert_eq!(toks[2], (RawTag::Word, "straße".into()));
    assert_eq!(toks[4], (RawTag::Word, "名前".into()));
}

#[test]
fn punctuation_is_single_byte() {
    assert_eq!(
        tags("(a,b)"),
        vec![
            RawTag::Punct,
            RawTag::Word,
            RawTag::Punct,
            RawTag::Word,
            RawTag::Punct,
        ]
    );
}

// === Newlines ===

#[test]
fn lf_is_newline() {
    let toks = scan_all("a\nb");
    assert_eq!(toks[1], (RawTag::Newline, "\n".into()));
}

#[test]
fn crlf_is_one_newline_token() {
    let toks = scan_all("a\r\nb");
    assert_eq!(toks[1], (RawTag::Newline, "\r\n".into()));
}

#[test]
fn lone_cr_is_whitespace() {
    let toks = scan_all("a\rb");
    assert_eq!(toks[1], (RawTag::Whitespace, "\r".into()));
}

// === Comments ===

#[test]
fn line_comment_excludes_newline() {
    let toks = scan_all("-- hi\nx");
    assert_eq!(toks[0], (RawTag::LineComment, "-- hi".into()));
    assert_eq!(toks[1], (RawTag::Newline, "\n".into()));
    assert_eq!(toks[2], (RawTag::Word, "x".into()));
}

#[test]
fn line_comment_at_eof() {
    let toks = scan_all("-- trailing");
    assert_eq!(toks, vec![(RawTag::LineComment, "-- trailing".into())]);
}

#[test]
fn single_dash_is_punct() {
    assert_eq!(tags("a-b"), vec![RawTag::Word, RawTag::Punct, RawTag::Word]);
}

#[test]
fn block_comment() {
    let toks = scan_all("a /* c */ b");
    assert_eq!(toks[2], (RawTag::BlockComment, "/* c */".into()));
}

#[test]
fn block_comment_spans_lines() {
    let toks = scan_all("/* a\nb */x");
    assert_eq!(toks[0], (RawTag::BlockComment, "/* a\nb */".into()));
    assert_eq!(toks[1], (RawTag::Word, "x".into()));
}

#[test]
fn block_comment_with_stars_inside() {
    let toks = scan_all("/* a ** b */");
    assert_eq!(toks[0], (RawTag::BlockComment, "/* a ** b */".into()));
}

#[test]
fn unterminated_block_comment_is_one_token() {
    let toks = scan_all("x /* never closed");
    assert_eq!(toks[2], (RawTag::BlockComment, "/* never closed".into()));
    assert_eq!(toks.len(), 3);
}

#[test]
fn block_comments_do_not_nest() {
    let toks = scan_all("/* a /* b */ c */");
    assert_eq!(toks[0], (RawTag::BlockComment, "/* a /* b */".into()));
}

#[test]
fn single_slash_is_punct() {
    assert_eq!(tags("a/b"), vec![RawTag::Word, RawTag::Punct, RawTag::Word]);
}

// === String Literals ===

#[test]
fn string_literal() {
    let toks = scan_all("select 'it'");
    assert_eq!(toks[2], (RawTag::String, "'it'".into()));
}

#[test]
fn doubled_quote_does_not_terminate() {
    let toks = scan_all("'it''s'");
    assert_eq!(toks, vec![(RawTag::String, "'it''s'".into())]);
}

#[test]
fn semicolon_inside_string_is_not_punct() {
    let toks = scan_all("'a;b'");
    assert_eq!(toks, vec![(RawTag::String, "'a;b'".into())]);
}

#[test]
fn string_may_span_lines() {
    let toks = scan_all("'a\nb'x");
    assert_eq!(toks[0], (RawTag::String, "'a\nb'".into()));
    assert_eq!(toks[1], (RawTag::Word, "x".into()));
}

#[test]
fn unterminated_string_is_one_token() {
    let toks = scan_all("x 'never closed");
    assert_eq!(toks[2], (RawTag::String, "'never closed".into()));
    assert_eq!(toks.len(), 3);
}

#[test]
fn empty_string_literal() {
    let toks = scan_all("''");
    assert_eq!(toks, vec![(RawTag::String, "''".into())]);
}

// === Quoted Identifiers ===

#[test]
fn quoted_identifier() {
    let toks = scan_all("\"My Table\"");
    assert_eq!(toks, vec![(RawTag::QuotedIdent, "\"My Table\"".into())]);
}

#[test]
fn quoted_identifier_with_doubled_quote() {
    let toks = scan_all("\"a\"\"b\"");
    assert_eq!(toks, vec![(RawTag::QuotedIdent, "\"a\"\"b\"".into())]);
}

#[test]
fn unterminated_quoted_identifier() {
    let toks = scan_all("\"open");
    assert_eq!(toks, vec![(RawTag::QuotedIdent, "\"open".into())]);
}

#[test]
fn backtick_identifier_quote() {
    let buf = SourceBuffer::new("`my col` x");
    let mut scanner = Scanner::with_identifier_quote(buf.cursor(), b'`');
    let token = scanner.next_token();
    assert_eq!(token.tag, RawTag::QuotedIdent);
    assert_eq!(token.len, 8);
    // With backtick quoting, `"` is ordinary punctuation.
    let buf = SourceBuffer::new("\"x\"");
    let mut scanner = Scanner::with_identifier_quote(buf.cursor(), b'`');
    assert_eq!(scanner.next_token().tag, RawTag::Punct);
}

// === Control Bytes ===

#[test]
fn interior_null_is_other() {
    let toks = scan_all("a\0b");
    assert_eq!(toks[1], (RawTag::Other, "\0".into()));
}

#[test]
fn control_byte_is_other() {
    let toks = scan_all("a\u{1}b");
    assert_eq!(toks[1].0, RawTag::Other);
}

// === Restartability ===

#[test]
fn restart_from_token_boundary_agrees() {
    let source = "SELECT 'a;b' FROM t; -- done\nSELECT 2;";
    let buf = SourceBuffer::new(source);

    // Full scan, remembering each boundary.
    let mut scanner = Scanner::new(buf.cursor());
    let mut boundaries = vec![0u32];
    loop {
        let token = scanner.next_token();
        if token.tag == RawTag::Eof {
            break;
        }
        boundaries.push(scanner.pos());
    }

    // Restarting at any boundary yields the same next token.
    for &start in &boundaries {
        let mut full = Scanner::new(buf.cursor());
        loop {
            if full.pos() == start {
                break;
            }
            full.next_token();
        }
        let expected = full.next_token();

        let mut cursor = buf.cursor();
        cursor.advance_n(start);
        let mut restarted = Scanner::new(cursor);
        assert_eq!(restarted.next_token(), expected, "boundary {start}");
    }
}

// === Coverage ===

#[test]
fn tokens_cover_source_exactly() {
    let source = "SELECT a, 'x''y' FROM \"T\"; -- c\n/* b */\t@run";
    let mut total = 0u32;
    let rebuilt: String = scan_all(source).into_iter().map(|(_, text)| text).collect();
    for (_, text) in scan_all(source) {
        total += u32::try_from(text.len()).unwrap_or(0);
    }
    assert_eq!(total as usize, source.len());
    assert_eq!(rebuilt, source);
}

// === Property tests ===

mod proptest_scanner {
    use super::scan_all;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn never_panics_and_covers_input(source in "\\PC*") {
            let rebuilt: String =
                scan_all(&source).into_iter().map(|(_, text)| text).collect();
            prop_assert_eq!(rebuilt, source);
        }

        #[test]
        fn sql_flavored_input_round_trips(
            source in "[a-zA-Z0-9_;'\"/\\*\\- \t\n(),.]*"
        ) {
            let rebuilt: String =
                scan_all(&source).into_iter().map(|(_, text)| text).collect();
            prop_assert_eq!(rebuilt, source);
        }
    }
}
