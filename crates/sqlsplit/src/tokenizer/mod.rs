//! Lazy tokenizer over a [`SourceBuffer`], restartable from any token
//! boundary.
//!
//! Wraps the raw scanner from `sqlsplit_scan`, attaching exact byte
//! offsets, source text slices, and 1-based line numbers to each token.
//! The segmenter restarts a tokenizer immediately after each consumed
//! delimiter; [`Tokenizer::resume`] recomputes the line number for the
//! restart offset with a SIMD newline count, so restarting is cheap and
//! exact.

use sqlsplit_scan::{RawTag, Scanner, SourceBuffer};

use crate::token::Token;

/// Count `\n` bytes in `bytes`, for line-number bookkeeping.
#[allow(
    clippy::cast_possible_truncation,
    reason = "newline count is bounded by source_len which fits in u32"
)]
fn count_newlines(bytes: &[u8]) -> u32 {
    memchr::memchr_iter(b'\n', bytes).count() as u32
}

/// Lazy iterator of [`Token`]s over a source buffer.
pub struct Tokenizer<'a> {
    buf: &'a SourceBuffer,
    scanner: Scanner<'a>,
    /// 1-based line number at the current scan position.
    line: u32,
}

impl<'a> Tokenizer<'a> {
    /// Tokenize from the start of the buffer.
    pub fn new(buf: &'a SourceBuffer) -> Self {
        Self {
            buf,
            scanner: Scanner::new(buf.cursor()),
            line: 1,
        }
    }

    /// Tokenize from `offset`, which must be a token boundary (offset 0,
    /// end of input, or a boundary reported by a previous tokenizer).
    pub fn resume(buf: &'a SourceBuffer, offset: u32) -> Self {
        let mut cursor = buf.cursor();
        cursor.advance_n(offset);
        Self {
            buf,
            scanner: Scanner::new(cursor),
            line: 1 + count_newlines(&buf.as_bytes()[..offset as usize]),
        }
    }

    /// Use a non-standard identifier quote byte (MySQL backtick).
    pub fn with_identifier_quote(buf: &'a SourceBuffer, quote: u8) -> Self {
        Self {
            buf,
            scanner: Scanner::with_identifier_quote(buf.cursor(), quote),
            line: 1,
        }
    }

    /// Byte offset of the next token (the current scan position).
    pub fn pos(&self) -> u32 {
        self.scanner.pos()
    }

    /// 1-based line number at the current scan position.
    pub fn line(&self) -> u32 {
        self.line
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let start = self.scanner.pos();
        let raw = self.scanner.next_token();
        if raw.tag == RawTag::Eof {
            return None;
        }
        let end = start + raw.len;
        let text = self.buf.cursor().slice(start, end);
        let line = self.line;

        // Newlines inside the token (block comments, unterminated
        // literals) advance the line count for subsequent tokens.
        self.line += match raw.tag {
            RawTag::Newline => 1,
            RawTag::BlockComment | RawTag::String | RawTag::QuotedIdent => {
                count_newlines(text.as_bytes())
            }
            _ => 0,
        };

        Some(Token {
            kind: raw.tag.into(),
            text,
            start,
            end,
            line,
        })
    }
}
