//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and
//! produces [`RawToken`] values with zero heap allocation. It does not
//! resolve keywords or match statement delimiters — that is the
//! segmenter's job in the `sqlsplit` crate.
//!
//! The scanner holds no state besides its cursor, so it is restartable
//! from any token boundary: constructing a new scanner at an offset the
//! previous one stopped at resumes the exact same token stream.
//!
//! # Leniency
//!
//! Scanning never fails. An unterminated string literal, quoted
//! identifier, or block comment at EOF is classified as a single token
//! of its intended kind covering the remainder of the source.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Word bytes: ASCII alphanumerics, `_`, `$`, `#`, and every byte of a
/// multi-byte UTF-8 sequence. `$` and `#` appear in unquoted
/// identifiers (temp tables, session variables) across dialects.
#[inline]
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || b == b'#' || b >= 0x80
}

/// Allocation-free SQL scanner.
///
/// Produces one token at a time as a `(tag, length)` pair.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    /// Identifier quote byte, `"` by default. MySQL scripts use `` ` ``.
    ident_quote: u8,
}

impl<'a> Scanner<'a> {
    /// Create a scanner from a cursor, with the standard `"` identifier
    /// quote.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self {
            cursor,
            ident_quote: b'"',
        }
    }

    /// Create a scanner using a non-standard identifier quote byte.
    pub fn with_identifier_quote(cursor: Cursor<'a>, quote: u8) -> Self {
        Self {
            cursor,
            ident_quote: quote,
        }
    }

    /// Current byte offset in the source (start of the next token).
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is
    /// exhausted. Subsequent calls after EOF continue to return `Eof`.
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        let b = self.cursor.current();

        if b == self.ident_quote {
            return self.quoted(start, self.ident_quote, RawTag::QuotedIdent);
        }

        match b {
            0 => self.eof_or_null(start),
            b' ' | b'\t' => self.whitespace(start),
            b'\r' => self.carriage_return(start),
            b'\n' => self.newline(start),
            b'-' => self.dash_or_line_comment(start),
            b'/' => self.slash_or_block_comment(start),
            b'\'' => self.quoted(start, b'\'', RawTag::String),
            _ if is_word_byte(b) => self.word(start),
            0x01..=0x08 | 0x0B..=0x0C | 0x0E..=0x1F | 0x7F => self.single(start, RawTag::Other),
            _ => self.single(start, RawTag::Punct),
        }
    }

    // ─── EOF ──────────────────────────────────────────────────────────

    fn eof_or_null(&mut self, start: u32) -> RawToken {
        if self.cursor.is_eof() {
            RawToken {
                tag: RawTag::Eof,
                len: 0,
            }
        } else {
            // Interior null byte: carried through as Other, never an error.
            self.single(start, RawTag::Other)
        }
    }

    // ─── Whitespace & Newlines ────────────────────────────────────────

    #[inline]
    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_whitespace();
        RawToken {
            tag: RawTag::Whitespace,
            len: self.cursor.pos() - start,
        }
    }

    fn carriage_return(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'\n' {
            // CRLF is one Newline token with len 2
            self.cursor.advance_n(2);
            RawToken {
                tag: RawTag::Newline,
                len: self.cursor.pos() - start,
            }
        } else {
            // Lone \r counts as horizontal whitespace
            self.cursor.advance();
            RawToken {
                tag: RawTag::Whitespace,
                len: self.cursor.pos() - start,
            }
        }
    }

    fn newline(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        RawToken {
            tag: RawTag::Newline,
            len: self.cursor.pos() - start,
        }
    }

    // ─── Comments ─────────────────────────────────────────────────────

    fn dash_or_line_comment(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() != b'-' {
            return self.single(start, RawTag::Punct);
        }
        self.cursor.advance_n(2); // consume "--"
        // The newline stays outside the comment so the segmenter sees
        // it as its own token for line tracking.
        self.cursor.skip_to_byte(b'\n');
        RawToken {
            tag: RawTag::LineComment,
            len: self.cursor.pos() - start,
        }
    }

    fn slash_or_block_comment(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'*' {
            self.cursor.advance_n(2); // consume "/*"
            loop {
                if !self.cursor.skip_to_byte(b'*') {
                    // Unterminated: the remainder is one comment token.
                    break;
                }
                self.cursor.advance(); // consume '*'
                if self.cursor.current() == b'/' {
                    self.cursor.advance();
                    break;
                }
            }
            RawToken {
                tag: RawTag::BlockComment,
                len: self.cursor.pos() - start,
            }
        } else {
            self.single(start, RawTag::Punct)
        }
    }

    // ─── Quoted Literals & Identifiers ────────────────────────────────

    /// Scan a quoted region delimited by `quote`, with the doubled
    /// quote as an escaped quote (`''` inside strings, `""` inside
    /// quoted identifiers). Unterminated at EOF: the remainder is one
    /// token of the given tag.
    fn quoted(&mut self, start: u32, quote: u8, tag: RawTag) -> RawToken {
        self.cursor.advance(); // consume opening quote
        loop {
            if !self.cursor.skip_to_byte(quote) {
                break; // unterminated
            }
            self.cursor.advance(); // consume closing candidate
            if self.cursor.current() == quote {
                self.cursor.advance(); // doubled quote, keep scanning
            } else {
                break;
            }
        }
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    // ─── Words & Punctuation ──────────────────────────────────────────

    #[inline]
    fn word(&mut self, start: u32) -> RawToken {
        // Continuation bytes of multi-byte characters are >= 0x80 and
        // thus word bytes, so a byte loop never splits a character.
        self.cursor.eat_while(is_word_byte);
        RawToken {
            tag: RawTag::Word,
            len: self.cursor.pos() - start,
        }
    }

    /// Single-byte token: advance one byte and emit the given tag.
    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }
}

#[cfg(test)]
mod tests;
