//! Raw token classification tags.
//!
//! Tags carry lexical class only; the token's text is recovered from
//! its `(start, len)` span by the consuming layer. Error conditions do
//! not exist at this level: unterminated literals and comments are
//! classified as their intended tag, covering the rest of the source.

/// Lexical class of a raw token.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RawTag {
    /// Maximal run of word bytes: keywords, identifiers, numbers.
    Word,
    /// Single-quoted SQL string literal, `''` as escaped quote.
    String,
    /// Quoted identifier (`"..."` by default, backtick selectable).
    QuotedIdent,
    /// Single punctuation or operator byte.
    Punct,
    /// Run of spaces/tabs (also a lone `\r`).
    Whitespace,
    /// `\n` or `\r\n` (one token, len 1 or 2).
    Newline,
    /// `--` comment up to but excluding the newline.
    LineComment,
    /// `/* ... */` comment, non-nesting.
    BlockComment,
    /// Interior null or control byte; carried through, never an error.
    Other,
    /// End of source. `len` is 0; repeats on every subsequent call.
    Eof,
}

/// Size assertion: the tag stays a single byte.
const _: () = assert!(std::mem::size_of::<RawTag>() == 1);

impl RawTag {
    /// Whitespace-class tags (spaces, tabs, newlines).
    #[inline]
    pub fn is_whitespace(self) -> bool {
        matches!(self, RawTag::Whitespace | RawTag::Newline)
    }

    /// Comment tags.
    #[inline]
    pub fn is_comment(self) -> bool {
        matches!(self, RawTag::LineComment | RawTag::BlockComment)
    }

    /// Trivia: whitespace, newlines, and comments. Trivia never opens a
    /// statement and is ignored by delimiter testers.
    #[inline]
    pub fn is_trivia(self) -> bool {
        self.is_whitespace() || self.is_comment()
    }
}

/// One raw token: a tag and its byte length.
///
/// The start offset is the scanner position before the token was
/// produced; consumers track it themselves, keeping this type two
/// machine words.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    /// Lexical class.
    pub tag: RawTag,
    /// Byte length of the token text.
    pub len: u32,
}

#[cfg(test)]
mod tests;
