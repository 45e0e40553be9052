//! Cooked tokens: classified text spans with offsets and line numbers.

use sqlsplit_scan::RawTag;

/// Lexical class of a token, as seen by delimiter testers.
///
/// `Newline` is a whitespace-class kind split out from `Whitespace` so
/// the segmenter can track line starts without re-scanning raw text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Spaces and tabs (also a lone `\r`).
    Whitespace,
    /// `\n` or `\r\n`.
    Newline,
    /// `--` comment, newline excluded.
    LineComment,
    /// `/* ... */` comment.
    BlockComment,
    /// Single-quoted string literal.
    StringLiteral,
    /// Quoted identifier.
    QuotedIdentifier,
    /// Keywords, identifiers, numbers.
    Word,
    /// Single punctuation or operator byte.
    Operator,
    /// Interior null or control byte.
    Other,
}

impl From<RawTag> for TokenKind {
    fn from(tag: RawTag) -> Self {
        match tag {
            RawTag::Whitespace => TokenKind::Whitespace,
            RawTag::Newline => TokenKind::Newline,
            RawTag::LineComment => TokenKind::LineComment,
            RawTag::BlockComment => TokenKind::BlockComment,
            RawTag::String => TokenKind::StringLiteral,
            RawTag::QuotedIdent => TokenKind::QuotedIdentifier,
            RawTag::Word => TokenKind::Word,
            RawTag::Punct => TokenKind::Operator,
            // Eof never surfaces as a token; the tokenizer ends instead.
            RawTag::Other | RawTag::Eof => TokenKind::Other,
        }
    }
}

impl TokenKind {
    /// Whitespace-class kinds, newlines included.
    #[inline]
    pub fn is_whitespace(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Newline)
    }

    /// Comment kinds.
    #[inline]
    pub fn is_comment(self) -> bool {
        matches!(self, TokenKind::LineComment | TokenKind::BlockComment)
    }

    /// Trivia: whitespace and comments. Trivia never opens a statement
    /// and is ignored by delimiter testers when tracking the first
    /// token of a statement.
    #[inline]
    pub fn is_trivia(self) -> bool {
        self.is_whitespace() || self.is_comment()
    }
}

/// One classified span of source text.
///
/// Tokens borrow the source buffer and are consumed by the segmenter as
/// they are produced; nothing holds them across a segmentation pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// Lexical class.
    pub kind: TokenKind,
    /// Exact source text of the token.
    pub text: &'a str,
    /// Byte offset of the first byte.
    pub start: u32,
    /// Byte offset one past the last byte.
    pub end: u32,
    /// 1-based line number of the token's first byte.
    pub line: u32,
}

impl Token<'_> {
    /// ASCII-case-insensitive comparison against a keyword, for `Word`
    /// tokens. Non-word tokens never match.
    #[inline]
    pub fn keyword_eq(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Word && self.text.eq_ignore_ascii_case(keyword)
    }

    /// Trivia shorthand, see [`TokenKind::is_trivia`].
    #[inline]
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }
}
