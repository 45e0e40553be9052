//! The statement delimiter value and its matching rules.

use thiserror::Error;

/// Error raised when constructing an invalid [`Delimiter`].
///
/// This is the one input the engine actively validates: an empty
/// delimiter could never match and would stall segmentation, so it is
/// rejected at construction time rather than detected mid-pass.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DelimiterError {
    /// The delimiter text was empty or all whitespace.
    #[error("statement delimiter must not be empty")]
    Empty,
}

/// An immutable statement delimiter: its literal text and whether it
/// only applies when it owns a whole line.
///
/// Single-line delimiters model client conventions like psql's `\.`
/// (end of COPY data) or batch separators like `GO`: they terminate a
/// statement only when they are the sole content of a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Delimiter {
    text: String,
    single_line: bool,
}

impl Delimiter {
    /// Construct a delimiter from text. Leading/trailing whitespace is
    /// trimmed; empty text is rejected.
    pub fn new(text: &str, single_line: bool) -> Result<Self, DelimiterError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DelimiterError::Empty);
        }
        Ok(Self {
            text: text.to_owned(),
            single_line,
        })
    }

    /// Construct a delimiter from a configuration string, as sourced
    /// from the surrounding application's settings. Equivalent to
    /// [`new`](Self::new) with `single_line = false`.
    pub fn parse(text: &str) -> Result<Self, DelimiterError> {
        Self::new(text, false)
    }

    /// The standard `;` delimiter.
    pub fn standard() -> Self {
        Self {
            text: ";".to_owned(),
            single_line: false,
        }
    }

    /// The delimiter's literal text. Never empty.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether this delimiter only matches when it owns a whole line.
    pub fn is_single_line(&self) -> bool {
        self.single_line
    }

    /// Test whether this delimiter matches the raw source text at byte
    /// offset `pos`, returning the matched length.
    ///
    /// `at_line_start` must be `true` when nothing but whitespace
    /// precedes `pos` on its line. Matching is literal and
    /// ASCII-case-insensitive (`go` matches `GO`); it is the caller's
    /// job to only probe at token boundaries so that delimiters are
    /// never found inside literals or comments.
    pub(crate) fn match_len(&self, source: &[u8], pos: usize, at_line_start: bool) -> Option<u32> {
        let text = self.text.as_bytes();
        let rest = source.get(pos..)?;
        if rest.len() < text.len() || !rest[..text.len()].eq_ignore_ascii_case(text) {
            return None;
        }

        let after = &rest[text.len()..];

        // A word-like delimiter must not match inside a longer word:
        // `GO` is not a terminator within `GOTO`.
        if ends_in_word_byte(text) {
            if let Some(&next) = after.first() {
                if is_word_byte(next) {
                    return None;
                }
            }
        }

        // A single-line delimiter owns its line: nothing but blanks may
        // precede it or follow it before the newline.
        if self.single_line {
            if !at_line_start {
                return None;
            }
            let blank_to_eol = after
                .iter()
                .take_while(|&&b| b != b'\n')
                .all(|&b| b == b' ' || b == b'\t' || b == b'\r');
            if !blank_to_eol {
                return None;
            }
        }

        u32::try_from(text.len()).ok()
    }
}

#[inline]
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || b == b'#' || b >= 0x80
}

#[inline]
fn ends_in_word_byte(text: &[u8]) -> bool {
    text.last().is_some_and(|&b| is_word_byte(b))
}

#[cfg(test)]
mod tests;
