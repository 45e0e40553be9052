//! The per-dialect delimiter strategy.
//!
//! A [`DelimiterTester`] observes the token stream of the statement
//! currently being segmented and answers what terminates it right now.
//! Dialects are added by implementing this trait; the segmenter never
//! special-cases a dialect itself. Testers are constructed once per
//! connection/session and reused across segmentation passes; the
//! segmenter calls [`statement_finished`](DelimiterTester::statement_finished)
//! after each emitted statement so per-statement state resets.

use crate::delimiter::Delimiter;
use crate::token::Token;

/// Dialect-specific statement termination strategy.
///
/// All methods are synchronous and perform no I/O. Implementations are
/// not thread-safe by contract; the segmenter owns the tester
/// exclusively for the duration of a pass.
pub trait DelimiterTester {
    /// Replace the delimiter used when no special mode is active.
    fn set_delimiter(&mut self, delimiter: Delimiter);

    /// Register a secondary delimiter for dialects where two delimiters
    /// terminate statements interchangeably (a batch separator
    /// alongside `;`). Dialects without that concept ignore the call.
    fn set_alternate_delimiter(&mut self, delimiter: Delimiter) {
        let _ = delimiter;
    }

    /// The registered alternate delimiter, if any. Consulted by the
    /// segmenter only when
    /// [`supports_mixed_delimiters`](Self::supports_mixed_delimiters)
    /// is `true`.
    fn alternate_delimiter(&self) -> Option<&Delimiter> {
        None
    }

    /// `true` if the default and alternate delimiter may terminate
    /// statements interchangeably within the same script.
    fn supports_mixed_delimiters(&self) -> bool {
        false
    }

    /// Observe the next token of the current statement.
    /// `is_start_of_statement` is `true` only for the statement's first
    /// meaningful (non-trivia) token. Implementations must ignore
    /// trivia for first-token tracking.
    fn current_token(&mut self, token: &Token<'_>, is_start_of_statement: bool);

    /// The delimiter that terminates the current statement. May differ
    /// from the configured default while a special mode is active (the
    /// PostgreSQL COPY data block).
    fn current_delimiter(&self) -> &Delimiter;

    /// Reset all per-statement state. Called by the segmenter exactly
    /// once after each emitted statement.
    fn statement_finished(&mut self);

    /// `true` if this dialect has line-oriented client commands that
    /// are complete without the normal delimiter.
    fn supports_single_line_statements(&self) -> bool;

    /// Whether `token`, as the first meaningful token of a line that
    /// starts a statement, makes that line a complete statement by
    /// itself.
    fn is_single_line_statement(&self, token: &Token<'_>, is_start_of_line: bool) -> bool;

    /// Notification that a line boundary was crossed, for testers that
    /// keep line-granularity state.
    fn line_end(&mut self) {}
}

/// Shared single-line rule: a line whose first meaningful token starts
/// with `\` or `@` is a complete statement on its own — psql-style
/// backslash commands and `@script` include directives.
pub(crate) fn is_client_directive(token: &Token<'_>, is_start_of_line: bool) -> bool {
    is_start_of_line && (token.text.starts_with('\\') || token.text.starts_with('@'))
}

/// Fallback tester for dialects without special segmentation rules.
///
/// Always terminates statements at the configured delimiter (`;` until
/// told otherwise) and still recognizes the generic `\`/`@` client
/// directives, so unrecognized dialects keep working in scripts that
/// use them.
#[derive(Debug, Clone)]
pub struct StandardTester {
    delimiter: Delimiter,
}

impl StandardTester {
    /// A tester using the standard `;` delimiter.
    pub fn new() -> Self {
        Self {
            delimiter: Delimiter::standard(),
        }
    }

    /// A tester using a configured delimiter.
    pub fn with_delimiter(delimiter: Delimiter) -> Self {
        Self { delimiter }
    }
}

impl Default for StandardTester {
    fn default() -> Self {
        Self::new()
    }
}

impl DelimiterTester for StandardTester {
    fn set_delimiter(&mut self, delimiter: Delimiter) {
        self.delimiter = delimiter;
    }

    fn current_token(&mut self, _token: &Token<'_>, _is_start_of_statement: bool) {}

    fn current_delimiter(&self) -> &Delimiter {
        &self.delimiter
    }

    fn statement_finished(&mut self) {}

    fn supports_single_line_statements(&self) -> bool {
        true
    }

    fn is_single_line_statement(&self, token: &Token<'_>, is_start_of_line: bool) -> bool {
        is_client_directive(token, is_start_of_line)
    }
}
