//! PostgreSQL delimiter strategy: `COPY ... FROM STDIN` data blocks.
//!
//! In psql scripts, the `COPY table FROM STDIN;` command is followed by
//! raw data rows streamed verbatim until a line containing only `\.`.
//! Semicolons appear freely inside the data, so the data block must be
//! terminated by `\.` and nothing else. This tester tracks just enough
//! statement context to know when the block starts and ends.

use crate::delimiter::Delimiter;
use crate::tester::{is_client_directive, DelimiterTester};
use crate::token::Token;

/// COPY detection state. A single enum so that impossible combinations
/// (a data block while still scanning the command) cannot be
/// represented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CopyState {
    /// No COPY statement in sight.
    Idle,
    /// The current statement's first meaningful token was `COPY`.
    /// `from_stdin` flips when `FROM STDIN` has been observed.
    SawCopyKeyword { from_stdin: bool },
    /// The current statement is the raw data block of a preceding
    /// `COPY ... FROM STDIN`; only a `\.` line terminates it.
    InCopyFromStdin,
}

/// Delimiter tester for PostgreSQL scripts.
///
/// Ordinary statements terminate at the configured delimiter (`;` by
/// default); a statement recognized as `COPY ... FROM STDIN` switches
/// the *following* statement, the data block, to the fixed single-line
/// `\.` delimiter. Mixed delimiters are supported, so an
/// alternate delimiter (when registered) terminates ordinary
/// statements interchangeably with the default.
#[derive(Debug, Clone)]
pub struct PostgresTester {
    delimiter: Delimiter,
    alternate: Option<Delimiter>,
    /// End-of-data marker for COPY blocks; fixed by the psql protocol.
    copy_delimiter: Delimiter,
    state: CopyState,
    /// Whether the previous meaningful token of this statement was
    /// `FROM`, for recognizing the `FROM STDIN` pair.
    last_was_from: bool,
}

impl PostgresTester {
    /// A tester with the standard `;` delimiter and no alternate.
    pub fn new() -> Self {
        Self::with_delimiters(Delimiter::standard(), None)
    }

    /// A tester with explicit delimiter configuration.
    pub fn with_delimiters(delimiter: Delimiter, alternate: Option<Delimiter>) -> Self {
        // `\.` cannot be empty, so construction cannot fail.
        let copy_delimiter = Delimiter::new("\\.", true).unwrap_or_else(|_| Delimiter::standard());
        Self {
            delimiter,
            alternate,
            copy_delimiter,
            state: CopyState::Idle,
            last_was_from: false,
        }
    }
}

impl Default for PostgresTester {
    fn default() -> Self {
        Self::new()
    }
}

impl DelimiterTester for PostgresTester {
    fn set_delimiter(&mut self, delimiter: Delimiter) {
        self.delimiter = delimiter;
    }

    fn set_alternate_delimiter(&mut self, delimiter: Delimiter) {
        self.alternate = Some(delimiter);
    }

    fn alternate_delimiter(&self) -> Option<&Delimiter> {
        self.alternate.as_ref()
    }

    fn supports_mixed_delimiters(&self) -> bool {
        true
    }

    fn current_token(&mut self, token: &Token<'_>, is_start_of_statement: bool) {
        if token.is_trivia() {
            return;
        }

        match self.state {
            CopyState::Idle => {
                if is_start_of_statement && token.keyword_eq("COPY") {
                    self.state = CopyState::SawCopyKeyword { from_stdin: false };
                }
            }
            CopyState::SawCopyKeyword { from_stdin: false } => {
                if self.last_was_from && token.keyword_eq("STDIN") {
                    self.state = CopyState::SawCopyKeyword { from_stdin: true };
                }
            }
            // Already decided; data block content is opaque.
            CopyState::SawCopyKeyword { from_stdin: true } | CopyState::InCopyFromStdin => {}
        }

        self.last_was_from = token.keyword_eq("FROM");
    }

    fn current_delimiter(&self) -> &Delimiter {
        match self.state {
            CopyState::InCopyFromStdin => &self.copy_delimiter,
            CopyState::Idle | CopyState::SawCopyKeyword { .. } => &self.delimiter,
        }
    }

    fn statement_finished(&mut self) {
        self.state = match self.state {
            // The COPY command just ended; the next statement is its
            // raw data block.
            CopyState::SawCopyKeyword { from_stdin: true } => CopyState::InCopyFromStdin,
            _ => CopyState::Idle,
        };
        self.last_was_from = false;
    }

    fn supports_single_line_statements(&self) -> bool {
        true
    }

    fn is_single_line_statement(&self, token: &Token<'_>, is_start_of_line: bool) -> bool {
        is_client_directive(token, is_start_of_line)
    }
}
