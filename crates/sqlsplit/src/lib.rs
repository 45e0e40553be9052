//! SQL script segmentation.
//!
//! Splits a buffer of SQL/script text into an ordered sequence of
//! individually executable statements, each with exact source offsets,
//! while respecting a configurable, dialect-dependent statement
//! delimiter. This is a lexical state machine, not a SQL parser:
//! correctness rests on tracking quoting and comment context plus a
//! small amount of per-dialect state (such as "are we inside a
//! PostgreSQL `COPY ... FROM STDIN` data block?").
//!
//! # Entry points
//!
//! - [`segment`]: split a whole script into [`Statement`]s.
//! - [`Segmenter`]: the same split as a lazy iterator.
//! - [`DelimiterTester`]: implement to add a dialect without touching
//!   the segmenter. [`StandardTester`] and [`PostgresTester`] are
//!   built in.
//!
//! ```
//! use sqlsplit::{segment, StandardTester};
//!
//! let mut tester = StandardTester::new();
//! let statements = segment("SELECT 1; SELECT 2;", &mut tester);
//! assert_eq!(statements.len(), 2);
//! assert_eq!(statements[0].text, "SELECT 1");
//! assert_eq!(statements[1].text, "SELECT 2");
//! ```
//!
//! The engine performs no I/O, reads no configuration, and never fails
//! on malformed SQL; the single validated input is the delimiter text
//! itself (see [`DelimiterError`]).

mod delimiter;
mod postgres;
mod segmenter;
mod tester;
mod token;
mod tokenizer;

pub use delimiter::{Delimiter, DelimiterError};
pub use postgres::PostgresTester;
pub use segmenter::{segment, statement_at, Segmenter, Statement};
pub use tester::{DelimiterTester, StandardTester};
pub use token::{Token, TokenKind};
pub use tokenizer::Tokenizer;

// Re-exported so tokenizer users can construct buffers without naming
// the scanner crate.
pub use sqlsplit_scan::SourceBuffer;
