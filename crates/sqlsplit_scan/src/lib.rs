//! Low-level scanning primitives for SQL script segmentation.
//!
//! This crate converts raw script text into a stream of classified raw
//! tokens: words, quoted literals, comments, punctuation, and trivia.
//! It knows nothing about statement delimiters or dialects — that logic
//! lives in the `sqlsplit` crate. The scanner never fails: malformed
//! input (unterminated literals or comments at EOF) degrades to a
//! single best-effort token covering the remainder of the source.
//!
//! # Layers
//!
//! - [`SourceBuffer`]: sentinel-terminated copy of the source text.
//! - [`Cursor`]: byte-level navigation over the buffer.
//! - [`Scanner`]: produces [`RawToken`] `(tag, len)` pairs.

mod cursor;
mod scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use scanner::Scanner;
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
