//! The segmentation loop: raw text in, ordered statements out.
//!
//! The segmenter drives a [`Tokenizer`] and a [`DelimiterTester`] in
//! lockstep. Delimiter candidates are only probed at token boundaries,
//! which is what keeps a `;` inside a string literal or a comment from
//! splitting a statement: the probe position can never fall inside
//! such a token. Everything else is bookkeeping over spans.

use memchr::memrchr;
use sqlsplit_scan::SourceBuffer;
use tracing::trace;

use crate::tester::DelimiterTester;
use crate::token::TokenKind;
use crate::tokenizer::Tokenizer;

/// One executable statement extracted from a script.
///
/// `start..end` are byte offsets into the original input, spanning the
/// first through the last meaningful token: surrounding whitespace,
/// comments, and the delimiter itself are outside the span. `text` is
/// an owned copy of that slice, so statements outlive the segmenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// 1-based position of this statement within the script.
    pub index: usize,
    /// Byte offset of the first meaningful token.
    pub start: u32,
    /// Byte offset one past the last meaningful token.
    pub end: u32,
    /// The statement text, `input[start..end]`.
    pub text: String,
}

/// Lazy statement iterator over a script.
///
/// Owns its [`SourceBuffer`] and borrows the dialect tester mutably for
/// the duration of the pass; each call to [`Iterator::next`] scans
/// forward until one statement is complete, so callers that only need
/// the statement under a cursor never pay for the rest of the script.
pub struct Segmenter<'t> {
    buf: SourceBuffer,
    tester: &'t mut dyn DelimiterTester,
    /// Resume offset: a token boundary just past the last consumed
    /// delimiter (or line terminator).
    pos: u32,
    next_index: usize,
    done: bool,
}

impl<'t> Segmenter<'t> {
    /// A segmenter over `sql` using `tester`'s delimiter strategy.
    pub fn new(sql: &str, tester: &'t mut dyn DelimiterTester) -> Self {
        Self {
            buf: SourceBuffer::new(sql),
            tester,
            pos: 0,
            next_index: 1,
            done: false,
        }
    }

    fn emit(&mut self, start: u32, end: u32) -> Statement {
        let index = self.next_index;
        self.next_index += 1;
        let text = self.buf.cursor().slice(start, end).to_owned();
        trace!(index, start, end, "statement segmented");
        self.tester.statement_finished();
        Statement {
            index,
            start,
            end,
            text,
        }
    }
}

impl Iterator for Segmenter<'_> {
    type Item = Statement;

    fn next(&mut self) -> Option<Statement> {
        if self.done {
            return None;
        }

        let mut tz = Tokenizer::resume(&self.buf, self.pos);
        // Span of the statement being accumulated: first meaningful
        // token through the last one seen so far.
        let mut stmt_start: Option<u32> = None;
        let mut stmt_end = 0u32;
        let mut single_line = false;

        loop {
            let probe = tz.pos();

            // Probe the delimiter candidates before pulling the next
            // token. Single-line statements end at their line instead.
            if !single_line {
                let at_ls = at_line_start(self.buf.as_bytes(), probe);
                if let Some(len) = delimiter_match(&*self.tester, self.buf.as_bytes(), probe, at_ls)
                {
                    trace!(pos = probe, len, "delimiter matched");
                    self.pos = probe + len;
                    if let Some(start) = stmt_start {
                        return Some(self.emit(start, stmt_end));
                    }
                    // Empty statement: swallow the delimiter and keep
                    // scanning, emitting nothing.
                    tz = Tokenizer::resume(&self.buf, self.pos);
                    continue;
                }
            }

            let Some(token) = tz.next() else {
                self.done = true;
                self.pos = self.buf.len();
                if let Some(start) = stmt_start {
                    // Trailing statement without a delimiter.
                    return Some(self.emit(start, stmt_end));
                }
                return None;
            };

            if token.kind == TokenKind::Newline {
                self.tester.line_end();
                if single_line {
                    self.pos = token.end;
                    if let Some(start) = stmt_start {
                        return Some(self.emit(start, stmt_end));
                    }
                    single_line = false;
                }
            }

            let meaningful = !token.is_trivia();
            self.tester
                .current_token(&token, meaningful && stmt_start.is_none());

            if meaningful {
                if stmt_start.is_none() {
                    stmt_start = Some(token.start);
                    if self.tester.supports_single_line_statements()
                        && self.tester.is_single_line_statement(
                            &token,
                            at_line_start(self.buf.as_bytes(), token.start),
                        )
                    {
                        single_line = true;
                    }
                }
                stmt_end = token.end;
            }
        }
    }
}

/// Split `sql` into its complete statement list.
pub fn segment(sql: &str, tester: &mut dyn DelimiterTester) -> Vec<Statement> {
    Segmenter::new(sql, tester).collect()
}

/// The statement whose span contains byte `offset`, if any.
///
/// Scans lazily and stops at the first statement starting past
/// `offset`, so querying near the top of a large script is cheap. An
/// offset falling between statements (whitespace, comments, the
/// delimiter itself) yields `None`.
pub fn statement_at(
    sql: &str,
    tester: &mut dyn DelimiterTester,
    offset: u32,
) -> Option<Statement> {
    for statement in Segmenter::new(sql, tester) {
        if statement.start > offset {
            return None;
        }
        if offset < statement.end {
            return Some(statement);
        }
    }
    None
}

/// True when only blank bytes precede `pos` on its line.
fn at_line_start(source: &[u8], pos: u32) -> bool {
    let pos = pos as usize;
    let line_begin = memrchr(b'\n', &source[..pos.min(source.len())]).map_or(0, |i| i + 1);
    source[line_begin..pos.min(source.len())]
        .iter()
        .all(|&b| b == b' ' || b == b'\t' || b == b'\r')
}

/// Match the tester's delimiter candidates at `pos`: the current
/// delimiter first, then the alternate when mixed delimiters apply.
fn delimiter_match(
    tester: &dyn DelimiterTester,
    source: &[u8],
    pos: u32,
    at_line_start: bool,
) -> Option<u32> {
    if let Some(len) = tester
        .current_delimiter()
        .match_len(source, pos as usize, at_line_start)
    {
        return Some(len);
    }
    if tester.supports_mixed_delimiters() {
        if let Some(alt) = tester.alternate_delimiter() {
            return alt.match_len(source, pos as usize, at_line_start);
        }
    }
    None
}
