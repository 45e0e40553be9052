//! Byte cursor over a sentinel-terminated buffer.
//!
//! EOF is the sentinel (`0x00`) at or past the source length; a null
//! byte before that point belongs to the source. Because the buffer
//! always ends in a sentinel plus zero padding, `current()` and
//! `peek()` are valid at every position and the scanning loops carry
//! no explicit bounds checks.

/// Byte cursor over a sentinel-terminated buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// `Cursor` is [`Copy`], so restarting a scan from a saved position is
/// free.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer: source, then sentinel and padding.
    buf: &'a [u8],
    /// Current read position.
    pos: u32,
    /// Length of the source content, excluding sentinel and padding.
    source_len: u32,
}

impl<'a> Cursor<'a> {
    /// Cursor at position 0. `buf[source_len..]` must be all `0x00`,
    /// which [`SourceBuffer`](crate::SourceBuffer) guarantees.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            buf.get(source_len as usize) == Some(&0),
            "buffer is missing its sentinel"
        );
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// The byte at the current position; `0x00` at EOF. An interior
    /// null also reads as `0x00`, [`is_eof()`](Self::is_eof) tells the
    /// two apart.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// The byte after the current one. Valid at any position thanks to
    /// the zero padding.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Advance by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Whether the cursor sits on the sentinel rather than source
    /// content.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current() == 0 && self.pos >= self.source_len
    }

    /// Byte offset of the current position.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source content in bytes.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Extract `source[start..end]` as `&str`.
    ///
    /// # Contract
    ///
    /// `start..end` must lie within the source content and on UTF-8
    /// character boundaries. Token boundaries satisfy both: the buffer
    /// came from a `&str` and the scanner never splits a multi-byte
    /// character.
    #[allow(
        unsafe_code,
        reason = "from_utf8_unchecked on source originally validated as &str"
    )]
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end && end <= self.source_len);
        // SAFETY: the buffer was built from a valid &str and token
        // boundaries fall on character boundaries within the source.
        unsafe { std::str::from_utf8_unchecked(&self.buf[start as usize..end as usize]) }
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must be `false` so the sentinel stops the loop; every
    /// byte-class predicate the scanner uses satisfies this.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance past horizontal whitespace. Runs between SQL tokens are
    /// short, so a byte loop beats a wider scan here.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(|b| b == b' ' || b == b'\t');
    }

    /// Jump to the next occurrence of `byte` with a SIMD-accelerated
    /// search, used for comment and quoted-literal bodies. Returns
    /// `true` with the cursor on the byte, or `false` with the cursor
    /// on the EOF sentinel.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset is bounded by source_len which fits in u32"
    )]
    pub fn skip_to_byte(&mut self, byte: u8) -> bool {
        let rest = &self.buf[self.pos as usize..self.source_len as usize];
        match memchr::memchr(byte, rest) {
            Some(offset) => {
                self.pos += offset as u32;
                true
            }
            None => {
                self.pos = self.source_len;
                false
            }
        }
    }
}
