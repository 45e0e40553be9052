//! Sentinel-terminated source buffer for bounds-check-free scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source
//! content, letting the scanner detect EOF without explicit bounds
//! checks. The total size is rounded up to the next 64-byte boundary,
//! which also provides safe padding for `peek()` near the end of the
//! source. Byte offsets into the buffer are identical to byte offsets
//! into the original `&str`.

use crate::Cursor;

/// Padding granularity in bytes (one cache line).
const CACHE_LINE: usize = 64;

/// Sentinel-terminated copy of a script's text.
///
/// # Layout
///
/// ```text
/// offset 0 ........ source_len ........ next 64-byte boundary
/// [source bytes]    [0x00 sentinel]     [0x00 padding]
/// ```
///
/// SQL scripts are accepted as-is: interior null bytes and stray
/// control characters are tolerated and surface as `Other` tokens
/// during scanning, never as construction errors.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned bytes: source, then the sentinel and zero padding.
    buf: Vec<u8>,
    /// Length of the source content alone.
    source_len: u32,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from script text.
    ///
    /// Scripts larger than `u32::MAX` bytes (~4 GiB) are accepted but
    /// `source_len` saturates; callers segmenting editor buffers never
    /// come close to that bound.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();

        // Room for the source plus at least the sentinel, rounded up to
        // a 64-byte boundary; the resize fills sentinel and padding
        // with 0x00 in one step.
        let padded_len = (source_bytes.len() + 1).div_ceil(CACHE_LINE) * CACHE_LINE;
        let mut buf = Vec::with_capacity(padded_len);
        buf.extend_from_slice(source_bytes);
        buf.resize(padded_len, 0);

        Self {
            buf,
            source_len: u32::try_from(source_bytes.len()).unwrap_or(u32::MAX),
        }
    }

    /// The source bytes, without sentinel or padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// A fresh [`Cursor`] at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// `true` when the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}
