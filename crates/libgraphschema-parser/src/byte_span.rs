/// Byte-offset span of a lexed token.
///
/// Represents a half-open interval `[start, end)` of byte offsets into a
/// [`Source`](crate::Source) body. Both offsets are 0-based.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ByteSpan {
    /// Byte offset of the first byte of the token (inclusive).
    pub start: usize,
    /// Byte offset one past the last byte of the token (exclusive).
    pub end: usize,
}

impl ByteSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if this span has zero length.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
