/// Compact byte-offset span into a [`SourceText`](crate::SourceText).
///
/// Represents the half-open interval `[start, end)`. Syntax nodes store their
/// text as `ByteSpan`s rather than owned strings so that lexeme text can be
/// sliced back out of the source without copying.
///
/// `u32` offsets cap a single document at 4 GiB, which is far beyond anything
/// a query document (or a sane caller) will hand the parser.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct ByteSpan {
    /// Offset of the first byte (inclusive).
    pub start: u32,
    /// Offset one past the last byte (exclusive).
    pub end: u32,
}

impl ByteSpan {
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "ByteSpan start ({start}) > end ({end})");
        Self { start, end }
    }

    /// Builds a span from `usize` offsets as produced by the lexer.
    pub fn from_offsets(start: usize, end: usize) -> Self {
        Self::new(start as u32, end as u32)
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns `true` if this span has zero length.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the smallest span covering both `self` and `other`.
    pub fn cover(&self, other: ByteSpan) -> ByteSpan {
        ByteSpan::new(self.start.min(other.start), self.end.max(other.end))
    }

    pub(crate) fn range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}
