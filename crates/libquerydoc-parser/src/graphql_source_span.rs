use crate::ByteSpan;
use crate::SourcePosition;

/// A span of source text from start to end position.
///
/// The span is a half-open interval: `[start_inclusive, end_exclusive)`.
/// - `start_inclusive`: position of the first character of the span
/// - `end_exclusive`: position immediately after the last character
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GraphQLSourceSpan {
    pub start_inclusive: SourcePosition,
    pub end_exclusive: SourcePosition,
}

impl GraphQLSourceSpan {
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
        }
    }

    /// A zero-width span at `pos`.
    pub fn empty_at(pos: SourcePosition) -> Self {
        Self {
            start_inclusive: pos.clone(),
            end_exclusive: pos,
        }
    }

    /// Extracts a compact [`ByteSpan`] from this span's byte offsets,
    /// discarding line/column information.
    pub fn byte_span(&self) -> ByteSpan {
        ByteSpan::from_offsets(
            self.start_inclusive.byte_offset(),
            self.end_exclusive.byte_offset(),
        )
    }
}
