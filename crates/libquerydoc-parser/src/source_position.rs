/// A location within a [`SourceText`](crate::SourceText).
///
/// **All values are 0-based.** Human-facing output (error messages, the
/// `querydoc` CLI) adds 1 to `line` and `col_utf8` when displaying.
///
/// - `line`: line number, where `\n`, `\r\n` and a lone `\r` each end a line
/// - `col_utf8`: number of characters between the start of the line and this
///   position (a 4-byte emoji counts as 1)
/// - `col_utf16`: number of UTF-16 code units between the start of the line
///   and this position (a 4-byte emoji counts as 2); this is the column LSP
///   clients expect
/// - `byte_offset`: byte offset from the start of the source text
///
/// For ASCII text both column values are equal.
#[derive(
    Clone,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct SourcePosition {
    line: usize,
    col_utf8: usize,
    col_utf16: usize,
    byte_offset: usize,
}

impl SourcePosition {
    pub fn new(
        line: usize,
        col_utf8: usize,
        col_utf16: usize,
        byte_offset: usize,
    ) -> Self {
        Self {
            line,
            col_utf8,
            col_utf16,
            byte_offset,
        }
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based character column within the current line.
    pub fn col_utf8(&self) -> usize {
        self.col_utf8
    }

    /// Returns the 0-based UTF-16 code unit column within the current line.
    pub fn col_utf16(&self) -> usize {
        self.col_utf16
    }

    /// Returns the 0-based byte offset from the start of the source text.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}

impl std::fmt::Display for SourcePosition {
    /// Formats as the 1-based `line:column` pair editors display.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.col_utf8 + 1)
    }
}
