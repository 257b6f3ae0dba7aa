use crate::ByteSpan;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;
use std::path::Path;
use std::path::PathBuf;

/// An immutable view over the raw text of a query document plus its origin
/// metadata.
///
/// `SourceText` never copies the underlying text. Tokens and syntax nodes
/// refer back into it by [`ByteSpan`], and [`SourceText::slice`] hands the
/// lexeme text back out as a borrowed `&'src str`.
///
/// The line-start index is computed once on construction so that any byte
/// offset can later be mapped to a [`SourcePosition`] without rescanning the
/// document.
#[derive(Clone, Debug)]
pub struct SourceText<'src> {
    text: &'src str,
    file_path: Option<PathBuf>,
    /// Byte offset of the first byte of every line. Always starts with `0`.
    line_starts: Vec<usize>,
}

impl<'src> SourceText<'src> {
    pub fn new(text: &'src str) -> Self {
        Self {
            text,
            file_path: None,
            line_starts: compute_line_starts(text),
        }
    }

    /// Creates a `SourceText` whose errors and positions will be reported
    /// against `file_path`.
    pub fn with_file_path(text: &'src str, file_path: impl Into<PathBuf>) -> Self {
        Self {
            text,
            file_path: Some(file_path.into()),
            line_starts: compute_line_starts(text),
        }
    }

    /// The full source text.
    pub fn as_str(&self) -> &'src str {
        self.text
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Length of the source text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of lines in the source text (an empty text has one line).
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns the text covered by `span`.
    ///
    /// Spans produced by the lexer are always valid for the `SourceText` they
    /// were lexed from; a span outside the text (or splitting a UTF-8
    /// sequence) yields an empty string.
    pub fn slice(&self, span: ByteSpan) -> &'src str {
        self.text.get(span.range()).unwrap_or("")
    }

    /// Maps a byte offset to its line/column position.
    ///
    /// Offsets past the end of the text are clamped to the end.
    pub fn position_at(&self, byte_offset: usize) -> SourcePosition {
        let mut offset = byte_offset.min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }

        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let line_start = self.line_starts[line];
        let line_prefix = &self.text[line_start..offset];

        let (col_utf8, col_utf16) = line_prefix
            .chars()
            .fold((0, 0), |(utf8, utf16), ch| (utf8 + 1, utf16 + ch.len_utf16()));

        SourcePosition::new(line, col_utf8, col_utf16, offset)
    }

    /// Maps a [`ByteSpan`] to a full line/column [`GraphQLSourceSpan`].
    pub fn span_at(&self, span: ByteSpan) -> GraphQLSourceSpan {
        GraphQLSourceSpan::new(
            self.position_at(span.start as usize),
            self.position_at(span.end as usize),
        )
    }

    /// Returns the text of the 0-based line `line`, without its terminator.
    pub fn line_text(&self, line: usize) -> Option<&'src str> {
        let start = *self.line_starts.get(line)?;
        let end = self
            .line_starts
            .get(line + 1)
            .copied()
            .unwrap_or(self.text.len());
        Some(self.text[start..end].trim_end_matches(['\n', '\r']))
    }
}

/// Splits `text` into lines on `\r\n`, `\n` or a lone `\r`, dropping the
/// terminators.
pub(crate) fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let starts = compute_line_starts(text);
    let ends = starts
        .iter()
        .skip(1)
        .copied()
        .chain(std::iter::once(text.len()))
        .collect::<Vec<_>>();
    starts
        .into_iter()
        .zip(ends)
        .map(move |(start, end)| text[start..end].trim_end_matches(['\n', '\r']))
}

/// Finds the start offset of every line. `\r\n` counts as a single line
/// terminator.
fn compute_line_starts(text: &str) -> Vec<usize> {
    let bytes = text.as_bytes();
    let mut line_starts = vec![0];
    for idx in memchr::memchr2_iter(b'\n', b'\r', bytes) {
        if bytes[idx] == b'\r' && bytes.get(idx + 1) == Some(&b'\n') {
            continue;
        }
        line_starts.push(idx + 1);
    }
    line_starts
}
