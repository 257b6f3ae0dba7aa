use crate::GraphQLErrorNote;
use crate::GraphQLErrorNotes;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;
use crate::source_text::split_lines;
use std::path::Path;
use std::path::PathBuf;

/// A syntax error with location information and contextual notes.
///
/// Syntax errors describe malformed user input. They always carry the exact
/// span where the problem was detected and a description of what was
/// expected. The first syntax error aborts the parse; no partial tree is ever
/// returned alongside one.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct GraphQLParseError {
    /// Primary message, e.g. "expected `:` after variable name".
    message: String,

    /// Where the error was detected.
    /// - unexpected token: the token's span
    /// - unexpected end of input: a zero-width span after the last token
    span: GraphQLSourceSpan,

    kind: GraphQLParseErrorKind,
    notes: GraphQLErrorNotes,

    /// File the source text came from, when known.
    file_path: Option<PathBuf>,
}

impl GraphQLParseError {
    pub fn new(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        kind: GraphQLParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes: GraphQLErrorNotes::new(),
            file_path: None,
        }
    }

    pub fn with_notes(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        kind: GraphQLParseErrorKind,
        notes: GraphQLErrorNotes,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes,
            file_path: None,
        }
    }

    /// Converts a lexer `Error` token into a syntax error, preserving the
    /// lexer's message and notes.
    pub fn from_lexer_error(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        lexer_notes: GraphQLErrorNotes,
    ) -> Self {
        Self::with_notes(message, span, GraphQLParseErrorKind::LexerError, lexer_notes)
    }

    /// Attaches the originating file path (used in rendered output).
    pub fn with_file_path(mut self, file_path: Option<&Path>) -> Self {
        self.file_path = file_path.map(Path::to_path_buf);
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }

    pub fn kind(&self) -> &GraphQLParseErrorKind {
        &self.kind
    }

    pub fn notes(&self) -> &GraphQLErrorNotes {
        &self.notes
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::general(message));
    }

    pub fn add_note_with_span(&mut self, message: impl Into<String>, span: GraphQLSourceSpan) {
        self.notes.push(GraphQLErrorNote::general_with_span(message, span));
    }

    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::help(message));
    }

    pub fn add_spec(&mut self, url: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::spec(url));
    }

    fn display_file_name(&self) -> String {
        self.file_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<input>".to_string())
    }

    /// Formats this error as a single-line summary:
    ///
    /// ```text
    /// query.graphql:5:12: error: expected `:` after variable name
    /// ```
    pub fn format_oneline(&self) -> String {
        format!(
            "{}:{}: error: {}",
            self.display_file_name(),
            self.span.start_inclusive,
            self.message,
        )
    }

    /// Formats this error as a multi-line diagnostic:
    ///
    /// ```text
    /// error: expected `:` after variable name
    ///   --> query.graphql:1:17
    ///    |
    ///  1 | query Q($episode Episode) { hero { name } }
    ///    |                  ^^^^^^^
    ///    = help: variables are declared as `$name: Type`
    /// ```
    ///
    /// Source snippets are omitted when `source` is `None`.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let mut output = format!("error: {}\n", self.message);
        output.push_str(&format!(
            "  --> {}:{}\n",
            self.display_file_name(),
            self.span.start_inclusive,
        ));

        if let Some(src) = source
            && let Some(snippet) = format_snippet(src, &self.span, '^')
        {
            output.push_str(&snippet);
        }

        for note in &self.notes {
            output.push_str(&format!("   = {}: {}\n", note.kind.prefix(), note.message));
            if let (Some(note_span), Some(src)) = (&note.span, source)
                && let Some(snippet) = format_snippet(src, note_span, '-')
            {
                output.push_str(&snippet);
            }
        }

        output
    }
}

/// Renders the source line `span` starts on, underlined with `marker`.
fn format_snippet(source: &str, span: &GraphQLSourceSpan, marker: char) -> Option<String> {
    let line_num = span.start_inclusive.line();
    let line_content = split_lines(source).nth(line_num)?;
    let display_line_num = line_num + 1;
    let width = display_line_num.to_string().len().max(2);

    let col_start = span.start_inclusive.col_utf8();
    let underline_len = if span.end_exclusive.line() == line_num
        && span.end_exclusive.col_utf8() > col_start
    {
        span.end_exclusive.col_utf8() - col_start
    } else {
        1
    };

    Some(format!(
        "{:>width$} |\n{display_line_num:>width$} | {line_content}\n{:>width$} | {:>col_start$}{}\n",
        "",
        "",
        "",
        marker.to_string().repeat(underline_len),
    ))
}
