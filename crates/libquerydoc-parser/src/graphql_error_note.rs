use crate::GraphQLSourceSpan;
use crate::SmallVec;

/// The kind of an error note (determines how the note is rendered).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphQLErrorNoteKind {
    /// Context about the error, e.g. "`{` opened here".
    ///
    /// Rendered as `= note: ...`.
    General,

    /// An actionable suggestion, e.g. "Add closing `\"`".
    ///
    /// Rendered as `= help: ...`.
    Help,

    /// A link into the GraphQL specification.
    ///
    /// Rendered as `= spec: ...`.
    Spec,
}

impl GraphQLErrorNoteKind {
    pub(crate) fn prefix(&self) -> &'static str {
        match self {
            GraphQLErrorNoteKind::General => "note",
            GraphQLErrorNoteKind::Help => "help",
            GraphQLErrorNoteKind::Spec => "spec",
        }
    }
}

/// A note attached to a [`GraphQLParseError`](crate::GraphQLParseError).
#[derive(Debug, Clone, PartialEq)]
pub struct GraphQLErrorNote {
    pub kind: GraphQLErrorNoteKind,
    pub message: String,

    /// Optional related location (e.g. where an unclosed delimiter was
    /// opened). Rendered with its own source snippet when available.
    pub span: Option<GraphQLSourceSpan>,
}

impl GraphQLErrorNote {
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::General,
            message: message.into(),
            span: None,
        }
    }

    pub fn general_with_span(message: impl Into<String>, span: GraphQLSourceSpan) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::General,
            message: message.into(),
            span: Some(span),
        }
    }

    pub fn help(message: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::Help,
            message: message.into(),
            span: None,
        }
    }

    pub fn spec(url: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::Spec,
            message: url.into(),
            span: None,
        }
    }
}

/// Most errors carry 0-2 notes, so keep them inline.
pub type GraphQLErrorNotes = SmallVec<[GraphQLErrorNote; 2]>;
