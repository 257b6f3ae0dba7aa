use libquerydoc_parser::GraphQLParseError;

use crate::DocumentBuildError;

/// Everything that can go wrong turning query text into a
/// [`QueryDocument`](crate::QueryDocument).
#[derive(Clone, Debug, thiserror::Error)]
pub enum QueryDocumentError {
    /// The text is not a syntactically valid query document.
    #[error(transparent)]
    Syntax(#[from] GraphQLParseError),

    /// Assembly hit an internal invariant violation. This is a bug, not a
    /// problem with the input.
    #[error("internal error while assembling the document: {0}")]
    Construction(#[from] DocumentBuildError),
}

impl QueryDocumentError {
    /// `true` when the input text is at fault and the error should be shown
    /// to whoever wrote it.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::Syntax(_))
    }

    pub fn as_syntax_error(&self) -> Option<&GraphQLParseError> {
        match self {
            Self::Syntax(err) => Some(err),
            Self::Construction(_) => None,
        }
    }
}
