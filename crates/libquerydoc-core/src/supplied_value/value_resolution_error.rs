use libquerydoc_parser::GraphQLStringParsingError;

use crate::VariableResolutionError;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ValueResolutionError {
    #[error("integer literal `{text}` does not fit in a 64-bit signed integer")]
    IntOutOfRange { text: String },

    #[error("float literal `{text}` is not a finite 64-bit float")]
    InvalidFloat { text: String },

    #[error("string literal {text} could not be cooked: {source}")]
    InvalidString {
        text: String,
        source: GraphQLStringParsingError,
    },

    #[error("variable was not supplied and could not be resolved: {0}")]
    UnresolvedVariable(#[from] VariableResolutionError),
}
