use libquerydoc_parser::syntax_tree::SyntaxNodeType;

use crate::DocumentPartId;
use crate::DocumentPartType;
use crate::TypeExpressionError;

/// A syntax tree did not have the shape the assembly walk relies on.
///
/// Trees produced by [`GraphQLParser`](libquerydoc_parser::GraphQLParser)
/// never trigger these; seeing one means a bug in tree construction or in
/// the walk itself, not a problem with the query text.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DocumentBuildError {
    #[error(
        "{part_type} part declares parent {declared_parent} but was added to \
        the children of {collection_owner}"
    )]
    ParentMismatch {
        part_type: DocumentPartType,
        declared_parent: DocumentPartId,
        collection_owner: DocumentPartId,
    },

    #[error("no document part {0}")]
    UnknownPart(DocumentPartId),

    #[error("unexpected {node_type} syntax node in {context}")]
    UnexpectedSyntaxNode {
        node_type: SyntaxNodeType,
        context: &'static str,
    },

    #[error("{node_type} syntax node is missing its {expected} child")]
    MissingSyntaxChild {
        node_type: SyntaxNodeType,
        expected: &'static str,
    },

    #[error("{node_type} syntax node is missing its {which} text")]
    MissingSyntaxText {
        node_type: SyntaxNodeType,
        which: &'static str,
    },

    #[error("`{keyword}` is not an operation type")]
    UnrecognizedOperationType { keyword: String },

    #[error("invalid variable type `{text}`: {reason}")]
    InvalidTypeExpression {
        text: String,
        reason: TypeExpressionError,
    },
}
