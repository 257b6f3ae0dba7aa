use crate::DocumentPartId;
use crate::DocumentPartType;

/// Why a variable usage could not be tied to exactly one declaration.
///
/// These describe documents that parse fine but would fail validation, so
/// they are returned to the caller rather than treated as bugs.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum VariableResolutionError {
    #[error("part {part} is a {part_type}, not a variable usage")]
    NotAVariableUsage {
        part: DocumentPartId,
        part_type: DocumentPartType,
    },

    #[error("`${variable_name}` is not inside an operation or named fragment")]
    NoEnclosingScope { variable_name: String },

    #[error("`${variable_name}` is not declared by the enclosing {scope_type} ({scope})")]
    UndeclaredVariable {
        variable_name: String,
        scope: DocumentPartId,
        scope_type: DocumentPartType,
    },

    #[error("`${variable_name}` is declared {declarations} times by the enclosing operation")]
    AmbiguousVariable {
        variable_name: String,
        declarations: usize,
    },
}
