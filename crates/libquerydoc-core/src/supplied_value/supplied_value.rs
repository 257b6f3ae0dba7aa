use indexmap::IndexMap;
use libquerydoc_parser::syntax_tree::ScalarValueKind;

use crate::DocumentPartId;
use crate::DocumentPartType;

/// The payload of a supplied-value [`DocumentPart`](crate::DocumentPart).
///
/// List items and complex-value fields are child parts of the value; this
/// payload only carries what the children cannot.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum SuppliedValue {
    /// A number, string or boolean literal. `text` is the raw lexeme, so
    /// strings keep their quotes and escapes.
    Scalar {
        kind: ScalarValueKind,
        text: String,
    },

    Enum { value: String },

    Null,

    /// Items are the part's children, in source order.
    List,

    /// Maps each field name to its `InputObjectField` child, in source
    /// order. When a name repeats, the first occurrence is kept here; every
    /// occurrence remains a child part.
    Complex {
        fields: IndexMap<String, DocumentPartId>,
    },

    /// A `$name` reference, resolved against the enclosing operation's
    /// variables on demand.
    VariableUsage { variable_name: String },
}

impl SuppliedValue {
    pub fn part_type(&self) -> DocumentPartType {
        match self {
            Self::Scalar { .. } => DocumentPartType::ScalarValue,
            Self::Enum { .. } => DocumentPartType::EnumValue,
            Self::Null => DocumentPartType::NullValue,
            Self::List => DocumentPartType::ListValue,
            Self::Complex { .. } => DocumentPartType::ComplexValue,
            Self::VariableUsage { .. } => DocumentPartType::VariableUsage,
        }
    }

    /// The literal text of a scalar or enum value.
    pub fn value_text(&self) -> Option<&str> {
        match self {
            Self::Scalar { text, .. } => Some(text.as_str()),
            Self::Enum { value } => Some(value.as_str()),
            _ => None,
        }
    }
}
