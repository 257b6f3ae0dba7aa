use libquerydoc_parser::SourcePosition;

use crate::DocumentPartId;
use crate::DocumentPartType;
use crate::DocumentPartsCollection;
use crate::OperationType;
use crate::TypeExpression;
use crate::supplied_value::SuppliedValue;

/// Variant-specific payload of a [`DocumentPart`].
///
/// Nested structure (selections, arguments, directives, default values, list
/// items) lives in the part's children rather than in this payload.
#[derive(Clone, Debug, PartialEq)]
pub enum DocumentPartData {
    /// The root of every [`QueryDocument`](crate::QueryDocument).
    Document,

    /// Children: `Variable*`, `Directive*`, then the selections.
    Operation {
        operation_type: OperationType,
        name: Option<String>,
    },

    /// Children: the default value (if any), then `Directive*`.
    Variable {
        name: String,
        type_expression: TypeExpression,
    },

    /// Children: `Argument*`.
    Directive { name: String },

    /// Children: `Argument*`, `Directive*`, then any nested selections.
    Field { name: String, alias: Option<String> },

    /// Children: `Directive*`.
    FragmentSpread { fragment_name: String },

    /// Children: `Directive*`, then the selections.
    InlineFragment { type_condition: Option<String> },

    /// Children: `Directive*`, then the selections.
    NamedFragment {
        name: String,
        type_condition: String,
    },

    /// An argument to a field or directive. Exactly one supplied-value child.
    Argument { name: String },

    /// One field of a complex value. Exactly one supplied-value child.
    InputObjectField { name: String },

    SuppliedValue(SuppliedValue),
}

impl DocumentPartData {
    pub fn part_type(&self) -> DocumentPartType {
        match self {
            Self::Document => DocumentPartType::Document,
            Self::Operation { .. } => DocumentPartType::Operation,
            Self::Variable { .. } => DocumentPartType::Variable,
            Self::Directive { .. } => DocumentPartType::Directive,
            Self::Field { .. } => DocumentPartType::Field,
            Self::FragmentSpread { .. } => DocumentPartType::FragmentSpread,
            Self::InlineFragment { .. } => DocumentPartType::InlineFragment,
            Self::NamedFragment { .. } => DocumentPartType::NamedFragment,
            Self::Argument { .. } => DocumentPartType::Argument,
            Self::InputObjectField { .. } => DocumentPartType::InputObjectField,
            Self::SuppliedValue(value) => value.part_type(),
        }
    }
}

/// One node of an assembled [`QueryDocument`](crate::QueryDocument).
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentPart {
    pub(crate) parent: Option<DocumentPartId>,
    pub(crate) children: DocumentPartsCollection,
    pub(crate) location: SourcePosition,
    pub(crate) data: DocumentPartData,
}

impl DocumentPart {
    pub fn part_type(&self) -> DocumentPartType {
        self.data.part_type()
    }

    /// `None` only for the document root.
    pub fn parent(&self) -> Option<DocumentPartId> {
        self.parent
    }

    pub fn children(&self) -> &DocumentPartsCollection {
        &self.children
    }

    /// Where the part's first token starts.
    pub fn location(&self) -> &SourcePosition {
        &self.location
    }

    pub fn data(&self) -> &DocumentPartData {
        &self.data
    }

    /// The part's own name, for the variants that have one. A fragment
    /// spread answers with the name of the fragment it spreads.
    pub fn name(&self) -> Option<&str> {
        match &self.data {
            DocumentPartData::Operation { name, .. } => name.as_deref(),
            DocumentPartData::Variable { name, .. }
            | DocumentPartData::Directive { name }
            | DocumentPartData::Field { name, .. }
            | DocumentPartData::NamedFragment { name, .. }
            | DocumentPartData::Argument { name }
            | DocumentPartData::InputObjectField { name } => Some(name.as_str()),
            DocumentPartData::FragmentSpread { fragment_name } => Some(fragment_name.as_str()),
            DocumentPartData::Document
            | DocumentPartData::InlineFragment { .. }
            | DocumentPartData::SuppliedValue(_) => None,
        }
    }

    pub fn alias(&self) -> Option<&str> {
        match &self.data {
            DocumentPartData::Field { alias, .. } => alias.as_deref(),
            _ => None,
        }
    }

    /// The alias of a field if it has one, otherwise its name.
    pub fn response_name(&self) -> Option<&str> {
        self.alias().or_else(|| match &self.data {
            DocumentPartData::Field { name, .. } => Some(name.as_str()),
            _ => None,
        })
    }

    pub fn operation_type(&self) -> Option<OperationType> {
        match &self.data {
            DocumentPartData::Operation { operation_type, .. } => Some(*operation_type),
            _ => None,
        }
    }

    pub fn type_condition(&self) -> Option<&str> {
        match &self.data {
            DocumentPartData::InlineFragment { type_condition } => type_condition.as_deref(),
            DocumentPartData::NamedFragment { type_condition, .. } => {
                Some(type_condition.as_str())
            },
            _ => None,
        }
    }

    pub fn type_expression(&self) -> Option<&TypeExpression> {
        match &self.data {
            DocumentPartData::Variable {
                type_expression, ..
            } => Some(type_expression),
            _ => None,
        }
    }

    pub fn supplied_value(&self) -> Option<&SuppliedValue> {
        match &self.data {
            DocumentPartData::SuppliedValue(value) => Some(value),
            _ => None,
        }
    }
}
