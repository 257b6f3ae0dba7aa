use indexmap::IndexMap;
use inherent::inherent;
use libquerydoc_parser::syntax_tree::ScalarValueKind;
use libquerydoc_parser::token::parse_string_value;

use crate::DocumentPartId;
use crate::DocumentPartType;
use crate::QueryDocument;
use crate::supplied_value::ResolvableValue;
use crate::supplied_value::ResolvedValue;
use crate::supplied_value::SuppliedValue;
use crate::supplied_value::ValueResolutionError;
use crate::supplied_value::VariableValues;

/// A supplied-value part together with the document that owns it.
///
/// Obtain one from [`QueryDocument::value`]. Being `Copy`, refs are passed
/// around by value.
#[derive(Clone, Copy, Debug)]
pub struct SuppliedValueRef<'doc> {
    pub(crate) document: &'doc QueryDocument,
    pub(crate) id: DocumentPartId,
    pub(crate) value: &'doc SuppliedValue,
}

impl<'doc> SuppliedValueRef<'doc> {
    pub fn id(&self) -> DocumentPartId {
        self.id
    }

    pub fn document(&self) -> &'doc QueryDocument {
        self.document
    }

    pub fn value(&self) -> &'doc SuppliedValue {
        self.value
    }

    pub fn part_type(&self) -> DocumentPartType {
        self.value.part_type()
    }

    pub fn is_null(&self) -> bool {
        matches!(self.value, SuppliedValue::Null)
    }

    /// The literal text of a scalar or enum value.
    pub fn value_text(&self) -> Option<&'doc str> {
        self.value.value_text()
    }

    pub fn scalar_kind(&self) -> Option<ScalarValueKind> {
        match self.value {
            SuppliedValue::Scalar { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn variable_name(&self) -> Option<&'doc str> {
        match self.value {
            SuppliedValue::VariableUsage { variable_name } => Some(variable_name.as_str()),
            _ => None,
        }
    }

    /// The items of a list value, in order. Empty for every other variant.
    pub fn list_items(&self) -> impl Iterator<Item = SuppliedValueRef<'doc>> + use<'doc> {
        let document = self.document;
        let items: &'doc [DocumentPartId] = match self.value {
            SuppliedValue::List => document.part(self.id).children().as_slice(),
            _ => &[],
        };
        items.iter().filter_map(move |item| document.value(*item))
    }

    /// Field name to `InputObjectField` part, for complex values.
    pub fn fields(&self) -> Option<&'doc IndexMap<String, DocumentPartId>> {
        match self.value {
            SuppliedValue::Complex { fields } => Some(fields),
            _ => None,
        }
    }

    /// The value of the complex-value field called `name`.
    pub fn field(&self, name: &str) -> Option<SuppliedValueRef<'doc>> {
        let field = *self.fields()?.get(name)?;
        self.document.value(field)
    }

    /// `(name, value)` pairs of a complex value, in source order.
    pub fn field_values(
        &self,
    ) -> impl Iterator<Item = (&'doc str, SuppliedValueRef<'doc>)> + use<'doc> {
        let document = self.document;
        self.fields()
            .into_iter()
            .flat_map(|fields| fields.iter())
            .filter_map(move |(name, field)| Some((name.as_str(), document.value(*field)?)))
    }

    fn resolve_number(text: &str) -> Result<ResolvedValue, ValueResolutionError> {
        if text.contains(['.', 'e', 'E']) {
            match text.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(ResolvedValue::Float(value)),
                _ => Err(ValueResolutionError::InvalidFloat {
                    text: text.to_string(),
                }),
            }
        } else {
            text.parse::<i64>()
                .map(ResolvedValue::Int)
                .map_err(|_| ValueResolutionError::IntOutOfRange {
                    text: text.to_string(),
                })
        }
    }

    fn resolve_variable(
        &self,
        variable_name: &str,
        variables: &VariableValues,
    ) -> Result<ResolvedValue, ValueResolutionError> {
        if let Some(supplied) = variables.get(variable_name) {
            return Ok(supplied.clone());
        }
        let declaration = self.document.resolve_variable_usage(self.id)?;
        match self.document.value(declaration) {
            Some(default_value) => default_value.resolve(variables),
            None => Ok(ResolvedValue::Null),
        }
    }
}

#[inherent]
impl<'doc> ResolvableValue for SuppliedValueRef<'doc> {
    /// Scalars and enums compare literal text, null equals null, variable
    /// usages compare the variable name, lists compare item by item in
    /// order, and complex values check each of their own fields against
    /// `other`. Values of different variants are never equal.
    pub fn is_equal_to(&self, other: &Self) -> bool {
        match (self.value, other.value) {
            (
                SuppliedValue::Scalar { kind, text },
                SuppliedValue::Scalar {
                    kind: other_kind,
                    text: other_text,
                },
            ) => kind == other_kind && text == other_text,

            (SuppliedValue::Enum { value }, SuppliedValue::Enum { value: other_value }) => {
                value == other_value
            },

            (SuppliedValue::Null, SuppliedValue::Null) => true,

            (SuppliedValue::List, SuppliedValue::List) => {
                let mut items = self.list_items();
                let mut other_items = other.list_items();
                loop {
                    match (items.next(), other_items.next()) {
                        (None, None) => return true,
                        (Some(item), Some(other_item)) if item.is_equal_to(&other_item) => {},
                        _ => return false,
                    }
                }
            },

            (SuppliedValue::Complex { .. }, SuppliedValue::Complex { .. }) => {
                self.field_values().all(|(name, value)| {
                    other
                        .field(name)
                        .is_some_and(|other_value| value.is_equal_to(&other_value))
                })
            },

            (
                SuppliedValue::VariableUsage { variable_name },
                SuppliedValue::VariableUsage {
                    variable_name: other_name,
                },
            ) => variable_name == other_name,

            _ => false,
        }
    }

    pub fn is_structurally_equal(&self, other: &Self) -> bool;

    /// Variable usages take the caller's value when one is supplied, then
    /// the declaring variable's default, then `null`. A usage with no
    /// supplied value and no declaration in scope is an error.
    pub fn resolve(&self, variables: &VariableValues) -> Result<ResolvedValue, ValueResolutionError> {
        match self.value {
            SuppliedValue::Scalar {
                kind: ScalarValueKind::Boolean,
                text,
            } => Ok(ResolvedValue::Boolean(text == "true")),

            SuppliedValue::Scalar {
                kind: ScalarValueKind::Number,
                text,
            } => Self::resolve_number(text),

            SuppliedValue::Scalar {
                kind: ScalarValueKind::String,
                text,
            } => parse_string_value(text)
                .map(ResolvedValue::String)
                .map_err(|source| ValueResolutionError::InvalidString {
                    text: text.clone(),
                    source,
                }),

            SuppliedValue::Enum { value } => Ok(ResolvedValue::Enum(value.clone())),

            SuppliedValue::Null => Ok(ResolvedValue::Null),

            SuppliedValue::List => self
                .list_items()
                .map(|item| item.resolve(variables))
                .collect::<Result<Vec<_>, ValueResolutionError>>()
                .map(ResolvedValue::List),

            SuppliedValue::Complex { .. } => self
                .field_values()
                .map(|(name, value)| Ok((name.to_string(), value.resolve(variables)?)))
                .collect::<Result<IndexMap<_, _>, ValueResolutionError>>()
                .map(ResolvedValue::Object),

            SuppliedValue::VariableUsage { variable_name } => {
                self.resolve_variable(variable_name, variables)
            },
        }
    }
}
