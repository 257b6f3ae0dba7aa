/// The kind of a [`DocumentPart`](crate::DocumentPart).
///
/// Supplied values get one variant per value kind so that a
/// [`DocumentPartsCollection`](crate::DocumentPartsCollection) can index them
/// separately.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub enum DocumentPartType {
    Document,
    Operation,
    Variable,
    Directive,
    Field,
    FragmentSpread,
    InlineFragment,
    NamedFragment,
    Argument,
    InputObjectField,
    ScalarValue,
    EnumValue,
    NullValue,
    ListValue,
    ComplexValue,
    VariableUsage,
}

impl DocumentPartType {
    pub fn is_supplied_value(&self) -> bool {
        matches!(
            self,
            Self::ScalarValue
                | Self::EnumValue
                | Self::NullValue
                | Self::ListValue
                | Self::ComplexValue
                | Self::VariableUsage
        )
    }

    /// Field, fragment spread or inline fragment.
    pub fn is_selection(&self) -> bool {
        matches!(self, Self::Field | Self::FragmentSpread | Self::InlineFragment)
    }

    /// Parts that declare (or could declare) variables for the values nested
    /// beneath them.
    pub fn is_variable_scope(&self) -> bool {
        matches!(self, Self::Operation | Self::NamedFragment)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Document => "Document",
            Self::Operation => "Operation",
            Self::Variable => "Variable",
            Self::Directive => "Directive",
            Self::Field => "Field",
            Self::FragmentSpread => "FragmentSpread",
            Self::InlineFragment => "InlineFragment",
            Self::NamedFragment => "NamedFragment",
            Self::Argument => "Argument",
            Self::InputObjectField => "InputObjectField",
            Self::ScalarValue => "ScalarValue",
            Self::EnumValue => "EnumValue",
            Self::NullValue => "NullValue",
            Self::ListValue => "ListValue",
            Self::ComplexValue => "ComplexValue",
            Self::VariableUsage => "VariableUsage",
        }
    }
}

impl std::fmt::Display for DocumentPartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
