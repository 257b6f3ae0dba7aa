/// The grammar production a [`SyntaxNode`](crate::syntax_tree::SyntaxNode)
/// was built from.
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
pub enum SyntaxNodeType {
    Document,
    Operation,
    VariableCollection,
    Variable,
    Directive,
    FieldCollection,
    Field,
    FragmentSpread,
    InlineFragment,
    NamedFragment,
    InputItemCollection,
    InputItem,
    ScalarValue,
    ListValue,
    ComplexValue,
    EnumValue,
    NullValue,
    VariableValue,

    /// The root of every tree. Carries no text.
    Empty,
}

impl SyntaxNodeType {
    /// Returns `true` for the node types that represent a supplied value.
    pub fn is_value(&self) -> bool {
        matches!(
            self,
            SyntaxNodeType::ScalarValue
                | SyntaxNodeType::ListValue
                | SyntaxNodeType::ComplexValue
                | SyntaxNodeType::EnumValue
                | SyntaxNodeType::NullValue
                | SyntaxNodeType::VariableValue
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SyntaxNodeType::Document => "Document",
            SyntaxNodeType::Operation => "Operation",
            SyntaxNodeType::VariableCollection => "VariableCollection",
            SyntaxNodeType::Variable => "Variable",
            SyntaxNodeType::Directive => "Directive",
            SyntaxNodeType::FieldCollection => "FieldCollection",
            SyntaxNodeType::Field => "Field",
            SyntaxNodeType::FragmentSpread => "FragmentSpread",
            SyntaxNodeType::InlineFragment => "InlineFragment",
            SyntaxNodeType::NamedFragment => "NamedFragment",
            SyntaxNodeType::InputItemCollection => "InputItemCollection",
            SyntaxNodeType::InputItem => "InputItem",
            SyntaxNodeType::ScalarValue => "ScalarValue",
            SyntaxNodeType::ListValue => "ListValue",
            SyntaxNodeType::ComplexValue => "ComplexValue",
            SyntaxNodeType::EnumValue => "EnumValue",
            SyntaxNodeType::NullValue => "NullValue",
            SyntaxNodeType::VariableValue => "VariableValue",
            SyntaxNodeType::Empty => "Empty",
        }
    }
}

impl std::fmt::Display for SyntaxNodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
