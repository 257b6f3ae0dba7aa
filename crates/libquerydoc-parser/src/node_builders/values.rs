use crate::GraphQLParseError;
use crate::GraphQLTokenStream;
use crate::node_builders::InputItemBuilder;
use crate::node_builders::SyntaxNodeBuilder;
use crate::node_builders::helpers;
use crate::node_builders::helpers::DelimiterContext;
use crate::syntax_tree::ScalarValueKind;
use crate::syntax_tree::SyntaxNodeId;
use crate::syntax_tree::SyntaxNodeType;
use crate::syntax_tree::SyntaxTree;
use crate::token::GraphQLTokenKind;

/// Chooses the value builder for the current token.
///
/// | current token          | builder                  |
/// |------------------------|--------------------------|
/// | `$`                    | [`VariableValueBuilder`] |
/// | `[`                    | [`ListValueBuilder`]     |
/// | `{`                    | [`ComplexValueBuilder`]  |
/// | number, string         | [`ScalarValueBuilder`]   |
/// | `true`, `false`        | [`ScalarValueBuilder`]   |
/// | `null`                 | [`NullValueBuilder`]     |
/// | any other name         | [`EnumValueBuilder`]     |
///
/// Any other token yields `None`: no value starts here. Callers decide
/// whether that is an error.
pub fn select_value_builder(
    stream: &GraphQLTokenStream<'_>,
) -> Option<&'static dyn SyntaxNodeBuilder> {
    match stream.current().kind {
        GraphQLTokenKind::Dollar => Some(&VariableValueBuilder),
        GraphQLTokenKind::SquareBracketOpen => Some(&ListValueBuilder),
        GraphQLTokenKind::CurlyBraceOpen => Some(&ComplexValueBuilder),
        GraphQLTokenKind::Number | GraphQLTokenKind::String => Some(&ScalarValueBuilder),
        GraphQLTokenKind::Name => match stream.current_text() {
            "true" | "false" => Some(&ScalarValueBuilder),
            "null" => Some(&NullValueBuilder),
            _ => Some(&EnumValueBuilder),
        },
        _ => None,
    }
}

/// Number, string and boolean literals.
///
/// The primary text is the raw lexeme (strings keep their quotes and
/// escapes); the primary value kind says how to read it.
pub struct ScalarValueBuilder;

impl SyntaxNodeBuilder for ScalarValueBuilder {
    fn build(
        &self,
        tree: &mut SyntaxTree,
        parent: SyntaxNodeId,
        stream: &mut GraphQLTokenStream<'_>,
    ) -> Result<(), GraphQLParseError> {
        let kind = match stream.current().kind {
            GraphQLTokenKind::Number => ScalarValueKind::Number,
            GraphQLTokenKind::String => ScalarValueKind::String,
            GraphQLTokenKind::Name if matches!(stream.current_text(), "true" | "false") => {
                ScalarValueKind::Boolean
            },
            _ => {
                return Err(helpers::unexpected(
                    stream,
                    &["number", "string", "true", "false"],
                    "for scalar value",
                ));
            },
        };
        let token = stream.advance()?;
        let value = tree.append_child(
            parent,
            SyntaxNodeType::ScalarValue,
            token.span.start_inclusive.clone(),
        );
        tree.set_scalar_text(value, token.byte_span(), kind);
        Ok(())
    }
}

/// `EnumValue : Name but not true, false or null`
pub struct EnumValueBuilder;

impl SyntaxNodeBuilder for EnumValueBuilder {
    fn build(
        &self,
        tree: &mut SyntaxTree,
        parent: SyntaxNodeId,
        stream: &mut GraphQLTokenStream<'_>,
    ) -> Result<(), GraphQLParseError> {
        if matches!(stream.current_text(), "true" | "false" | "null") {
            return Err(helpers::unexpected(stream, &["enum value"], "for enum value"));
        }
        let token = helpers::expect_name(stream, "for enum value")?;
        let value = tree.append_child(
            parent,
            SyntaxNodeType::EnumValue,
            token.span.start_inclusive.clone(),
        );
        tree.set_primary_text(value, token.byte_span());
        Ok(())
    }
}

/// `NullValue : null`
pub struct NullValueBuilder;

impl SyntaxNodeBuilder for NullValueBuilder {
    fn build(
        &self,
        tree: &mut SyntaxTree,
        parent: SyntaxNodeId,
        stream: &mut GraphQLTokenStream<'_>,
    ) -> Result<(), GraphQLParseError> {
        let token = helpers::expect_keyword(stream, "null", "for null value")?;
        let value = tree.append_child(
            parent,
            SyntaxNodeType::NullValue,
            token.span.start_inclusive.clone(),
        );
        tree.set_primary_text(value, token.byte_span());
        Ok(())
    }
}

/// `Variable : $ Name` in value position.
///
/// Primary text is the variable name without its `$`.
pub struct VariableValueBuilder;

impl SyntaxNodeBuilder for VariableValueBuilder {
    fn build(
        &self,
        tree: &mut SyntaxTree,
        parent: SyntaxNodeId,
        stream: &mut GraphQLTokenStream<'_>,
    ) -> Result<(), GraphQLParseError> {
        let dollar = helpers::expect(
            stream,
            &GraphQLTokenKind::Dollar,
            "to begin a variable reference",
        )?;
        let name = helpers::expect_name(stream, "after `$`")?;
        let value = tree.append_child(
            parent,
            SyntaxNodeType::VariableValue,
            dollar.span.start_inclusive,
        );
        tree.set_primary_text(value, name.byte_span());
        Ok(())
    }
}

/// `ListValue : [ Value* ]`
///
/// Each item re-enters [`select_value_builder`], so lists nest to any depth.
pub struct ListValueBuilder;

impl SyntaxNodeBuilder for ListValueBuilder {
    fn build(
        &self,
        tree: &mut SyntaxTree,
        parent: SyntaxNodeId,
        stream: &mut GraphQLTokenStream<'_>,
    ) -> Result<(), GraphQLParseError> {
        let open = helpers::open_delimiter(stream, DelimiterContext::ListValue)?;
        let list = tree.append_child(
            parent,
            SyntaxNodeType::ListValue,
            open.span.start_inclusive.clone(),
        );

        while !helpers::close_delimiter(stream, &open, DelimiterContext::ListValue)? {
            match select_value_builder(stream) {
                Some(builder) => builder.build_node(tree, list, stream)?,
                None => {
                    return Err(helpers::unexpected(
                        stream,
                        &["value", "]"],
                        "in list value",
                    ));
                },
            }
        }
        Ok(())
    }
}

/// `ObjectValue : { ObjectField* }`
///
/// Appends a `ComplexValue` node with one `InputItem` child per field.
pub struct ComplexValueBuilder;

impl SyntaxNodeBuilder for ComplexValueBuilder {
    fn build(
        &self,
        tree: &mut SyntaxTree,
        parent: SyntaxNodeId,
        stream: &mut GraphQLTokenStream<'_>,
    ) -> Result<(), GraphQLParseError> {
        let open = helpers::open_delimiter(stream, DelimiterContext::ObjectValue)?;
        let object = tree.append_child(
            parent,
            SyntaxNodeType::ComplexValue,
            open.span.start_inclusive.clone(),
        );

        while !helpers::close_delimiter(stream, &open, DelimiterContext::ObjectValue)? {
            InputItemBuilder.build_node(tree, object, stream)?;
        }
        Ok(())
    }
}
