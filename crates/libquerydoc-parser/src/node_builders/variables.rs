use crate::ByteSpan;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLTokenStream;
use crate::SourceText;
use crate::node_builders::SyntaxNodeBuilder;
use crate::node_builders::build_directives;
use crate::node_builders::helpers;
use crate::node_builders::helpers::DelimiterContext;
use crate::node_builders::select_value_builder;
use crate::syntax_tree::SyntaxNodeId;
use crate::syntax_tree::SyntaxNodeType;
use crate::syntax_tree::SyntaxTree;
use crate::token::GraphQLTokenKind;

/// `VariableDefinitions : ( VariableDefinition* )`
pub struct VariableCollectionBuilder;

impl SyntaxNodeBuilder for VariableCollectionBuilder {
    fn build(
        &self,
        tree: &mut SyntaxTree,
        parent: SyntaxNodeId,
        stream: &mut GraphQLTokenStream<'_>,
    ) -> Result<(), GraphQLParseError> {
        let open = helpers::open_delimiter(stream, DelimiterContext::VariableDefinitions)?;
        let collection = tree.append_child(
            parent,
            SyntaxNodeType::VariableCollection,
            open.span.start_inclusive.clone(),
        );

        while !helpers::close_delimiter(stream, &open, DelimiterContext::VariableDefinitions)? {
            VariableBuilder.build_node(tree, collection, stream)?;
        }
        Ok(())
    }
}

/// `VariableDefinition : Variable : Type DefaultValue? Directives?`
///
/// Primary text is the name without `$`; secondary text spans the whole
/// declared type (`[Episode!]!`). Children: the default value (if any), then
/// `Directive*`.
///
/// The type is mandatory even when a default is given, and a default value
/// must be constant: a `$variable` anywhere inside it is rejected.
pub struct VariableBuilder;

impl SyntaxNodeBuilder for VariableBuilder {
    fn build(
        &self,
        tree: &mut SyntaxTree,
        parent: SyntaxNodeId,
        stream: &mut GraphQLTokenStream<'_>,
    ) -> Result<(), GraphQLParseError> {
        let dollar = helpers::expect(
            stream,
            &GraphQLTokenKind::Dollar,
            "to begin a variable definition",
        )?;
        let name = helpers::expect_name(stream, "after `$`")?;

        if !stream.matches(&GraphQLTokenKind::Colon) {
            let mut error = helpers::unexpected(stream, &[":"], "after variable name");
            error.add_help("variables are declared as `$name: Type`");
            return Err(error);
        }
        stream.advance()?;
        let type_span = parse_type_expression(stream)?;

        let variable = tree.append_child(
            parent,
            SyntaxNodeType::Variable,
            dollar.span.start_inclusive,
        );
        tree.set_primary_text(variable, name.byte_span());
        tree.set_secondary_text(variable, type_span);

        if stream.matches(&GraphQLTokenKind::Equals) {
            stream.advance()?;
            let Some(builder) = select_value_builder(stream) else {
                return Err(helpers::unexpected(
                    stream,
                    &["value"],
                    "for default value after `=`",
                ));
            };
            builder.build_node(tree, variable, stream)?;
            reject_variables_in_default(tree, variable, stream)?;
        }

        build_directives(tree, variable, stream)
    }
}

/// `Type : Name | [ Type ] | Type !`
///
/// Returns the span covering the whole type expression.
fn parse_type_expression(stream: &mut GraphQLTokenStream<'_>) -> Result<ByteSpan, GraphQLParseError> {
    let first = if stream.matches(&GraphQLTokenKind::SquareBracketOpen) {
        let open = stream.advance()?;
        parse_type_expression(stream)?;
        if !helpers::close_delimiter(stream, &open, DelimiterContext::ListType)? {
            return Err(helpers::unexpected(stream, &["]"], "to close list type"));
        }
        open
    } else if stream.matches(&GraphQLTokenKind::Name) {
        stream.advance()?
    } else {
        let mut error = helpers::unexpected(stream, &["name", "["], "for variable type");
        error.add_spec("https://spec.graphql.org/September2025/#Type");
        return Err(error);
    };

    if stream.matches(&GraphQLTokenKind::Bang) {
        stream.advance()?;
    }
    Ok(helpers::span_through_previous(stream, &first))
}

fn reject_variables_in_default(
    tree: &SyntaxTree,
    variable: SyntaxNodeId,
    stream: &GraphQLTokenStream<'_>,
) -> Result<(), GraphQLParseError> {
    let Some(default_value) = tree.children(variable).first().copied() else {
        return Ok(());
    };
    let usage = tree
        .descendants(default_value)
        .find(|id| tree.node(*id).node_type() == SyntaxNodeType::VariableValue);
    let Some(usage) = usage else {
        return Ok(());
    };

    let node = tree.node(usage);
    let name_span = node.primary_text().unwrap_or_default();
    let name = stream.source_text().get(name_span.range()).unwrap_or_default();
    // Ignored tokens may sit between `$` and the name.
    let start = node.location().byte_offset();
    let usage_span = ByteSpan::from_offsets(start, (name_span.end as usize).max(start));
    let span = SourceText::new(stream.source_text()).span_at(usage_span);
    let mut error = GraphQLParseError::new(
        format!("variable `${name}` cannot be used in a default value"),
        span,
        GraphQLParseErrorKind::InvalidSyntax,
    );
    error.add_note("default values must be constant");
    Err(error)
}
