use crate::GraphQLParseError;
use crate::GraphQLTokenStream;
use crate::node_builders::FieldCollectionBuilder;
use crate::node_builders::SyntaxNodeBuilder;
use crate::node_builders::VariableCollectionBuilder;
use crate::node_builders::build_directives;
use crate::node_builders::helpers;
use crate::syntax_tree::SyntaxNodeId;
use crate::syntax_tree::SyntaxNodeType;
use crate::syntax_tree::SyntaxTree;
use crate::token::GraphQLTokenKind;

const OPERATION_TYPES: [&str; 3] = ["query", "mutation", "subscription"];

/// `OperationDefinition : OperationType Name? VariableDefinitions? Directives? SelectionSet | SelectionSet`
///
/// A bare `{ ... }` is the implicit anonymous query; its node has no primary
/// text. Children: `VariableCollection?`, `Directive*`, `FieldCollection`.
pub struct OperationBuilder;

impl SyntaxNodeBuilder for OperationBuilder {
    fn build(
        &self,
        tree: &mut SyntaxTree,
        parent: SyntaxNodeId,
        stream: &mut GraphQLTokenStream<'_>,
    ) -> Result<(), GraphQLParseError> {
        let operation = tree.append_child(
            parent,
            SyntaxNodeType::Operation,
            stream.current().span.start_inclusive.clone(),
        );

        if stream.matches(&GraphQLTokenKind::CurlyBraceOpen) {
            log::trace!("building anonymous query operation");
            return FieldCollectionBuilder.build_node(tree, operation, stream);
        }

        let is_operation_type = OPERATION_TYPES
            .iter()
            .any(|keyword| stream.matches_keyword(keyword));
        if !is_operation_type {
            return Err(helpers::unexpected(
                stream,
                &["{", "query", "mutation", "subscription"],
                "to begin an operation",
            ));
        }
        let type_token = stream.advance()?;
        tree.set_primary_text(operation, type_token.byte_span());

        if stream.matches(&GraphQLTokenKind::Name) {
            let name_token = stream.advance()?;
            tree.set_secondary_text(operation, name_token.byte_span());
        }

        if stream.matches(&GraphQLTokenKind::ParenOpen) {
            VariableCollectionBuilder.build_node(tree, operation, stream)?;
        }

        build_directives(tree, operation, stream)?;

        if !stream.matches(&GraphQLTokenKind::CurlyBraceOpen) {
            let mut error = helpers::unexpected(
                stream,
                &["{"],
                &format!("to open the `{}` operation's selection set", stream.text(&type_token)),
            );
            error.add_spec("https://spec.graphql.org/September2025/#sec-Language.Operations");
            return Err(error);
        }
        FieldCollectionBuilder.build_node(tree, operation, stream)
    }
}
