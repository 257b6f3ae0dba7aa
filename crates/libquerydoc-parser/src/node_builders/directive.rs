use crate::GraphQLParseError;
use crate::GraphQLTokenStream;
use crate::node_builders::InputItemCollectionBuilder;
use crate::node_builders::SyntaxNodeBuilder;
use crate::node_builders::helpers;
use crate::syntax_tree::SyntaxNodeId;
use crate::syntax_tree::SyntaxNodeType;
use crate::syntax_tree::SyntaxTree;
use crate::token::GraphQLTokenKind;

/// `Directive : @ Name Arguments?`
///
/// Appends one `Directive` node named without its `@`. Arguments, when
/// present, become an `InputItemCollection` child.
pub struct DirectiveBuilder;

impl SyntaxNodeBuilder for DirectiveBuilder {
    fn build(
        &self,
        tree: &mut SyntaxTree,
        parent: SyntaxNodeId,
        stream: &mut GraphQLTokenStream<'_>,
    ) -> Result<(), GraphQLParseError> {
        let at_token = helpers::expect(stream, &GraphQLTokenKind::At, "to begin a directive")?;
        let name_token = helpers::expect_name(stream, "after `@`")?;

        let directive = tree.append_child(
            parent,
            SyntaxNodeType::Directive,
            at_token.span.start_inclusive,
        );
        tree.set_primary_text(directive, name_token.byte_span());

        if stream.matches(&GraphQLTokenKind::ParenOpen) {
            InputItemCollectionBuilder.build_node(tree, directive, stream)?;
        }
        Ok(())
    }
}
