use crate::GraphQLParseError;
use crate::GraphQLTokenStream;
use crate::node_builders::NamedFragmentBuilder;
use crate::node_builders::OperationBuilder;
use crate::node_builders::SyntaxNodeBuilder;
use crate::node_builders::helpers;
use crate::syntax_tree::SyntaxNodeId;
use crate::syntax_tree::SyntaxNodeType;
use crate::syntax_tree::SyntaxTree;
use crate::token::GraphQLTokenKind;

const DEFINITION_STARTS: &[&str] = &["{", "query", "mutation", "subscription", "fragment"];

/// `Document : Definition+`
///
/// Appends a `Document` node whose children are `Operation` and
/// `NamedFragment` nodes in source order. Consumes the whole stream.
pub struct DocumentBuilder;

impl DocumentBuilder {
    /// Picks the builder for the definition starting at the current token.
    fn select_definition_builder(
        stream: &GraphQLTokenStream<'_>,
    ) -> Option<&'static dyn SyntaxNodeBuilder> {
        if stream.matches(&GraphQLTokenKind::CurlyBraceOpen)
            || stream.matches_keyword("query")
            || stream.matches_keyword("mutation")
            || stream.matches_keyword("subscription")
        {
            Some(&OperationBuilder)
        } else if stream.matches_keyword("fragment") {
            Some(&NamedFragmentBuilder)
        } else {
            None
        }
    }
}

impl SyntaxNodeBuilder for DocumentBuilder {
    fn build(
        &self,
        tree: &mut SyntaxTree,
        parent: SyntaxNodeId,
        stream: &mut GraphQLTokenStream<'_>,
    ) -> Result<(), GraphQLParseError> {
        let document = tree.append_child(
            parent,
            SyntaxNodeType::Document,
            stream.current().span.start_inclusive.clone(),
        );

        if stream.is_at_end() {
            let mut error =
                helpers::unexpected(stream, DEFINITION_STARTS, "to begin a definition");
            error.add_note("a document must contain at least one operation or fragment");
            return Err(error);
        }

        while !stream.is_at_end() {
            match Self::select_definition_builder(stream) {
                Some(builder) => builder.build_node(tree, document, stream)?,
                None => {
                    return Err(helpers::unexpected(
                        stream,
                        DEFINITION_STARTS,
                        "to begin a definition",
                    ));
                },
            }
        }

        Ok(())
    }
}
