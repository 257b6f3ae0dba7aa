use crate::GraphQLParseError;
use crate::GraphQLTokenStream;
use crate::node_builders::SyntaxNodeBuilder;
use crate::node_builders::helpers;
use crate::node_builders::helpers::DelimiterContext;
use crate::node_builders::select_value_builder;
use crate::syntax_tree::SyntaxNodeId;
use crate::syntax_tree::SyntaxNodeType;
use crate::syntax_tree::SyntaxTree;
use crate::token::GraphQLTokenKind;

/// `Arguments : ( Argument* )`
///
/// Appends an `InputItemCollection` node with one `InputItem` child per
/// argument. `()` is accepted here.
pub struct InputItemCollectionBuilder;

impl SyntaxNodeBuilder for InputItemCollectionBuilder {
    fn build(
        &self,
        tree: &mut SyntaxTree,
        parent: SyntaxNodeId,
        stream: &mut GraphQLTokenStream<'_>,
    ) -> Result<(), GraphQLParseError> {
        let open = helpers::open_delimiter(stream, DelimiterContext::Arguments)?;
        let collection = tree.append_child(
            parent,
            SyntaxNodeType::InputItemCollection,
            open.span.start_inclusive.clone(),
        );

        while !helpers::close_delimiter(stream, &open, DelimiterContext::Arguments)? {
            InputItemBuilder.build_node(tree, collection, stream)?;
        }
        Ok(())
    }
}

/// `Argument : Name : Value` (also `ObjectField` inside a complex value)
///
/// Appends one `InputItem` node named by its primary text, with the value
/// as its single child.
pub struct InputItemBuilder;

impl SyntaxNodeBuilder for InputItemBuilder {
    fn build(
        &self,
        tree: &mut SyntaxTree,
        parent: SyntaxNodeId,
        stream: &mut GraphQLTokenStream<'_>,
    ) -> Result<(), GraphQLParseError> {
        let name = helpers::expect_name(stream, "for input name")?;
        helpers::expect(stream, &GraphQLTokenKind::Colon, "after input name")?;

        let item = tree.append_child(
            parent,
            SyntaxNodeType::InputItem,
            name.span.start_inclusive.clone(),
        );
        tree.set_primary_text(item, name.byte_span());

        match select_value_builder(stream) {
            Some(builder) => builder.build_node(tree, item, stream),
            None => {
                let context = format!("for input `{}`", stream.text(&name));
                Err(helpers::unexpected(stream, &["value"], &context))
            },
        }
    }
}
