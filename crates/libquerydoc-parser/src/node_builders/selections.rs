use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLTokenStream;
use crate::node_builders::InputItemCollectionBuilder;
use crate::node_builders::SyntaxNodeBuilder;
use crate::node_builders::build_directives;
use crate::node_builders::helpers;
use crate::node_builders::helpers::DelimiterContext;
use crate::syntax_tree::SyntaxNodeId;
use crate::syntax_tree::SyntaxNodeType;
use crate::syntax_tree::SyntaxTree;
use crate::token::GraphQLTokenKind;

/// `SelectionSet : { Selection* }`
///
/// Appends a `FieldCollection` node holding `Field`, `FragmentSpread` and
/// `InlineFragment` children. An empty `{}` is accepted here.
pub struct FieldCollectionBuilder;

impl FieldCollectionBuilder {
    /// `...Name` is a spread; `...on`, `...@dir` and `...{` are inline
    /// fragments.
    fn select_selection_builder(
        stream: &mut GraphQLTokenStream<'_>,
    ) -> Option<&'static dyn SyntaxNodeBuilder> {
        if stream.matches(&GraphQLTokenKind::Name) {
            return Some(&FieldBuilder);
        }
        if !stream.matches(&GraphQLTokenKind::Ellipsis) {
            return None;
        }
        let next_is_name = matches!(stream.peek().kind, GraphQLTokenKind::Name);
        if next_is_name && !stream.peek_matches_keyword("on") {
            Some(&FragmentSpreadBuilder)
        } else {
            Some(&InlineFragmentBuilder)
        }
    }
}

impl SyntaxNodeBuilder for FieldCollectionBuilder {
    fn build(
        &self,
        tree: &mut SyntaxTree,
        parent: SyntaxNodeId,
        stream: &mut GraphQLTokenStream<'_>,
    ) -> Result<(), GraphQLParseError> {
        let open = helpers::open_delimiter(stream, DelimiterContext::SelectionSet)?;
        let collection = tree.append_child(
            parent,
            SyntaxNodeType::FieldCollection,
            open.span.start_inclusive.clone(),
        );

        while !helpers::close_delimiter(stream, &open, DelimiterContext::SelectionSet)? {
            match Self::select_selection_builder(stream) {
                Some(builder) => builder.build_node(tree, collection, stream)?,
                None => {
                    return Err(helpers::unexpected(
                        stream,
                        &["name", "...", "}"],
                        "in selection set",
                    ));
                },
            }
        }
        Ok(())
    }
}

/// `Field : Alias? Name Arguments? Directives? SelectionSet?`
///
/// Primary text is the field name, secondary text the alias. Children:
/// `InputItemCollection?`, `Directive*`, `FieldCollection?`. A field without
/// a nested collection is a leaf.
pub struct FieldBuilder;

impl SyntaxNodeBuilder for FieldBuilder {
    fn build(
        &self,
        tree: &mut SyntaxTree,
        parent: SyntaxNodeId,
        stream: &mut GraphQLTokenStream<'_>,
    ) -> Result<(), GraphQLParseError> {
        let first_name = helpers::expect_name(stream, "for field")?;
        let field = tree.append_child(
            parent,
            SyntaxNodeType::Field,
            first_name.span.start_inclusive.clone(),
        );

        if stream.matches(&GraphQLTokenKind::Colon) {
            stream.advance()?;
            let field_name = helpers::expect_name(stream, "after field alias")?;
            tree.set_primary_text(field, field_name.byte_span());
            tree.set_secondary_text(field, first_name.byte_span());
        } else {
            tree.set_primary_text(field, first_name.byte_span());
        }

        if stream.matches(&GraphQLTokenKind::ParenOpen) {
            InputItemCollectionBuilder.build_node(tree, field, stream)?;
        }
        build_directives(tree, field, stream)?;
        if stream.matches(&GraphQLTokenKind::CurlyBraceOpen) {
            FieldCollectionBuilder.build_node(tree, field, stream)?;
        }
        Ok(())
    }
}

/// `FragmentSpread : ... FragmentName Directives?`
pub struct FragmentSpreadBuilder;

impl SyntaxNodeBuilder for FragmentSpreadBuilder {
    fn build(
        &self,
        tree: &mut SyntaxTree,
        parent: SyntaxNodeId,
        stream: &mut GraphQLTokenStream<'_>,
    ) -> Result<(), GraphQLParseError> {
        let ellipsis = helpers::expect(
            stream,
            &GraphQLTokenKind::Ellipsis,
            "to begin a fragment spread",
        )?;
        if stream.matches_keyword("on") {
            return Err(reserved_fragment_name(stream));
        }
        let name = helpers::expect_name(stream, "after `...`")?;

        let spread = tree.append_child(
            parent,
            SyntaxNodeType::FragmentSpread,
            ellipsis.span.start_inclusive,
        );
        tree.set_primary_text(spread, name.byte_span());
        build_directives(tree, spread, stream)
    }
}

/// `InlineFragment : ... TypeCondition? Directives? SelectionSet`
///
/// Primary text is the type condition, when present. Once `on` is seen the
/// type name is mandatory.
pub struct InlineFragmentBuilder;

impl SyntaxNodeBuilder for InlineFragmentBuilder {
    fn build(
        &self,
        tree: &mut SyntaxTree,
        parent: SyntaxNodeId,
        stream: &mut GraphQLTokenStream<'_>,
    ) -> Result<(), GraphQLParseError> {
        let ellipsis = helpers::expect(
            stream,
            &GraphQLTokenKind::Ellipsis,
            "to begin an inline fragment",
        )?;
        let fragment = tree.append_child(
            parent,
            SyntaxNodeType::InlineFragment,
            ellipsis.span.start_inclusive,
        );

        if stream.matches_keyword("on") {
            stream.advance()?;
            let type_name = helpers::expect_name(stream, "for type condition after `on`")?;
            tree.set_primary_text(fragment, type_name.byte_span());
        }

        build_directives(tree, fragment, stream)?;
        FieldCollectionBuilder.build_node(tree, fragment, stream)
    }
}

/// `FragmentDefinition : fragment FragmentName TypeCondition Directives? SelectionSet`
///
/// Primary text is the fragment name, secondary text the type condition.
/// `on` is not a valid fragment name.
pub struct NamedFragmentBuilder;

impl SyntaxNodeBuilder for NamedFragmentBuilder {
    fn build(
        &self,
        tree: &mut SyntaxTree,
        parent: SyntaxNodeId,
        stream: &mut GraphQLTokenStream<'_>,
    ) -> Result<(), GraphQLParseError> {
        let keyword = helpers::expect_keyword(stream, "fragment", "to begin a fragment")?;
        if stream.matches_keyword("on") {
            return Err(reserved_fragment_name(stream));
        }
        let name = helpers::expect_name(stream, "for fragment name")?;
        helpers::expect_keyword(stream, "on", "after fragment name")?;
        let type_name = helpers::expect_name(stream, "for type condition after `on`")?;

        let fragment = tree.append_child(
            parent,
            SyntaxNodeType::NamedFragment,
            keyword.span.start_inclusive,
        );
        tree.set_primary_text(fragment, name.byte_span());
        tree.set_secondary_text(fragment, type_name.byte_span());

        build_directives(tree, fragment, stream)?;
        FieldCollectionBuilder.build_node(tree, fragment, stream)
    }
}

fn reserved_fragment_name(stream: &GraphQLTokenStream<'_>) -> GraphQLParseError {
    let mut error = GraphQLParseError::new(
        "fragment name cannot be `on`",
        stream.current().span.clone(),
        GraphQLParseErrorKind::ReservedName {
            name: "on".to_string(),
        },
    );
    error.add_spec("https://spec.graphql.org/September2025/#FragmentName");
    error
}
