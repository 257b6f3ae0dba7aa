//! Tests for the selection-set, field and fragment builders.

use crate::node_builders::FieldBuilder;
use crate::node_builders::FieldCollectionBuilder;
use crate::node_builders::FragmentSpreadBuilder;
use crate::node_builders::InlineFragmentBuilder;
use crate::node_builders::NamedFragmentBuilder;
use crate::node_builders::OperationBuilder;
use crate::tests::utils;
use crate::GraphQLParseErrorKind;

// =============================================================================
// Fields
// =============================================================================

/// The second field is aliased: its name is `field2`, its alias `fieldA`.
#[test]
fn field_collection_with_alias() {
    let source = "{field1, fieldA: field2}";
    let (tree, result, rest) = utils::build_with(&FieldCollectionBuilder, source);
    result.unwrap();
    assert_eq!(
        utils::outline(&tree, source, tree.root()),
        vec![
            "FieldCollection",
            "  Field field1",
            "  Field field2 / fieldA",
        ],
    );
    assert_eq!(rest, "");
}

#[test]
fn field_with_arguments_directives_and_selections() {
    let source = "hero(episode: JEDI) @cached { name } tail";
    let (tree, result, rest) = utils::build_with(&FieldBuilder, source);
    result.unwrap();
    assert_eq!(
        utils::outline(&tree, source, tree.root()),
        vec![
            "Field hero",
            "  InputItemCollection",
            "    InputItem episode",
            "      EnumValue JEDI",
            "  Directive cached",
            "  FieldCollection",
            "    Field name",
        ],
    );
    assert_eq!(rest, "tail");
}

/// A field without a nested selection set is a leaf.
#[test]
fn leaf_field_stops_at_next_field() {
    let (tree, result, rest) = utils::build_with(&FieldBuilder, "name friends");
    result.unwrap();
    assert_eq!(utils::outline(&tree, "name friends", tree.root()), vec!["Field name"]);
    assert_eq!(rest, "friends");
}

#[test]
fn alias_without_field_name() {
    let (tree, result, _) = utils::build_with(&FieldBuilder, "alias: { x }");
    let error = result.unwrap_err();
    assert!(error.message().contains("after field alias"));
    assert!(tree.is_empty());
}

#[test]
fn empty_field_collection_is_accepted() {
    let (tree, result, _) = utils::build_with(&FieldCollectionBuilder, "{}");
    result.unwrap();
    assert_eq!(utils::outline(&tree, "{}", tree.root()), vec!["FieldCollection"]);
}

#[test]
fn unclosed_field_collection() {
    let (tree, result, _) = utils::build_with(&FieldCollectionBuilder, "{ a { b }");
    let error = result.unwrap_err();
    assert!(matches!(error.kind(), GraphQLParseErrorKind::UnclosedDelimiter { .. }));
    assert!(tree.is_empty());
}

#[test]
fn wrong_token_in_field_collection() {
    let (_, result, _) = utils::build_with(&FieldCollectionBuilder, "{ a: 1 }");
    assert!(result.is_err());

    let (_, result, _) = utils::build_with(&FieldCollectionBuilder, "{ a ] }");
    assert!(matches!(
        result.unwrap_err().kind(),
        GraphQLParseErrorKind::MismatchedDelimiter { .. }
    ));
}

// =============================================================================
// Fragments
// =============================================================================

#[test]
fn fragment_spread_with_directive() {
    let source = "...HeroDetails @include(if: $full) next";
    let (tree, result, rest) = utils::build_with(&FragmentSpreadBuilder, source);
    result.unwrap();
    assert_eq!(
        utils::outline(&tree, source, tree.root()),
        vec![
            "FragmentSpread HeroDetails",
            "  Directive include",
            "    InputItemCollection",
            "      InputItem if",
            "        VariableValue full",
        ],
    );
    assert_eq!(rest, "next");
}

/// The selection-set dispatcher tells spreads from inline fragments by the
/// token after `...`.
#[test]
fn selection_dispatch_between_spread_and_inline_fragment() {
    let source = "{ ...Named ... on Droid { primaryFunction } ... @skip(if: true) { id } }";
    let (tree, result, _) = utils::build_with(&FieldCollectionBuilder, source);
    result.unwrap();
    assert_eq!(
        utils::outline(&tree, source, tree.root()),
        vec![
            "FieldCollection",
            "  FragmentSpread Named",
            "  InlineFragment Droid",
            "    FieldCollection",
            "      Field primaryFunction",
            "  InlineFragment",
            "    Directive skip",
            "      InputItemCollection",
            "        InputItem if",
            "          ScalarValue true :Boolean",
            "    FieldCollection",
            "      Field id",
        ],
    );
}

#[test]
fn inline_fragment_requires_type_after_on() {
    let (tree, result, _) = utils::build_with(&InlineFragmentBuilder, "... on { a }");
    let error = result.unwrap_err();
    assert!(error.message().contains("type condition"));
    assert!(tree.is_empty());
}

#[test]
fn inline_fragment_requires_selection_set() {
    let (tree, result, _) = utils::build_with(&InlineFragmentBuilder, "... on User");
    assert!(matches!(
        result.unwrap_err().kind(),
        GraphQLParseErrorKind::UnexpectedEof { .. }
    ));
    assert!(tree.is_empty());
}

/// `fragment someFragment on User{}` becomes a `NamedFragment` with an empty
/// `FieldCollection`.
#[test]
fn named_fragment_with_empty_selection() {
    let source = "fragment someFragment on User{}";
    let (tree, result, _) = utils::build_with(&NamedFragmentBuilder, source);
    result.unwrap();
    assert_eq!(
        utils::outline(&tree, source, tree.root()),
        vec!["NamedFragment someFragment / User", "  FieldCollection"],
    );
}

#[test]
fn named_fragment_requires_type_condition() {
    let (tree, result, _) = utils::build_with(&NamedFragmentBuilder, "fragment F { a }");
    let error = result.unwrap_err();
    assert_eq!(
        error.kind(),
        &GraphQLParseErrorKind::UnexpectedToken {
            expected: vec!["on".to_string()],
            found: "{".to_string(),
        },
    );
    assert!(tree.is_empty());
}

#[test]
fn named_fragment_requires_name() {
    let (_, result, _) = utils::build_with(&NamedFragmentBuilder, "fragment { a }");
    assert!(result.unwrap_err().message().contains("fragment name"));
}

#[test]
fn fragment_cannot_be_named_on() {
    let (_, result, _) = utils::build_with(&NamedFragmentBuilder, "fragment on on User { a }");
    assert_eq!(
        result.unwrap_err().kind(),
        &GraphQLParseErrorKind::ReservedName {
            name: "on".to_string(),
        },
    );
}

// =============================================================================
// Operations
// =============================================================================

/// A bare selection set is an anonymous query with no type keyword.
#[test]
fn implicit_anonymous_query() {
    let (tree, result, _) = utils::build_with(&OperationBuilder, "{ a }");
    result.unwrap();
    assert_eq!(
        utils::outline(&tree, "{ a }", tree.root()),
        vec!["Operation", "  FieldCollection", "    Field a"],
    );
}

#[test]
fn full_operation() {
    let source = "query Q($id: ID!, $n: Int = 10) @live { a }";
    let (tree, result, _) = utils::build_with(&OperationBuilder, source);
    result.unwrap();
    assert_eq!(
        utils::outline(&tree, source, tree.root()),
        vec![
            "Operation query / Q",
            "  VariableCollection",
            "    Variable id / ID!",
            "    Variable n / Int",
            "      ScalarValue 10 :Number",
            "  Directive live",
            "  FieldCollection",
            "    Field a",
        ],
    );
}

#[test]
fn anonymous_mutation() {
    let source = "mutation { like(id: 1) }";
    let (tree, result, _) = utils::build_with(&OperationBuilder, source);
    result.unwrap();
    assert_eq!(utils::outline(&tree, source, tree.root())[0], "Operation mutation");
}

#[test]
fn operation_requires_selection_set() {
    let (tree, result, _) = utils::build_with(&OperationBuilder, "query Q");
    let error = result.unwrap_err();
    assert!(matches!(error.kind(), GraphQLParseErrorKind::UnexpectedEof { .. }));
    assert!(error.message().contains("selection set"));
    assert!(tree.is_empty());
}

#[test]
fn unknown_operation_type() {
    let (_, result, _) = utils::build_with(&OperationBuilder, "update { a }");
    assert_eq!(
        result.unwrap_err().kind(),
        &GraphQLParseErrorKind::UnexpectedToken {
            expected: vec![
                "{".to_string(),
                "query".to_string(),
                "mutation".to_string(),
                "subscription".to_string(),
            ],
            found: "update".to_string(),
        },
    );
}
