//! Tests for the value builders and value dispatch.

use crate::node_builders::select_value_builder;
use crate::node_builders::ComplexValueBuilder;
use crate::node_builders::EnumValueBuilder;
use crate::node_builders::ListValueBuilder;
use crate::node_builders::ScalarValueBuilder;
use crate::tests::utils;
use crate::GraphQLParseErrorKind;

/// Builds whatever value the dispatcher picks for `source` and returns the
/// outline.
fn dispatch(source: &str) -> Vec<String> {
    let stream = utils::primed_stream(source);
    let builder = select_value_builder(&stream)
        .unwrap_or_else(|| panic!("no value builder for {source:?}"));
    let (tree, result, _) = utils::build_with(builder, source);
    result.unwrap();
    utils::outline(&tree, source, tree.root())
}

// =============================================================================
// Dispatch
// =============================================================================

#[test]
fn dispatch_by_leading_token() {
    assert_eq!(dispatch("42"), vec!["ScalarValue 42 :Number"]);
    assert_eq!(dispatch("-4.2e1"), vec!["ScalarValue -4.2e1 :Number"]);
    assert_eq!(dispatch("\"str\""), vec!["ScalarValue \"str\" :String"]);
    assert_eq!(dispatch("false"), vec!["ScalarValue false :Boolean"]);
    assert_eq!(dispatch("null"), vec!["NullValue null"]);
    assert_eq!(dispatch("NEWHOPE"), vec!["EnumValue NEWHOPE"]);
    assert_eq!(dispatch("$var"), vec!["VariableValue var"]);
    assert_eq!(dispatch("[]"), vec!["ListValue"]);
    assert_eq!(dispatch("{}"), vec!["ComplexValue"]);
}

/// Tokens that cannot start a value yield no builder rather than an error.
#[test]
fn no_builder_for_non_value_tokens() {
    for source in ["}", ")", "]", ":", "@dir", "...", ""] {
        let stream = utils::primed_stream(source);
        assert!(
            select_value_builder(&stream).is_none(),
            "unexpected value builder for {source:?}",
        );
    }
}

// =============================================================================
// Lists
// =============================================================================

/// `[123, null, 456]` has three children in source order.
#[test]
fn list_of_mixed_values() {
    assert_eq!(
        dispatch("[123, null, 456]"),
        vec![
            "ListValue",
            "  ScalarValue 123 :Number",
            "  NullValue null",
            "  ScalarValue 456 :Number",
        ],
    );
}

#[test]
fn nested_lists() {
    assert_eq!(
        dispatch("[[1], [[2]]]"),
        vec![
            "ListValue",
            "  ListValue",
            "    ScalarValue 1 :Number",
            "  ListValue",
            "    ListValue",
            "      ScalarValue 2 :Number",
        ],
    );
}

#[test]
fn unclosed_list() {
    let (tree, result, _) = utils::build_with(&ListValueBuilder, "[1, 2");
    let error = result.unwrap_err();
    assert_eq!(
        error.kind(),
        &GraphQLParseErrorKind::UnclosedDelimiter {
            delimiter: "[".to_string(),
        },
    );
    let opened_here = error
        .notes()
        .iter()
        .find(|n| n.message.contains("opened here"))
        .unwrap();
    assert_eq!(opened_here.span.as_ref().unwrap().start_inclusive.byte_offset(), 0);
    assert!(tree.is_empty());
}

#[test]
fn list_closed_with_wrong_delimiter() {
    let (_, result, _) = utils::build_with(&ListValueBuilder, "[1, 2)");
    assert_eq!(
        result.unwrap_err().kind(),
        &GraphQLParseErrorKind::MismatchedDelimiter {
            expected: "]".to_string(),
            found: ")".to_string(),
        },
    );
}

#[test]
fn non_value_inside_list() {
    let (_, result, _) = utils::build_with(&ListValueBuilder, "[1, @x]");
    let error = result.unwrap_err();
    assert!(error.message().contains("in list value"));
}

// =============================================================================
// Complex values
// =============================================================================

#[test]
fn complex_value_fields_keep_source_order() {
    let source = "{b: 1, a: {c: [ENUM]}, d: $v}";
    let (tree, result, _) = utils::build_with(&ComplexValueBuilder, source);
    result.unwrap();
    assert_eq!(
        utils::outline(&tree, source, tree.root()),
        vec![
            "ComplexValue",
            "  InputItem b",
            "    ScalarValue 1 :Number",
            "  InputItem a",
            "    ComplexValue",
            "      InputItem c",
            "        ListValue",
            "          EnumValue ENUM",
            "  InputItem d",
            "    VariableValue v",
        ],
    );
}

#[test]
fn complex_value_field_requires_value() {
    let (tree, result, _) = utils::build_with(&ComplexValueBuilder, "{a: }");
    let error = result.unwrap_err();
    assert!(error.message().contains("for input `a`"));
    assert!(tree.is_empty());
}

// =============================================================================
// Direct builder misuse
// =============================================================================

#[test]
fn enum_builder_rejects_literals() {
    let (_, result, _) = utils::build_with(&EnumValueBuilder, "true");
    assert!(result.is_err());
}

#[test]
fn scalar_builder_rejects_names() {
    let (_, result, _) = utils::build_with(&ScalarValueBuilder, "RED");
    assert!(result.is_err());
}

/// String lexemes keep their quotes, escapes and block delimiters.
#[test]
fn block_string_scalar_keeps_raw_lexeme() {
    let source = "\"\"\"\n  multi\n  line\n\"\"\"";
    assert_eq!(dispatch(source), vec![format!("ScalarValue {source} :String")]);
}
