//! Tests for [`ResolvableValue::resolve`] on supplied values.

use indexmap::IndexMap;
use libquerydoc_parser::GraphQLStringParsingError;

use crate::VariableResolutionError;
use crate::supplied_value::ResolvedValue;
use crate::supplied_value::ValueResolutionError;
use crate::supplied_value::VariableValues;
use crate::tests::utils;

fn resolve_argument(
    source: &str,
    name: &str,
    variables: &VariableValues,
) -> Result<ResolvedValue, ValueResolutionError> {
    let document = utils::document(source);
    utils::argument_value(&document, name).resolve(variables)
}

fn resolve_literal(literal: &str) -> Result<ResolvedValue, ValueResolutionError> {
    resolve_argument(&format!("{{ f(v: {literal}) }}"), "v", &VariableValues::new())
}

#[test]
fn literals_resolve_to_their_values() {
    assert_eq!(resolve_literal("true"), Ok(ResolvedValue::Boolean(true)));
    assert_eq!(resolve_literal("false"), Ok(ResolvedValue::Boolean(false)));
    assert_eq!(resolve_literal("-42"), Ok(ResolvedValue::Int(-42)));
    assert_eq!(resolve_literal("2.5e2"), Ok(ResolvedValue::Float(250.0)));
    assert_eq!(resolve_literal("0.5"), Ok(ResolvedValue::Float(0.5)));
    assert_eq!(resolve_literal("JEDI"), Ok(ResolvedValue::Enum("JEDI".to_string())));
    assert_eq!(resolve_literal("null"), Ok(ResolvedValue::Null));
}

#[test]
fn strings_are_cooked() {
    assert_eq!(
        resolve_literal(r#""café \"bar\"""#),
        Ok(ResolvedValue::String("café \"bar\"".to_string())),
    );
    assert_eq!(
        resolve_literal("\"\"\"\n    hello\n      world\n  \"\"\""),
        Ok(ResolvedValue::String("hello\n  world".to_string())),
    );
}

#[test]
fn invalid_escape_is_reported() {
    assert_eq!(
        resolve_literal(r#""bad \q""#),
        Err(ValueResolutionError::InvalidString {
            text: r#""bad \q""#.to_string(),
            source: GraphQLStringParsingError::InvalidEscapeSequence("\\q".to_string()),
        }),
    );
}

#[test]
fn integers_must_fit_in_i64() {
    assert_eq!(
        resolve_literal("9223372036854775807"),
        Ok(ResolvedValue::Int(i64::MAX)),
    );
    assert_eq!(
        resolve_literal("99999999999999999999"),
        Err(ValueResolutionError::IntOutOfRange {
            text: "99999999999999999999".to_string(),
        }),
    );
}

#[test]
fn floats_must_be_finite() {
    assert_eq!(
        resolve_literal("1e400"),
        Err(ValueResolutionError::InvalidFloat {
            text: "1e400".to_string(),
        }),
    );
}

#[test]
fn lists_and_objects_resolve_recursively() {
    let resolved = resolve_literal("{b: [1, \"two\"], a: {c: null}}").unwrap();

    let mut inner = IndexMap::new();
    inner.insert("c".to_string(), ResolvedValue::Null);
    let mut expected = IndexMap::new();
    expected.insert(
        "b".to_string(),
        ResolvedValue::List(vec![
            ResolvedValue::Int(1),
            ResolvedValue::String("two".to_string()),
        ]),
    );
    expected.insert("a".to_string(), ResolvedValue::Object(inner));
    assert_eq!(resolved, ResolvedValue::Object(expected));

    let object = resolved.as_object().unwrap();
    assert_eq!(object.keys().collect::<Vec<_>>(), vec!["b", "a"]);
    assert_eq!(object["b"].as_list().map(<[_]>::len), Some(2));
}

#[test]
fn repeated_complex_field_resolves_first_occurrence() {
    let resolved = resolve_literal("{a: 1, a: 2}").unwrap();
    assert_eq!(resolved.as_object().unwrap()["a"].as_i64(), Some(1));
}

/// Verifies the order variables resolve in: the supplied value, then the
/// declaration's default, then `null`.
#[test]
fn variables_prefer_supplied_then_default_then_null() {
    let source = "query Q($a: Int = 1, $b: String) { f(a: $a, b: $b) }";

    let none = VariableValues::new();
    assert_eq!(resolve_argument(source, "a", &none), Ok(ResolvedValue::Int(1)));
    assert_eq!(resolve_argument(source, "b", &none), Ok(ResolvedValue::Null));

    let mut supplied = VariableValues::new();
    supplied.insert("a".to_string(), ResolvedValue::Int(7));
    supplied.insert("b".to_string(), ResolvedValue::String("s".to_string()));
    assert_eq!(resolve_argument(source, "a", &supplied), Ok(ResolvedValue::Int(7)));
    assert_eq!(
        resolve_argument(source, "b", &supplied).unwrap().as_str(),
        Some("s"),
    );
}

#[test]
fn variables_inside_lists_resolve() {
    let mut supplied = VariableValues::new();
    supplied.insert("x".to_string(), ResolvedValue::Boolean(true));
    let resolved = resolve_argument(
        "query Q($x: Boolean) { f(v: [$x, false]) }",
        "v",
        &supplied,
    );
    assert_eq!(
        resolved,
        Ok(ResolvedValue::List(vec![
            ResolvedValue::Boolean(true),
            ResolvedValue::Boolean(false),
        ])),
    );
}

#[test]
fn undeclared_variable_without_value_fails() {
    let result = resolve_argument("query Q { f(v: $missing) }", "v", &VariableValues::new());
    assert!(matches!(
        result,
        Err(ValueResolutionError::UnresolvedVariable(
            VariableResolutionError::UndeclaredVariable { ref variable_name, .. }
        )) if variable_name == "missing"
    ));

    let mut supplied = VariableValues::new();
    supplied.insert("missing".to_string(), ResolvedValue::Int(3));
    assert_eq!(
        resolve_argument("query Q { f(v: $missing) }", "v", &supplied),
        Ok(ResolvedValue::Int(3)),
    );
}

/// Verifies that resolved values survive a serde round trip through bincode.
#[test]
fn resolved_values_serialize() {
    let resolved = resolve_literal("{name: \"R2\", tags: [ASTROMECH], height: 0.96, id: 3}")
        .unwrap();

    let config = bincode::config::standard();
    let bytes = bincode::serde::encode_to_vec(&resolved, config).unwrap();
    let (decoded, read): (ResolvedValue, usize) =
        bincode::serde::decode_from_slice(&bytes, config).unwrap();

    assert_eq!(read, bytes.len());
    assert_eq!(decoded, resolved);
}
