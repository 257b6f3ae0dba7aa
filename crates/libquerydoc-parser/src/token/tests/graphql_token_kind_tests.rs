//! Tests for `GraphQLTokenKind` helpers.

use crate::smallvec;
use crate::token::GraphQLTokenKind;
use crate::GraphQLErrorNote;

/// Verifies that every punctuator reports its source text and that
/// non-punctuators report none.
#[test]
fn punctuator_strings() {
    assert_eq!(GraphQLTokenKind::At.as_punctuator_str(), Some("@"));
    assert_eq!(GraphQLTokenKind::Ellipsis.as_punctuator_str(), Some("..."));
    assert_eq!(GraphQLTokenKind::SquareBracketOpen.as_punctuator_str(), Some("["));
    assert!(GraphQLTokenKind::Dollar.is_punctuator());

    assert_eq!(GraphQLTokenKind::Name.as_punctuator_str(), None);
    assert_eq!(GraphQLTokenKind::Eof.as_punctuator_str(), None);
    assert!(!GraphQLTokenKind::Number.is_punctuator());
}

/// Verifies that `same_kind` compares variants only, so two `Error` tokens
/// with different messages are still the same kind.
#[test]
fn same_kind_ignores_error_payload() {
    let first = GraphQLTokenKind::Error {
        message: "first".to_string(),
        error_notes: smallvec![],
    };
    let second = GraphQLTokenKind::Error {
        message: "second".to_string(),
        error_notes: smallvec![GraphQLErrorNote::help("try again")],
    };

    assert!(first.same_kind(&second));
    assert!(first.is_error());
    assert_ne!(first, second);
    assert!(!first.same_kind(&GraphQLTokenKind::Eof));
}

/// Verifies the descriptions used in "expected X" messages.
#[test]
fn describe_kinds() {
    assert_eq!(GraphQLTokenKind::Name.describe(), "name");
    assert_eq!(GraphQLTokenKind::Number.describe(), "number");
    assert_eq!(GraphQLTokenKind::String.describe(), "string");
    assert_eq!(GraphQLTokenKind::Eof.describe(), "end of input");
    assert_eq!(GraphQLTokenKind::CurlyBraceClose.describe(), "}");
}
