//! Tests for `GraphQLParseError` rendering.

use crate::tests::utils;
use crate::GraphQLErrorNoteKind;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;

fn span(line: usize, start_col: usize, end_col: usize) -> GraphQLSourceSpan {
    GraphQLSourceSpan::new(
        SourcePosition::new(line, start_col, start_col, start_col),
        SourcePosition::new(line, end_col, end_col, end_col),
    )
}

#[test]
fn oneline_format_defaults_to_input() {
    let error = GraphQLParseError::new(
        "expected `:` after variable name",
        span(0, 16, 23),
        GraphQLParseErrorKind::InvalidSyntax,
    );
    assert_eq!(
        error.format_oneline(),
        "<input>:1:17: error: expected `:` after variable name",
    );
    assert_eq!(error.to_string(), error.format_oneline());
}

/// The detailed format underlines the primary span with `^` and note spans
/// with `-`.
#[test]
fn detailed_format_with_snippets() {
    let source = "query Q($episode Episode) { hero }";
    let mut error = GraphQLParseError::new(
        "expected `:` after variable name",
        span(0, 17, 24),
        GraphQLParseErrorKind::InvalidSyntax,
    );
    error.add_note_with_span("variable declared here", span(0, 8, 16));
    error.add_help("variables are declared as `$name: Type`");

    let rendered = error.format_detailed(Some(source));
    let expected = [
        "error: expected `:` after variable name",
        "  --> <input>:1:18",
        "   |",
        " 1 | query Q($episode Episode) { hero }",
        "   |                  ^^^^^^^",
        "   = note: variable declared here",
        "   |",
        " 1 | query Q($episode Episode) { hero }",
        "   |         --------",
        "   = help: variables are declared as `$name: Type`",
        "",
    ]
    .join("\n");
    assert_eq!(rendered, expected);
}

/// Snippet lines are found with the same terminators positions use, so a
/// lone `\r` starts a new line.
#[test]
fn detailed_format_after_carriage_return() {
    let source = "{ a }\r{ b(: 1) }";
    let error = utils::parse_err(source);
    let rendered = error.format_detailed(Some(source));
    assert!(rendered.contains("--> <input>:2:5\n"), "{rendered}");
    assert!(rendered.contains(" 2 | { b(: 1) }\n"), "{rendered}");
    assert!(rendered.contains("   |     ^"), "{rendered}");
}

#[test]
fn detailed_format_without_source() {
    let error = utils::parse_err("{ a ");
    let rendered = error.format_detailed(None);
    assert!(rendered.starts_with("error: unclosed `{` in selection set\n"));
    assert!(rendered.contains("= note: `{` opened here"));
    assert!(!rendered.contains(" | "));
}

#[test]
fn note_kinds() {
    let mut error = GraphQLParseError::new("msg", span(0, 0, 1), GraphQLParseErrorKind::InvalidSyntax);
    error.add_note("general");
    error.add_help("help");
    error.add_spec("https://spec.graphql.org/");
    let kinds: Vec<_> = error.notes().iter().map(|n| n.kind).collect();
    assert_eq!(
        kinds,
        vec![
            GraphQLErrorNoteKind::General,
            GraphQLErrorNoteKind::Help,
            GraphQLErrorNoteKind::Spec,
        ],
    );
}
