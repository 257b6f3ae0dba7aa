//! Token expectation and delimiter helpers shared by the node builders.

use crate::ByteSpan;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;
use crate::GraphQLTokenStream;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;

/// The collection a delimiter pair encloses, for error messages.
#[derive(Debug, Clone, Copy)]
pub(crate) enum DelimiterContext {
    /// `{ field ... }` in operations, fragments and fields
    SelectionSet,
    /// `(arg: value)` on fields and directives
    Arguments,
    /// `($var: Type)` on operations
    VariableDefinitions,
    /// `[Type]` in variable type annotations
    ListType,
    /// `[value, ...]`
    ListValue,
    /// `{ field: value }`
    ObjectValue,
}

impl DelimiterContext {
    fn description(&self) -> &'static str {
        match self {
            DelimiterContext::SelectionSet => "selection set",
            DelimiterContext::Arguments => "arguments",
            DelimiterContext::VariableDefinitions => "variable definitions",
            DelimiterContext::ListType => "list type annotation",
            DelimiterContext::ListValue => "list value",
            DelimiterContext::ObjectValue => "object value",
        }
    }

    fn open_str(&self) -> &'static str {
        match self {
            DelimiterContext::SelectionSet | DelimiterContext::ObjectValue => "{",
            DelimiterContext::Arguments | DelimiterContext::VariableDefinitions => "(",
            DelimiterContext::ListType | DelimiterContext::ListValue => "[",
        }
    }

    fn open_kind(&self) -> GraphQLTokenKind {
        match self {
            DelimiterContext::SelectionSet | DelimiterContext::ObjectValue => {
                GraphQLTokenKind::CurlyBraceOpen
            },
            DelimiterContext::Arguments | DelimiterContext::VariableDefinitions => {
                GraphQLTokenKind::ParenOpen
            },
            DelimiterContext::ListType | DelimiterContext::ListValue => {
                GraphQLTokenKind::SquareBracketOpen
            },
        }
    }

    fn close_kind(&self) -> GraphQLTokenKind {
        match self {
            DelimiterContext::SelectionSet | DelimiterContext::ObjectValue => {
                GraphQLTokenKind::CurlyBraceClose
            },
            DelimiterContext::Arguments | DelimiterContext::VariableDefinitions => {
                GraphQLTokenKind::ParenClose
            },
            DelimiterContext::ListType | DelimiterContext::ListValue => {
                GraphQLTokenKind::SquareBracketClose
            },
        }
    }
}

/// A human-readable rendering of a token for "found X" messages.
pub(crate) fn display_token(stream: &GraphQLTokenStream<'_>, token: &GraphQLToken) -> String {
    match &token.kind {
        GraphQLTokenKind::Name | GraphQLTokenKind::Number => stream.text(token).to_string(),
        GraphQLTokenKind::String => "string".to_string(),
        other => other.describe().to_string(),
    }
}

/// Builds the error for "the current token is not any of `expected`".
///
/// At end of input this is an `UnexpectedEof`, anchored to the end of the
/// last consumed token; otherwise it is an `UnexpectedToken` on the current
/// token.
pub(crate) fn unexpected(
    stream: &GraphQLTokenStream<'_>,
    expected: &[&str],
    context: &str,
) -> GraphQLParseError {
    let expected_list = expected
        .iter()
        .map(|e| format!("`{e}`"))
        .collect::<Vec<_>>()
        .join(" or ");
    let expected_owned: Vec<String> = expected.iter().map(|e| e.to_string()).collect();

    if stream.is_at_end() {
        return GraphQLParseError::new(
            format!("expected {expected_list} {context}, found end of input"),
            GraphQLSourceSpan::empty_at(stream.previous_end().clone()),
            GraphQLParseErrorKind::UnexpectedEof {
                expected: expected_owned,
            },
        );
    }

    let current = stream.current();
    let found = display_token(stream, current);
    GraphQLParseError::new(
        format!("expected {expected_list} {context}, found `{found}`"),
        current.span.clone(),
        GraphQLParseErrorKind::UnexpectedToken {
            expected: expected_owned,
            found,
        },
    )
}

/// Consumes the current token if it is `kind`; errors otherwise.
pub(crate) fn expect(
    stream: &mut GraphQLTokenStream<'_>,
    kind: &GraphQLTokenKind,
    context: &str,
) -> Result<GraphQLToken, GraphQLParseError> {
    if !stream.matches(kind) {
        return Err(unexpected(stream, &[kind.describe()], context));
    }
    stream.advance()
}

/// Consumes the current token if it is a `Name`; errors otherwise.
///
/// `true`, `false` and `null` are names like any other here.
pub(crate) fn expect_name(
    stream: &mut GraphQLTokenStream<'_>,
    context: &str,
) -> Result<GraphQLToken, GraphQLParseError> {
    expect(stream, &GraphQLTokenKind::Name, context)
}

/// Consumes the current token if it is the name `keyword`; errors otherwise.
pub(crate) fn expect_keyword(
    stream: &mut GraphQLTokenStream<'_>,
    keyword: &str,
    context: &str,
) -> Result<GraphQLToken, GraphQLParseError> {
    if !stream.matches_keyword(keyword) {
        return Err(unexpected(stream, &[keyword], context));
    }
    stream.advance()
}

/// Consumes the opening delimiter of a collection, returning its token so the
/// collection loop can point back at it.
pub(crate) fn open_delimiter(
    stream: &mut GraphQLTokenStream<'_>,
    context: DelimiterContext,
) -> Result<GraphQLToken, GraphQLParseError> {
    expect(
        stream,
        &context.open_kind(),
        &format!("to open {}", context.description()),
    )
}

/// Checks whether a collection loop should stop.
///
/// - On the collection's closer: consumes it and returns `Ok(true)`.
/// - On end of input: `UnclosedDelimiter`, with a note at `open`.
/// - On some other closer: `MismatchedDelimiter`.
/// - Otherwise: `Ok(false)`; the caller parses another item.
pub(crate) fn close_delimiter(
    stream: &mut GraphQLTokenStream<'_>,
    open: &GraphQLToken,
    context: DelimiterContext,
) -> Result<bool, GraphQLParseError> {
    let close_kind = context.close_kind();
    if stream.matches(&close_kind) {
        stream.advance()?;
        return Ok(true);
    }

    let open_str = context.open_str();
    let close_str = close_kind.describe();

    if stream.is_at_end() {
        let mut error = GraphQLParseError::new(
            format!("unclosed `{open_str}` in {}", context.description()),
            GraphQLSourceSpan::empty_at(stream.previous_end().clone()),
            GraphQLParseErrorKind::UnclosedDelimiter {
                delimiter: open_str.to_string(),
            },
        );
        error.add_note_with_span(format!("`{open_str}` opened here"), open.span.clone());
        error.add_help(format!("add a closing `{close_str}`"));
        return Err(error);
    }

    let is_other_closer = matches!(
        stream.current().kind,
        GraphQLTokenKind::CurlyBraceClose
            | GraphQLTokenKind::ParenClose
            | GraphQLTokenKind::SquareBracketClose
    );
    if is_other_closer {
        let found = stream.current().kind.describe().to_string();
        let mut error = GraphQLParseError::new(
            format!(
                "mismatched delimiter: expected `{close_str}` to close {}, found `{found}`",
                context.description(),
            ),
            stream.current().span.clone(),
            GraphQLParseErrorKind::MismatchedDelimiter {
                expected: close_str.to_string(),
                found,
            },
        );
        error.add_note_with_span(format!("`{open_str}` opened here"), open.span.clone());
        return Err(error);
    }

    Ok(false)
}

/// The span from the start of `first` to the end of the last consumed token.
pub(crate) fn span_through_previous(
    stream: &GraphQLTokenStream<'_>,
    first: &GraphQLToken,
) -> ByteSpan {
    ByteSpan::from_offsets(
        first.span.start_inclusive.byte_offset(),
        stream.previous_end().byte_offset(),
    )
}
