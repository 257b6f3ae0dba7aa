//! Tests for `GraphQLTokenStream`.

use crate::tests::utils;
use crate::token::GraphQLTokenKind;
use crate::GraphQLParseErrorKind;
use crate::GraphQLTokenStream;

// =============================================================================
// Priming
// =============================================================================

/// Before priming the cursor sits on a synthetic `Eof`.
#[test]
fn unprimed_stream_is_at_eof() {
    let stream = GraphQLTokenStream::new("query");
    assert!(!stream.is_primed());
    assert!(stream.is_at_end());
}

#[test]
fn prime_loads_first_token() {
    let mut stream = GraphQLTokenStream::new("  query Q");
    stream.prime().unwrap();
    assert!(stream.is_primed());
    assert!(stream.matches_keyword("query"));
    assert_eq!(stream.current_text(), "query");
}

/// Priming again rewinds to the beginning.
#[test]
fn reprime_rewinds() {
    let mut stream = utils::primed_stream("a b c");
    stream.advance().unwrap();
    stream.advance().unwrap();
    assert_eq!(stream.current_text(), "c");

    stream.prime().unwrap();
    assert_eq!(stream.current_text(), "a");
    assert_eq!(stream.previous_end().byte_offset(), 0);
}

#[test]
fn prime_raises_leading_lexer_error() {
    let mut stream = GraphQLTokenStream::new("?");
    let error = stream.prime().unwrap_err();
    assert_eq!(error.kind(), &GraphQLParseErrorKind::LexerError);
    assert_eq!(error.message(), "Unexpected character `?`");
}

// =============================================================================
// Inspection never moves the cursor
// =============================================================================

#[test]
fn peek_does_not_advance() {
    let mut stream = utils::primed_stream("a b c");
    let first_peek = stream.peek().clone();
    let second_peek = stream.peek().clone();
    assert_eq!(first_peek, second_peek);
    assert_eq!(stream.text(&first_peek), "b");
    assert_eq!(stream.current_text(), "a");
}

#[test]
fn peek_nth_looks_ahead_and_sticks_at_eof() {
    let mut stream = utils::primed_stream("a b");
    assert_eq!(stream.peek_nth(0).kind, GraphQLTokenKind::Name);
    assert_eq!(stream.peek_nth(1).kind, GraphQLTokenKind::Eof);
    assert_eq!(stream.peek_nth(5).kind, GraphQLTokenKind::Eof);
    assert_eq!(stream.current_text(), "a");
    assert_eq!(stream.current_buffer_len(), 2);
}

#[test]
fn matches_checks_kind_only() {
    let stream = utils::primed_stream("{");
    assert!(stream.matches(&GraphQLTokenKind::CurlyBraceOpen));
    assert!(!stream.matches(&GraphQLTokenKind::CurlyBraceClose));
    assert!(!stream.matches_keyword("{"));
}

#[test]
fn peek_matches_keyword() {
    let mut stream = utils::primed_stream("... on User");
    assert!(stream.peek_matches_keyword("on"));
    assert!(!stream.peek_matches_keyword("User"));
}

// =============================================================================
// Advancing
// =============================================================================

/// `advance()` returns the token it moved off of.
#[test]
fn advance_returns_consumed_token() {
    let mut stream = utils::primed_stream("hero { name }");
    let consumed = stream.advance().unwrap();
    assert_eq!(stream.text(&consumed), "hero");
    assert!(stream.matches(&GraphQLTokenKind::CurlyBraceOpen));
    assert_eq!(stream.previous_end().byte_offset(), 4);
}

#[test]
fn advance_at_eof_stays_at_eof() {
    let mut stream = utils::primed_stream("a");
    stream.advance().unwrap();
    assert!(stream.is_at_end());
    let again = stream.advance().unwrap();
    assert_eq!(again.kind, GraphQLTokenKind::Eof);
    assert!(stream.is_at_end());
}

/// Lexer errors surface when the cursor lands on them, not when peeked.
#[test]
fn lexer_error_surfaces_on_advance() {
    let mut stream = utils::primed_stream("a \"unterminated");
    assert!(stream.peek().kind.is_error());
    assert_eq!(stream.current_text(), "a");

    let error = stream.advance().unwrap_err();
    assert_eq!(error.kind(), &GraphQLParseErrorKind::LexerError);
    assert_eq!(error.span().start_inclusive.byte_offset(), 2);
    assert!(!error.notes().is_empty());
}

// =============================================================================
// Custom token sources
// =============================================================================

/// A source that runs dry without `Eof` gets one synthesized after its last
/// token.
#[test]
fn synthesizes_eof_for_exhausted_source() {
    let tokens = vec![
        utils::mock_token(GraphQLTokenKind::Name, 0, 3),
        utils::mock_token(GraphQLTokenKind::Colon, 3, 4),
    ];
    let mut stream = GraphQLTokenStream::from_token_source("abc:", tokens.into_iter());
    stream.prime().unwrap();
    assert_eq!(stream.current_text(), "abc");
    stream.advance().unwrap();
    assert!(stream.matches(&GraphQLTokenKind::Colon));
    stream.advance().unwrap();
    assert!(stream.is_at_end());
    assert_eq!(stream.current().span.start_inclusive.byte_offset(), 4);
}
