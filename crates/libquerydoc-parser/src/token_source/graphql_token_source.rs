use crate::token::GraphQLToken;

/// Marker trait for [`GraphQLToken`] lexers (iterators that generate
/// [`GraphQLToken`]s).
///
/// Implementors produce tokens one at a time; all lookahead and buffering is
/// handled by [`GraphQLTokenStream`](crate::GraphQLTokenStream).
///
/// Lexers are responsible for:
/// - Skipping ignored tokens (whitespace, commas, comments)
/// - Emitting [`GraphQLTokenKind::Error`](crate::token::GraphQLTokenKind::Error)
///   for malformed input instead of stopping
/// - Emitting a final [`GraphQLTokenKind::Eof`](crate::token::GraphQLTokenKind::Eof)
///   token
///
/// A token stream re-primes by cloning the source it was created with, so
/// sources must be cheap to clone before any token has been pulled.
pub trait GraphQLTokenSource: Iterator<Item = GraphQLToken> + Clone {}

impl<T> GraphQLTokenSource for T where T: Iterator<Item = GraphQLToken> + Clone {}
