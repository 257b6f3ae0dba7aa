use crate::token::GraphQLTokenKind;
use crate::ByteSpan;
use crate::GraphQLSourceSpan;

/// A GraphQL token: a kind plus the span of source text it was lexed from.
///
/// Tokens are produced in strictly increasing source-offset order and never
/// overlap one another.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLToken {
    pub kind: GraphQLTokenKind,
    pub span: GraphQLSourceSpan,
}

impl GraphQLToken {
    pub fn new(kind: GraphQLTokenKind, span: GraphQLSourceSpan) -> Self {
        Self { kind, span }
    }

    /// The byte range of this token's lexeme.
    pub fn byte_span(&self) -> ByteSpan {
        self.span.byte_span()
    }
}
