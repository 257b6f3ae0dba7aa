//! A fail-fast parser for GraphQL query documents.
//!
//! Text flows through three stages:
//!
//! 1. [`SourceText`] wraps the raw query and indexes its line starts.
//! 2. [`token_source::StrGraphQLTokenSource`] lexes it into payload-free
//!    tokens, consumed through a [`GraphQLTokenStream`] cursor.
//! 3. The [`node_builders`], one per grammar production, append nodes to an
//!    arena-backed [`syntax_tree::SyntaxTree`].
//!
//! [`GraphQLParser`] drives the whole pipeline. Syntax nodes reference their
//! text by [`ByteSpan`]; slice it back out with [`SourceText::slice`].

mod byte_span;
mod graphql_error_note;
mod graphql_parse_error;
mod graphql_parse_error_kind;
mod graphql_parser;
mod graphql_source_span;
mod graphql_string_parsing_error;
mod graphql_token_stream;
pub mod node_builders;
mod source_position;
mod source_text;
pub mod syntax_tree;
pub mod token;
pub mod token_source;

pub use byte_span::ByteSpan;
pub use graphql_error_note::GraphQLErrorNote;
pub use graphql_error_note::GraphQLErrorNoteKind;
pub use graphql_error_note::GraphQLErrorNotes;
pub use graphql_parse_error::GraphQLParseError;
pub use graphql_parse_error_kind::GraphQLParseErrorKind;
pub use graphql_parser::GraphQLParser;
pub use graphql_source_span::GraphQLSourceSpan;
pub use graphql_string_parsing_error::GraphQLStringParsingError;
pub use graphql_token_stream::GraphQLTokenStream;
pub use smallvec::smallvec;
pub use smallvec::SmallVec;
pub use source_position::SourcePosition;
pub use source_text::SourceText;

#[cfg(test)]
mod tests;
