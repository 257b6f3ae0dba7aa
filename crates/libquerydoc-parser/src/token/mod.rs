//! Core token types produced by the lexer and consumed by the node builders.

mod graphql_token;
mod graphql_token_kind;
mod string_value;

pub use graphql_token::GraphQLToken;
pub use graphql_token_kind::GraphQLTokenKind;
pub use string_value::is_block_string;
pub use string_value::parse_string_value;

#[cfg(test)]
mod tests;
