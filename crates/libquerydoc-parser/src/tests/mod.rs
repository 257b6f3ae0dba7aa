mod graphql_parse_error_tests;
mod graphql_token_stream_tests;
pub(crate) mod utils;
