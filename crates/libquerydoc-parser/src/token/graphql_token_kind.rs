use crate::GraphQLErrorNotes;

/// The kind of a GraphQL token.
///
/// Tokens never own their text: a token's lexeme is recovered by slicing the
/// [`SourceText`](crate::SourceText) with the token's span. This keeps every
/// kind except `Error` payload-free.
///
/// `true`, `false` and `null` are lexed as plain `Name` tokens. Whether a
/// name is a keyword, a boolean, null or an enum value depends on where it
/// appears, so the node builders make that call.
///
/// Numbers are lexed as a single `Number` kind for both integer and float
/// literals (including a leading `-`). Value builders classify the lexeme.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLTokenKind {
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `...`
    Ellipsis,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    /// A name matching `/[_A-Za-z][_0-9A-Za-z]*/`.
    Name,
    /// An integer or float literal.
    Number,
    /// A single-quoted (`"..."`) or block (`"""..."""`) string literal. The
    /// span covers the quotes.
    String,

    /// End of input. Always the final token of a stream.
    Eof,

    /// Text the lexer could not turn into a token. The token stream raises
    /// this as a syntax error as soon as the cursor lands on it.
    Error {
        message: String,
        error_notes: GraphQLErrorNotes,
    },
}

impl GraphQLTokenKind {
    /// Returns the punctuator's source text, if this kind is a punctuator.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            GraphQLTokenKind::At => Some("@"),
            GraphQLTokenKind::Bang => Some("!"),
            GraphQLTokenKind::Colon => Some(":"),
            GraphQLTokenKind::CurlyBraceClose => Some("}"),
            GraphQLTokenKind::CurlyBraceOpen => Some("{"),
            GraphQLTokenKind::Dollar => Some("$"),
            GraphQLTokenKind::Ellipsis => Some("..."),
            GraphQLTokenKind::Equals => Some("="),
            GraphQLTokenKind::ParenClose => Some(")"),
            GraphQLTokenKind::ParenOpen => Some("("),
            GraphQLTokenKind::SquareBracketClose => Some("]"),
            GraphQLTokenKind::SquareBracketOpen => Some("["),

            GraphQLTokenKind::Name
            | GraphQLTokenKind::Number
            | GraphQLTokenKind::String
            | GraphQLTokenKind::Eof
            | GraphQLTokenKind::Error { .. } => None,
        }
    }

    pub fn is_punctuator(&self) -> bool {
        self.as_punctuator_str().is_some()
    }

    /// Returns `true` if this token represents a lexer error.
    pub fn is_error(&self) -> bool {
        matches!(self, GraphQLTokenKind::Error { .. })
    }

    /// Compares variants only, ignoring any `Error` payload.
    pub fn same_kind(&self, other: &GraphQLTokenKind) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// A short human-readable description used in "expected X" messages.
    pub fn describe(&self) -> &'static str {
        match self {
            GraphQLTokenKind::Name => "name",
            GraphQLTokenKind::Number => "number",
            GraphQLTokenKind::String => "string",
            GraphQLTokenKind::Eof => "end of input",
            GraphQLTokenKind::Error { .. } => "invalid token",
            punctuator => punctuator.as_punctuator_str().unwrap_or("?"),
        }
    }
}
