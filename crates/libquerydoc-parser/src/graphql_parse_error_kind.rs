/// Categorizes syntax errors for programmatic handling.
///
/// Each variant carries only the data needed to act on the error. The
/// human-readable message lives on [`GraphQLParseError`](crate::GraphQLParseError)
/// and extra context lives in its notes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphQLParseErrorKind {
    /// A specific token (or one of a set of tokens) was required but
    /// something else was found.
    ///
    /// ```text
    /// query { user(id 1) }
    ///                 ^ expected `:`, found `1`
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        expected: Vec<String>,
        found: String,
    },

    /// The document ended before the current construct was complete.
    #[error("unexpected end of input")]
    UnexpectedEof {
        expected: Vec<String>,
    },

    /// The lexer could not form a token (unterminated string, invalid
    /// character, malformed number, ...). The lexer's message and notes are
    /// carried by the enclosing error.
    #[error("lexer error")]
    LexerError,

    /// A collection delimiter was opened but end of input was reached before
    /// the matching close. The opening location is attached as a note.
    #[error("unclosed delimiter: `{delimiter}`")]
    UnclosedDelimiter {
        delimiter: String,
    },

    /// A collection was closed with the wrong delimiter, e.g. `[1, 2)`.
    #[error("mismatched delimiter")]
    MismatchedDelimiter {
        expected: String,
        found: String,
    },

    /// A name was used where the grammar reserves it (`fragment on on T`).
    #[error("reserved name: `{name}`")]
    ReservedName {
        name: String,
    },

    /// Syntactically well-formed tokens that the grammar forbids in this
    /// position, e.g. a variable reference inside a variable's default value.
    #[error("invalid syntax")]
    InvalidSyntax,
}
