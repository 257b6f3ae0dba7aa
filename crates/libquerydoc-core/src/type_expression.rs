use libquerydoc_parser::token::GraphQLToken;
use libquerydoc_parser::token::GraphQLTokenKind;
use libquerydoc_parser::token_source::StrGraphQLTokenSource;

/// The declared type of a [`Variable`](crate::DocumentPartData::Variable),
/// such as `[Episode!]!`.
///
/// Only the shape is recorded here; whether `Episode` names a real input
/// type is for a schema-aware validator to decide.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeExpression {
    List {
        inner: Box<TypeExpression>,
        nullable: bool,
    },
    Named {
        name: String,
        nullable: bool,
    },
}

impl TypeExpression {
    /// Parses a type expression from its GraphQL text. Whitespace, commas and
    /// comments between tokens are ignored, as they are in a document.
    pub fn parse(text: &str) -> Result<Self, TypeExpressionError> {
        let tokens: Vec<GraphQLToken> = StrGraphQLTokenSource::new(text)
            .take_while(|token| !matches!(token.kind, GraphQLTokenKind::Eof))
            .collect();
        let mut cursor = TypeTokenCursor {
            text,
            tokens: &tokens,
            position: 0,
        };
        let expression = cursor.parse_type()?;
        match cursor.peek() {
            Some(token) => Err(TypeExpressionError::TrailingInput {
                found: cursor.text_of(token).to_string(),
            }),
            None => Ok(expression),
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List { .. })
    }

    /// Indicates if this level of the expression accepts `null` (i.e. is not
    /// followed by `!`).
    pub fn nullable(&self) -> bool {
        match self {
            Self::List { nullable, .. } | Self::Named { nullable, .. } => *nullable,
        }
    }

    /// The named type at the bottom of any list wrappers.
    pub fn innermost_name(&self) -> &str {
        match self {
            Self::List { inner, .. } => inner.innermost_name(),
            Self::Named { name, .. } => name.as_str(),
        }
    }

    /// Levels of list wrapping around the named type.
    pub fn list_depth(&self) -> usize {
        match self {
            Self::List { inner, .. } => 1 + inner.list_depth(),
            Self::Named { .. } => 0,
        }
    }
}

impl std::fmt::Display for TypeExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List { inner, nullable } => {
                write!(f, "[{inner}]{}", if *nullable { "" } else { "!" })
            },
            Self::Named { name, nullable } => {
                write!(f, "{name}{}", if *nullable { "" } else { "!" })
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TypeExpressionError {
    #[error("expected a type name or `[`, found end of input")]
    UnexpectedEnd,

    #[error("expected a type name or `[`, found `{found}`")]
    UnexpectedToken { found: String },

    #[error("list type is missing its closing `]`")]
    UnclosedList,

    #[error("unexpected `{found}` after the end of the type")]
    TrailingInput { found: String },
}

struct TypeTokenCursor<'a> {
    text: &'a str,
    tokens: &'a [GraphQLToken],
    position: usize,
}

impl<'a> TypeTokenCursor<'a> {
    fn peek(&self) -> Option<&'a GraphQLToken> {
        self.tokens.get(self.position)
    }

    fn text_of(&self, token: &GraphQLToken) -> &'a str {
        let start = token.span.start_inclusive.byte_offset();
        let end = token.span.end_exclusive.byte_offset();
        self.text.get(start..end).unwrap_or_default()
    }

    fn eat(&mut self, kind: &GraphQLTokenKind) -> bool {
        match self.peek() {
            Some(token) if token.kind.same_kind(kind) => {
                self.position += 1;
                true
            },
            _ => false,
        }
    }

    fn parse_type(&mut self) -> Result<TypeExpression, TypeExpressionError> {
        let Some(token) = self.peek() else {
            return Err(TypeExpressionError::UnexpectedEnd);
        };
        self.position += 1;

        let expression_without_bang = match token.kind {
            GraphQLTokenKind::Name => TypeExpression::Named {
                name: self.text_of(token).to_string(),
                nullable: true,
            },
            GraphQLTokenKind::SquareBracketOpen => {
                let inner = self.parse_type()?;
                if !self.eat(&GraphQLTokenKind::SquareBracketClose) {
                    return Err(TypeExpressionError::UnclosedList);
                }
                TypeExpression::List {
                    inner: Box::new(inner),
                    nullable: true,
                }
            },
            _ => {
                return Err(TypeExpressionError::UnexpectedToken {
                    found: self.text_of(token).to_string(),
                });
            },
        };

        if !self.eat(&GraphQLTokenKind::Bang) {
            return Ok(expression_without_bang);
        }
        Ok(match expression_without_bang {
            TypeExpression::List { inner, .. } => TypeExpression::List {
                inner,
                nullable: false,
            },
            TypeExpression::Named { name, .. } => TypeExpression::Named {
                name,
                nullable: false,
            },
        })
    }
}
