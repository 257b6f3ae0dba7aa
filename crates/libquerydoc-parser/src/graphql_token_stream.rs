//! A cursor over a [`GraphQLTokenSource`] with a bounded lookahead buffer.

use std::collections::VecDeque;

use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;
use crate::token_source::StrGraphQLTokenSource;
use crate::GraphQLParseError;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;

/// A forward-only, re-primeable cursor over GraphQL tokens.
///
/// The stream exposes one token at a time as [`current()`](Self::current).
/// Inspection (`current`, `peek`, `matches*`) never moves the cursor;
/// [`prime()`](Self::prime) and [`advance()`](Self::advance) are the only
/// operations that do.
///
/// Lexer errors travel through the stream as `Error` tokens and are raised
/// as a [`GraphQLParseError`] the moment the cursor lands on one. Peeking at
/// an `Error` token does not raise.
///
/// Before the first `prime()`, the cursor sits on a synthetic `Eof` token at
/// offset zero.
///
/// # Internal Buffer Management
///
/// Tokens after the cursor live in a [`VecDeque`]. `advance()` pops from the
/// front in O(1); `peek_nth()` fills the back lazily from the token source.
/// Once the source yields `Eof`, that token is sticky: the cursor never
/// moves past it.
pub struct GraphQLTokenStream<'src, TTokenSource = StrGraphQLTokenSource<'src>>
where
    TTokenSource: GraphQLTokenSource,
{
    source_text: &'src str,

    /// Pristine copy of the token source, cloned on every `prime()`.
    initial_source: TTokenSource,
    token_source: TTokenSource,

    current: GraphQLToken,

    /// Unconsumed tokens after `current`.
    buffer: VecDeque<GraphQLToken>,

    /// End of the most recently consumed token.
    previous_end: SourcePosition,

    primed: bool,
}

impl<'src> GraphQLTokenStream<'src> {
    /// Creates an unprimed stream that lexes `source_text`.
    pub fn new(source_text: &'src str) -> Self {
        Self::from_token_source(source_text, StrGraphQLTokenSource::new(source_text))
    }
}

impl<'src, TTokenSource: GraphQLTokenSource> GraphQLTokenStream<'src, TTokenSource> {
    /// Creates an unprimed stream over an arbitrary token source whose token
    /// spans index into `source_text`.
    pub fn from_token_source(source_text: &'src str, token_source: TTokenSource) -> Self {
        Self {
            source_text,
            initial_source: token_source.clone(),
            token_source,
            current: synthetic_eof(SourcePosition::default()),
            buffer: VecDeque::new(),
            previous_end: SourcePosition::default(),
            primed: false,
        }
    }

    /// Rewinds to the beginning of the input and loads the first token.
    ///
    /// Fails if the first token is a lexer error.
    pub fn prime(&mut self) -> Result<(), GraphQLParseError> {
        self.token_source = self.initial_source.clone();
        self.buffer.clear();
        self.previous_end = SourcePosition::default();
        self.current = self.pull_token();
        self.primed = true;
        self.raise_if_error()
    }

    pub fn is_primed(&self) -> bool {
        self.primed
    }

    /// The token under the cursor.
    pub fn current(&self) -> &GraphQLToken {
        &self.current
    }

    /// The token after the cursor, without consuming anything.
    #[inline]
    pub fn peek(&mut self) -> &GraphQLToken {
        self.peek_nth(0)
    }

    /// The `n`th token after the cursor (`peek_nth(0)` is `peek()`).
    ///
    /// Past the end of input this keeps returning the `Eof` token.
    pub fn peek_nth(&mut self, n: usize) -> &GraphQLToken {
        self.ensure_buffer_has(n + 1);
        if n < self.buffer.len() {
            &self.buffer[n]
        } else {
            self.buffer.back().unwrap_or(&self.current)
        }
    }

    /// Moves the cursor one token forward and returns the token it left.
    ///
    /// At `Eof` the cursor stays put (and `Eof` is returned again). Fails if
    /// the new current token is a lexer error.
    pub fn advance(&mut self) -> Result<GraphQLToken, GraphQLParseError> {
        if self.is_at_end() {
            return Ok(self.current.clone());
        }

        self.ensure_buffer_has(1);
        let next = match self.buffer.pop_front() {
            Some(token) => token,
            None => synthetic_eof(self.current.span.end_exclusive.clone()),
        };
        let consumed = std::mem::replace(&mut self.current, next);
        self.previous_end = consumed.span.end_exclusive.clone();
        self.raise_if_error()?;
        Ok(consumed)
    }

    /// Returns `true` if the current token has the same kind as `kind`
    /// (any `Error` payload is ignored).
    pub fn matches(&self, kind: &GraphQLTokenKind) -> bool {
        self.current.kind.same_kind(kind)
    }

    /// Returns `true` if the current token is the name `keyword`.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        matches!(self.current.kind, GraphQLTokenKind::Name) && self.text(&self.current) == keyword
    }

    /// Returns `true` if the token after the cursor is the name `keyword`.
    pub fn peek_matches_keyword(&mut self, keyword: &str) -> bool {
        let source_text = self.source_text;
        let next = self.peek();
        matches!(next.kind, GraphQLTokenKind::Name) && slice(source_text, next) == keyword
    }

    /// Returns `true` once the cursor has reached `Eof`.
    pub fn is_at_end(&self) -> bool {
        matches!(self.current.kind, GraphQLTokenKind::Eof)
    }

    /// The source text of `token`.
    pub fn text(&self, token: &GraphQLToken) -> &'src str {
        slice(self.source_text, token)
    }

    /// The source text of the current token.
    pub fn current_text(&self) -> &'src str {
        self.text(&self.current)
    }

    /// The full input this stream lexes.
    pub fn source_text(&self) -> &'src str {
        self.source_text
    }

    /// End position of the most recently consumed token (the start of the
    /// input if nothing has been consumed).
    pub fn previous_end(&self) -> &SourcePosition {
        &self.previous_end
    }

    /// Number of lexed-but-unconsumed tokens after the cursor.
    pub fn current_buffer_len(&self) -> usize {
        self.buffer.len()
    }

    fn ensure_buffer_has(&mut self, count: usize) {
        while self.buffer.len() < count {
            let reached_eof = self
                .buffer
                .back()
                .map_or(self.primed && self.is_at_end(), |t| {
                    matches!(t.kind, GraphQLTokenKind::Eof)
                });
            if reached_eof {
                break;
            }
            let token = self.pull_token();
            self.buffer.push_back(token);
        }
    }

    /// Pulls the next token from the source. A source that runs dry without
    /// producing `Eof` gets one synthesized at the last known position.
    fn pull_token(&mut self) -> GraphQLToken {
        match self.token_source.next() {
            Some(token) => token,
            None => {
                let last_end = self
                    .buffer
                    .back()
                    .map_or(&self.current.span.end_exclusive, |t| &t.span.end_exclusive)
                    .clone();
                synthetic_eof(last_end)
            },
        }
    }

    fn raise_if_error(&self) -> Result<(), GraphQLParseError> {
        match &self.current.kind {
            GraphQLTokenKind::Error {
                message,
                error_notes,
            } => Err(GraphQLParseError::from_lexer_error(
                message.clone(),
                self.current.span.clone(),
                error_notes.clone(),
            )),
            _ => Ok(()),
        }
    }
}

fn slice<'src>(source_text: &'src str, token: &GraphQLToken) -> &'src str {
    source_text
        .get(token.byte_span().range())
        .unwrap_or_default()
}

fn synthetic_eof(at: SourcePosition) -> GraphQLToken {
    GraphQLToken::new(GraphQLTokenKind::Eof, GraphQLSourceSpan::empty_at(at))
}
