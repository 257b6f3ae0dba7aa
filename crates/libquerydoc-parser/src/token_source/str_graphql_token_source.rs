//! A lexer over `&str` input.
//!
//! # Features
//!
//! - **Zero-copy**: tokens carry spans only; lexeme text is sliced from the
//!   source on demand
//! - **Dual column tracking**: every position records both the UTF-8
//!   character column and the UTF-16 code unit column
//! - **Ignored tokens are skipped**: whitespace, commas, BOMs and `#` comments
//!   consume source offsets but are never emitted
//! - **Errors are tokens**: malformed input produces an `Error` token; the
//!   token stream raises it when the cursor reaches it
//!
//! # Usage
//!
//! ```rust
//! use libquerydoc_parser::token::GraphQLTokenKind;
//! use libquerydoc_parser::token_source::StrGraphQLTokenSource;
//!
//! let kinds: Vec<_> = StrGraphQLTokenSource::new("{ name }")
//!     .map(|token| token.kind)
//!     .collect();
//! assert_eq!(kinds, vec![
//!     GraphQLTokenKind::CurlyBraceOpen,
//!     GraphQLTokenKind::Name,
//!     GraphQLTokenKind::CurlyBraceClose,
//!     GraphQLTokenKind::Eof,
//! ]);
//! ```

use crate::smallvec;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::GraphQLErrorNote;
use crate::GraphQLErrorNotes;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;

const INT_VALUE_SPEC_URL: &str = "https://spec.graphql.org/September2025/#sec-Int-Value";
const FLOAT_VALUE_SPEC_URL: &str = "https://spec.graphql.org/September2025/#sec-Float-Value";

/// A lexer that produces [`GraphQLToken`]s from a `&str`.
///
/// The final token is always `Eof`; after it, the iterator is exhausted.
/// Every non-`Eof` token consumes at least one character, so lexing
/// terminates in time proportional to the input length.
#[derive(Clone)]
pub struct StrGraphQLTokenSource<'src> {
    source: &'src str,

    /// The remaining text to lex is `&source[curr_byte_offset..]`.
    curr_byte_offset: usize,

    curr_line: usize,
    curr_col_utf8: usize,
    curr_col_utf16: usize,

    /// Set after a `\r` so that the `\n` of a `\r\n` pair doesn't count as a
    /// second line break.
    last_char_was_cr: bool,

    finished: bool,
}

impl<'src> StrGraphQLTokenSource<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 0,
            curr_col_utf8: 0,
            curr_col_utf16: 0,
            last_char_was_cr: false,
            finished: false,
        }
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(
            self.curr_line,
            self.curr_col_utf8,
            self.curr_col_utf16,
            self.curr_byte_offset,
        )
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes the next character, updating line and column tracking.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;

        match ch {
            '\n' if self.last_char_was_cr => {
                self.last_char_was_cr = false;
            },
            '\n' | '\r' => {
                self.curr_line += 1;
                self.curr_col_utf8 = 0;
                self.curr_col_utf16 = 0;
                self.last_char_was_cr = ch == '\r';
            },
            _ => {
                self.curr_col_utf8 += 1;
                self.curr_col_utf16 += ch.len_utf16();
                self.last_char_was_cr = false;
            },
        }

        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    fn consume_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek_char() {
            if !pred(ch) {
                break;
            }
            self.consume();
        }
    }

    fn make_span(&self, start: SourcePosition) -> GraphQLSourceSpan {
        GraphQLSourceSpan::new(start, self.curr_position())
    }

    fn make_token(&self, kind: GraphQLTokenKind, start: SourcePosition) -> GraphQLToken {
        GraphQLToken::new(kind, self.make_span(start))
    }

    fn make_error(
        &self,
        start: SourcePosition,
        message: impl Into<String>,
        error_notes: GraphQLErrorNotes,
    ) -> GraphQLToken {
        self.make_token(
            GraphQLTokenKind::Error {
                message: message.into(),
                error_notes,
            },
            start,
        )
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    fn next_token(&mut self) -> GraphQLToken {
        self.skip_ignored();
        let start = self.curr_position();

        let punctuator = match self.peek_char() {
            None => return self.make_token(GraphQLTokenKind::Eof, start),
            Some('!') => GraphQLTokenKind::Bang,
            Some('$') => GraphQLTokenKind::Dollar,
            Some('(') => GraphQLTokenKind::ParenOpen,
            Some(')') => GraphQLTokenKind::ParenClose,
            Some(':') => GraphQLTokenKind::Colon,
            Some('=') => GraphQLTokenKind::Equals,
            Some('@') => GraphQLTokenKind::At,
            Some('[') => GraphQLTokenKind::SquareBracketOpen,
            Some(']') => GraphQLTokenKind::SquareBracketClose,
            Some('{') => GraphQLTokenKind::CurlyBraceOpen,
            Some('}') => GraphQLTokenKind::CurlyBraceClose,
            Some('.') => return self.lex_dot_or_ellipsis(start),
            Some('"') => return self.lex_string(start),
            Some(c) if is_name_start(c) => return self.lex_name(start),
            Some(c) if c == '-' || c.is_ascii_digit() => return self.lex_number(start),
            Some(_) => return self.lex_invalid_character(start),
        };

        self.consume();
        self.make_token(punctuator, start)
    }

    /// Skips whitespace, line terminators, BOMs, commas and comments.
    ///
    /// <https://spec.graphql.org/September2025/#sec-Language.Source-Text.Ignored-Tokens>
    fn skip_ignored(&mut self) {
        loop {
            match self.peek_char() {
                Some(' ' | '\t' | '\n' | '\r' | ',' | '\u{FEFF}') => {
                    self.consume();
                },
                Some('#') => self.skip_comment(),
                _ => break,
            }
        }
    }

    /// Skips a `#` comment up to (not including) the next line terminator.
    fn skip_comment(&mut self) {
        let rest = self.remaining().as_bytes();
        let comment_len = memchr::memchr2(b'\n', b'\r', rest).unwrap_or(rest.len());
        let comment = &self.source[self.curr_byte_offset..self.curr_byte_offset + comment_len];

        // Comments never span lines, so only the columns need updating.
        self.curr_col_utf8 += comment.chars().count();
        self.curr_col_utf16 += comment.encode_utf16().count();
        self.curr_byte_offset += comment_len;
        self.last_char_was_cr = false;
    }

    // =========================================================================
    // Dot / Ellipsis lexing
    // =========================================================================

    /// Lexes `...`, or an error with a hint for near-misses like `..` and
    /// `. .` on the same line.
    fn lex_dot_or_ellipsis(&mut self, start: SourcePosition) -> GraphQLToken {
        if self.remaining().starts_with("...") {
            self.consume();
            self.consume();
            self.consume();
            return self.make_token(GraphQLTokenKind::Ellipsis, start);
        }

        let first_dot_line = self.curr_line;
        self.consume();

        // Count further dots on the same line, allowing spaces between them.
        let mut dot_count = 1;
        let mut spaced = false;
        while dot_count < 3 {
            let mut lookahead = 0;
            while matches!(self.peek_char_nth(lookahead), Some(' ' | '\t')) {
                lookahead += 1;
            }
            if self.peek_char_nth(lookahead) != Some('.') || self.curr_line != first_dot_line {
                break;
            }
            spaced |= lookahead > 0;
            for _ in 0..=lookahead {
                self.consume();
            }
            dot_count += 1;
        }

        match (dot_count, spaced) {
            (1, _) => self.make_error(start, "Unexpected `.`", smallvec![]),
            (2, false) => self.make_error(
                start,
                "Unexpected `..` (use `...` for spread operator)",
                smallvec![GraphQLErrorNote::help(
                    "Add one more `.` to form the spread operator `...`"
                )],
            ),
            _ => self.make_error(
                start,
                "Unexpected spaced dots (use `...` for spread operator)",
                smallvec![GraphQLErrorNote::help(
                    "These dots may have been intended to form a `...` spread operator. Try \
                     removing the spacing between the dots."
                )],
            ),
        }
    }

    // =========================================================================
    // Name lexing
    // =========================================================================

    /// Lexes `/[_A-Za-z][_0-9A-Za-z]*/`.
    fn lex_name(&mut self, start: SourcePosition) -> GraphQLToken {
        self.consume();
        self.consume_while(is_name_continue);
        self.make_token(GraphQLTokenKind::Name, start)
    }

    // =========================================================================
    // Number lexing
    // =========================================================================

    /// Lexes an integer or float literal as a single `Number` token:
    ///
    /// - optional `-`
    /// - integer part: `0` or `[1-9][0-9]*`
    /// - optional fraction: `.[0-9]+`
    /// - optional exponent: `[eE][+-]?[0-9]+`
    ///
    /// A number may not be directly followed by `.` or a name-start character.
    fn lex_number(&mut self, start: SourcePosition) -> GraphQLToken {
        let num_start = self.curr_byte_offset;

        if self.peek_char() == Some('-') {
            self.consume();
        }

        match self.peek_char() {
            Some('0') => {
                self.consume();
                if self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
                    return self.lex_number_error(
                        start,
                        num_start,
                        "Invalid number: leading zeros are not allowed",
                        INT_VALUE_SPEC_URL,
                    );
                }
            },
            Some(ch) if ch.is_ascii_digit() => {
                self.consume_while(|ch| ch.is_ascii_digit());
            },
            _ => return self.make_error(start, "Unexpected `-`", smallvec![]),
        }

        if self.peek_char() == Some('.') && self.peek_char_nth(1) != Some('.') {
            self.consume();
            if !self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
                return self.lex_number_error(
                    start,
                    num_start,
                    "Invalid number: expected digit after `.`",
                    FLOAT_VALUE_SPEC_URL,
                );
            }
            self.consume_while(|ch| ch.is_ascii_digit());
        }

        if let Some('e' | 'E') = self.peek_char() {
            self.consume();
            if let Some('+' | '-') = self.peek_char() {
                self.consume();
            }
            if !self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
                return self.lex_number_error(
                    start,
                    num_start,
                    "Invalid number: exponent must have at least one digit",
                    FLOAT_VALUE_SPEC_URL,
                );
            }
            self.consume_while(|ch| ch.is_ascii_digit());
        }

        if let Some(ch) = self.peek_char()
            && (ch == '.' || is_name_start(ch))
        {
            return self.lex_number_error(
                start,
                num_start,
                "Invalid number: unexpected character after number",
                INT_VALUE_SPEC_URL,
            );
        }

        self.make_token(GraphQLTokenKind::Number, start)
    }

    /// Consumes the rest of a malformed number and reports it as one error.
    fn lex_number_error(
        &mut self,
        start: SourcePosition,
        num_start: usize,
        message: &str,
        spec_url: &str,
    ) -> GraphQLToken {
        self.consume_while(|ch| {
            ch.is_ascii_alphanumeric() || matches!(ch, '.' | '+' | '-' | '_')
        });
        let invalid_text = &self.source[num_start..self.curr_byte_offset];
        self.make_error(
            start,
            format!("{message}: `{invalid_text}`"),
            smallvec![GraphQLErrorNote::spec(spec_url)],
        )
    }

    // =========================================================================
    // String lexing
    // =========================================================================

    /// Lexes a single-quoted string. Escapes are skipped over but not
    /// interpreted; the token's span covers the raw lexeme.
    fn lex_string(&mut self, start: SourcePosition) -> GraphQLToken {
        if self.remaining().starts_with("\"\"\"") {
            return self.lex_block_string(start);
        }

        self.consume();
        loop {
            match self.peek_char() {
                None => {
                    return self.make_error(
                        start.clone(),
                        "Unterminated string literal",
                        smallvec![
                            GraphQLErrorNote::general_with_span(
                                "String started here",
                                GraphQLSourceSpan::empty_at(start),
                            ),
                            GraphQLErrorNote::help("Add closing `\"`"),
                        ],
                    );
                },
                Some('\n' | '\r') => {
                    return self.make_error(
                        start,
                        "Unterminated string literal",
                        smallvec![
                            GraphQLErrorNote::general(
                                "Single-line strings cannot contain unescaped newlines"
                            ),
                            GraphQLErrorNote::help(
                                "Use a block string (triple quotes) for multi-line strings, \
                                 or escape the newline with `\\n`"
                            ),
                        ],
                    );
                },
                Some('"') => {
                    self.consume();
                    break;
                },
                Some('\\') => {
                    self.consume();
                    if !matches!(self.peek_char(), None | Some('\n' | '\r')) {
                        self.consume();
                    }
                },
                Some(_) => {
                    self.consume();
                },
            }
        }

        self.make_token(GraphQLTokenKind::String, start)
    }

    /// Lexes a `"""` block string. Quotes and line breaks inside the block
    /// are kept verbatim; only `\"""` is treated specially.
    fn lex_block_string(&mut self, start: SourcePosition) -> GraphQLToken {
        for _ in 0..3 {
            self.consume();
        }

        loop {
            let rest = self.remaining();
            if rest.is_empty() {
                return self.make_error(
                    start.clone(),
                    "Unterminated block string",
                    smallvec![
                        GraphQLErrorNote::general_with_span(
                            "Block string started here",
                            GraphQLSourceSpan::empty_at(start),
                        ),
                        GraphQLErrorNote::help("Add closing `\"\"\"`"),
                    ],
                );
            }
            if rest.starts_with("\\\"\"\"") {
                for _ in 0..4 {
                    self.consume();
                }
            } else if rest.starts_with("\"\"\"") {
                for _ in 0..3 {
                    self.consume();
                }
                break;
            } else {
                self.consume();
            }
        }

        self.make_token(GraphQLTokenKind::String, start)
    }

    // =========================================================================
    // Invalid character handling
    // =========================================================================

    fn lex_invalid_character(&mut self, start: SourcePosition) -> GraphQLToken {
        let description = self.peek_char().map(describe_char).unwrap_or_default();
        self.consume();
        self.make_error(start, format!("Unexpected character {description}"), smallvec![])
    }
}

impl Iterator for StrGraphQLTokenSource<'_> {
    type Item = GraphQLToken;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if matches!(token.kind, GraphQLTokenKind::Eof) {
            self.finished = true;
        }
        Some(token)
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// <https://spec.graphql.org/September2025/#NameStart>
fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

/// <https://spec.graphql.org/September2025/#NameContinue>
fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

/// Describes a character for error messages. Invisible characters include
/// their code point so the user can find them.
fn describe_char(ch: char) -> String {
    if ch.is_control() || ch.is_whitespace() || is_invisible_format_char(ch) {
        format!("`{}` (U+{:04X})", ch.escape_default(), ch as u32)
    } else {
        format!("`{ch}`")
    }
}

/// Zero-width and bidi formatting characters that render as nothing.
fn is_invisible_format_char(ch: char) -> bool {
    matches!(
        ch,
        '\u{00AD}'
            | '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206F}'
    )
}
