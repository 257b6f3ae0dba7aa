//! Cooking of raw string-literal lexemes into their runtime values.
//!
//! The parser never cooks strings: syntax nodes keep the raw lexeme (quotes
//! included) so that text spans round-trip exactly. Cooking happens when a
//! caller resolves a supplied value.

use crate::GraphQLStringParsingError;
use crate::source_text::split_lines;
use std::iter::Peekable;
use std::str::Chars;

/// Returns `true` if `raw` is a block (`"""`) string lexeme.
pub fn is_block_string(raw: &str) -> bool {
    raw.starts_with("\"\"\"")
}

/// Converts the raw text of a string literal (quotes included) into its
/// unescaped value.
///
/// - Single-quoted strings process `\n`, `\r`, `\t`, `\\`, `\"`, `\/`, `\b`,
///   `\f`, `\uXXXX` (including UTF-16 surrogate pairs) and `\u{X...}`.
/// - Block strings apply the common-indentation stripping algorithm and only
///   recognize the `\"""` escape.
pub fn parse_string_value(raw: &str) -> Result<String, GraphQLStringParsingError> {
    if is_block_string(raw) {
        parse_block_string(raw)
    } else {
        parse_single_line_string(raw)
    }
}

fn parse_single_line_string(raw: &str) -> Result<String, GraphQLStringParsingError> {
    if raw.len() < 2 || !raw.starts_with('"') || !raw.ends_with('"') {
        return Err(GraphQLStringParsingError::UnterminatedString);
    }
    let content = &raw[1..raw.len() - 1];

    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            Some('/') => result.push('/'),
            Some('b') => result.push('\u{0008}'),
            Some('f') => result.push('\u{000C}'),
            Some('u') => result.push(parse_unicode_escape(&mut chars)?),
            Some(other) => {
                return Err(GraphQLStringParsingError::InvalidEscapeSequence(format!(
                    "\\{other}"
                )));
            },
            None => {
                return Err(GraphQLStringParsingError::InvalidEscapeSequence(
                    "\\".to_string(),
                ));
            },
        }
    }

    Ok(result)
}

/// Parses the remainder of a `\u` escape (the `\u` is already consumed).
fn parse_unicode_escape(chars: &mut Peekable<Chars>) -> Result<char, GraphQLStringParsingError> {
    let invalid = |text: String| GraphQLStringParsingError::InvalidUnicodeEscape(text);

    if chars.peek() == Some(&'{') {
        chars.next();
        let mut hex = String::new();
        loop {
            match chars.next() {
                Some('}') => break,
                Some(c) if c.is_ascii_hexdigit() => hex.push(c),
                Some(c) => return Err(invalid(format!("\\u{{{hex}{c}"))),
                None => return Err(invalid(format!("\\u{{{hex}"))),
            }
        }
        return u32::from_str_radix(&hex, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| invalid(format!("\\u{{{hex}}}")));
    }

    let leading = read_fixed_hex(chars)?;
    if (0xD800..=0xDBFF).contains(&leading) {
        // A leading surrogate must be followed by `\uXXXX` with a trailing
        // surrogate.
        let mut lookahead = chars.clone();
        if lookahead.next() == Some('\\') && lookahead.next() == Some('u') {
            let trailing = read_fixed_hex(&mut lookahead)?;
            if (0xDC00..=0xDFFF).contains(&trailing) {
                *chars = lookahead;
                let code_point = 0x10000 + ((leading - 0xD800) << 10) + (trailing - 0xDC00);
                return char::from_u32(code_point)
                    .ok_or_else(|| invalid(format!("\\u{leading:04X}\\u{trailing:04X}")));
            }
        }
        return Err(invalid(format!("\\u{leading:04X}")));
    }

    char::from_u32(leading).ok_or_else(|| invalid(format!("\\u{leading:04X}")))
}

fn read_fixed_hex(chars: &mut Peekable<Chars>) -> Result<u32, GraphQLStringParsingError> {
    let mut hex = String::with_capacity(4);
    for _ in 0..4 {
        match chars.next() {
            Some(c) if c.is_ascii_hexdigit() => hex.push(c),
            Some(c) => {
                return Err(GraphQLStringParsingError::InvalidUnicodeEscape(format!(
                    "\\u{hex}{c}"
                )));
            },
            None => {
                return Err(GraphQLStringParsingError::InvalidUnicodeEscape(format!(
                    "\\u{hex}"
                )));
            },
        }
    }
    u32::from_str_radix(&hex, 16)
        .map_err(|_| GraphQLStringParsingError::InvalidUnicodeEscape(format!("\\u{hex}")))
}

/// <https://spec.graphql.org/September2025/#BlockStringValue()>
fn parse_block_string(raw: &str) -> Result<String, GraphQLStringParsingError> {
    if raw.len() < 6 || !raw.ends_with("\"\"\"") {
        return Err(GraphQLStringParsingError::UnterminatedString);
    }
    let content = raw[3..raw.len() - 3].replace("\\\"\"\"", "\"\"\"");
    let lines: Vec<&str> = split_lines(&content).collect();

    let common_indent = lines
        .iter()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start_matches([' ', '\t']).len())
        .min()
        .unwrap_or(0);

    let mut result_lines: Vec<&str> = lines
        .iter()
        .copied()
        .enumerate()
        .map(|(idx, line)| {
            if idx == 0 {
                line
            } else {
                line.get(common_indent..).unwrap_or(line)
            }
        })
        .collect();

    while result_lines.first().is_some_and(|l| l.trim().is_empty()) {
        result_lines.remove(0);
    }
    while result_lines.last().is_some_and(|l| l.trim().is_empty()) {
        result_lines.pop();
    }

    Ok(result_lines.join("\n"))
}
