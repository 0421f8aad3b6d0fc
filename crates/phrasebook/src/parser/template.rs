//! Template scanner using winnow.
//!
//! Scans a template string into literal and token segments. A token is the
//! pattern prefix, the shortest run of text up to the next suffix, and the
//! suffix. The token name cannot span a line break; when it would, the prefix
//! is treated as literal text and scanning resumes at the next character.

use winnow::combinator::{alt, repeat};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{any, literal, take_until};

use super::ast::{Segment, Template};
use super::pattern::{PLURAL_DELIMITER, TokenPattern};

/// Scan a template string into segments.
pub fn parse_template(input: &str, pattern: &TokenPattern) -> Template {
    let mut remaining = input;
    let scanned: ModalResult<Vec<Segment>> =
        repeat(0.., |i: &mut &str| segment(i, pattern)).parse_next(&mut remaining);
    match scanned {
        Ok(segments) if remaining.is_empty() => Template {
            segments: merge_literals(segments),
        },
        // Unreachable: every character scans as a literal.
        _ => Template::literal(input),
    }
}

/// Split a multi-form template on the plural delimiter.
///
/// A template without the delimiter yields a single form.
pub fn split_forms(template: &str) -> Vec<&str> {
    template.split(PLURAL_DELIMITER).collect()
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other @ Segment::Token { .. } => result.push(other),
        }
    }

    result
}

/// Parse a single segment (token or literal).
fn segment(input: &mut &str, pattern: &TokenPattern) -> ModalResult<Segment> {
    alt((|i: &mut &str| token(i, pattern), literal_char)).parse_next(input)
}

/// Parse a single literal character.
fn literal_char(input: &mut &str) -> ModalResult<Segment> {
    any.map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}

/// Parse a token: prefix, name, suffix.
fn token(input: &mut &str, pattern: &TokenPattern) -> ModalResult<Segment> {
    let start = *input;
    let (_, name, _) = (
        literal(pattern.prefix()),
        take_until(0.., pattern.suffix()),
        literal(pattern.suffix()),
    )
        .parse_next(input)?;

    if name.contains(is_line_terminator) {
        return Err(ErrMode::Backtrack(ContextError::new()));
    }

    let consumed = start.len() - input.len();
    Ok(Segment::Token {
        name: name.to_string(),
        raw: start[..consumed].to_string(),
    })
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
