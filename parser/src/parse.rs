//! Text parsing into the canonical set value.

use std::num::IntErrorKind;

use intset_core::IntSet;

use crate::error::{ParseError, ParseResult};
use crate::validate::validate;

/// Parse the textual representation into a canonical `IntSet`.
///
/// The grammar is validated before anything is extracted. Extraction keeps
/// digits, `-`, and `,` (braces and spaces drop out), splits on commas, and
/// skips empty tokens, so `{1,,2}` and `{1,2,}` read the same as `{1,2}`.
/// Each token converts with strict signed 32-bit parsing; duplicates then
/// collapse in first-occurrence order under the capacity bound.
pub fn parse(text: &str) -> ParseResult<IntSet> {
    if !validate(text) {
        return Err(ParseError::invalid_syntax(text));
    }

    let numeric: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-' || *c == ',')
        .collect();

    let mut values = Vec::new();
    for token in numeric.split(',') {
        if token.is_empty() {
            continue;
        }
        values.push(parse_i32(text, token)?);
    }

    Ok(IntSet::from_elements(values)?)
}

/// Convert one numeric token, distinguishing malformed tokens from range
/// overflow. A malformed token (`-`, `--5`, `1-2`) reports the whole input,
/// the way a misplaced brace would; an overflowing one reports the token.
fn parse_i32(input: &str, token: &str) -> ParseResult<i32> {
    token.parse::<i32>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            ParseError::number_out_of_range(token)
        }
        _ => ParseError::invalid_syntax(input),
    })
}

// ==================== TESTS ====================
