//! Grammar validation for the textual set representation.
//!
//! Validation is a single pass over the raw text, before any token is
//! extracted. It answers yes or no; the parser turns a no into an
//! `InvalidSyntax` error carrying the full input.

/// Check whether `text` matches the set grammar.
///
/// Three rules, enforced in one scan:
/// - alphabet: only ASCII digits, `{`, `}`, `,`, space, and `-` may appear
/// - braces: exactly one `{` and one `}`, and after ignoring leading and
///   trailing spaces the text must start with the `{` and end with the `}`
/// - separation: two numbers must have a comma between them, so a bare
///   space gap like `{1 2}` rejects while spaces around commas, after `{`,
///   and before `}` are all fine
pub fn validate(text: &str) -> bool {
    let trimmed = text.trim_matches(' ');
    if !(trimmed.starts_with('{') && trimmed.ends_with('}')) {
        return false;
    }

    let mut left_braces = 0usize;
    let mut right_braces = 0usize;
    // Separation state: a digit run has ended (`after_digit`) and one or
    // more spaces followed it with no comma yet (`gap_pending`). A digit
    // arriving in that state has only whitespace between it and the
    // previous number.
    let mut after_digit = false;
    let mut gap_pending = false;

    for c in text.chars() {
        match c {
            '0'..='9' => {
                if gap_pending {
                    return false;
                }
                after_digit = true;
            }
            ',' => {
                after_digit = false;
                gap_pending = false;
            }
            ' ' => {
                if after_digit {
                    gap_pending = true;
                }
            }
            '{' => left_braces += 1,
            '}' => right_braces += 1,
            // Sign characters ride along with the digits they precede;
            // they neither bridge a gap (`{1 -2}` still rejects) nor end
            // one. Token shape is the parser's problem.
            '-' => {}
            _ => return false,
        }
    }

    left_braces == 1 && right_braces == 1
}

// ==================== TESTS ====================
