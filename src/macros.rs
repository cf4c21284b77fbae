//! Utility macros for the parser.
//!
//! This module defines helper macros used throughout the crate:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PATTERN!` - Creates an anchored rule for the tokenizer's rule table
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's raw text
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string());
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr) => {
        Token {
            kind: $kind,
            value: $value,
        }
    };
}

/// Creates a rule for the tokenizer's rule table.
///
/// The pattern is anchored to the scan cursor, so a rule only ever matches a
/// prefix of the remaining input. Rules built without a kind are ignorable:
/// the tokenizer skips what they match.
///
/// # Arguments
///
/// * `$regex` - The pattern, without the leading `^`
/// * `$kind` - The TokenKind to emit (omit for ignorable rules)
///
/// # Example
///
/// ```ignore
/// MK_PATTERN!(r"\+=", TokenKind::ComplexAssign)
/// MK_PATTERN!(r"\s+")
/// ```
#[macro_export]
macro_rules! MK_PATTERN {
    ($regex:literal) => {
        RegexPattern {
            regex: Regex::new(concat!("^", $regex)).unwrap(),
            kind: None,
        }
    };
    ($regex:literal, $kind:expr) => {
        RegexPattern {
            regex: Regex::new(concat!("^", $regex)).unwrap(),
            kind: Some($kind),
        }
    };
}
