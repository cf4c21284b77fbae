use std::fmt::Display;

use thiserror::Error;

/// The two failure classes a parse can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No tokenizer rule matches the current character.
    LexicalError,
    /// The token stream does not form a valid program.
    SyntaxError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::LexicalError => write!(f, "LexicalError"),
            ErrorKind::SyntaxError => write!(f, "SyntaxError"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{kind}: {internal_error}")]
pub struct Error {
    kind: ErrorKind,
    internal_error: ErrorImpl,
}

impl Error {
    pub fn new(error_impl: ErrorImpl) -> Self {
        let kind = match error_impl {
            ErrorImpl::UnrecognisedToken { .. } => ErrorKind::LexicalError,
            _ => ErrorKind::SyntaxError,
        };

        Error {
            kind,
            internal_error: error_impl,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::UnexpectedLiteral { .. } => "UnexpectedLiteral",
            ErrorImpl::InvalidAssignmentTarget { .. } => "InvalidAssignmentTarget",
            ErrorImpl::InvalidArrowArguments { .. } => "InvalidArrowArguments",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::NestingDepthExceeded { .. } => "NestingDepthExceeded",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedEndOfInput { expected } => ErrorTip::Suggestion(format!(
                "Input ended while expecting `{}`, is something left unclosed?",
                expected
            )),
            ErrorImpl::UnexpectedToken { token, expected } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected `{}`",
                token, expected
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::UnexpectedLiteral { token } => {
                ErrorTip::Suggestion(format!("`{}` is not a literal", token))
            }
            ErrorImpl::InvalidAssignmentTarget { found } => ErrorTip::Suggestion(format!(
                "Only identifiers and member expressions can be assigned to, found {}",
                found
            )),
            ErrorImpl::InvalidArrowArguments { found } => ErrorTip::Suggestion(format!(
                "Arrow function arguments must be identifiers, found {}",
                found
            )),
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
            ErrorImpl::NestingDepthExceeded { limit } => ErrorTip::Suggestion(format!(
                "Program nests deeper than {} levels",
                limit
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unexpected token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected end of input, expected: {expected:?}")]
    UnexpectedEndOfInput { expected: String },
    #[error("unexpected token: {token:?}, expected: {expected:?}")]
    UnexpectedToken { token: String, expected: String },
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("unexpected literal production: {token:?}")]
    UnexpectedLiteral { token: String },
    #[error("invalid left-hand side in assignment expression: {found}")]
    InvalidAssignmentTarget { found: String },
    #[error("invalid arrow function argument list: {found}")]
    InvalidArrowArguments { found: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("nesting depth exceeded limit of {limit}")]
    NestingDepthExceeded { limit: usize },
}
