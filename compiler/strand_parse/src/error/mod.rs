//! Parse error type.
//!
//! A parse fails for one of two reasons:
//! - **Syntax**: the input does not match the grammar. Carries the line,
//!   column and an escaped excerpt of the input at the failure point.
//! - **Source**: the underlying source could not be read or repositioned.

use strand_cursor::{CursorError, LexError};
use strand_diagnostic::{ErrorCode, SyntaxError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Source(#[from] CursorError),
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        match err {
            LexError::Syntax(err) => ParseError::Syntax(err),
            LexError::Cursor(err) => ParseError::Source(err),
        }
    }
}

impl ParseError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::Syntax(err) => err.code,
            ParseError::Source(err) => err.code(),
        }
    }

    /// The syntax diagnostic, if this is a grammar mismatch.
    pub fn as_syntax(&self) -> Option<&SyntaxError> {
        match self {
            ParseError::Syntax(err) => Some(err),
            ParseError::Source(_) => None,
        }
    }

    /// One-line user-facing report, newline terminated.
    pub fn render(&self) -> String {
        match self {
            ParseError::Syntax(err) => err.render(),
            ParseError::Source(err) => format!("source error: {err}\n"),
        }
    }
}
