//! Cursor error types.

use std::io;

use strand_diagnostic::{ErrorCode, SyntaxError};
use thiserror::Error;

/// Failure of the underlying source.
///
/// These are not grammar mismatches: a `CursorError` means the source
/// violated its contract (it cannot seek, or a read failed) and the parse
/// cannot continue.
#[derive(Debug, Error)]
pub enum CursorError {
    /// The source could not be positioned at its start when the cursor was
    /// created.
    #[error("invalid source: cannot position the source at its start")]
    InvalidSource(#[source] io::Error),

    /// The source could not be repositioned to a previously valid offset.
    #[error("failed to seek to offset {position}")]
    Seek {
        position: u64,
        #[source]
        source: io::Error,
    },

    /// Reading the next byte failed for a reason other than end of input.
    #[error("failed to read source at offset {position}")]
    Read {
        position: u64,
        #[source]
        source: io::Error,
    },
}

impl CursorError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CursorError::InvalidSource(_) => ErrorCode::E0001,
            CursorError::Seek { .. } => ErrorCode::E0002,
            CursorError::Read { .. } => ErrorCode::E0003,
        }
    }
}

/// Error from a failing (`*_or_fail`) lexical primitive.
#[derive(Debug, Error)]
pub enum LexError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Cursor(#[from] CursorError),
}

impl LexError {
    pub fn code(&self) -> ErrorCode {
        match self {
            LexError::Syntax(err) => err.code,
            LexError::Cursor(err) => err.code(),
        }
    }
}
