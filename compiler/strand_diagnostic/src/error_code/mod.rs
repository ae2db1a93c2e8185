//! Error codes for all cursor and parser diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the layer that produced it.

use std::fmt;

/// Error codes for all diagnostics.
///
/// Format: E#### where first digit indicates layer:
/// - E0xxx: Source / cursor errors
/// - E1xxx: Parser errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Source Errors (E0xxx)
    /// Source cannot be positioned (not seekable)
    E0001,
    /// Source could not be repositioned to a saved offset
    E0002,
    /// Source read failed
    E0003,

    // Parser Errors (E1xxx)
    /// Unexpected character
    E1001,
    /// Invalid primary expression
    E1002,
    /// Unbalanced parenthesis
    E1003,
    /// Trailing input after expression
    E1004,
    /// Integer literal too large
    E1005,
}

impl ErrorCode {
    /// Every error code, in declaration order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
    ];

    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            // Source
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            // Parser
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
        }
    }

    /// Short human-readable description, used in help text.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "source is not seekable",
            ErrorCode::E0002 => "source could not be repositioned",
            ErrorCode::E0003 => "source read failed",
            ErrorCode::E1001 => "unexpected character",
            ErrorCode::E1002 => "invalid primary expression",
            ErrorCode::E1003 => "unbalanced parenthesis",
            ErrorCode::E1004 => "trailing input after expression",
            ErrorCode::E1005 => "integer literal too large",
        }
    }

    /// Check if this is a source/cursor error (E0xxx).
    pub fn is_source_error(&self) -> bool {
        matches!(self, ErrorCode::E0001 | ErrorCode::E0002 | ErrorCode::E0003)
    }

    /// Check if this is a parser error (E1xxx).
    pub fn is_parser_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E1001
                | ErrorCode::E1002
                | ErrorCode::E1003
                | ErrorCode::E1004
                | ErrorCode::E1005
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E1001"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`].
impl std::str::FromStr for ErrorCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown error code: {s}"))
    }
}

#[cfg(test)]
mod tests;
