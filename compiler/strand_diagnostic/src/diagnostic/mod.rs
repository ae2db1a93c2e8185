//! The syntax diagnostic reported when a parse is aborted.

use std::fmt;

use crate::ErrorCode;

/// A 1-indexed line/column location in the input.
///
/// Columns count bytes, not Unicode scalar values.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, char {}", self.line, self.column)
    }
}

/// Render raw input bytes for inclusion in a one-line message.
///
/// Newlines become the two-character sequence `\n`; invalid UTF-8 is
/// replaced lossily.
pub fn escape_newlines(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).replace('\n', "\\n")
}

/// A grammar-level mismatch, carrying the position it was detected at.
///
/// Once a `SyntaxError` is produced the parse that produced it is over;
/// there is no recovery or multi-error reporting.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SyntaxError {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Where the cursor was when the mismatch was detected.
    pub position: Position,
    /// Escaped excerpt of the input starting at the failure point.
    pub context: Option<String>,
    /// Optional help messages.
    pub help: Vec<String>,
}

impl SyntaxError {
    /// Create a new syntax error.
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, position: Position) -> Self {
        SyntaxError {
            code,
            message: message.into(),
            position,
            context: None,
            help: Vec::new(),
        }
    }

    /// Attach the escaped input excerpt that was found instead.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add a help message.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }

    pub fn line(&self) -> u32 {
        self.position.line
    }

    pub fn column(&self) -> u32 {
        self.position.column
    }

    /// The full diagnostic line, including its trailing newline.
    pub fn render(&self) -> String {
        format!("{self}\n")
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parse error: {} near {}", self.message, self.position)
    }
}

impl std::error::Error for SyntaxError {}
