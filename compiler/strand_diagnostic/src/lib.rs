//! Diagnostics for the strand cursor and expression parser.
//!
//! Every failure that reaches a user is rendered the same way:
//!
//! ```text
//! parse error: <message> near line <L>, char <C>
//! ```
//!
//! Line and column are 1-indexed and come from the cursor state at the
//! point of failure. Context excerpts embedded in messages have their
//! newlines escaped as the two-character sequence `\n` so a diagnostic
//! always fits on one line.

mod diagnostic;
mod error_code;

pub use diagnostic::{escape_newlines, Position, SyntaxError};
pub use error_code::ErrorCode;
