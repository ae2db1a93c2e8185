//! Recursive descent expression parser over a backtracking stream cursor.
//!
//! Grammar (one parser method per rule):
//!
//! ```text
//! expr    := unary ( ('+'|'-'|'/'|'*') unary )*
//! unary   := ('-'|'!') unary | primary
//! primary := digit+ | '(' expr ')'
//! ```
//!
//! Binary operators form a single left-to-right [`Expr::Chain`]; no
//! precedence is applied and nothing is evaluated. Unary operators bind
//! tighter than any binary operator. Whitespace is not skipped.

mod ast;
mod error;
mod grammar;
mod options;
mod parser;
mod stack;

use std::sync::Once;

pub use ast::{BinaryOp, Expr, UnaryOp};
pub use error::ParseError;
pub use options::ParseOptions;
pub use parser::ExpressionParser;
pub use stack::ensure_sufficient_stack;
pub use strand_cursor::{CursorOptions, MemorySource, Source, StreamCursor};
pub use strand_diagnostic::{ErrorCode, Position, SyntaxError};

/// Parse `text` as a single expression.
///
/// Stops at the first byte that cannot continue the expression; use
/// [`ExpressionParser::parse_to_end`] to reject trailing input.
pub fn parse(text: &str) -> Result<Expr, ParseError> {
    ExpressionParser::new(text)?.parse()
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=strand_parse=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // An embedding application may already own the global subscriber.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
