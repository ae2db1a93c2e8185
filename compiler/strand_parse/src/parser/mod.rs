//! Parser state and entry points.
//!
//! The grammar rules themselves live in [`crate::grammar`]; this module owns
//! construction, the top-level `parse` entry points and diagnostic helpers.

use strand_cursor::{MemorySource, Source, StreamCursor};
use strand_diagnostic::{escape_newlines, ErrorCode, SyntaxError};
use tracing::debug;

use crate::{BinaryOp, Expr, ParseError, ParseOptions};

/// Recursive descent parser bound to one source for one parse.
///
/// Parsing starts at the cursor's current byte. A fresh parser is positioned
/// on the first byte of its source.
#[derive(Debug)]
pub struct ExpressionParser<S = MemorySource> {
    pub(crate) cursor: StreamCursor<S>,
    options: ParseOptions,
}

impl ExpressionParser<MemorySource> {
    /// Parser over in-memory text.
    pub fn new(text: impl Into<Vec<u8>>) -> Result<Self, ParseError> {
        Self::with_options(text, ParseOptions::default())
    }

    pub fn with_options(
        text: impl Into<Vec<u8>>,
        options: ParseOptions,
    ) -> Result<Self, ParseError> {
        Self::from_source_with_options(MemorySource::new(text.into()), options)
    }
}

impl<S: Source> ExpressionParser<S> {
    /// Parser over an existing seekable source, rewound to its start.
    pub fn from_source(source: S) -> Result<Self, ParseError> {
        Self::from_source_with_options(source, ParseOptions::default())
    }

    pub fn from_source_with_options(source: S, options: ParseOptions) -> Result<Self, ParseError> {
        let cursor = StreamCursor::with_options(source, options.cursor)?;
        debug!(
            active = cursor.is_active(),
            require_end = options.require_end,
            "parser ready"
        );
        Ok(ExpressionParser { cursor, options })
    }

    /// Parse one expression.
    ///
    /// Stops without consuming at the first byte that cannot continue the
    /// expression, unless [`ParseOptions::require_end`] is set.
    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        if self.options.require_end {
            self.parse_to_end()
        } else {
            self.parse_expr()
        }
    }

    /// Parse one expression that must span the rest of the input.
    pub fn parse_to_end(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expr()?;
        if let Some(byte) = self.cursor.current() {
            let message = format!(
                "unexpected trailing input: expected one of '{}' or end of input but found '{}'",
                BinaryOp::SYMBOLS,
                escape_newlines(&[byte]),
            );
            return Err(self.syntax_error(ErrorCode::E1004, message)?.into());
        }
        debug!(pos = self.cursor.position(), "parsed to end of input");
        Ok(expr)
    }

    pub fn cursor(&self) -> &StreamCursor<S> {
        &self.cursor
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Give back the source, positioned wherever parsing stopped.
    pub fn into_source(self) -> S {
        self.cursor.into_source()
    }

    /// Syntax error at the current location with the context window
    /// attached. Fails only if the context cannot be read.
    #[cold]
    pub(crate) fn syntax_error(
        &mut self,
        code: ErrorCode,
        message: impl Into<String>,
    ) -> Result<SyntaxError, ParseError> {
        let err = self.cursor.error_at(code, message)?;
        debug!(
            code = %err.code,
            line = err.line(),
            column = err.column(),
            "syntax error"
        );
        Ok(err)
    }
}
