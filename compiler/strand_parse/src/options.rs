//! Parser configuration.

use strand_cursor::CursorOptions;

/// Tunables for an [`ExpressionParser`](crate::ExpressionParser).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ParseOptions {
    /// Options for the underlying cursor (diagnostic context width).
    pub cursor: CursorOptions,
    /// Make [`parse`](crate::ExpressionParser::parse) reject input left
    /// over after the expression.
    pub require_end: bool,
}

impl ParseOptions {
    #[must_use]
    pub fn with_context_width(mut self, context_width: usize) -> Self {
        self.cursor = self.cursor.with_context_width(context_width);
        self
    }

    #[must_use]
    pub fn with_require_end(mut self, require_end: bool) -> Self {
        self.require_end = require_end;
        self
    }
}
