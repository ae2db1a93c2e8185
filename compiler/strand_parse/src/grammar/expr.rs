//! `expr := unary ( ('+'|'-'|'/'|'*') unary )*`

use strand_cursor::Source;
use tracing::trace;

use crate::{BinaryOp, Expr, ExpressionParser, ParseError};

impl<S: Source> ExpressionParser<S> {
    /// Parse a left-to-right operator chain.
    ///
    /// A single operand is returned unwrapped. Stops without consuming at
    /// the first byte that is not a binary operator.
    pub fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        trace!(
            line = self.cursor.line(),
            column = self.cursor.column(),
            current = ?self.cursor.current().map(char::from),
            "parse_expr"
        );

        let first = self.parse_unary()?;
        let mut rest = Vec::new();
        while let Some(op) = self.cursor.current().and_then(BinaryOp::from_byte) {
            self.cursor.advance()?;
            let operand = self.parse_unary()?;
            rest.push((op, operand));
        }

        if !rest.is_empty() {
            trace!(operators = rest.len(), "chain");
        }
        Ok(Expr::chain(first, rest))
    }
}
