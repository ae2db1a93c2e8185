//! ```text
//! unary   := ('-'|'!') unary | primary
//! primary := digit+ | '(' expr ')'
//! ```

use strand_cursor::Source;
use strand_diagnostic::{escape_newlines, ErrorCode};
use tracing::trace;

use crate::{ensure_sufficient_stack, Expr, ExpressionParser, ParseError, UnaryOp};

impl<S: Source> ExpressionParser<S> {
    /// Parse any number of prefix operators followed by a primary.
    ///
    /// Every level of nesting (prefix or parenthesis) passes through here,
    /// so this is where the stack is grown.
    pub fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| {
            let Some(op) = self.cursor.current().and_then(UnaryOp::from_byte) else {
                return self.parse_primary();
            };
            trace!(op = %op, line = self.cursor.line(), column = self.cursor.column(), "unary");
            self.cursor.advance()?;
            let operand = self.parse_unary()?;
            Ok(Expr::unary(op, operand))
        })
    }

    /// Parse a digit run or a parenthesized expression.
    pub fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match self.cursor.current() {
            Some(byte) if byte.is_ascii_digit() => self.parse_number(),
            Some(b'(') => self.parse_group(),
            found => {
                let message = format!("invalid primary: {}", describe(found));
                let err = self.syntax_error(ErrorCode::E1002, message)?.with_help(format!(
                    "a primary is a run of digits or a parenthesized expression, optionally prefixed by one of '{}'",
                    UnaryOp::SYMBOLS
                ));
                Err(err.into())
            }
        }
    }

    fn parse_number(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.snapshot();
        let digits = self.cursor.match_while(|byte| byte.is_ascii_digit())?;
        let value = digits.iter().try_fold(0u64, |acc, &digit| {
            acc.checked_mul(10)?.checked_add(u64::from(digit - b'0'))
        });

        if let Some(value) = value {
            trace!(value, "number");
            return Ok(Expr::Number(value));
        }

        // Report at the first digit, not after the run.
        self.cursor.restore(start)?;
        let message = format!(
            "integer literal too large: {} does not fit in {} bits",
            String::from_utf8_lossy(&digits),
            u64::BITS
        );
        let err = self
            .syntax_error(ErrorCode::E1005, message)?
            .with_help(format!("the largest literal is {}", u64::MAX));
        Err(err.into())
    }

    fn parse_group(&mut self) -> Result<Expr, ParseError> {
        let open = self.cursor.location();
        self.cursor.match_char_in_or_fail("(", None)?;
        trace!(line = open.line, column = open.column, "group");

        let inner = self.parse_expr()?;
        if self.cursor.match_char_in(")")? {
            return Ok(inner);
        }

        let message = format!(
            "unbalanced parenthesis: expected ')' but {}",
            describe(self.cursor.current())
        );
        let err = self
            .syntax_error(ErrorCode::E1003, message)?
            .with_help(format!("the group was opened at {open}"));
        Err(err.into())
    }
}

/// What the parser ran into, for error messages.
fn describe(found: Option<u8>) -> String {
    match found {
        Some(byte) => format!("found '{}'", escape_newlines(&[byte])),
        None => "reached end of input".to_owned(),
    }
}
