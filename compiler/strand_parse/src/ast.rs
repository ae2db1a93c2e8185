//! Expression tree produced by the parser.

use std::fmt;

/// Prefix operator.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// `-`
    Neg,
    /// `!`
    Not,
}

impl UnaryOp {
    /// Every byte that starts a unary expression.
    pub const SYMBOLS: &'static str = "-!";

    pub fn from_byte(byte: u8) -> Option<UnaryOp> {
        match byte {
            b'-' => Some(UnaryOp::Neg),
            b'!' => Some(UnaryOp::Not),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            UnaryOp::Neg => '-',
            UnaryOp::Not => '!',
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Infix operator in a chain. All four share one precedence level.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `/`
    Div,
    /// `*`
    Mul,
}

impl BinaryOp {
    /// Every byte that continues a chain.
    pub const SYMBOLS: &'static str = "+-/*";

    pub fn from_byte(byte: u8) -> Option<BinaryOp> {
        match byte {
            b'+' => Some(BinaryOp::Add),
            b'-' => Some(BinaryOp::Sub),
            b'/' => Some(BinaryOp::Div),
            b'*' => Some(BinaryOp::Mul),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Div => '/',
            BinaryOp::Mul => '*',
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A parsed expression. Owned, acyclic and immutable once returned.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expr {
    /// Non-negative integer literal.
    Number(u64),
    /// Prefix operator applied to an operand.
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// Left-to-right operator chain.
    ///
    /// Invariant: `operators.len() == operands.len() - 1` and there are at
    /// least two operands. A lone operand is never wrapped in a chain.
    Chain {
        operands: Vec<Expr>,
        operators: Vec<BinaryOp>,
    },
}

impl Expr {
    pub fn unary(op: UnaryOp, operand: Expr) -> Expr {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    /// Build a chain from `first` and `(operator, operand)` pairs.
    ///
    /// With no pairs, `first` is returned as-is.
    pub fn chain(first: Expr, rest: Vec<(BinaryOp, Expr)>) -> Expr {
        if rest.is_empty() {
            return first;
        }
        let mut operands = Vec::with_capacity(rest.len() + 1);
        let mut operators = Vec::with_capacity(rest.len());
        operands.push(first);
        for (op, operand) in rest {
            operators.push(op);
            operands.push(operand);
        }
        Expr::Chain {
            operands,
            operators,
        }
    }

    /// Literal value, if this is a number.
    pub fn as_number(&self) -> Option<u64> {
        match self {
            Expr::Number(value) => Some(*value),
            _ => None,
        }
    }
}
