//! Grammar rules, one method per production on [`ExpressionParser`](crate::ExpressionParser).
//!
//! - `expr`: operator chains (`expr.rs`)
//! - `unary`, `primary`: prefix operators, literals and groups (`primary.rs`)

mod expr;
mod primary;
