//! AST node model.
//!
//! Two closed variant sets, `Expr` and `Stmt`, consumed by exhaustive
//! pattern matching: each consumer (printer, interpreter) matches variants
//! directly without touching node definitions.

mod expr;
mod operators;
mod stmt;

pub use expr::{Expr, ExprKind, Literal};
pub use operators::{BinaryOp, LogicalOp, UnaryOp};
pub use stmt::{Stmt, StmtKind};
