//! Brio IR - shared syntax types for the Brio interpreter.
//!
//! This crate contains the data structures every pipeline stage agrees on:
//! - `Token` and `TokenKind` for lexer output
//! - AST nodes (`Expr`, `Stmt`) and their operator enums
//!
//! The AST is a closed set of variants consumed by exhaustive pattern
//! matching; nodes are immutable after construction and own their children
//! exclusively.

pub mod ast;
mod token;

pub use ast::{BinaryOp, Expr, ExprKind, Literal, LogicalOp, Stmt, StmtKind, UnaryOp};
pub use token::{Token, TokenKind};
