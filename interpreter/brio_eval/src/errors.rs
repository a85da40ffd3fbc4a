//! Runtime error type and centralized error constructors.
//!
//! Constructors keep the exact message texts in one place; the interpreter
//! and operator dispatch call these rather than formatting inline.

use crate::Value;
use thiserror::Error;

/// A runtime failure carrying the offending token's source line.
///
/// Aborts only the statement currently executing; the interpreter reports
/// it once through the diagnostic sink and moves on.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct RuntimeError {
    pub message: String,
    pub line: u32,
}

/// Result of evaluating an expression (or executing a statement with `()`).
pub type EvalResult<T = Value> = Result<T, RuntimeError>;

/// Unary `-` or an arithmetic/ordering operator applied to a non-number.
pub fn operand_must_be_number(line: u32) -> RuntimeError {
    RuntimeError {
        message: "Operand must be a number".to_string(),
        line,
    }
}

/// `+` applied to anything but two numbers or two strings.
pub fn operands_must_be_numbers_or_strings(line: u32) -> RuntimeError {
    RuntimeError {
        message: "Operands must be two numbers or two strings".to_string(),
        line,
    }
}

/// Access or assignment to a name no scope in the chain defines.
pub fn undefined_variable(name: &str, line: u32) -> RuntimeError {
    RuntimeError {
        message: format!("Undefined variable '{name}'."),
        line,
    }
}
