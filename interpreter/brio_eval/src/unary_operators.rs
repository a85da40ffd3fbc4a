//! Unary operator evaluation.

use crate::errors::operand_must_be_number;
use crate::{EvalResult, Value};
use brio_ir::UnaryOp;

/// Apply a prefix operator to an evaluated operand.
pub fn evaluate_unary(op: UnaryOp, operand: &Value, line: u32) -> EvalResult {
    match op {
        UnaryOp::Neg => match operand {
            Value::Number(n) => Ok(Value::Number(-n)),
            _ => Err(operand_must_be_number(line)),
        },
        UnaryOp::Not => Ok(Value::Bool(!operand.is_truthy())),
    }
}
