//! Tree-walking interpreter.
//!
//! Holds the current [`Environment`] and executes statements against it.
//! Block scoping goes through [`ScopedInterpreter`], an RAII guard that
//! pops the scope on every exit path, error exits included.
//!
//! A runtime error aborts only the top-level statement that raised it:
//! [`Interpreter::interpret`] reports the error once through the sink and
//! continues with the next statement. Bindings created before the failure
//! survive — scope mutation is not transactional.

mod scope_guard;

pub use scope_guard::ScopedInterpreter;

use crate::errors::undefined_variable;
use crate::{
    evaluate_binary, evaluate_unary, Environment, EvalResult, PrintHandlerImpl, Value,
};
use brio_diagnostic::Diagnostics;
use brio_ir::{Expr, ExprKind, LogicalOp, Stmt, StmtKind};
use tracing::trace;

/// Statement executor over one persistent environment.
///
/// The environment lives as long as the interpreter, so an interactive
/// session can call [`interpret`](Self::interpret) once per line and keep
/// its global bindings.
pub struct Interpreter {
    pub(crate) env: Environment,
    print: PrintHandlerImpl,
}

impl Interpreter {
    /// An interpreter printing to stdout.
    pub fn new() -> Self {
        Self::with_print_handler(PrintHandlerImpl::stdout())
    }

    /// An interpreter printing through the given handler.
    pub fn with_print_handler(print: PrintHandlerImpl) -> Self {
        Interpreter {
            env: Environment::new(),
            print,
        }
    }

    /// Output captured by a buffering print handler; empty otherwise.
    pub fn captured_output(&self) -> String {
        self.print.get_output()
    }

    /// Execute top-level statements in order.
    ///
    /// A runtime error is reported once with the offending line and aborts
    /// only the statement that raised it; execution resumes with the next
    /// statement.
    pub fn interpret(&mut self, statements: &[Stmt], diagnostics: &mut Diagnostics) {
        for stmt in statements {
            if let Err(err) = self.execute(stmt) {
                diagnostics.runtime_error(err.line, err.message);
            }
        }
    }

    fn execute(&mut self, stmt: &Stmt) -> EvalResult<()> {
        trace!(line = stmt.line, "execute");
        match &stmt.kind {
            StmtKind::Expr(expr) => {
                self.eval(expr)?;
                Ok(())
            }
            StmtKind::Print(expr) => {
                let value = self.eval(expr)?;
                self.print.println(&value.to_string());
                Ok(())
            }
            StmtKind::Var { name, init } => {
                // An absent initializer yields nil.
                let value = match init {
                    Some(init) => self.eval(init)?,
                    None => Value::Nil,
                };
                self.env.define(name.clone(), value);
                Ok(())
            }
            StmtKind::Block(statements) => {
                let mut scoped = self.scoped();
                for stmt in statements {
                    scoped.execute(stmt)?;
                }
                Ok(())
                // Scope popped here by the guard, error path included.
            }
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.eval(condition)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(())
                }
            }
            StmtKind::While { condition, body } => {
                while self.eval(condition)?.is_truthy() {
                    self.execute(body)?;
                }
                Ok(())
            }
        }
    }

    fn eval(&mut self, expr: &Expr) -> EvalResult {
        match &expr.kind {
            ExprKind::Literal(literal) => Ok(Value::from(literal)),
            ExprKind::Grouping(inner) => self.eval(inner),
            ExprKind::Unary { op, operand } => {
                let operand = self.eval(operand)?;
                evaluate_unary(*op, &operand, expr.line)
            }
            ExprKind::Binary { left, op, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                evaluate_binary(*op, &left, &right, expr.line)
            }
            ExprKind::Logical { left, op, right } => {
                let left = self.eval(left)?;
                // Short-circuit with the original operand value, uncoerced.
                match op {
                    LogicalOp::Or if left.is_truthy() => Ok(left),
                    LogicalOp::And if !left.is_truthy() => Ok(left),
                    LogicalOp::Or | LogicalOp::And => self.eval(right),
                }
            }
            ExprKind::Variable { name } => self
                .env
                .lookup(name)
                .ok_or_else(|| undefined_variable(name, expr.line)),
            ExprKind::Assign { name, value } => {
                let value = self.eval(value)?;
                match self.env.assign(name, value.clone()) {
                    Ok(()) => Ok(value),
                    Err(_) => Err(undefined_variable(name, expr.line)),
                }
            }
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
