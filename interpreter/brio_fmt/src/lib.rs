//! Debug pretty-printer: renders an AST back to a parenthesized string.
//!
//! Output like `(+ 1 (* 2 3))` makes operator precedence and associativity
//! visible at a glance, which is what the `brio parse` command and the
//! parser tests use it for. Not part of interpretation semantics.

use brio_ir::{Expr, ExprKind, Literal, Stmt, StmtKind};

/// Render a whole program, one statement per line.
pub fn print_program(statements: &[Stmt]) -> String {
    statements
        .iter()
        .map(print_stmt)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render one statement.
pub fn print_stmt(stmt: &Stmt) -> String {
    match &stmt.kind {
        StmtKind::Expr(expr) => parenthesize(";", &[expr]),
        StmtKind::Print(expr) => parenthesize("print", &[expr]),
        StmtKind::Var { name, init } => match init {
            Some(init) => format!("(var {name} {})", print_expr(init)),
            None => format!("(var {name})"),
        },
        StmtKind::Block(statements) => {
            let mut out = String::from("(block");
            for statement in statements {
                out.push(' ');
                out.push_str(&print_stmt(statement));
            }
            out.push(')');
            out
        }
        StmtKind::If {
            condition,
            then_branch,
            else_branch,
        } => match else_branch {
            Some(else_branch) => format!(
                "(if {} {} {})",
                print_expr(condition),
                print_stmt(then_branch),
                print_stmt(else_branch)
            ),
            None => format!("(if {} {})", print_expr(condition), print_stmt(then_branch)),
        },
        StmtKind::While { condition, body } => {
            format!("(while {} {})", print_expr(condition), print_stmt(body))
        }
    }
}

/// Render one expression.
pub fn print_expr(expr: &Expr) -> String {
    match &expr.kind {
        ExprKind::Literal(literal) => print_literal(literal),
        ExprKind::Grouping(inner) => parenthesize("group", &[inner]),
        ExprKind::Unary { op, operand } => parenthesize(op.as_symbol(), &[operand]),
        ExprKind::Binary { left, op, right } => parenthesize(op.as_symbol(), &[left, right]),
        ExprKind::Logical { left, op, right } => parenthesize(op.as_symbol(), &[left, right]),
        ExprKind::Variable { name } => name.clone(),
        ExprKind::Assign { name, value } => format!("(= {name} {})", print_expr(value)),
    }
}

fn print_literal(literal: &Literal) -> String {
    match literal {
        Literal::Nil => "nil".to_string(),
        Literal::Bool(b) => b.to_string(),
        Literal::Number(n) => n.to_string(),
        Literal::String(s) => s.clone(),
    }
}

fn parenthesize(name: &str, exprs: &[&Expr]) -> String {
    let mut out = format!("({name}");
    for expr in exprs {
        out.push(' ');
        out.push_str(&print_expr(expr));
    }
    out.push(')');
    out
}
