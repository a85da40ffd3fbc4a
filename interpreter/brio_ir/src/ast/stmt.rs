//! Statement nodes.

use super::Expr;

/// Statement node with the source line of its introducing token.
#[derive(Clone, PartialEq, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub line: u32,
}

impl Stmt {
    pub fn new(kind: StmtKind, line: u32) -> Self {
        Stmt { kind, line }
    }
}

/// Statement kinds.
///
/// There is deliberately no `for` node: the parser desugars `for` loops
/// into `Block` + `While` at parse time.
#[derive(Clone, PartialEq, Debug)]
pub enum StmtKind {
    /// Expression evaluated for its side effects, result discarded.
    Expr(Expr),
    /// `print expr;`
    Print(Expr),
    /// `var name;` or `var name = init;`
    Var { name: String, init: Option<Expr> },
    /// `{ ... }` — one new scope for the enclosed statements.
    Block(Vec<Stmt>),
    /// `if (cond) then else other`
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    /// `while (cond) body`
    While { condition: Expr, body: Box<Stmt> },
}
