//! Statement and declaration grammar.
//!
//! ```text
//! declaration → varDecl | statement
//! statement   → exprStmt | printStmt | block | ifStmt | whileStmt | forStmt
//! ```
//!
//! `for` has no AST node of its own: it is desugared here into
//! `{ init; while (condition) { body; increment } }`.

mod expr;
mod operators;

use crate::{recovery, ParseError, Parser};
use brio_ir::{Expr, ExprKind, Literal, Stmt, StmtKind, TokenKind};

impl Parser<'_, '_> {
    /// Parse one declaration, catching any failure at this boundary:
    /// the error is reported, the stream synchronized, and `None` returned
    /// so the caller simply moves on.
    pub(crate) fn declaration(&mut self) -> Option<Stmt> {
        let result = if self.match_kind(&TokenKind::Var) {
            self.var_declaration()
        } else {
            self.statement()
        };

        match result {
            Ok(stmt) => Some(stmt),
            Err(err) => {
                self.diagnostics.report(err.into_diagnostic());
                recovery::synchronize(&mut self.cursor);
                None
            }
        }
    }

    /// `var name;` or `var name = init;` — the `var` keyword is consumed.
    fn var_declaration(&mut self) -> Result<Stmt, ParseError> {
        let line = self.cursor.previous().line;
        let name = self
            .expect(&TokenKind::Ident, "Expect variable name")?
            .lexeme
            .clone();

        let init = if self.match_kind(&TokenKind::Eq) {
            Some(self.expression()?)
        } else {
            None
        };

        self.expect(&TokenKind::Semicolon, "Expect ';' after variable declaration")?;
        Ok(Stmt::new(StmtKind::Var { name, init }, line))
    }

    fn statement(&mut self) -> Result<Stmt, ParseError> {
        if self.match_kind(&TokenKind::Print) {
            return self.print_statement();
        }
        if self.match_kind(&TokenKind::LBrace) {
            return self.block();
        }
        if self.match_kind(&TokenKind::If) {
            return self.if_statement();
        }
        if self.match_kind(&TokenKind::While) {
            return self.while_statement();
        }
        if self.match_kind(&TokenKind::For) {
            return self.for_statement();
        }
        self.expression_statement()
    }

    fn print_statement(&mut self) -> Result<Stmt, ParseError> {
        let line = self.cursor.previous().line;
        let value = self.expression()?;
        self.expect(&TokenKind::Semicolon, "Expect ';' after value")?;
        Ok(Stmt::new(StmtKind::Print(value), line))
    }

    fn expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let line = self.cursor.current().line;
        let expr = self.expression()?;
        self.expect(&TokenKind::Semicolon, "Expect ';' after expression")?;
        Ok(Stmt::new(StmtKind::Expr(expr), line))
    }

    /// `{ ... }` — the opening brace is consumed. Declarations inside keep
    /// their own recovery boundary, so one bad statement does not take the
    /// rest of the block with it.
    fn block(&mut self) -> Result<Stmt, ParseError> {
        let line = self.cursor.previous().line;
        let mut statements = Vec::new();

        while !self.check(&TokenKind::RBrace) && !self.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }

        self.expect(&TokenKind::RBrace, "Expect '}' after block")?;
        Ok(Stmt::new(StmtKind::Block(statements), line))
    }

    fn if_statement(&mut self) -> Result<Stmt, ParseError> {
        let line = self.cursor.previous().line;
        self.expect(&TokenKind::LParen, "Expect '(' after 'if'")?;
        let condition = self.expression()?;
        self.expect(&TokenKind::RParen, "Expect ')' after if condition")?;

        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.match_kind(&TokenKind::Else) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Stmt::new(
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            },
            line,
        ))
    }

    fn while_statement(&mut self) -> Result<Stmt, ParseError> {
        let line = self.cursor.previous().line;
        self.expect(&TokenKind::LParen, "Expect '(' after 'while'")?;
        let condition = self.expression()?;
        self.expect(&TokenKind::RParen, "Expect ')' after condition")?;
        let body = Box::new(self.statement()?);

        Ok(Stmt::new(StmtKind::While { condition, body }, line))
    }

    /// Desugar `for (init; condition; increment) body` into
    /// `{ init; while (condition) { body; increment } }`.
    fn for_statement(&mut self) -> Result<Stmt, ParseError> {
        let line = self.cursor.previous().line;
        self.expect(&TokenKind::LParen, "Expect '(' after 'for'")?;

        let initializer = if self.match_kind(&TokenKind::Semicolon) {
            None
        } else if self.match_kind(&TokenKind::Var) {
            Some(self.var_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let condition = if self.check(&TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.expect(&TokenKind::Semicolon, "Expect ';' after loop condition")?;

        let increment = if self.check(&TokenKind::RParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.expect(&TokenKind::RParen, "Expect ')' after for clauses")?;

        let mut body = self.statement()?;

        if let Some(increment) = increment {
            let increment_line = increment.line;
            body = Stmt::new(
                StmtKind::Block(vec![
                    body,
                    Stmt::new(StmtKind::Expr(increment), increment_line),
                ]),
                line,
            );
        }

        // An omitted condition loops forever.
        let condition = condition
            .unwrap_or_else(|| Expr::new(ExprKind::Literal(Literal::Bool(true)), line));
        body = Stmt::new(
            StmtKind::While {
                condition,
                body: Box::new(body),
            },
            line,
        );

        if let Some(initializer) = initializer {
            body = Stmt::new(StmtKind::Block(vec![initializer, body]), line);
        }

        Ok(body)
    }
}
