//! Expression grammar.
//!
//! Precedence, lowest to highest:
//! assignment → or → and → equality → comparison → term → factor → unary →
//! primary. Binary levels left-associate; assignment and unary are
//! right-associative.

use crate::{ParseError, Parser};
use brio_diagnostic::Diagnostic;
use brio_ir::{Expr, ExprKind, Literal, LogicalOp, TokenKind};

impl Parser<'_, '_> {
    pub(crate) fn expression(&mut self) -> Result<Expr, ParseError> {
        self.assignment()
    }

    /// `IDENTIFIER = assignment | or`. An invalid target is reported at the
    /// `=` token and parsing continues with the left-hand expression.
    fn assignment(&mut self) -> Result<Expr, ParseError> {
        let expr = self.or_expr()?;

        if self.match_kind(&TokenKind::Eq) {
            let equals = self.cursor.previous();
            let (equals_line, equals_lexeme) = (equals.line, equals.lexeme.clone());
            let value = self.assignment()?;

            let line = expr.line;
            return match expr.kind {
                ExprKind::Variable { name } => Ok(Expr::new(
                    ExprKind::Assign {
                        name,
                        value: Box::new(value),
                    },
                    line,
                )),
                kind => {
                    self.diagnostics.report(Diagnostic::error_at(
                        equals_line,
                        equals_lexeme,
                        "Invalid assignment target",
                    ));
                    Ok(Expr { kind, line })
                }
            };
        }

        Ok(expr)
    }

    fn or_expr(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.and_expr()?;

        while self.match_kind(&TokenKind::Or) {
            let line = self.cursor.previous().line;
            let right = self.and_expr()?;
            expr = Expr::new(
                ExprKind::Logical {
                    left: Box::new(expr),
                    op: LogicalOp::Or,
                    right: Box::new(right),
                },
                line,
            );
        }
        Ok(expr)
    }

    fn and_expr(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.equality()?;

        while self.match_kind(&TokenKind::And) {
            let line = self.cursor.previous().line;
            let right = self.equality()?;
            expr = Expr::new(
                ExprKind::Logical {
                    left: Box::new(expr),
                    op: LogicalOp::And,
                    right: Box::new(right),
                },
                line,
            );
        }
        Ok(expr)
    }

    fn equality(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.comparison()?;

        while let Some(op) = self.match_equality_op() {
            let line = self.cursor.advance().line;
            let right = self.comparison()?;
            expr = Expr::new(
                ExprKind::Binary {
                    left: Box::new(expr),
                    op,
                    right: Box::new(right),
                },
                line,
            );
        }
        Ok(expr)
    }

    fn comparison(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.term()?;

        while let Some(op) = self.match_comparison_op() {
            let line = self.cursor.advance().line;
            let right = self.term()?;
            expr = Expr::new(
                ExprKind::Binary {
                    left: Box::new(expr),
                    op,
                    right: Box::new(right),
                },
                line,
            );
        }
        Ok(expr)
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.factor()?;

        while let Some(op) = self.match_additive_op() {
            let line = self.cursor.advance().line;
            let right = self.factor()?;
            expr = Expr::new(
                ExprKind::Binary {
                    left: Box::new(expr),
                    op,
                    right: Box::new(right),
                },
                line,
            );
        }
        Ok(expr)
    }

    fn factor(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.unary()?;

        while let Some(op) = self.match_multiplicative_op() {
            let line = self.cursor.advance().line;
            let right = self.unary()?;
            expr = Expr::new(
                ExprKind::Binary {
                    left: Box::new(expr),
                    op,
                    right: Box::new(right),
                },
                line,
            );
        }
        Ok(expr)
    }

    /// Right-associative prefix `!` and `-`.
    fn unary(&mut self) -> Result<Expr, ParseError> {
        if let Some(op) = self.match_unary_op() {
            let line = self.cursor.current().line;
            self.cursor.advance();
            let operand = self.unary()?;
            return Ok(Expr::new(
                ExprKind::Unary {
                    op,
                    operand: Box::new(operand),
                },
                line,
            ));
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.current();
        let line = token.line;

        match token.kind.clone() {
            TokenKind::False => {
                self.cursor.advance();
                Ok(Expr::new(ExprKind::Literal(Literal::Bool(false)), line))
            }
            TokenKind::True => {
                self.cursor.advance();
                Ok(Expr::new(ExprKind::Literal(Literal::Bool(true)), line))
            }
            TokenKind::Nil => {
                self.cursor.advance();
                Ok(Expr::new(ExprKind::Literal(Literal::Nil), line))
            }
            TokenKind::Number(value) => {
                self.cursor.advance();
                Ok(Expr::new(ExprKind::Literal(Literal::Number(value)), line))
            }
            TokenKind::String(value) => {
                self.cursor.advance();
                Ok(Expr::new(ExprKind::Literal(Literal::String(value)), line))
            }
            TokenKind::Ident => {
                let name = token.lexeme.clone();
                self.cursor.advance();
                Ok(Expr::new(ExprKind::Variable { name }, line))
            }
            TokenKind::LParen => {
                self.cursor.advance();
                let expr = self.expression()?;
                self.expect(&TokenKind::RParen, "Expect ')' after expression")?;
                Ok(Expr::new(ExprKind::Grouping(Box::new(expr)), line))
            }
            _ => Err(self.error("Expect expression")),
        }
    }
}
