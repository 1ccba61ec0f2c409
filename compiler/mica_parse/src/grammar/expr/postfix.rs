//! Member access and member calls.

use mica_ir::{Expr, ExprId, ExprKind, ExprRange};

use crate::{ParseResult, Parser};

impl Parser<'_> {
    /// `secondary := primary ('.' IDENT ('(' arguments ')')?)*`
    pub(crate) fn parse_secondary(&mut self) -> ParseResult<ExprId> {
        let mut receiver = self.parse_primary()?;
        while self.cursor.eat(".") {
            let name = self.parse_ident("member name")?;
            let kind = if self.cursor.eat("(") {
                let args = self.parse_arguments()?;
                ExprKind::Call {
                    receiver: Some(receiver),
                    name,
                    args,
                    resolved: None,
                }
            } else {
                ExprKind::Access {
                    receiver: Some(receiver),
                    name,
                    resolved: None,
                }
            };
            let span = self.span_from(self.arena.get_expr(receiver).span);
            receiver = self.arena.alloc_expr(Expr::new(kind, span));
        }
        Ok(receiver)
    }

    /// `arguments := (expression (',' expression)*)? ')'`, after the `(`.
    pub(crate) fn parse_arguments(&mut self) -> ParseResult<ExprRange> {
        let mut args = Vec::new();
        if !self.cursor.check(")") {
            loop {
                args.push(self.parse_expr()?);
                if !self.cursor.eat(",") {
                    break;
                }
            }
        }
        self.cursor.expect(")", "`,` or `)`")?;
        Ok(self.arena.alloc_expr_list(args))
    }
}
