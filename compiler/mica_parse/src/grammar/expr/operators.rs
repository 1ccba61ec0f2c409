//! Operator matching. Each helper consumes the operator on a match.

use mica_ir::{BinaryOp, Token, TokenKind};

use crate::Parser;

impl Parser<'_> {
    fn match_op(&mut self, table: &[(&str, BinaryOp)], kind: TokenKind) -> Option<BinaryOp> {
        let token: &Token = self.cursor.current()?;
        if token.kind != kind {
            return None;
        }
        let op = table
            .iter()
            .find(|(text, _)| token.text == *text)
            .map(|(_, op)| *op)?;
        self.cursor.advance();
        Some(op)
    }

    pub(crate) fn match_logical_op(&mut self) -> Option<BinaryOp> {
        self.match_op(
            &[("AND", BinaryOp::And), ("OR", BinaryOp::Or)],
            TokenKind::Identifier,
        )
    }

    pub(crate) fn match_comparison_op(&mut self) -> Option<BinaryOp> {
        self.match_op(
            &[
                ("==", BinaryOp::Eq),
                ("!=", BinaryOp::NotEq),
                ("<", BinaryOp::Lt),
                ("<=", BinaryOp::LtEq),
                (">", BinaryOp::Gt),
                (">=", BinaryOp::GtEq),
            ],
            TokenKind::Operator,
        )
    }

    pub(crate) fn match_additive_op(&mut self) -> Option<BinaryOp> {
        self.match_op(
            &[("+", BinaryOp::Add), ("-", BinaryOp::Sub)],
            TokenKind::Operator,
        )
    }

    pub(crate) fn match_multiplicative_op(&mut self) -> Option<BinaryOp> {
        self.match_op(
            &[("*", BinaryOp::Mul), ("/", BinaryOp::Div)],
            TokenKind::Operator,
        )
    }
}
