//! Expression parsing: the binary precedence chain.
//!
//! - `mod.rs`: entry point (`parse_expr`) and the left-associative tiers
//! - `operators.rs`: operator matching per tier
//! - `postfix.rs`: `.name` and `.name(args)` member access
//! - `primary.rs`: literals, names, calls, groups

mod operators;
mod postfix;
mod primary;

use mica_ir::{BinaryOp, Expr, ExprId, ExprKind};
use mica_stack::ensure_sufficient_stack;

use crate::{ParseResult, Parser};

impl Parser<'_> {
    /// `expression := logical`
    ///
    /// Wrapped in `ensure_sufficient_stack` so deeply nested groups do not
    /// overflow the native stack.
    pub(crate) fn parse_expr(&mut self) -> ParseResult<ExprId> {
        ensure_sufficient_stack(|| self.parse_logical())
    }

    /// `logical := equality (('AND'|'OR') equality)*`, one shared tier.
    fn parse_logical(&mut self) -> ParseResult<ExprId> {
        let mut left = self.parse_equality()?;
        while let Some(op) = self.match_logical_op() {
            let right = self.parse_equality()?;
            left = self.alloc_binary(op, left, right);
        }
        Ok(left)
    }

    /// `equality := additive (('=='|'!='|'<'|'<='|'>'|'>=') additive)*`
    fn parse_equality(&mut self) -> ParseResult<ExprId> {
        let mut left = self.parse_additive()?;
        while let Some(op) = self.match_comparison_op() {
            let right = self.parse_additive()?;
            left = self.alloc_binary(op, left, right);
        }
        Ok(left)
    }

    /// `additive := multiplicative (('+'|'-') multiplicative)*`
    fn parse_additive(&mut self) -> ParseResult<ExprId> {
        let mut left = self.parse_multiplicative()?;
        while let Some(op) = self.match_additive_op() {
            let right = self.parse_multiplicative()?;
            left = self.alloc_binary(op, left, right);
        }
        Ok(left)
    }

    /// `multiplicative := secondary (('*'|'/') secondary)*`
    fn parse_multiplicative(&mut self) -> ParseResult<ExprId> {
        let mut left = self.parse_secondary()?;
        while let Some(op) = self.match_multiplicative_op() {
            let right = self.parse_secondary()?;
            left = self.alloc_binary(op, left, right);
        }
        Ok(left)
    }

    fn alloc_binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        let span = self
            .arena
            .get_expr(left)
            .span
            .merge(self.arena.get_expr(right).span);
        self.arena
            .alloc_expr(Expr::new(ExprKind::Binary { op, left, right }, span))
    }
}
