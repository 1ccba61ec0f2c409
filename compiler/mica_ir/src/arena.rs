//! Contiguous storage for a program's expressions and statements.

use super::{Expr, ExprId, ExprRange, Stmt, StmtId, StmtRange};

#[inline]
fn to_u32(len: usize) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("AST arena exceeded u32::MAX entries"))
}

/// Flat storage for every expression and statement of a [`Source`](crate::Source).
///
/// Children are [`ExprId`]/[`StmtId`] indices. Argument lists and block
/// bodies are ranges into the flattened `expr_lists`/`stmt_lists`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    expr_lists: Vec<ExprId>,
    stmts: Vec<Stmt>,
    stmt_lists: Vec<StmtId>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size for a token stream of `token_count` tokens.
    pub fn with_capacity(token_count: usize) -> Self {
        ExprArena {
            exprs: Vec::with_capacity(token_count / 2),
            expr_lists: Vec::with_capacity(token_count / 8),
            stmts: Vec::with_capacity(token_count / 4),
            stmt_lists: Vec::with_capacity(token_count / 4),
        }
    }

    #[inline]
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(to_u32(self.exprs.len()));
        self.exprs.push(expr);
        id
    }

    /// # Panics
    /// Panics if `id` came from a different arena.
    #[inline]
    #[track_caller]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    #[track_caller]
    pub fn get_expr_mut(&mut self, id: ExprId) -> &mut Expr {
        &mut self.exprs[id.index()]
    }

    #[inline]
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    pub fn alloc_expr_list(&mut self, exprs: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = to_u32(self.expr_lists.len());
        self.expr_lists.extend(exprs);
        ExprRange::new(start, to_u32(self.expr_lists.len()) - start)
    }

    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }

    #[inline]
    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId::new(to_u32(self.stmts.len()));
        self.stmts.push(stmt);
        id
    }

    #[inline]
    #[track_caller]
    pub fn get_stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    #[inline]
    #[track_caller]
    pub fn get_stmt_mut(&mut self, id: StmtId) -> &mut Stmt {
        &mut self.stmts[id.index()]
    }

    #[inline]
    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }

    pub fn alloc_stmt_list(&mut self, stmts: impl IntoIterator<Item = StmtId>) -> StmtRange {
        let start = to_u32(self.stmt_lists.len());
        self.stmt_lists.extend(stmts);
        StmtRange::new(start, to_u32(self.stmt_lists.len()) - start)
    }

    #[inline]
    pub fn get_stmt_list(&self, range: StmtRange) -> &[StmtId] {
        let start = range.start as usize;
        &self.stmt_lists[start..start + range.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ExprKind, Literal, Span, StmtKind};
    use num_bigint::BigInt;

    fn int(arena: &mut ExprArena, n: i64) -> ExprId {
        arena.alloc_expr(Expr::new(
            ExprKind::Literal(Literal::Integer(BigInt::from(n))),
            Span::DUMMY,
        ))
    }

    #[test]
    fn expr_ids_are_sequential() {
        let mut arena = ExprArena::new();
        let a = int(&mut arena, 1);
        let b = int(&mut arena, 2);
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(arena.expr_count(), 2);
    }

    #[test]
    fn expr_lists_round_trip() {
        let mut arena = ExprArena::new();
        let ids: Vec<_> = (0..3).map(|n| int(&mut arena, n)).collect();
        let empty = arena.alloc_expr_list([]);
        let range = arena.alloc_expr_list(ids.iter().copied());

        assert!(empty.is_empty());
        assert_eq!(arena.get_expr_list(range), ids.as_slice());
    }

    #[test]
    fn stmt_lists_round_trip() {
        let mut arena = ExprArena::new();
        let value = int(&mut arena, 7);
        let ret = arena.alloc_stmt(Stmt::new(StmtKind::Return { value }, Span::DUMMY));
        let body = arena.alloc_stmt_list([ret]);

        assert_eq!(arena.get_stmt_list(body), &[ret]);
        assert_eq!(arena.stmt_count(), 1);
        assert!(matches!(
            arena.get_stmt(ret).kind,
            StmtKind::Return { value: v } if v == value
        ));
    }

    #[test]
    fn resolution_slots_are_mutable() {
        let mut arena = ExprArena::new();
        let id = int(&mut arena, 1);
        arena.get_expr_mut(id).ty = Some(crate::Type::Integer);
        assert_eq!(arena.get_expr(id).ty, Some(crate::Type::Integer));
    }
}
