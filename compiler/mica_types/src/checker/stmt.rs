//! Statements.

use mica_ir::{ExprArena, ExprId, ExprKind, Span, StmtId, StmtKind, StmtRange, Type, Variable};

use super::{Analyzer, CheckResult, ReturnType};
use crate::{require_assignable, SemanticError};

impl Analyzer<'_> {
    /// Analyze statements in the current scope.
    pub(super) fn check_stmts(&mut self, body: StmtRange, arena: &mut ExprArena) -> CheckResult {
        for id in arena.get_stmt_list(body).to_vec() {
            self.check_stmt(id, arena)?;
        }
        Ok(())
    }

    fn check_block(&mut self, body: StmtRange, span: Span, arena: &mut ExprArena) -> CheckResult {
        self.in_child_scope(span, |this| this.check_stmts(body, arena))
    }

    fn check_stmt(&mut self, id: StmtId, arena: &mut ExprArena) -> CheckResult {
        let stmt = arena.get_stmt(id);
        let span = stmt.span;
        match stmt.kind.clone() {
            StmtKind::Expression(expr) => {
                self.check_expr(expr, arena)?;
                let expr = arena.get_expr(expr);
                if !matches!(expr.kind, ExprKind::Call { .. }) {
                    return Err(SemanticError::expression_not_call(expr.span));
                }
            }
            StmtKind::Declaration {
                name,
                type_name,
                value,
                ..
            } => {
                let ty = self.binding_type(name, type_name, value, span, arena)?;
                let variable = Variable { name, ty };
                self.scopes
                    .define_variable(self.scope, name, variable.clone());
                if let StmtKind::Declaration { resolved, .. } = &mut arena.get_stmt_mut(id).kind {
                    *resolved = Some(variable);
                }
            }
            StmtKind::Assignment { receiver, value } => {
                let target = self.check_expr(receiver, arena)?;
                let receiver = arena.get_expr(receiver);
                if !matches!(receiver.kind, ExprKind::Access { .. }) {
                    return Err(SemanticError::assignment_target(receiver.span));
                }
                let value_ty = self.check_expr(value, arena)?;
                require_assignable(&target, &value_ty, arena.get_expr(value).span, self.interner)?;
            }
            StmtKind::If {
                condition,
                then_body,
                else_body,
            } => {
                self.check_condition(condition, arena)?;
                if then_body.is_empty() {
                    return Err(SemanticError::empty_body("`IF`", span));
                }
                self.check_block(then_body, span, arena)?;
                if !else_body.is_empty() {
                    self.check_block(else_body, span, arena)?;
                }
            }
            StmtKind::For {
                name,
                iterable,
                body,
            } => {
                let ty = self.check_expr(iterable, arena)?;
                require_assignable(
                    &Type::IntegerIterable,
                    &ty,
                    arena.get_expr(iterable).span,
                    self.interner,
                )?;
                if body.is_empty() {
                    return Err(SemanticError::empty_body("`FOR`", span));
                }
                self.in_child_scope(span, |this| {
                    this.scopes.define_variable(
                        this.scope,
                        name,
                        Variable {
                            name,
                            ty: Type::Integer,
                        },
                    );
                    this.check_stmts(body, arena)
                })?;
            }
            StmtKind::While { condition, body } => {
                self.check_condition(condition, arena)?;
                self.check_block(body, span, arena)?;
            }
            StmtKind::Return { value } => {
                let ty = self.check_expr(value, arena)?;
                let value_span = arena.get_expr(value).span;
                match &mut self.returns {
                    ReturnType::Declared(expected) | ReturnType::Inferred(Some(expected)) => {
                        require_assignable(expected, &ty, value_span, self.interner)?;
                    }
                    ReturnType::Inferred(slot @ None) => *slot = Some(ty),
                }
            }
        }
        Ok(())
    }

    fn check_condition(&mut self, condition: ExprId, arena: &mut ExprArena) -> CheckResult {
        let ty = self.check_expr(condition, arena)?;
        require_assignable(
            &Type::Boolean,
            &ty,
            arena.get_expr(condition).span,
            self.interner,
        )
    }
}
