//! Expressions. Every checked expression gets its `ty` slot written.

use mica_ir::{BinaryOp, ExprArena, ExprId, ExprKind, Literal, Name, Span, Type};
use mica_stack::ensure_sufficient_stack;
use num_traits::ToPrimitive as _;

use super::{Analyzer, CheckResult};
use crate::{is_assignable, require_assignable, SemanticError};

impl Analyzer<'_> {
    pub(super) fn check_expr(&mut self, id: ExprId, arena: &mut ExprArena) -> CheckResult<Type> {
        let ty = ensure_sufficient_stack(|| self.infer_expr(id, arena))?;
        arena.get_expr_mut(id).ty = Some(ty.clone());
        Ok(ty)
    }

    fn infer_expr(&mut self, id: ExprId, arena: &mut ExprArena) -> CheckResult<Type> {
        let span = arena.get_expr(id).span;
        match &arena.get_expr(id).kind {
            ExprKind::Literal(literal) => check_literal(literal, span),
            ExprKind::Group(inner) => {
                let inner = *inner;
                self.check_expr(inner, arena)
            }
            ExprKind::Binary { op, left, right } => {
                let (op, left, right) = (*op, *left, *right);
                self.check_binary(op, left, right, arena)
            }
            ExprKind::Access { receiver, name, .. } => {
                let (receiver, name) = (*receiver, *name);
                self.check_access(id, receiver, name, span, arena)
            }
            ExprKind::Call {
                receiver,
                name,
                args,
                ..
            } => {
                let (receiver, name) = (*receiver, *name);
                let args = arena.get_expr_list(*args).to_vec();
                self.check_call(id, receiver, name, &args, span, arena)
            }
        }
    }

    fn check_binary(
        &mut self,
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
        arena: &mut ExprArena,
    ) -> CheckResult<Type> {
        let left_ty = self.check_expr(left, arena)?;
        let right_ty = self.check_expr(right, arena)?;
        let left_span = arena.get_expr(left).span;
        let right_span = arena.get_expr(right).span;

        match op {
            BinaryOp::And | BinaryOp::Or => {
                require_assignable(&Type::Boolean, &left_ty, left_span, self.interner)?;
                require_assignable(&Type::Boolean, &right_ty, right_span, self.interner)?;
                Ok(Type::Boolean)
            }
            BinaryOp::Eq
            | BinaryOp::NotEq
            | BinaryOp::Lt
            | BinaryOp::LtEq
            | BinaryOp::Gt
            | BinaryOp::GtEq => {
                require_assignable(&left_ty, &right_ty, right_span, self.interner)?;
                if !is_assignable(&Type::Comparable, &left_ty) {
                    return Err(SemanticError::not_comparable(
                        &left_ty,
                        left_span,
                        self.interner,
                    ));
                }
                Ok(Type::Boolean)
            }
            BinaryOp::Add if left_ty == Type::String || right_ty == Type::String => {
                Ok(Type::String)
            }
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => {
                require_assignable(&left_ty, &right_ty, right_span, self.interner)?;
                Ok(left_ty)
            }
        }
    }

    /// Resolve `name` as a member of `receiver` or through the scope chain.
    fn check_access(
        &mut self,
        id: ExprId,
        receiver: Option<ExprId>,
        name: Name,
        span: Span,
        arena: &mut ExprArena,
    ) -> CheckResult<Type> {
        let variable = match receiver {
            Some(receiver) => {
                let receiver_ty = self.check_expr(receiver, arena)?;
                let object = receiver_ty.as_object().ok_or_else(|| {
                    SemanticError::not_an_object(&receiver_ty, self.text(name), span, self.interner)
                })?;
                object.field(name).cloned().ok_or_else(|| {
                    let member = format!("{}.{}", self.text(object.name), self.text(name));
                    SemanticError::undefined_variable(&member, span)
                })?
            }
            None => self
                .scopes
                .lookup_variable(self.scope, name)
                .cloned()
                .ok_or_else(|| SemanticError::undefined_variable(self.text(name), span))?,
        };

        let ty = variable.ty.clone();
        if let ExprKind::Access { resolved, .. } = &mut arena.get_expr_mut(id).kind {
            *resolved = Some(variable);
        }
        Ok(ty)
    }

    /// Resolve `name/arity` as a method of `receiver` or through the scope
    /// chain, then check each argument against its parameter.
    fn check_call(
        &mut self,
        id: ExprId,
        receiver: Option<ExprId>,
        name: Name,
        args: &[ExprId],
        span: Span,
        arena: &mut ExprArena,
    ) -> CheckResult<Type> {
        let arity = args.len();
        let function = match receiver {
            Some(receiver) => {
                let receiver_ty = self.check_expr(receiver, arena)?;
                let object = receiver_ty.as_object().ok_or_else(|| {
                    SemanticError::not_an_object(&receiver_ty, self.text(name), span, self.interner)
                })?;
                object.method(name, arity).cloned().ok_or_else(|| {
                    let member = format!("{}.{}", self.text(object.name), self.text(name));
                    SemanticError::undefined_function(&member, arity, span)
                })?
            }
            None => {
                let function = self
                    .scopes
                    .lookup_function(self.scope, name, arity)
                    .cloned()
                    .ok_or_else(|| {
                        SemanticError::undefined_function(self.text(name), arity, span)
                    })?;
                if self.pending.contains(&(name, arity)) {
                    return Err(SemanticError::uninferable_return(self.text(name), span));
                }
                function
            }
        };

        for (&arg, param) in args.iter().zip(&function.params) {
            let arg_ty = self.check_expr(arg, arena)?;
            require_assignable(param, &arg_ty, arena.get_expr(arg).span, self.interner)?;
        }

        let ty = function.ret.clone();
        if let ExprKind::Call { resolved, .. } = &mut arena.get_expr_mut(id).kind {
            *resolved = Some(function);
        }
        Ok(ty)
    }
}

/// Literal types, with integers limited to `i32` and decimals to finite `f64`.
fn check_literal(literal: &Literal, span: Span) -> CheckResult<Type> {
    match literal {
        Literal::Nil => Ok(Type::Nil),
        Literal::Boolean(_) => Ok(Type::Boolean),
        Literal::Character(_) => Ok(Type::Character),
        Literal::String(_) => Ok(Type::String),
        Literal::Integer(value) => {
            if i32::try_from(value).is_ok() {
                Ok(Type::Integer)
            } else {
                Err(SemanticError::literal_out_of_range("integer", span))
            }
        }
        Literal::Decimal(value) => {
            if value.to_f64().is_some_and(f64::is_finite) {
                Ok(Type::Decimal)
            } else {
                Err(SemanticError::literal_out_of_range("decimal", span))
            }
        }
    }
}
