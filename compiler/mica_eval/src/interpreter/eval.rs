//! Expression evaluation.

use mica_ir::{ExprId, ExprKind, ScopeId, Source};
use mica_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::{evaluate_binary, EvalResult, RuntimeError, Value};

impl Interpreter<'_> {
    pub(super) fn eval_expr(&mut self, source: &Source, id: ExprId) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(source, id))
    }

    fn eval_expr_inner(&mut self, source: &Source, id: ExprId) -> EvalResult {
        let expr = source.arena.get_expr(id);
        let span = expr.span;
        match &expr.kind {
            ExprKind::Literal(literal) => Ok(Value::from(literal)),
            ExprKind::Group(inner) => self.eval_expr(source, *inner),
            ExprKind::Binary { op, left, right } => {
                let left = self.eval_expr(source, *left)?;
                let right = self.eval_expr(source, *right)?;
                evaluate_binary(*op, &left, &right).map_err(|e| e.with_span(span))
            }
            ExprKind::Access { receiver, name, .. } => {
                let scope = match receiver {
                    Some(receiver) => self.eval_record(source, *receiver)?,
                    None => self.scope,
                };
                self.env
                    .lookup_variable(scope, *name)
                    .cloned()
                    .ok_or_else(|| {
                        RuntimeError::undefined_variable(self.interner.lookup(*name)).with_span(span)
                    })
            }
            ExprKind::Call {
                receiver,
                name,
                args,
                ..
            } => {
                let scope = match receiver {
                    Some(receiver) => self.eval_record(source, *receiver)?,
                    None => self.scope,
                };
                let args = source
                    .arena
                    .get_expr_list(*args)
                    .iter()
                    .map(|&arg| self.eval_expr(source, arg))
                    .collect::<Result<Vec<_>, _>>()?;
                let callable = self
                    .env
                    .lookup_function(scope, *name, args.len())
                    .copied()
                    .ok_or_else(|| {
                        RuntimeError::undefined_function(self.interner.lookup(*name), args.len())
                            .with_span(span)
                    })?;
                self.call(source, callable, args, span)
            }
        }
    }

    /// Evaluate a receiver, which must be a record.
    fn eval_record(&mut self, source: &Source, receiver: ExprId) -> Result<ScopeId, RuntimeError> {
        let value = self.eval_expr(source, receiver)?;
        value.as_record().ok_or_else(|| {
            RuntimeError::not_a_record(&value).with_span(source.arena.get_expr(receiver).span)
        })
    }
}
