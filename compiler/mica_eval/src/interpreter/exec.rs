//! Statement execution.

use mica_ir::{ExprId, ExprKind, Source, StmtId, StmtKind, StmtRange};
use num_bigint::BigInt;
use num_traits::One;

use super::Interpreter;
use crate::environment::Flow;
use crate::{RuntimeError, Value};

type ExecResult = Result<Flow, RuntimeError>;

impl Interpreter<'_> {
    /// Execute statements in the current scope, stopping at a `RETURN`.
    pub(super) fn exec_block(&mut self, source: &Source, body: StmtRange) -> ExecResult {
        for &id in source.arena.get_stmt_list(body) {
            if let Flow::Return(value) = self.exec_stmt(source, id)? {
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Normal)
    }

    fn exec_stmt(&mut self, source: &Source, id: StmtId) -> ExecResult {
        let stmt = source.arena.get_stmt(id);
        match &stmt.kind {
            StmtKind::Expression(expr) => {
                self.eval_expr(source, *expr)?;
            }
            StmtKind::Declaration { name, value, .. } => {
                let value = match value {
                    Some(value) => self.eval_expr(source, *value)?,
                    None => Value::Nil,
                };
                self.env.define_variable(self.scope, *name, value);
            }
            StmtKind::Assignment { receiver, value } => {
                let ExprKind::Access {
                    receiver: inner,
                    name,
                    ..
                } = &source.arena.get_expr(*receiver).kind
                else {
                    return Err(RuntimeError::invalid_assignment().with_span(stmt.span));
                };
                let target = match inner {
                    Some(inner) => {
                        let record = self.eval_expr(source, *inner)?;
                        record.as_record().ok_or_else(|| {
                            RuntimeError::not_a_record(&record)
                                .with_span(source.arena.get_expr(*inner).span)
                        })?
                    }
                    None => self.scope,
                };
                let value = self.eval_expr(source, *value)?;
                self.env.define_variable(target, *name, value);
            }
            StmtKind::If {
                condition,
                then_body,
                else_body,
            } => {
                let body = if self.eval_condition(source, *condition)? {
                    *then_body
                } else {
                    *else_body
                };
                return self.exec_block(source, body);
            }
            StmtKind::For {
                name,
                iterable,
                body,
            } => {
                let (mut current, end) = match self.eval_expr(source, *iterable)? {
                    Value::Range { start, end } => (start, end),
                    other => {
                        return Err(RuntimeError::not_iterable(&other)
                            .with_span(source.arena.get_expr(*iterable).span))
                    }
                };
                while current < end {
                    self.env
                        .define_variable(self.scope, *name, Value::Integer(current.clone()));
                    if let Flow::Return(value) = self.exec_block(source, *body)? {
                        return Ok(Flow::Return(value));
                    }
                    current += BigInt::one();
                }
            }
            StmtKind::While { condition, body } => {
                while self.eval_condition(source, *condition)? {
                    if let Flow::Return(value) = self.exec_block(source, *body)? {
                        return Ok(Flow::Return(value));
                    }
                }
            }
            StmtKind::Return { value } => {
                return Ok(Flow::Return(self.eval_expr(source, *value)?));
            }
        }
        Ok(Flow::Normal)
    }

    fn eval_condition(&mut self, source: &Source, condition: ExprId) -> Result<bool, RuntimeError> {
        let value = self.eval_expr(source, condition)?;
        value.as_bool().ok_or_else(|| {
            RuntimeError::type_mismatch("Boolean", &value)
                .with_span(source.arena.get_expr(condition).span)
        })
    }
}
