use super::{BinaryOp, ExprId, Function, Literal, Name, Span, Variable};
use crate::{ExprRange, Type};

/// Expression node.
///
/// `ty` is the analyzer's inferred type; `None` until analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
    pub ty: Option<Type>,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr {
            kind,
            span,
            ty: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Literal(Literal),
    /// Parenthesized expression.
    Group(ExprId),
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    /// `name` or `receiver.name`.
    Access {
        receiver: Option<ExprId>,
        name: Name,
        resolved: Option<Variable>,
    },
    /// `name(args)` or `receiver.name(args)`.
    Call {
        receiver: Option<ExprId>,
        name: Name,
        args: ExprRange,
        resolved: Option<Function>,
    },
}
