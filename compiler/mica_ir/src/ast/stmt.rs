use super::{ExprId, Name, Span, StmtRange, Variable};

/// Statement node.
#[derive(Clone, Debug, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StmtKind {
    /// An expression evaluated for its side effects; must be a call.
    Expression(ExprId),
    /// `LET name (: Type)? (= value)? ;`
    Declaration {
        name: Name,
        type_name: Option<Name>,
        value: Option<ExprId>,
        resolved: Option<Variable>,
    },
    /// `receiver = value ;` where `receiver` is an access.
    Assignment {
        receiver: ExprId,
        value: ExprId,
    },
    If {
        condition: ExprId,
        then_body: StmtRange,
        else_body: StmtRange,
    },
    For {
        name: Name,
        iterable: ExprId,
        body: StmtRange,
    },
    While {
        condition: ExprId,
        body: StmtRange,
    },
    Return {
        value: ExprId,
    },
}
