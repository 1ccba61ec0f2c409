//! AST node definitions.
//!
//! The tree is flat: nodes refer to their children through arena ids, and
//! every node owned by a [`Source`] lives in its [`ExprArena`]. Items (fields
//! and methods) are small and few, so they are stored inline.
//!
//! Nodes carry *resolution slots* (`resolved`, `ty`) that start out `None`
//! and are filled in by the analyzer. The interpreter never requires them.

mod expr;
mod literal;
mod operators;
mod stmt;

pub use expr::{Expr, ExprKind};
pub use literal::{format_decimal, Literal};
pub use operators::BinaryOp;
pub use stmt::{Stmt, StmtKind};

use super::{ExprArena, ExprId, Function, Name, Span, StmtRange, Variable};

/// Program root: all top-level fields, then all methods.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Source {
    pub fields: Vec<Field>,
    pub methods: Vec<Method>,
    pub arena: ExprArena,
}

impl Source {
    /// Find the first method with the given name and arity.
    pub fn method(&self, name: Name, arity: usize) -> Option<&Method> {
        self.methods
            .iter()
            .find(|m| m.name == name && m.params.len() == arity)
    }
}

/// `LET name (: Type)? (= value)? ;` at the top level.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub name: Name,
    pub type_name: Option<Name>,
    pub value: Option<ExprId>,
    pub span: Span,
    pub resolved: Option<Variable>,
}

/// `DEF name(params) (: Type)? DO body END`.
#[derive(Clone, Debug, PartialEq)]
pub struct Method {
    pub name: Name,
    pub params: Vec<Param>,
    pub return_type: Option<Name>,
    pub body: StmtRange,
    pub span: Span,
    pub resolved: Option<Function>,
}

/// A method parameter with its optional type annotation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Param {
    pub name: Name,
    pub type_name: Option<Name>,
    pub span: Span,
}
