//! Mica IR: the data model shared by the lexer, parser, analyzer and interpreter.
//!
//! - [`Span`] for byte-offset source locations
//! - [`Name`] and [`StringInterner`] for identifiers
//! - [`Token`] and [`TokenList`] for lexer output
//! - a flat AST ([`Source`], [`Expr`], [`Stmt`]) stored in an [`ExprArena`]
//! - [`Type`] descriptors and the resolution-slot payloads [`Variable`] and [`Function`]
//! - [`ScopeArena`], the parent-linked binding chain used both for static
//!   analysis (types) and for evaluation (values)
//!
//! # Design
//!
//! Expressions and statements never own their children. They refer to them
//! through [`ExprId`]/[`StmtId`] indices, and sequences are [`ExprRange`]/[`StmtRange`]
//! windows into flattened lists. The analyzer writes its results into the
//! `resolved`/`ty` slots of the nodes in place.

mod arena;
pub mod ast;
mod expr_id;
mod interner;
mod name;
pub mod scope;
mod span;
mod token;
pub mod types;

pub use arena::ExprArena;
pub use ast::{
    BinaryOp, Expr, ExprKind, Field, Literal, Method, Param, Source, Stmt, StmtKind,
};
pub use expr_id::{ExprId, ExprRange, StmtId, StmtRange};
pub use interner::StringInterner;
pub use name::Name;
pub use scope::{ScopeArena, ScopeError, ScopeId};
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
pub use types::{Function, ObjectType, Type, Variable};
