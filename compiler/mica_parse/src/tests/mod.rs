#![allow(clippy::unwrap_used, clippy::expect_used)]

mod errors;
mod expressions;

use crate::{parse, ParseResult};
use mica_ir::{Expr, ExprId, ExprKind, Literal, Source, Stmt, StmtId, StringInterner};
use mica_lexer::lex;

/// Lex and parse `src`, keeping the interner for name lookups.
pub(crate) fn parse_source(src: &str) -> (ParseResult<Source>, StringInterner) {
    let interner = StringInterner::new();
    let tokens = lex(src).expect("test source should lex");
    let result = parse(&tokens, &interner);
    (result, interner)
}

/// Parse `DEF main() DO RETURN <expr>; END` and return the returned expression.
pub(crate) fn parse_returned_expr(expr: &str) -> (Source, ExprId, StringInterner) {
    let (result, interner) = parse_source(&format!("DEF main() DO RETURN {expr}; END"));
    let source = result.unwrap();
    let body = source.methods[0].body;
    let stmt = source.arena.get_stmt_list(body)[0];
    let mica_ir::StmtKind::Return { value } = source.arena.get_stmt(stmt).kind else {
        panic!("expected a return statement");
    };
    (source, value, interner)
}

pub(crate) fn expr(source: &Source, id: ExprId) -> &Expr {
    source.arena.get_expr(id)
}

pub(crate) fn stmt(source: &Source, id: StmtId) -> &Stmt {
    source.arena.get_stmt(id)
}

pub(crate) fn literal(source: &Source, id: ExprId) -> &Literal {
    match &expr(source, id).kind {
        ExprKind::Literal(lit) => lit,
        other => panic!("expected literal, found {other:?}"),
    }
}
