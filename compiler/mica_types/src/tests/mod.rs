#![allow(clippy::unwrap_used, clippy::expect_used)]

mod expressions;
mod statements;

use mica_ir::{Source, StmtKind, StringInterner, Type};
use mica_lexer::lex;
use mica_parse::parse;

use crate::{analyze, SemanticError};

pub(crate) fn parse_program(src: &str, interner: &StringInterner) -> Source {
    let tokens = lex(src).expect("test source should lex");
    parse(&tokens, interner).expect("test source should parse")
}

pub(crate) fn check(src: &str) -> Result<Source, SemanticError> {
    let interner = StringInterner::new();
    let mut source = parse_program(src, &interner);
    analyze(&mut source, &interner).map(|()| source)
}

pub(crate) fn check_err(src: &str) -> SemanticError {
    check(src).expect_err("analysis should fail")
}

/// Wrap statements in a `main` that returns an Integer.
pub(crate) fn in_main(stmts: &str) -> String {
    format!("DEF main() DO {stmts} RETURN 0; END")
}

/// Static type of `expr`, read back from a declaration's resolution slot.
pub(crate) fn type_of(expr: &str) -> Result<Type, SemanticError> {
    let source = check(&in_main(&format!("LET v = {expr};")))?;
    let first = source.arena.get_stmt_list(source.methods[0].body)[0];
    match &source.arena.get_stmt(first).kind {
        StmtKind::Declaration {
            resolved: Some(variable),
            ..
        } => Ok(variable.ty.clone()),
        other => panic!("expected resolved declaration, found {other:?}"),
    }
}
