#![allow(clippy::unwrap_used, clippy::expect_used)]

mod host;

use mica_ir::{Source, StringInterner};
use mica_lexer::lex;
use mica_parse::parse;

use crate::{buffer_handler, EvalResult, InterpreterBuilder};

pub(crate) fn parse_program(src: &str, interner: &StringInterner) -> Source {
    let tokens = lex(src).expect("test source should lex");
    parse(&tokens, interner).expect("test source should parse")
}

/// Run `src` without analysis; returns the result and everything printed.
pub(crate) fn run(src: &str) -> (EvalResult, String) {
    let interner = StringInterner::new();
    let source = parse_program(src, &interner);
    let output = buffer_handler();
    let mut interp = InterpreterBuilder::new(&interner)
        .print_handler(output.clone())
        .build();
    let result = interp.run(&source);
    (result, output.output())
}

/// Analyze `src` first, then run it.
pub(crate) fn run_analyzed(src: &str) -> (EvalResult, String) {
    let interner = StringInterner::new();
    let mut source = parse_program(src, &interner);
    mica_types::analyze(&mut source, &interner).expect("test source should analyze");
    let output = buffer_handler();
    let mut interp = InterpreterBuilder::new(&interner)
        .print_handler(output.clone())
        .build();
    let result = interp.run(&source);
    (result, output.output())
}
