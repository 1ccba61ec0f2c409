//! Debug commands: `lex` and `parse` for inspecting phase output.

use mica_diagnostic::emitter::ColorMode;
use mica_ir::StringInterner;

use super::{load, report};
use crate::{lex_source, parse_source};

/// Print one token per line as `kind text @offset`.
pub fn lex_file(path: &str, color: ColorMode) -> i32 {
    let text = match load(path) {
        Ok(text) => text,
        Err(code) => return code,
    };
    match lex_source(&text) {
        Ok(tokens) => {
            for token in &tokens {
                println!("{:?} {} @{}", token.kind, token.text, token.offset());
            }
            0
        }
        Err(error) => report(&error, &text, path, color),
    }
}

/// Print the parsed tree.
pub fn parse_file(path: &str, color: ColorMode) -> i32 {
    let text = match load(path) {
        Ok(text) => text,
        Err(code) => return code,
    };
    let interner = StringInterner::new();
    match parse_source(&text, &interner) {
        Ok(source) => {
            println!("{source:#?}");
            0
        }
        Err(error) => report(&error, &text, path, color),
    }
}
