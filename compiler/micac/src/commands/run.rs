//! `mica run`: parse, analyze and interpret a file.

use mica_diagnostic::emitter::ColorMode;
use mica_eval::stdout_handler;
use mica_ir::StringInterner;

use super::{load, report};
use crate::{exit_code, run_source};

pub fn run_file(path: &str, color: ColorMode) -> i32 {
    let text = match load(path) {
        Ok(text) => text,
        Err(code) => return code,
    };
    let interner = StringInterner::new();
    match run_source(&text, &interner, stdout_handler()) {
        Ok(result) => exit_code(&result),
        Err(error) => report(&error, &text, path, color),
    }
}
