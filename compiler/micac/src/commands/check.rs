//! `mica check`: analyze a file without running it.

use mica_diagnostic::emitter::ColorMode;
use mica_ir::StringInterner;

use super::{load, report};
use crate::check_source;

pub fn check_file(path: &str, color: ColorMode) -> i32 {
    let text = match load(path) {
        Ok(text) => text,
        Err(code) => return code,
    };
    let interner = StringInterner::new();
    match check_source(&text, &interner) {
        Ok(_) => {
            println!("OK");
            0
        }
        Err(error) => report(&error, &text, path, color),
    }
}
