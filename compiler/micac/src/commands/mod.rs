//! Subcommands of the `mica` binary. Each returns the process exit code.

mod check;
mod debug;
mod run;

pub use check::check_file;
pub use debug::{lex_file, parse_file};
pub use run::run_file;

use mica_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};

use crate::CompileError;

/// Read a source file, describing any failure for the user.
pub fn read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}

/// Render `error` on stderr against the source it came from.
fn report(error: &CompileError, text: &str, path: &str, color: ColorMode) -> i32 {
    let mut emitter = TerminalEmitter::stderr(color)
        .with_source(text)
        .with_file_path(path);
    emitter.emit(&error.to_diagnostic());
    emitter.flush();
    1
}

/// Read `path`, or print why not and yield the failure exit code.
fn load(path: &str) -> Result<String, i32> {
    read_file(path).map_err(|msg| {
        eprintln!("{msg}");
        1
    })
}
