//! The Mica toolchain driver.
//!
//! Wires the phases together: [`lex_source`] → [`parse_source`] →
//! [`check_source`] → [`run_source`]. Every phase error is folded into
//! [`CompileError`], which renders as a [`Diagnostic`].
//!
//! The `mica` binary (`src/main.rs`) is a thin argument parser over
//! [`commands`].

pub mod commands;

use std::sync::Once;

use mica_diagnostic::Diagnostic;
use mica_eval::{InterpreterBuilder, RuntimeError, SharedPrintHandler, Value};
use mica_ir::{Source, StringInterner, TokenList};
use mica_lexer::LexError;
use mica_parse::SyntaxError;
use mica_types::SemanticError;
use num_traits::{Signed, ToPrimitive};

/// The first error any phase reported.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CompileError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Semantic(#[from] SemanticError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl CompileError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            CompileError::Lex(e) => e.to_diagnostic(),
            CompileError::Syntax(e) => e.to_diagnostic(),
            CompileError::Semantic(e) => e.to_diagnostic(),
            CompileError::Runtime(e) => e.to_diagnostic(),
        }
    }
}

pub fn lex_source(text: &str) -> Result<TokenList, CompileError> {
    Ok(mica_lexer::lex(text)?)
}

/// Lex and parse. Resolution slots are left empty.
pub fn parse_source(text: &str, interner: &StringInterner) -> Result<Source, CompileError> {
    let tokens = lex_source(text)?;
    Ok(mica_parse::parse(&tokens, interner)?)
}

/// Lex, parse and analyze. The returned tree has its resolution slots filled.
pub fn check_source(text: &str, interner: &StringInterner) -> Result<Source, CompileError> {
    let mut source = parse_source(text, interner)?;
    mica_types::analyze(&mut source, interner)?;
    Ok(source)
}

/// Check `text`, then interpret it, sending `print` output to `print_handler`.
/// Returns `main`'s result.
pub fn run_source(
    text: &str,
    interner: &StringInterner,
    print_handler: SharedPrintHandler,
) -> Result<Value, CompileError> {
    let source = check_source(text, interner)?;
    let mut interpreter = InterpreterBuilder::new(interner)
        .print_handler(print_handler)
        .build();
    Ok(interpreter.run(&source)?)
}

/// Process exit status for a program result: an Integer clamped to `i32`,
/// otherwise 0.
pub fn exit_code(result: &Value) -> i32 {
    match result {
        Value::Integer(n) => n.to_i32().unwrap_or(if n.is_negative() {
            i32::MIN
        } else {
            i32::MAX
        }),
        _ => 0,
    }
}

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber if `RUST_LOG` is set.
///
/// With `MICA_LOG_TREE` also set, spans render as an indented tree instead
/// of flat lines. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let tree = std::env::var_os("MICA_LOG_TREE").is_some();
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(tree.then(|| tracing_tree::HierarchicalLayer::new(2).with_targets(true)))
            .with((!tree).then(|| fmt::layer().with_target(true).with_level(true)))
            .init();
    });
}
