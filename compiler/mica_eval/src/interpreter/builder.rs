//! `InterpreterBuilder`.

use mica_ir::StringInterner;

use super::Interpreter;
use crate::{stdout_handler, SharedPrintHandler};

/// Default limit on nested method invocations.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1024;

/// Configures and creates an [`Interpreter`].
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: usize,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        InterpreterBuilder {
            interner,
            print_handler: None,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }

    /// Where `print` writes. Defaults to stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Nested method invocations allowed before a call fails with
    /// [`StackOverflow`](crate::RuntimeErrorKind::StackOverflow).
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        Interpreter::new(
            self.interner,
            self.print_handler.unwrap_or_else(stdout_handler),
            self.max_call_depth,
        )
    }
}
