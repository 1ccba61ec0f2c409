//! Runtime errors.

use mica_diagnostic::{Diagnostic, ErrorCode};
use mica_ir::{BinaryOp, ScopeError, Span};

use crate::Value;

/// Failure class of a [`RuntimeError`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RuntimeErrorKind {
    DivisionByZero,
    TypeMismatch,
    UndefinedVariable,
    UndefinedFunction,
    NotARecord,
    NotIterable,
    StackOverflow,
    InvalidAssignment,
    ScopeOverflow,
}

impl RuntimeErrorKind {
    pub fn code(self) -> ErrorCode {
        match self {
            RuntimeErrorKind::DivisionByZero => ErrorCode::E6001,
            RuntimeErrorKind::TypeMismatch => ErrorCode::E6002,
            RuntimeErrorKind::UndefinedVariable => ErrorCode::E6003,
            RuntimeErrorKind::UndefinedFunction => ErrorCode::E6004,
            RuntimeErrorKind::NotARecord => ErrorCode::E6005,
            RuntimeErrorKind::NotIterable => ErrorCode::E6006,
            RuntimeErrorKind::StackOverflow => ErrorCode::E6007,
            RuntimeErrorKind::InvalidAssignment => ErrorCode::E6008,
            RuntimeErrorKind::ScopeOverflow => ErrorCode::E6009,
        }
    }
}

/// An error raised while running a program.
///
/// `span` is filled in by the innermost expression or statement that knows
/// where it is; natives and operators raise errors without one.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct RuntimeError {
    pub kind: RuntimeErrorKind,
    pub message: String,
    pub span: Option<Span>,
}

/// Result of evaluating an expression or running a program.
pub type EvalResult = Result<Value, RuntimeError>;

impl RuntimeError {
    fn new(kind: RuntimeErrorKind, message: String) -> Self {
        RuntimeError {
            kind,
            message,
            span: None,
        }
    }

    /// Attach `span` unless a more precise one is already present.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span.get_or_insert(span);
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    #[cold]
    pub fn division_by_zero() -> Self {
        Self::new(RuntimeErrorKind::DivisionByZero, "division by zero".to_string())
    }

    #[cold]
    pub fn type_mismatch(expected: &str, found: &Value) -> Self {
        Self::new(
            RuntimeErrorKind::TypeMismatch,
            format!("expected {expected}, found {}", found.type_name()),
        )
    }

    #[cold]
    pub fn invalid_operands(op: BinaryOp, left: &Value, right: &Value) -> Self {
        Self::new(
            RuntimeErrorKind::TypeMismatch,
            format!(
                "cannot apply `{op}` to {} and {}",
                left.type_name(),
                right.type_name()
            ),
        )
    }

    #[cold]
    pub fn undefined_variable(name: &str) -> Self {
        Self::new(
            RuntimeErrorKind::UndefinedVariable,
            format!("undefined variable `{name}`"),
        )
    }

    #[cold]
    pub fn undefined_function(name: &str, arity: usize) -> Self {
        Self::new(
            RuntimeErrorKind::UndefinedFunction,
            format!("undefined function `{name}/{arity}`"),
        )
    }

    #[cold]
    pub fn not_a_record(found: &Value) -> Self {
        Self::new(
            RuntimeErrorKind::NotARecord,
            format!("expected record, found {}", found.type_name()),
        )
    }

    #[cold]
    pub fn not_iterable(found: &Value) -> Self {
        Self::new(
            RuntimeErrorKind::NotIterable,
            format!("{} is not iterable", found.type_name()),
        )
    }

    #[cold]
    pub fn stack_overflow(limit: usize) -> Self {
        Self::new(
            RuntimeErrorKind::StackOverflow,
            format!("maximum call depth of {limit} exceeded"),
        )
    }

    #[cold]
    pub fn invalid_assignment() -> Self {
        Self::new(
            RuntimeErrorKind::InvalidAssignment,
            "assignment target must be a variable or member access".to_string(),
        )
    }

    #[cold]
    pub fn scope_overflow(error: &ScopeError) -> Self {
        Self::new(RuntimeErrorKind::ScopeOverflow, error.to_string())
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.code()).with_message(self.message.clone());
        match self.span {
            Some(span) => diagnostic.with_label(span, "raised here"),
            None => diagnostic,
        }
    }
}
