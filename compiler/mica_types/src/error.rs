//! Semantic errors.

use mica_diagnostic::{Diagnostic, ErrorCode};
use mica_ir::{ScopeError, Span, StringInterner, Type};

/// A name-resolution or type-compatibility violation.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct SemanticError {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
}

impl SemanticError {
    fn new(code: ErrorCode, message: String, span: Span) -> Self {
        SemanticError {
            code,
            message,
            span,
        }
    }

    #[cold]
    pub fn mismatch(target: &Type, source: &Type, span: Span, interner: &StringInterner) -> Self {
        Self::new(
            ErrorCode::E2001,
            format!(
                "type `{}` is not assignable to `{}`",
                source.name(interner),
                target.name(interner)
            ),
            span,
        )
    }

    #[cold]
    pub fn not_comparable(ty: &Type, span: Span, interner: &StringInterner) -> Self {
        Self::new(
            ErrorCode::E2001,
            format!("type `{}` is not comparable", ty.name(interner)),
            span,
        )
    }

    #[cold]
    pub fn undefined_variable(name: &str, span: Span) -> Self {
        Self::new(
            ErrorCode::E2002,
            format!("undefined variable `{name}`"),
            span,
        )
    }

    #[cold]
    pub fn undefined_function(name: &str, arity: usize, span: Span) -> Self {
        Self::new(
            ErrorCode::E2003,
            format!("undefined function `{name}/{arity}`"),
            span,
        )
    }

    #[cold]
    pub fn unknown_type(name: &str, span: Span) -> Self {
        Self::new(ErrorCode::E2004, format!("unknown type `{name}`"), span)
    }

    #[cold]
    pub fn expression_not_call(span: Span) -> Self {
        Self::new(
            ErrorCode::E2005,
            "expression statement must be a call".to_string(),
            span,
        )
    }

    #[cold]
    pub fn assignment_target(span: Span) -> Self {
        Self::new(
            ErrorCode::E2006,
            "assignment target must be a variable or member access".to_string(),
            span,
        )
    }

    #[cold]
    pub fn missing_main(span: Span) -> Self {
        Self::new(
            ErrorCode::E2007,
            "program must define `main()` returning `Integer`".to_string(),
            span,
        )
    }

    #[cold]
    pub fn literal_out_of_range(kind: &str, span: Span) -> Self {
        Self::new(
            ErrorCode::E2008,
            format!("{kind} literal out of range"),
            span,
        )
    }

    #[cold]
    pub fn empty_body(what: &str, span: Span) -> Self {
        Self::new(
            ErrorCode::E2009,
            format!("{what} body must not be empty"),
            span,
        )
    }

    #[cold]
    pub fn untyped_declaration(name: &str, span: Span) -> Self {
        Self::new(
            ErrorCode::E2010,
            format!("`{name}` needs a type annotation or an initializer"),
            span,
        )
    }

    #[cold]
    pub fn not_an_object(ty: &Type, member: &str, span: Span, interner: &StringInterner) -> Self {
        Self::new(
            ErrorCode::E2011,
            format!(
                "type `{}` has no member `{member}`",
                ty.name(interner)
            ),
            span,
        )
    }

    #[cold]
    pub fn uninferable_return(name: &str, span: Span) -> Self {
        Self::new(
            ErrorCode::E2012,
            format!("cannot infer the return type of `{name}`; annotate it"),
            span,
        )
    }

    #[cold]
    pub fn scope_overflow(error: &ScopeError, span: Span) -> Self {
        Self::new(ErrorCode::E2013, error.to_string(), span)
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match self.code {
            ErrorCode::E2001 => "type mismatch",
            ErrorCode::E2002 | ErrorCode::E2003 => "not found in this scope",
            ErrorCode::E2004 => "unknown type",
            ErrorCode::E2008 => "out of range",
            ErrorCode::E2012 => "called before its return type is known",
            _ => "here",
        };
        Diagnostic::error(self.code)
            .with_message(self.message.clone())
            .with_label(self.span, label)
    }
}
