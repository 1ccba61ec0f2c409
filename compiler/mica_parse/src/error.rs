//! Parse errors.

use mica_diagnostic::{Diagnostic, ErrorCode};
use mica_ir::{Span, Token};

/// A malformed token sequence.
///
/// `offset` is the source offset of the next unconsumed token, or the end
/// of the last token when the input ran out.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{message} (at offset {offset})")]
pub struct SyntaxError {
    pub code: ErrorCode,
    pub message: String,
    pub offset: u32,
    pub span: Span,
}

impl SyntaxError {
    /// `expected` was required but `found` (or end of input at `end`) was there.
    #[cold]
    pub fn expected(expected: &str, found: Option<&Token>, end: u32) -> Self {
        match found {
            Some(token) => SyntaxError {
                code: ErrorCode::E1001,
                message: format!("expected {expected}, found `{}`", token.text),
                offset: token.offset(),
                span: token.span,
            },
            None => SyntaxError {
                code: ErrorCode::E1002,
                message: format!("expected {expected}, found end of input"),
                offset: end,
                span: Span::point(end),
            },
        }
    }

    /// Literal text the lexer accepted but that does not denote a value.
    #[cold]
    pub fn invalid_literal(token: &Token) -> Self {
        SyntaxError {
            code: ErrorCode::E1003,
            message: format!("invalid {} `{}`", token.kind.display_name(), token.text),
            offset: token.offset(),
            span: token.span,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = if self.code == ErrorCode::E1002 {
            "input ends here"
        } else {
            "unexpected token"
        };
        Diagnostic::error(self.code)
            .with_message(self.message.clone())
            .with_label(self.span, label)
    }
}

/// Result of a parsing step.
pub type ParseResult<T> = Result<T, SyntaxError>;
