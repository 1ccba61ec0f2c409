//! Lexer errors.

use mica_diagnostic::{Diagnostic, ErrorCode};
use mica_ir::Span;

/// Failure to tokenize the source text.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct LexError {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
}

impl LexError {
    /// Classify an unrecognized slice by the character it starts with.
    #[cold]
    pub(crate) fn from_slice(slice: &str, span: Span) -> Self {
        match slice.chars().next() {
            Some('"') => LexError {
                code: ErrorCode::E0002,
                message: "unterminated or malformed string literal".to_string(),
                span,
            },
            Some('\'') => LexError {
                code: ErrorCode::E0003,
                message: "unterminated or malformed character literal".to_string(),
                span,
            },
            Some(c) => LexError {
                code: ErrorCode::E0001,
                message: format!("unexpected character `{}`", c.escape_debug()),
                span,
            },
            None => LexError {
                code: ErrorCode::E0001,
                message: "unexpected input".to_string(),
                span,
            },
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code)
            .with_message(self.message.clone())
            .with_label(self.span, "not a valid token")
    }
}
