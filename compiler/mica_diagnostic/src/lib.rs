//! Diagnostics shared by every Mica phase.
//!
//! Each phase error (`LexError`, `SyntaxError`, `SemanticError`,
//! `RuntimeError`) converts into a [`Diagnostic`]: an [`ErrorCode`], a
//! message, and labeled [`Span`](mica_ir::Span)s. The driver hands diagnostics
//! to an [`emitter::DiagnosticEmitter`] for rendering.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
