//! Static analysis for Mica.
//!
//! A single top-down pass over a parsed [`Source`] that resolves every name
//! against a scope chain, checks types with [`is_assignable`], and writes the
//! results into the tree's resolution slots. Analysis stops at the first
//! [`SemanticError`].
//!
//! The analyzer is optional: the interpreter runs unannotated trees and
//! reports the same problems as runtime errors instead.

mod assignable;
mod checker;
mod error;
mod registry;

use mica_ir::{Source, StringInterner};

pub use assignable::{is_assignable, require_assignable};
pub use checker::Analyzer;
pub use error::SemanticError;
pub use registry::TypeRegistry;

/// Analyze `source` with only the built-in prelude in scope.
pub fn analyze(source: &mut Source, interner: &StringInterner) -> Result<(), SemanticError> {
    Analyzer::new(interner).analyze(source)
}

#[cfg(test)]
mod tests;
