//! The single type-compatibility rule.

use mica_ir::{Span, StringInterner, Type};

use crate::SemanticError;

/// Whether a value of type `source` may be stored where `target` is expected.
///
/// `Any` accepts everything, `Comparable` accepts the four ordered scalar
/// types, and every other target requires the same type.
pub fn is_assignable(target: &Type, source: &Type) -> bool {
    match target {
        Type::Any => true,
        Type::Comparable => matches!(
            source,
            Type::Integer | Type::Decimal | Type::Character | Type::String | Type::Comparable
        ),
        _ => target == source,
    }
}

/// [`is_assignable`], or a mismatch error at `span`.
pub fn require_assignable(
    target: &Type,
    source: &Type,
    span: Span,
    interner: &StringInterner,
) -> Result<(), SemanticError> {
    if is_assignable(target, source) {
        Ok(())
    } else {
        Err(SemanticError::mismatch(target, source, span, interner))
    }
}
