//! The logos-derived token grammar.

use logos::Logos;

/// Raw token category recognized by logos.
///
/// Identifiers may contain `-`, so `n-1` is a single identifier. Numerals
/// carry an optional sign, so `n -1` lexes as `n`, `-1`. Binary minus needs
/// whitespace on both sides (`n - 1`).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub(crate) enum RawToken {
    #[regex(r"[A-Za-z_][A-Za-z0-9_-]*")]
    Identifier,

    #[regex(r"[+-]?[0-9]+")]
    Integer,

    #[regex(r"[+-]?[0-9]+\.[0-9]+")]
    Decimal,

    #[regex(r#"'([^'\n\r\\]|\\[bnrt'"\\])'"#)]
    Character,

    #[regex(r#""([^"\n\r\\]|\\[bnrt'"\\])*""#)]
    String,

    #[regex(r"[<>!=]=")]
    CompoundOperator,

    /// Any other single character that cannot start another token.
    #[regex(r#"[^A-Za-z0-9_ \t\r\n'"]"#)]
    Operator,
}
