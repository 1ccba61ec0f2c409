#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use mica_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<(TokenKind, String)> {
    lex(source)
        .unwrap()
        .iter()
        .map(|t| (t.kind, t.text.clone()))
        .collect()
}

fn tok(kind: TokenKind, text: &str) -> (TokenKind, String) {
    (kind, text.to_string())
}

#[test]
fn method_header() {
    use TokenKind::{Identifier, Operator};
    assert_eq!(
        kinds("DEF main() DO"),
        vec![
            tok(Identifier, "DEF"),
            tok(Identifier, "main"),
            tok(Operator, "("),
            tok(Operator, ")"),
            tok(Identifier, "DO"),
        ]
    );
}

#[test]
fn identifiers_allow_dashes_and_underscores() {
    assert_eq!(
        kinds("_tmp kebab-case x1"),
        vec![
            tok(TokenKind::Identifier, "_tmp"),
            tok(TokenKind::Identifier, "kebab-case"),
            tok(TokenKind::Identifier, "x1"),
        ]
    );
}

#[test]
fn numbers_carry_their_sign() {
    use TokenKind::{Decimal, Identifier, Integer, Operator};
    assert_eq!(
        kinds("1 -2 +3.50 n-1 n - 1"),
        vec![
            tok(Integer, "1"),
            tok(Integer, "-2"),
            tok(Decimal, "+3.50"),
            tok(Identifier, "n-1"),
            tok(Identifier, "n"),
            tok(Operator, "-"),
            tok(Integer, "1"),
        ]
    );
}

#[test]
fn signed_literal_after_identifier() {
    use TokenKind::{Identifier, Integer};
    assert_eq!(
        kinds("x +1"),
        vec![tok(Identifier, "x"), tok(Integer, "+1")]
    );
}

#[test]
fn compound_operators() {
    use TokenKind::Operator;
    assert_eq!(
        kinds("<= >= != == < = ;"),
        vec![
            tok(Operator, "<="),
            tok(Operator, ">="),
            tok(Operator, "!="),
            tok(Operator, "=="),
            tok(Operator, "<"),
            tok(Operator, "="),
            tok(Operator, ";"),
        ]
    );
}

#[test]
fn string_and_character_text_is_raw() {
    assert_eq!(
        kinds(r#""a\"b" '\n' 'c'"#),
        vec![
            tok(TokenKind::String, r#""a\"b""#),
            tok(TokenKind::Character, r"'\n'"),
            tok(TokenKind::Character, "'c'"),
        ]
    );
}

#[test]
fn spans_are_byte_offsets() {
    let tokens = lex("LET  x\n= 1;").unwrap();
    let offsets: Vec<u32> = tokens.iter().map(Token::offset).collect();
    assert_eq!(offsets, vec![0, 5, 7, 9, 10]);
    assert_eq!(tokens[0].span, Span::new(0, 3));
}

#[test]
fn empty_source() {
    assert!(lex("  \n\t ").unwrap().is_empty());
}

#[test]
fn unterminated_string_is_an_error() {
    let err = lex("LET s = \"abc").unwrap_err();
    assert_eq!(err.code, ErrorCode::E0002);
    assert_eq!(err.span.start, 8);
}

#[test]
fn invalid_escape_is_an_error() {
    let err = lex(r#""bad \q""#).unwrap_err();
    assert_eq!(err.code, ErrorCode::E0002);
}

#[test]
fn empty_character_is_an_error() {
    let err = lex("''").unwrap_err();
    assert_eq!(err.code, ErrorCode::E0003);
    assert_eq!(err.to_diagnostic().labels.len(), 1);
}
