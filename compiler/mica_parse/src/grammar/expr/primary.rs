//! Primary expressions and literal decoding.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use mica_ir::{Expr, ExprId, ExprKind, Literal, Token, TokenKind};
use mica_lexer::escape::{unescape_char, unescape_string};
use num_bigint::BigInt;

use crate::{ParseResult, Parser, SyntaxError};

impl Parser<'_> {
    /// ```text
    /// primary := 'NIL' | 'TRUE' | 'FALSE' | INTEGER | DECIMAL | CHARACTER | STRING
    ///          | IDENT ('(' arguments ')')?
    ///          | '(' expression ')'
    /// ```
    pub(crate) fn parse_primary(&mut self) -> ParseResult<ExprId> {
        let start = self.cursor.current_span();

        if self.cursor.eat("(") {
            let inner = self.parse_expr()?;
            self.cursor.expect(")", "`)`")?;
            let span = self.span_from(start);
            return Ok(self.arena.alloc_expr(Expr::new(ExprKind::Group(inner), span)));
        }

        let Some(token) = self.cursor.current() else {
            return Err(self.cursor.error("expression"));
        };

        let kind = match token.kind {
            TokenKind::Identifier => {
                self.cursor.advance();
                match token.text.as_str() {
                    "NIL" => ExprKind::Literal(Literal::Nil),
                    "TRUE" => ExprKind::Literal(Literal::Boolean(true)),
                    "FALSE" => ExprKind::Literal(Literal::Boolean(false)),
                    text => {
                        let name = self.interner.intern(text);
                        if self.cursor.eat("(") {
                            let args = self.parse_arguments()?;
                            ExprKind::Call {
                                receiver: None,
                                name,
                                args,
                                resolved: None,
                            }
                        } else {
                            ExprKind::Access {
                                receiver: None,
                                name,
                                resolved: None,
                            }
                        }
                    }
                }
            }
            TokenKind::Integer
            | TokenKind::Decimal
            | TokenKind::Character
            | TokenKind::String => {
                self.cursor.advance();
                ExprKind::Literal(decode_literal(token)?)
            }
            TokenKind::Operator => return Err(self.cursor.error("expression")),
        };

        let span = self.span_from(start);
        Ok(self.arena.alloc_expr(Expr::new(kind, span)))
    }
}

/// Turn a literal token's raw text into its value.
pub(crate) fn decode_literal(token: &Token) -> ParseResult<Literal> {
    let text = token.text.as_str();
    let invalid = || SyntaxError::invalid_literal(token);
    match token.kind {
        TokenKind::Integer => {
            let digits = text.strip_prefix('+').unwrap_or(text);
            BigInt::from_str(digits)
                .map(Literal::Integer)
                .map_err(|_| invalid())
        }
        TokenKind::Decimal => {
            let digits = text.strip_prefix('+').unwrap_or(text);
            BigDecimal::from_str(digits)
                .map(Literal::Decimal)
                .map_err(|_| invalid())
        }
        TokenKind::Character => strip_quotes(text, '\'')
            .and_then(unescape_char)
            .map(Literal::Character)
            .ok_or_else(invalid),
        TokenKind::String => strip_quotes(text, '"')
            .map(|body| Literal::String(unescape_string(body)))
            .ok_or_else(invalid),
        TokenKind::Identifier | TokenKind::Operator => Err(invalid()),
    }
}

fn strip_quotes(text: &str, quote: char) -> Option<&str> {
    text.strip_prefix(quote)?.strip_suffix(quote)
}
