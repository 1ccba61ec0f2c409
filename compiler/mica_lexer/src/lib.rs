//! Tokenizer for Mica source text.
//!
//! Produces a flat [`TokenList`] of `(kind, text, span)` triples. Keywords
//! are not distinguished from identifiers here, and literal text is kept
//! raw (quotes and escapes included); the parser decodes literals with the
//! helpers in [`escape`].

pub mod escape;
mod lex_error;
mod raw_token;

use logos::Logos;
use mica_ir::{Span, Token, TokenKind, TokenList};

pub use lex_error::LexError;
use raw_token::RawToken;

/// Tokenize `source`, stopping at the first unrecognized input.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn lex(source: &str) -> Result<TokenList, LexError> {
    let mut result = TokenList::with_capacity(source.len() / 4);
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();

        let raw = token_result.map_err(|()| LexError::from_slice(slice, span))?;
        result.push(Token::new(convert_kind(raw), slice, span));
    }

    tracing::debug!(tokens = result.len(), "lexed source");
    Ok(result)
}

fn convert_kind(raw: RawToken) -> TokenKind {
    match raw {
        RawToken::Identifier => TokenKind::Identifier,
        RawToken::Integer => TokenKind::Integer,
        RawToken::Decimal => TokenKind::Decimal,
        RawToken::Character => TokenKind::Character,
        RawToken::String => TokenKind::String,
        RawToken::CompoundOperator | RawToken::Operator => TokenKind::Operator,
    }
}

#[cfg(test)]
mod tests;
