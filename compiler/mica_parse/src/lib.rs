//! Recursive-descent parser for Mica.
//!
//! One method per grammar production. The parser consumes a [`TokenList`]
//! left to right without backtracking and builds a [`Source`] whose nodes
//! live in a flat [`ExprArena`]. It either returns a complete tree or the
//! first [`SyntaxError`]; there is no recovery.
//!
//! ```text
//! source      := field* method*
//! field       := 'LET' IDENT (':' IDENT)? ('=' expression)? ';'
//! method      := 'DEF' IDENT '(' (param (',' param)*)? ')' (':' IDENT)? 'DO' statement* 'END'
//! statement   := declaration | if | for | while | return | expr-or-assignment
//! expression  := logical
//! logical     := equality (('AND'|'OR') equality)*
//! equality    := additive (('=='|'!='|'<'|'<='|'>'|'>=') additive)*
//! additive    := multiplicative (('+'|'-') multiplicative)*
//! multiplicative := secondary (('*'|'/') secondary)*
//! secondary   := primary ('.' IDENT ('(' arguments ')')?)*
//! ```
//!
//! `AND` and `OR` share one precedence tier: `a OR b AND c` groups as
//! `(a OR b) AND c`.

mod cursor;
mod error;
mod grammar;

use mica_ir::{ExprArena, Source, Span, StringInterner, TokenList};

pub use cursor::{Cursor, Pattern};
pub use error::{ParseResult, SyntaxError};

/// Parser state: the token cursor and the arena being filled.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: ExprArena,
    interner: &'a StringInterner,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            arena: ExprArena::with_capacity(tokens.len()),
            interner,
        }
    }

    /// Span from `start` through the most recently consumed token.
    fn span_from(&self, start: Span) -> Span {
        start.merge(self.cursor.previous_span())
    }
}

/// Parse a whole program.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &TokenList, interner: &StringInterner) -> ParseResult<Source> {
    let source = Parser::new(tokens, interner).parse_source()?;
    tracing::debug!(
        fields = source.fields.len(),
        methods = source.methods.len(),
        exprs = source.arena.expr_count(),
        "parsed source"
    );
    Ok(source)
}

#[cfg(test)]
mod tests;
