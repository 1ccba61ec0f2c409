//! Token cursor with `peek`/`eat` pattern lookahead.

use mica_ir::{Span, Token, TokenKind, TokenList};

use crate::{ParseResult, SyntaxError};

/// One element of a lookahead pattern: a token category or exact text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pattern<'p> {
    Kind(TokenKind),
    Text(&'p str),
}

impl Pattern<'_> {
    #[inline]
    fn matches(self, token: &Token) -> bool {
        match self {
            Pattern::Kind(kind) => token.kind == kind,
            Pattern::Text(text) => token.text == text,
        }
    }
}

impl From<TokenKind> for Pattern<'_> {
    fn from(kind: TokenKind) -> Self {
        Pattern::Kind(kind)
    }
}

impl<'p> From<&'p str> for Pattern<'p> {
    fn from(text: &'p str) -> Self {
        Pattern::Text(text)
    }
}

/// Forward-only position in a [`TokenList`].
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor { tokens, pos: 0 }
    }

    #[inline]
    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// True when the upcoming tokens match `patterns` one-for-one.
    pub fn peek(&self, patterns: &[Pattern<'_>]) -> bool {
        patterns.iter().enumerate().all(|(i, pattern)| {
            self.tokens
                .get(self.pos + i)
                .is_some_and(|token| pattern.matches(token))
        })
    }

    /// Single-pattern [`peek`](Self::peek).
    #[inline]
    pub fn check<'p>(&self, pattern: impl Into<Pattern<'p>>) -> bool {
        self.peek(&[pattern.into()])
    }

    /// Consume the upcoming tokens if they match `patterns`.
    pub fn eat_all(&mut self, patterns: &[Pattern<'_>]) -> bool {
        let matched = self.peek(patterns);
        if matched {
            self.pos += patterns.len();
        }
        matched
    }

    /// Single-pattern [`eat_all`](Self::eat_all).
    #[inline]
    pub fn eat<'p>(&mut self, pattern: impl Into<Pattern<'p>>) -> bool {
        self.eat_all(&[pattern.into()])
    }

    /// Consume and return the current token.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.current()?;
        self.pos += 1;
        Some(token)
    }

    /// Consume a token matching `pattern` or fail describing `expected`.
    pub fn expect<'p>(
        &mut self,
        pattern: impl Into<Pattern<'p>>,
        expected: &str,
    ) -> ParseResult<&'a Token> {
        if self.check(pattern) {
            if let Some(token) = self.advance() {
                return Ok(token);
            }
        }
        Err(self.error(expected))
    }

    /// Syntax error at the next unconsumed token.
    #[cold]
    pub fn error(&self, expected: &str) -> SyntaxError {
        SyntaxError::expected(expected, self.current(), self.next_offset())
    }

    /// Offset of the next unconsumed token, or the end of the last token.
    fn next_offset(&self) -> u32 {
        self.current().map_or_else(|| self.end_offset(), Token::offset)
    }

    fn end_offset(&self) -> u32 {
        self.tokens.last().map_or(0, |t| t.span.end)
    }

    /// Span of the current token, or an empty span at end of input.
    pub fn current_span(&self) -> Span {
        self.current()
            .map_or_else(|| Span::point(self.end_offset()), |t| t.span)
    }

    /// Span of the most recently consumed token.
    pub fn previous_span(&self) -> Span {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(Span::DUMMY, |t| t.span)
    }
}
