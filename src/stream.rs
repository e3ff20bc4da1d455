//! # Token Cursor
//!
//! Navigation over a tokenized sequence for hand-written parsers built on top
//! of the [`Lexer`](crate::tokenizer::Lexer). The end of the stream is the
//! index just past the last token; there is no sentinel token.
//!
//! Grammar decisions are left to the caller: the cursor only exposes the
//! tokens in order and lets the caller test their categories.

use crate::tokenizer::{Token, Value};

#[derive(Debug, Clone)]
pub struct TokenCursor<'a, V = Value> {
    tokens: &'a [Token<V>],
    current: usize,
}

impl<'a, V> TokenCursor<'a, V> {
    pub fn new(tokens: &'a [Token<V>]) -> Self {
        Self { tokens, current: 0 }
    }

    pub fn position(&self) -> usize {
        self.current
    }

    pub fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// The token under the cursor.
    pub fn peek(&self) -> Option<&'a Token<V>> {
        self.tokens.get(self.current)
    }

    pub fn peek_next(&self) -> Option<&'a Token<V>> {
        self.tokens.get(self.current + 1)
    }

    pub fn previous(&self) -> Option<&'a Token<V>> {
        self.current
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index))
    }

    /// Returns the token under the cursor and moves past it.
    pub fn advance(&mut self) -> Option<&'a Token<V>> {
        let token = self.tokens.get(self.current)?;
        self.current += 1;
        Some(token)
    }

    pub fn check(&self, category: &str) -> bool {
        self.peek().is_some_and(|token| token.is(category))
    }

    /// Advances if the token under the cursor belongs to one of `categories`.
    pub fn advance_if(&mut self, categories: &[&str]) -> Option<&'a Token<V>> {
        if categories.iter().any(|category| self.check(category)) {
            self.advance()
        } else {
            None
        }
    }
}
