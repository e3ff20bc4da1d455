//! # Token Templates
//!
//! A [`TokenTemplate`] is the formula for one kind of token: a category label,
//! a regular expression and a transform applied to the matched text. The
//! [`Lexer`](super::lexer::Lexer) asks every template for a match at the
//! current position and keeps the longest one.
//!
//! Matching is anchored: a template only ever matches text that begins exactly
//! at the requested offset. The search still sees the whole input, so `^`,
//! `(?m)^` and `\b` look at the text before the offset.

use regex_automata::{
    meta::{BuildError, Regex},
    Anchored, Input,
};
use std::{fmt, sync::Arc};

use super::token::Token;

/// Converts the raw lexeme into a token value.
pub type Transform<V> = Arc<dyn Fn(&str) -> V + Send + Sync>;

pub struct TokenTemplate<V> {
    category: String,
    pattern: String,
    regex: Regex,
    transform: Transform<V>,
}

impl<V> TokenTemplate<V>
where
    V: for<'a> From<&'a str> + 'static,
{
    /// A template whose tokens carry the raw lexeme as their value.
    pub fn new(category: impl Into<String>, pattern: &str) -> Result<Self, BuildError> {
        Self::with_transform(category, pattern, |raw: &str| V::from(raw))
    }
}

impl<V> TokenTemplate<V> {
    /// A template whose tokens carry `transform(lexeme)` as their value.
    pub fn with_transform<F>(
        category: impl Into<String>,
        pattern: &str,
        transform: F,
    ) -> Result<Self, BuildError>
    where
        F: Fn(&str) -> V + Send + Sync + 'static,
    {
        let regex = Regex::new(pattern)?;
        Ok(Self {
            category: category.into(),
            pattern: pattern.to_string(),
            regex,
            transform: Arc::new(transform),
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Tries to match at exactly `start`, where the scan currently stands at
    /// `line`/`column`.
    ///
    /// Every newline inside the match moves the token to the next line and
    /// resets its column to 1, so a multi-line match reports the line it ends
    /// on. Empty matches are treated as no match.
    pub fn match_at(
        &self,
        text: &str,
        start: usize,
        line: usize,
        column: usize,
    ) -> Option<Token<V>> {
        if !text.is_char_boundary(start) {
            return None;
        }
        let input = Input::new(text).range(start..).anchored(Anchored::Yes);
        let matched = self.regex.search(&input)?;
        if matched.is_empty() {
            return None;
        }

        let raw = &text[matched.range()];
        let (mut line, mut column) = (line, column);
        for _ in raw.matches('\n') {
            line += 1;
            column = 1;
        }

        Some(Token::new(
            self.category.as_str(),
            (self.transform)(raw),
            matched.start(),
            matched.end(),
            line,
            column,
        ))
    }
}

impl<V> Clone for TokenTemplate<V> {
    fn clone(&self) -> Self {
        Self {
            category: self.category.clone(),
            pattern: self.pattern.clone(),
            regex: self.regex.clone(),
            transform: Arc::clone(&self.transform),
        }
    }
}

impl<V> fmt::Debug for TokenTemplate<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenTemplate")
            .field("category", &self.category)
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}
