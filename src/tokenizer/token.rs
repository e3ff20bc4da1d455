use serde::Serialize;
use std::fmt;

use super::value::Value;

/// A classified, positioned lexeme.
///
/// `start` and `end` are byte offsets into the source and always describe the
/// raw match, even when a transform produced a value of a different length.
/// `line` and `column` are 1-based. For a match spanning newlines they point
/// at the line the match ends on, column 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token<V = Value> {
    category: String,
    value: V,
    start: usize,
    end: usize,
    line: usize,
    column: usize,
}

impl<V> Token<V> {
    pub fn new(
        category: impl Into<String>,
        value: V,
        start: usize,
        end: usize,
        line: usize,
        column: usize,
    ) -> Self {
        Self {
            category: category.into(),
            value,
            start,
            end,
            line,
            column,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_value(self) -> V {
        self.value
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn span(&self) -> Span {
        Span {
            start: self.start,
            end: self.end,
            line: self.line,
            column: self.column,
        }
    }

    /// The raw lexeme this token was cut from.
    pub fn raw<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }

    pub fn is(&self, category: &str) -> bool {
        self.category == category
    }
}

impl<V: fmt::Display> Token<V> {
    /// Length of the value's textual form, which may differ from `end - start`.
    pub fn value_len(&self) -> usize {
        self.value.to_string().chars().count()
    }
}

impl<V: fmt::Display> fmt::Display for Token<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token({}, {}, {}[{}])",
            self.category, self.value, self.line, self.column
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line: {}, column: {}, start: {}, end: {}",
            self.line, self.column, self.start, self.end
        )
    }
}
