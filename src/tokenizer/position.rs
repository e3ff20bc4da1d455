//! # Scan Position
//!
//! Line, column and byte offset of the lexer while it walks the input. Lines
//! and columns are 1-based; columns count characters, offsets count bytes.

use super::token::Token;

/// A snapshot of the scan position, as reported in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub offset: usize,
    pub column: usize,
}

/// Where the lexer is looking in the source text.
///
/// Templates fold intra-token line/column movement into the tokens they
/// produce, so the tracker only moves in response to the one token that is
/// actually accepted.
#[derive(Debug, Clone)]
pub struct PositionTracker {
    offset: usize,
    line: usize,
    column: usize,
}

impl Default for PositionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionTracker {
    /// A tracker at the start of the input: offset 0, line 1, column 1.
    pub fn new() -> Self {
        Self {
            offset: 0,
            line: 1,   // 1-based
            column: 1, // 1-based
        }
    }

    pub fn current(&self) -> Position {
        Position {
            line: self.line,
            offset: self.offset,
            column: self.column,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Moves past `token`, which was cut from `source`.
    ///
    /// The line comparison must happen before `line` is overwritten.
    pub fn accept<V>(&mut self, token: &Token<V>, source: &str) {
        if token.line() != self.line {
            self.column = 1;
        } else {
            self.column += token.raw(source).chars().count();
        }
        self.offset = token.end();
        self.line = token.line();
    }
}
