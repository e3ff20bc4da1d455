use thiserror::Error;

/// No template matched at the current position.
///
/// Tokenization stops at the first such position; the error records where it
/// happened and the text of the offending line so it can be shown with a
/// marker under the failing column.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "Unable to parse symbol at position {column} on line {line}.\n\tNear here:\n\t\t{excerpt}\n\t\t{}",
    caret(.column)
)]
pub struct UnmatchedSymbolError {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
    pub excerpt: String,
}

impl UnmatchedSymbolError {
    pub fn new(text: &str, offset: usize, line: usize, column: usize) -> Self {
        let excerpt = text
            .split('\n')
            .nth(line.saturating_sub(1))
            .unwrap_or_default()
            .trim_end_matches('\r')
            .to_string();
        Self {
            line,
            column,
            offset,
            excerpt,
        }
    }

    /// A run of `-` ending in `^` under the failing column.
    pub fn marker(&self) -> String {
        caret(&self.column)
    }

    /// The first few characters the lexer could not classify.
    pub fn found<'a>(&self, text: &'a str) -> &'a str {
        let rest = text.get(self.offset..).unwrap_or_default();
        let len = rest
            .char_indices()
            .nth(20)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        &rest[..len]
    }
}

fn caret(column: &usize) -> String {
    format!("{}^", "-".repeat(column.saturating_sub(1)))
}
