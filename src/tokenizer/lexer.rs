use super::{
    error::UnmatchedSymbolError, position::PositionTracker, template::TokenTemplate, token::Token,
    value::Value,
};

pub type LexerResult<T> = Result<T, UnmatchedSymbolError>;

/// Sorts source text into lexical categories.
///
/// The lexer holds an ordered list of templates. At every position it asks
/// each template for a match and accepts the longest one; when two matches
/// have the same length the template declared first wins. If nothing matches,
/// tokenization fails with [`UnmatchedSymbolError`].
///
/// Whitespace, newlines and comments are not skipped implicitly: declare
/// templates for them and drop their categories with
/// [`tokenize_filtered`](Lexer::tokenize_filtered).
///
/// All scan state lives inside each call, so one lexer can be shared between
/// threads and reused for any number of inputs.
#[derive(Debug, Clone)]
pub struct Lexer<V = Value> {
    templates: Vec<TokenTemplate<V>>,
}

impl<V> Lexer<V> {
    pub fn new(templates: Vec<TokenTemplate<V>>) -> Self {
        Self { templates }
    }

    pub fn templates(&self) -> &[TokenTemplate<V>] {
        &self.templates
    }

    /// Tokenizes `text`, keeping every token.
    pub fn tokenize(&self, text: &str) -> LexerResult<Vec<Token<V>>> {
        self.tokenize_filtered::<&str>(text, &[])
    }

    /// Tokenizes `text` and drops tokens whose category is listed in `filter`.
    #[tracing::instrument(level = "debug", skip(self, text, filter), fields(len = text.len()))]
    pub fn tokenize_filtered<S: AsRef<str>>(
        &self,
        text: &str,
        filter: &[S],
    ) -> LexerResult<Vec<Token<V>>> {
        let mut tracker = PositionTracker::new();
        let mut tokens = Vec::new();

        while tracker.offset() < text.len() {
            let Some(token) = self.best_match(text, &tracker) else {
                let position = tracker.current();
                let error = UnmatchedSymbolError::new(
                    text,
                    position.offset,
                    position.line,
                    position.column,
                );
                tracing::error!("{}", error);
                return Err(error);
            };

            tracing::trace!(
                category = token.category(),
                start = token.start(),
                end = token.end(),
                line = token.line(),
                column = token.column(),
                "accepted token"
            );
            tracker.accept(&token, text);
            tokens.push(token);
        }

        let total = tokens.len();
        tokens.retain(|token| !filter.iter().any(|category| token.is(category.as_ref())));
        tracing::debug!(total, kept = tokens.len(), "tokenization complete");

        Ok(tokens)
    }

    fn best_match(&self, text: &str, tracker: &PositionTracker) -> Option<Token<V>> {
        let mut best: Option<Token<V>> = None;
        for template in &self.templates {
            let Some(candidate) =
                template.match_at(text, tracker.offset(), tracker.line(), tracker.column())
            else {
                continue;
            };
            // strictly longer only: earlier templates keep ties
            let longer = best
                .as_ref()
                .map_or(true, |current| candidate.end() > current.end());
            if longer {
                best = Some(candidate);
            }
        }
        best
    }
}
