use thiserror::Error;

use crate::tokenizer::UnmatchedSymbolError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Tokenize error: {0}")]
    Tokenize(#[from] UnmatchedSymbolError),

    #[error("Invalid pattern for template {category}: {source}")]
    Pattern {
        category: String,
        #[source]
        source: regex_automata::meta::BuildError,
    },

    #[error("Failed to read grammar file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse grammar: {0}")]
    Grammar(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type InternalResult<T> = Result<T, Error>;

impl Error {
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Error::Internal(message.into())
    }
}
