//! # templex: a template-driven lexer
//!
//! templex converts raw text into classified, positioned tokens from an
//! ordered set of regular-expression templates supplied at runtime.
//!
//! ```text
//! Grammar (code or JSON) → Templates → Lexer → Tokens → TokenCursor → your parser
//! ```
//!
//! - Tokenization ([`tokenizer`]): templates, longest-match scanning, position
//!   tracking and the fatal no-match error
//! - Grammar files ([`config`]): templates and filters as JSON data
//! - Token navigation ([`stream`]): a cursor for parsers consuming the result
//! - Errors ([`error`])

pub mod config;
pub mod error;
pub mod stream;
pub mod tokenizer;

// Re-exports
pub use config::{GrammarConfig, TemplateConfig, TransformKind};
pub use error::*;
pub use stream::TokenCursor;
pub use tokenizer::{Lexer, Token, TokenTemplate, UnmatchedSymbolError, Value};
