//! # Tokenizer Component
//!
//! The Tokenizer component turns raw text into a sequence of classified,
//! positioned tokens using an ordered list of regular-expression templates.
//!
//! ## Design Principles
//!
//! * **Comprehensive Token Information**: Each token records its byte span
//!   (`start`, `end`) and its 1-based line and column for precise error reporting.
//! * **Longest Match**: At every position all templates are tried; the longest
//!   match wins and the earliest declared template wins a tie.
//! * **Fail Fast**: Text no template can classify stops tokenization with an
//!   [`UnmatchedSymbolError`] pointing at the exact line and column.
//! * **Nothing Is Implicit**: Whitespace and newlines are ordinary templates;
//!   callers filter their categories out of the result.
//!
//! ## Component Structure
//!
//! * [`value`]: The default token payload type
//! * [`token`]: Token and span records
//! * [`template`]: Pattern templates and anchored matching
//! * [`position`]: Line/column tracking between accepted tokens
//! * [`lexer`]: The disambiguation loop
//! * [`error`]: The fatal no-match error
//!
//! ## Usage Example
//!
//! ```rust
//! use templex::tokenizer::{Lexer, TokenTemplate, Value};
//!
//! fn tokenize_example() -> Result<(), Box<dyn std::error::Error>> {
//!     let lexer = Lexer::new(vec![
//!         TokenTemplate::with_transform("NUMBER", r"\d+", Value::integer)?,
//!         TokenTemplate::new("WHITESPACE", r"\s+")?,
//!     ]);
//!     let tokens = lexer.tokenize_filtered("12 345", &["WHITESPACE"])?;
//!     assert_eq!(tokens[1].value(), &Value::Integer(345));
//!     Ok(())
//! }
//! # tokenize_example().unwrap();
//! ```

pub mod error;
pub mod lexer;
pub mod position;
pub mod template;
pub mod token;
pub mod value;


pub use error::UnmatchedSymbolError;
pub use lexer::{Lexer, LexerResult};
pub use position::{Position, PositionTracker};
pub use template::{TokenTemplate, Transform};
pub use token::{Span, Token};
pub use value::Value;
