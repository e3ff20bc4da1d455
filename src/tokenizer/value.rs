//! # Token Values
//!
//! A template may convert the raw lexeme into something other than text, for
//! example parsing a run of digits into an integer. [`Value`] is the default
//! payload type carried by a [`Token`](super::token::Token); callers that need
//! their own payload type can use any `V` with [`TokenTemplate::with_transform`].
//!
//! [`TokenTemplate::with_transform`]: super::template::TokenTemplate::with_transform

use serde::Serialize;
use std::fmt;

/// The semantic payload of a token.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl Value {
    /// Parses the lexeme as an `i64`, keeping the text when it does not fit.
    pub fn integer(raw: &str) -> Self {
        raw.parse()
            .map(Value::Integer)
            .unwrap_or_else(|_| Value::Text(raw.to_string()))
    }

    pub fn float(raw: &str) -> Self {
        raw.parse()
            .map(Value::Float)
            .unwrap_or_else(|_| Value::Text(raw.to_string()))
    }

    /// `true` and `false` (any case) become booleans, anything else stays text.
    pub fn boolean(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "true" => Value::Boolean(true),
            "false" => Value::Boolean(false),
            _ => Value::Text(raw.to_string()),
        }
    }
}

impl From<&str> for Value {
    fn from(raw: &str) -> Self {
        Value::Text(raw.to_string())
    }
}

impl From<String> for Value {
    fn from(raw: String) -> Self {
        Value::Text(raw)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{}", s),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_transform() {
        assert_eq!(Value::integer("1234567890"), Value::Integer(1234567890));
        // overflow keeps the lexeme
        let huge = "99999999999999999999999";
        assert_eq!(Value::integer(huge), Value::Text(huge.to_string()));
    }

    #[test]
    fn test_boolean_transform() {
        assert_eq!(Value::boolean("TRUE"), Value::Boolean(true));
        assert_eq!(Value::boolean("false"), Value::Boolean(false));
        assert_eq!(Value::boolean("maybe"), Value::Text("maybe".to_string()));
    }

    #[test]
    fn test_display_and_json() {
        assert_eq!(Value::Integer(12).to_string(), "12");
        assert_eq!(Value::from("abc").to_string(), "abc");
        assert_eq!(serde_json::to_string(&Value::Integer(12)).unwrap(), "12");
        assert_eq!(
            serde_json::to_string(&Value::from("abc")).unwrap(),
            "\"abc\""
        );
    }
}
