use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::{
    tokenizer::{Lexer, TokenTemplate, Value},
    Error, InternalResult,
};

/// A grammar as plain data: the ordered templates and the categories dropped
/// from the result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrammarConfig {
    pub templates: Vec<TemplateConfig>,

    #[serde(default)]
    pub filter: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    pub category: String,
    pub pattern: String,

    #[serde(default)]
    pub transform: TransformKind,
}

/// Named transforms a grammar file can attach to a template.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TransformKind {
    #[default]
    Raw,
    Integer,
    Float,
    Boolean,
    Trim,
    /// Strips one pair of matching surrounding quotes.
    Unquote,
}

impl TransformKind {
    pub fn apply(self, raw: &str) -> Value {
        match self {
            TransformKind::Raw => Value::from(raw),
            TransformKind::Integer => Value::integer(raw),
            TransformKind::Float => Value::float(raw),
            TransformKind::Boolean => Value::boolean(raw),
            TransformKind::Trim => Value::from(raw.trim()),
            TransformKind::Unquote => Value::from(unquote(raw)),
        }
    }
}

fn unquote(raw: &str) -> &str {
    ['"', '\'']
        .iter()
        .find_map(|q| raw.strip_prefix(*q).and_then(|s| s.strip_suffix(*q)))
        .unwrap_or(raw)
}

impl TemplateConfig {
    pub fn new(category: &str, pattern: &str, transform: TransformKind) -> Self {
        Self {
            category: category.to_string(),
            pattern: pattern.to_string(),
            transform,
        }
    }

    pub fn build(&self) -> InternalResult<TokenTemplate<Value>> {
        let transform = self.transform;
        TokenTemplate::with_transform(self.category.as_str(), &self.pattern, move |raw: &str| {
            transform.apply(raw)
        })
        .map_err(|source| Error::Pattern {
            category: self.category.clone(),
            source,
        })
    }
}

impl GrammarConfig {
    pub fn from_json_str(json: &str) -> InternalResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> InternalResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            templates = config.templates.len(),
            "grammar loaded"
        );
        Ok(config)
    }

    /// Loads the grammar at `path`, or the built-in BNF grammar when no path
    /// is given. A path that cannot be read is an error, never a fallback.
    pub fn load(path: Option<&Path>) -> InternalResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                tracing::debug!("no grammar file given, using the default grammar");
                Ok(Self::default())
            }
        }
    }

    /// Compiles every template, in declaration order.
    pub fn build_lexer(&self) -> InternalResult<Lexer<Value>> {
        let templates = self
            .templates
            .iter()
            .map(|t| {
                tracing::debug!(
                    category = %t.category,
                    transform = %t.transform,
                    "compiling template"
                );
                t.build()
            })
            .collect::<InternalResult<Vec<_>>>()?;
        Ok(Lexer::new(templates))
    }
}

/// A grammar for BNF-style rule definitions.
impl Default for GrammarConfig {
    fn default() -> Self {
        use TransformKind::*;
        Self {
            templates: vec![
                TemplateConfig::new("FOR", "for", Raw),
                TemplateConfig::new("IDENTIFIER", "[a-z_][a-z0-9_]*", Raw),
                TemplateConfig::new("TOKEN", "[A-Z_][A-Z0-9_]*", Raw),
                TemplateConfig::new("LITERAL", r#"'[ A-Za-z_0-9.,!"$]+'"#, Raw),
                TemplateConfig::new("LITERAL", r#""[ A-Za-z_0-9.,!'$]+""#, Raw),
                TemplateConfig::new("LITERAL", r"\d+", Integer),
                TemplateConfig::new("OPERATOR", "::=", Raw),
                TemplateConfig::new("OPERATOR", r"\*", Raw),
                TemplateConfig::new("OPERATOR", r"\?", Raw),
                TemplateConfig::new("OPERATOR", r"\+", Raw),
                TemplateConfig::new("OPERATOR", r"\|", Raw),
                TemplateConfig::new("DELIMITER", r"\)", Raw),
                TemplateConfig::new("DELIMITER", r"\(", Raw),
                TemplateConfig::new("WHITESPACE", "[ \t]", Raw),
                TemplateConfig::new("NEWLINE", r"\r?\n", Raw),
            ],
            filter: vec!["WHITESPACE".to_string(), "NEWLINE".to_string()],
        }
    }
}
