use pretty_assertions::assert_eq;
use std::io::Write;
use templex::{Error, GrammarConfig, Token, TokenCursor, Value};

const BNF_GRAMMAR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/bnf.json");
const BNF_SAMPLE: &str = include_str!("../data/sample.bnf");

fn listing(tokens: &[Token]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

#[test]
fn test_bnf_sample_listing() {
    let config = GrammarConfig::from_file(BNF_GRAMMAR).unwrap();
    let lexer = config.build_lexer().unwrap();

    let tokens = lexer.tokenize_filtered(BNF_SAMPLE, &config.filter).unwrap();

    assert_eq!(
        listing(&tokens),
        vec![
            "Token(IDENTIFIER, name, 2[1])",
            "Token(OPERATOR, ::=, 2[6])",
            "Token(IDENTIFIER, definition, 2[10])",
            "Token(DELIMITER, (, 2[21])",
            "Token(LITERAL, \",\", 2[22])",
            "Token(IDENTIFIER, definition, 2[26])",
            "Token(DELIMITER, ), 2[36])",
            "Token(OPERATOR, *, 2[37])",
            "Token(IDENTIFIER, definition, 3[1])",
            "Token(OPERATOR, ::=, 3[12])",
            "Token(TOKEN, TOKEN, 3[16])",
            "Token(TOKEN, TOKEN, 4[1])",
            "Token(OPERATOR, ::=, 4[7])",
            "Token(LITERAL, \"literal\", 4[11])",
            "Token(OPERATOR, |, 4[21])",
            "Token(LITERAL, \"other 'nested' literal\", 4[23])",
            "Token(IDENTIFIER, forget, 5[1])",
            "Token(OPERATOR, ::=, 5[8])",
            "Token(DELIMITER, (, 5[12])",
            "Token(FOR, for, 5[13])",
            "Token(OPERATOR, ::=, 5[17])",
            "Token(IDENTIFIER, forget, 5[21])",
            "Token(FOR, for, 5[28])",
            "Token(IDENTIFIER, get, 5[32])",
            "Token(DELIMITER, ), 5[35])",
        ]
    );
}

#[test]
fn test_default_grammar_matches_bundled_file() {
    let from_file = GrammarConfig::from_file(BNF_GRAMMAR).unwrap();
    let builtin = GrammarConfig::default();

    let a = from_file.build_lexer().unwrap();
    let b = builtin.build_lexer().unwrap();

    assert_eq!(
        a.tokenize_filtered(BNF_SAMPLE, &from_file.filter).unwrap(),
        b.tokenize_filtered(BNF_SAMPLE, &builtin.filter).unwrap()
    );
}

#[test]
fn test_integer_literal_transform() {
    let config = GrammarConfig::default();
    let lexer = config.build_lexer().unwrap();

    let tokens = lexer.tokenize_filtered("count ::= 42", &config.filter).unwrap();

    assert_eq!(tokens[2].category(), "LITERAL");
    assert_eq!(tokens[2].value(), &Value::Integer(42));
}

#[test]
fn test_load_grammar_from_temp_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "templates": [
                {{ "category": "BOOL", "pattern": "true|false", "transform": "boolean" }},
                {{ "category": "NAME", "pattern": "[a-z]+" }},
                {{ "category": "STRING", "pattern": "'[^']*'", "transform": "unquote" }},
                {{ "category": "SPACE", "pattern": " +" }}
            ],
            "filter": ["SPACE"]
        }}"#
    )
    .unwrap();

    let config = GrammarConfig::from_file(file.path()).unwrap();
    let lexer = config.build_lexer().unwrap();
    let tokens = lexer
        .tokenize_filtered("true falsey 'hi there'", &config.filter)
        .unwrap();

    let values: Vec<_> = tokens.into_iter().map(|t| t.into_value()).collect();
    assert_eq!(
        values,
        vec![
            Value::Boolean(true),
            Value::from("falsey"),
            Value::from("hi there"),
        ]
    );
}

#[test]
fn test_missing_grammar_file() {
    let result = GrammarConfig::from_file("/nonexistent/grammar.json");
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_unmatched_symbol_converts_to_crate_error() {
    let config = GrammarConfig::default();
    let lexer = config.build_lexer().unwrap();

    let result: Result<Vec<Token>, Error> = lexer
        .tokenize_filtered("rule ::= @", &config.filter)
        .map_err(Error::from);

    match result {
        Err(Error::Tokenize(error)) => {
            assert_eq!((error.line, error.column), (1, 10));
            assert!(error.to_string().contains("---------^"));
        }
        other => panic!("Expected tokenize error, got: {:?}", other),
    }
}

#[test]
fn test_cursor_over_grammar_tokens() {
    let config = GrammarConfig::default();
    let lexer = config.build_lexer().unwrap();
    let tokens = lexer
        .tokenize_filtered("rule ::= A | B", &config.filter)
        .unwrap();

    let mut cursor = TokenCursor::new(&tokens);
    let mut alternatives = Vec::new();

    assert!(cursor.advance_if(&["IDENTIFIER"]).is_some());
    assert!(cursor.advance_if(&["OPERATOR"]).is_some());
    while let Some(token) = cursor.advance_if(&["TOKEN"]) {
        alternatives.push(token.value().to_string());
        if cursor.advance_if(&["OPERATOR"]).is_none() {
            break;
        }
    }

    assert!(cursor.is_at_end());
    assert_eq!(alternatives, vec!["A", "B"]);
}
