use serde_json::json;
use tiny_compiler::{
    CompileError, CompilerOptions, LexError, ParseError, Stage, compile, compile_with,
    output::{source_to_json, target_to_json, to_json, to_json_pretty, tokens_to_json},
    parse, tokenize, transform,
};

#[test]
fn test_sample_target_json() {
    let program = compile("(add 52 (sub 23 12))").unwrap();

    assert_eq!(
        target_to_json(&program),
        json!({
            "type": "Program",
            "body": [{
                "type": "ExpressionStatement",
                "expression": {
                    "type": "CallExpression",
                    "callee": { "type": "Identifier", "name": "add" },
                    "arguments": [
                        { "type": "NumberLiteral", "value": "52" },
                        {
                            "type": "CallExpression",
                            "callee": { "type": "Identifier", "name": "sub" },
                            "arguments": [
                                { "type": "NumberLiteral", "value": "23" },
                                { "type": "NumberLiteral", "value": "12" }
                            ]
                        }
                    ]
                }
            }]
        })
    );
}

#[test]
fn test_sample_source_json() {
    let tokens = tokenize("(add 52 (sub 23 12))").unwrap();
    let program = parse(&tokens).unwrap();

    assert_eq!(
        source_to_json(&program),
        json!({
            "type": "Program",
            "body": [{
                "type": "CallExpression",
                "name": "add",
                "params": [
                    { "type": "NumberLiteral", "value": "52" },
                    {
                        "type": "CallExpression",
                        "name": "sub",
                        "params": [
                            { "type": "NumberLiteral", "value": "23" },
                            { "type": "NumberLiteral", "value": "12" }
                        ]
                    }
                ]
            }]
        })
    );
}

#[test]
fn test_tokens_json() {
    let tokens = tokenize(r#"(concat "foo" 1)"#).unwrap();
    assert_eq!(
        tokens_to_json(&tokens),
        json!([
            { "type": "paren", "value": "(" },
            { "type": "name", "value": "concat" },
            { "type": "string", "value": "foo" },
            { "type": "number", "value": "1" },
            { "type": "paren", "value": ")" }
        ])
    );
}

#[test]
fn test_field_order_is_insertion_order() {
    let program = compile("(add 1)").unwrap();
    let text = to_json(&target_to_json(&program));

    assert_eq!(
        text,
        r#"{"type":"Program","body":[{"type":"ExpressionStatement","expression":{"type":"CallExpression","callee":{"type":"Identifier","name":"add"},"arguments":[{"type":"NumberLiteral","value":"1"}]}}]}"#
    );
}

#[test]
fn test_pretty_output_is_indented() {
    let program = compile("(add 1)").unwrap();
    let text = to_json_pretty(&target_to_json(&program));

    assert!(text.starts_with("{\n  \"type\": \"Program\",\n  \"body\": ["));
    let reparsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(reparsed, target_to_json(&program));
}

#[test]
fn test_string_arguments_end_to_end() {
    let program = compile(r#"(concat "foo" "bar")"#).unwrap();
    let json = target_to_json(&program);
    let arguments = &json["body"][0]["expression"]["arguments"];

    assert_eq!(arguments[0], json!({ "type": "StringLiteral", "value": "foo" }));
    assert_eq!(arguments[1], json!({ "type": "StringLiteral", "value": "bar" }));
}

#[test]
fn test_stages_compose() {
    let input = r#"(a 1 (b "x" (c 2)) 3) (d )"#;
    let tokens = tokenize(input).unwrap();
    let source = parse(&tokens).unwrap();
    let target = transform(&source).unwrap();
    assert_eq!(compile(input).unwrap(), target);
    assert_eq!(target.body.len(), 2);
}

// ============================================================================
// Errors carry their stage
// ============================================================================

#[test]
fn test_invalid_number_fails_in_lexer() {
    let err = compile("(add 1a)").unwrap_err();
    assert_eq!(err.stage(), Stage::Lexer);
    assert!(matches!(
        err,
        CompileError::Lex(LexError::InvalidNumberSyntax { .. })
    ));
    assert_eq!(err.position().map(|p| p.column), Some(7));
}

#[test]
fn test_unbalanced_fails_in_parser() {
    let err = compile("(add 1").unwrap_err();
    assert_eq!(err.stage(), Stage::Parser);
    assert!(matches!(
        err,
        CompileError::Parse(ParseError::MalformedExpression { .. })
    ));
    assert!(err.to_string().starts_with("parser error: Malformed expression"));
}

#[test]
fn test_unterminated_string_fails_in_lexer() {
    let err = compile(r#"(concat "foo)"#).unwrap_err();
    assert_eq!(err.stage(), Stage::Lexer);
    assert!(matches!(
        err,
        CompileError::Lex(LexError::UnterminatedString { .. })
    ));
}

#[test]
fn test_depth_limit_from_options() {
    let input = "(a (b (c 1)))";
    let options = CompilerOptions::default().with_max_depth(2);

    let err = compile_with(input, &options).unwrap_err();
    assert!(matches!(
        err,
        CompileError::Parse(ParseError::NestingTooDeep { limit: 2, .. })
    ));
    assert!(compile_with(input, &CompilerOptions::default()).is_ok());
}
