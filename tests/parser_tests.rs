// tests/parser_tests.rs

use tiny_compiler::ast::{CallExpression, LiteralKind, Node, NodeKind, Program, ValueLiteral};
use tiny_compiler::lexer::{Position, tokenize};
use tiny_compiler::parser::{ParseError, Parser, parse};

fn parse_str(input: &str) -> Result<Program, ParseError> {
    let tokens = tokenize(input).unwrap();
    parse(&tokens)
}

fn num(value: &str) -> Node {
    ValueLiteral::number(value).into()
}

fn string(value: &str) -> Node {
    ValueLiteral::string(value).into()
}

fn call(name: &str, params: Vec<Node>) -> CallExpression {
    CallExpression::new(name, params)
}

fn depth(call: &CallExpression) -> usize {
    1 + call
        .params
        .iter()
        .filter_map(|p| match p {
            Node::Call(c) => Some(depth(c)),
            _ => None,
        })
        .max()
        .unwrap_or(0)
}

// ============================================================================
// Well-formed programs
// ============================================================================

#[test]
fn test_sample_expression() {
    let program = parse_str("(add 52 (sub 23 12))").unwrap();

    assert_eq!(
        program,
        Program::new(vec![call(
            "add",
            vec![num("52"), call("sub", vec![num("23"), num("12")]).into()],
        )])
    );
    assert_eq!(program.kind(), NodeKind::Program);
}

#[test]
fn test_string_arguments() {
    let program = parse_str(r#"(concat "foo" "bar")"#).unwrap();

    assert_eq!(program.body.len(), 1);
    let concat = &program.body[0];
    assert_eq!(concat.name, "concat");
    assert_eq!(concat.params, vec![string("foo"), string("bar")]);
    for param in &concat.params {
        assert_eq!(param.kind(), NodeKind::StringLiteral);
    }
}

#[test]
fn test_call_without_arguments() {
    let program = parse_str("(now )").unwrap();
    assert_eq!(program, Program::new(vec![call("now", vec![])]));
}

#[test]
fn test_multiple_top_level_calls() {
    let program = parse_str("(add 1 2) (sub 3 4)").unwrap();
    let names: Vec<_> = program.body.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["add", "sub"]);
}

#[test]
fn test_empty_program() {
    assert_eq!(parse_str("").unwrap(), Program::default());
}

#[test]
fn test_stray_top_level_tokens_are_skipped() {
    let program = parse_str(r#"42 "x" hello (add 1 2) 7"#).unwrap();
    assert_eq!(program, Program::new(vec![call("add", vec![num("1"), num("2")])]));
}

#[test]
fn test_arguments_after_nested_call() {
    // The outer call must resume right after the nested call's ')'
    let program = parse_str("(f (g 1) 2 (h (i 3)) 4)").unwrap();
    let f = &program.body[0];

    assert_eq!(f.params.len(), 4);
    assert_eq!(f.params[1], num("2"));
    assert_eq!(f.params[3], num("4"));
    assert_eq!(
        f.params[2],
        Node::Call(call("h", vec![call("i", vec![num("3")]).into()]))
    );
}

#[test]
fn test_param_count_matches_written_arguments() {
    let cases = vec![
        ("(f 1 2 3)", 3),
        (r#"(f "a" 1 (g ) )"#, 3),
        ("(f (g 1 2) (h 3))", 2),
        ("(f )", 0),
    ];

    for (input, expected) in cases {
        let program = parse_str(input).unwrap();
        assert_eq!(program.body[0].params.len(), expected, "Failed for input: {}", input);
    }
}

#[test]
fn test_nesting_depth() {
    let program = parse_str("(a (b (c (d 1))))").unwrap();
    assert_eq!(depth(&program.body[0]), 4);
}

#[test]
fn test_literal_kinds() {
    let program = parse_str(r#"(f 1 "1")"#).unwrap();
    match &program.body[0].params[..] {
        [Node::Literal(a), Node::Literal(b)] => {
            assert_eq!(a.kind, LiteralKind::Number);
            assert_eq!(b.kind, LiteralKind::String);
            assert_eq!(a.value, b.value);
        }
        other => panic!("unexpected params: {:?}", other),
    }
}

// ============================================================================
// Malformed programs
// ============================================================================

#[test]
fn test_unclosed_call() {
    let err = parse_str("(add 1").unwrap_err();
    assert_eq!(
        err,
        ParseError::MalformedExpression {
            message: "unclosed '(' in call to `add`".to_string(),
            position: Position::new(0, 1, 1),
        }
    );
}

#[test]
fn test_unclosed_nested_call_reports_inner_paren() {
    let err = parse_str("(add 1 (sub 2 3)").unwrap_err();
    assert!(matches!(err, ParseError::MalformedExpression { .. }));
    assert_eq!(err.position(), Position::new(0, 1, 1));

    let err = parse_str("(add 1 (sub 2 3").unwrap_err();
    assert_eq!(err.position(), Position::new(7, 1, 8));
}

#[test]
fn test_unmatched_close_paren() {
    let err = parse_str("(add 1 2))").unwrap_err();
    assert!(matches!(err, ParseError::MalformedExpression { .. }));
    assert_eq!(err.position(), Position::new(9, 1, 10));
}

#[test]
fn test_missing_name() {
    let err = parse_str("(1 2)").unwrap_err();
    assert!(err.to_string().contains("expected a function name"));

    let err = parse_str("((add 1 2))").unwrap_err();
    assert!(matches!(err, ParseError::MalformedExpression { .. }));
}

#[test]
fn test_missing_name_at_end_of_input() {
    let err = parse_str("(").unwrap_err();
    assert!(err.to_string().contains("found end of input"));
}

#[test]
fn test_name_in_argument_position() {
    let err = parse_str("(add x 1)").unwrap_err();
    assert!(err.to_string().contains("unexpected name `x`"));
}

#[test]
fn test_absorbed_paren_leaves_call_unclosed() {
    // `(pi)` lexes as `(` + name `pi)`
    assert!(parse_str("(pi)").is_err());
}

#[test]
fn test_max_depth() {
    let tokens = tokenize("(a (b (c 1)))").unwrap();

    assert!(Parser::new(&tokens).with_max_depth(3).parse_program().is_ok());

    let err = Parser::new(&tokens).with_max_depth(2).parse_program().unwrap_err();
    assert_eq!(
        err,
        ParseError::NestingTooDeep {
            limit: 2,
            position: Position::new(6, 1, 7),
        }
    );
}

#[test]
fn test_deep_nesting_within_default_limit() {
    let depth = 200;
    let input = format!("{}1{}", "(f ".repeat(depth), ")".repeat(depth));
    let program = parse_str(&input).unwrap();
    assert_eq!(self::depth(&program.body[0]), depth);
}
