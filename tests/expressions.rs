use std::fs;

use numera::{
    error::ParseError,
    evaluate_expression,
    interpreter::{lexer::scan, parser::AstBuilder},
};

fn assert_evaluates(src: &str, expected: f64) {
    match evaluate_expression(src) {
        Ok(result) => assert_eq!(result, expected, "'{src}' evaluated to {result}"),
        Err(e) => panic!("'{src}' failed to evaluate: {e}"),
    }
}

fn assert_fails(src: &str) {
    if let Ok(result) = evaluate_expression(src) {
        panic!("'{src}' evaluated to {result} but was expected to fail")
    }
}

fn build(src: &str) -> numera::ast::Expr {
    let tokens = scan(src).unwrap_or_else(|e| panic!("'{src}' failed to scan: {e}"));
    AstBuilder::new(tokens, src).and_then(|mut builder| builder.parse_expression())
                                .unwrap_or_else(|e| panic!("'{src}' failed to parse: {e}"))
}

#[test]
fn basic_arithmetic() {
    assert_evaluates("1+2", 3.0);
    assert_evaluates("8-5", 3.0);
    assert_evaluates("7*9", 63.0);
    assert_evaluates("10/2", 5.0);
    assert_evaluates("3+5*(3+4)-9/3", 35.0);
}

#[test]
fn precedence() {
    assert_evaluates("2+3*4", 14.0);
    assert_evaluates("(2+3)*4", 20.0);
    assert_evaluates("2*3+4", 10.0);
}

#[test]
fn subtraction_is_left_associative() {
    assert_evaluates("10-3-2", 5.0);
    assert_evaluates("100/10/2", 5.0);
}

#[test]
fn nested_parentheses() {
    assert_evaluates("((1+2)*(3+4))", 21.0);
    assert_evaluates("((2))", 2.0);
}

#[test]
fn modulo_is_integer_division() {
    // The engine's `%` truncates both operands and divides; it is not a
    // remainder operation.
    assert_evaluates("7%2", 3.0);
    assert_evaluates("9%4", 2.0);
    assert_evaluates("7%3", 2.0);
}

#[test]
fn literal_forms() {
    assert_evaluates("1_000+2", 1002.0);
    assert_evaluates("2e2+50", 250.0);
    assert_evaluates("1.5e2", 150.0);
    assert_evaluates("3.25*4", 13.0);
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(build("3 + 4"), build("3+4"));
    assert_eq!(build("\t2 *\n( 3 + 4 )"), build("2*(3+4)"));
    assert_evaluates(" 3 + 4 ", 7.0);
}

#[test]
fn trailing_tokens_are_ignored() {
    // Anything that cannot continue the operator climb silently ends the
    // expression.
    assert_evaluates("3+", 3.0);
    assert_evaluates("3 4", 3.0);
    assert_evaluates("3)", 3.0);
}

#[test]
fn unknown_symbol_reports_offset() {
    match evaluate_expression("3+@5") {
        Err(ParseError::UnknownSymbol { symbol, offset, .. }) => {
            assert_eq!(symbol, "@");
            assert_eq!(offset, 2);
        },
        other => panic!("expected an unknown symbol error, got {other:?}"),
    }
}

#[test]
fn unknown_symbol_message_contains_diagram() {
    let error = evaluate_expression("3+@5").unwrap_err();

    assert_eq!(error.to_string(),
               "Symbol error: unknown '@', position [2:]\n----\n3+@5\n  ^\n----\n");
}

#[test]
fn leading_dot_is_not_a_literal() {
    match evaluate_expression(".5") {
        Err(ParseError::UnknownSymbol { symbol, offset, .. }) => {
            assert_eq!(symbol, ".");
            assert_eq!(offset, 0);
        },
        other => panic!("expected an unknown symbol error, got {other:?}"),
    }
}

#[test]
fn malformed_numbers_fail_at_parse_time() {
    match evaluate_expression("2e") {
        Err(ParseError::MalformedNumber { literal, offset, .. }) => {
            assert_eq!(literal, "2e");
            assert_eq!(offset, 0);
        },
        other => panic!("expected a malformed number error, got {other:?}"),
    }

    assert_fails("3.5.6");
    // No unary operators: a leading `-` lands on the literal error path.
    assert_fails("-3");
    assert_fails("()");
}

#[test]
fn unmatched_parenthesis_is_an_error() {
    assert!(matches!(evaluate_expression("(3+4"),
                     Err(ParseError::UnmatchedParen { .. })));
    assert!(matches!(evaluate_expression("("),
                     Err(ParseError::UnmatchedParen { .. })));
}

#[test]
fn empty_input_is_rejected_by_the_builder() {
    let tokens = scan("").unwrap();
    assert!(tokens.is_empty());

    assert!(matches!(AstBuilder::new(tokens, "").err(),
                     Some(ParseError::EmptyExpression)));

    assert_fails("");
    assert_fails(" \t\n");
}

#[test]
#[should_panic(expected = "division by zero")]
fn division_by_zero_is_fatal() {
    let _ = evaluate_expression("5/0");
}

#[test]
#[should_panic(expected = "divide by zero")]
fn modulo_by_zero_is_fatal() {
    // `%` truncates its right operand before the integer division, so a
    // fractional divisor below one is fatal too.
    let _ = evaluate_expression("7%0.5");
}

#[test]
fn tree_inspection() {
    let expr = build("1+2*3");

    assert_eq!(expr.depth(), 3);
    assert_eq!(expr.level_order(),
               "(L + R)\t\n( 1 )\t(L * R)\t\n( 2 )\t( 3 )\t\n");

    assert_eq!(build("7").depth(), 1);
}

#[test]
fn example_expressions_evaluate() {
    let contents = fs::read_to_string("tests/example.calc").expect("missing file");
    let mut count = 0;

    for line in contents.lines().map(str::trim).filter(|line| !line.is_empty()) {
        count += 1;
        if let Err(e) = evaluate_expression(line) {
            panic!("example expression '{line}' failed: {e}");
        }
    }

    assert!(count > 0, "No expressions found in tests/example.calc");
}
