use std::fs::{self};

use treelox::{
    ast::{Expr, Stmt},
    error::Error,
    evaluate,
    interpreter::evaluator::core::Interpreter,
    parse_program,
    run,
};
use walkdir::WalkDir;

const EXPECT_OUTPUT: &str = "// expect: ";
const EXPECT_RUNTIME_ERROR: &str = "// expect runtime error: ";

#[test]
fn script_expectations_hold() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "lox"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let (expected_output, expected_error) = extract_expectations(&source);

        count += 1;
        let mut out = Vec::new();
        let result = run(&source, &mut out);
        let output = String::from_utf8(out).unwrap_or_else(|e| panic!("{path:?}: {e}"));

        assert_eq!(output.lines().collect::<Vec<_>>(),
                   expected_output,
                   "Output of {path:?} differs");

        match (result, expected_error) {
            (Ok(()), None) => {},
            (Err(Error::Runtime(e)), Some(message)) => {
                assert_eq!(e.message(), message, "Runtime error of {path:?} differs");
            },
            (result, expected) => {
                panic!("Script {path:?} ended with {result:?}, expected runtime error {expected:?}")
            },
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn extract_expectations(source: &str) -> (Vec<&str>, Option<&str>) {
    let mut output = Vec::new();
    let mut error = None;

    for line in source.lines() {
        if let Some(at) = line.find(EXPECT_OUTPUT) {
            output.push(&line[at + EXPECT_OUTPUT.len()..]);
        } else if let Some(at) = line.find(EXPECT_RUNTIME_ERROR) {
            error = Some(&line[at + EXPECT_RUNTIME_ERROR.len()..]);
        }
    }

    (output, error)
}

fn output_of(src: &str) -> String {
    let mut out = Vec::new();
    if let Err(e) = run(src, &mut out) {
        panic!("Script failed: {e}");
    }
    String::from_utf8(out).unwrap_or_else(|e| panic!("Output is not UTF-8: {e}"))
}

fn runtime_error_of(src: &str) -> String {
    match run(src, &mut Vec::<u8>::new()) {
        Err(Error::Runtime(e)) => e.to_string(),
        Err(e) => panic!("Script failed before running: {e}"),
        Ok(()) => panic!("Script succeeded but was expected to fail"),
    }
}

fn evaluated(src: &str) -> String {
    match evaluate(src) {
        Ok(value) => value.to_string(),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

#[test]
fn variables_and_arithmetic() {
    assert_eq!(output_of("var a = 1; var b = 2; print a + b;"), "3\n");
    assert_eq!(output_of("var a; print a;"), "nil\n");
    assert_eq!(output_of("var a = 1; a = a + 1; print a;"), "2\n");
}

#[test]
fn string_concatenation() {
    assert_eq!(output_of("print \"foo\" + \"bar\";"), "foobar\n");
}

#[test]
fn assignment_yields_the_assigned_value() {
    assert_eq!(output_of("var a; var b; print a = b = 3; print a; print b;"),
               "3\n3\n3\n");
}

#[test]
fn truthiness() {
    assert_eq!(evaluated("!nil"), "true");
    assert_eq!(evaluated("!false"), "true");
    assert_eq!(evaluated("!0"), "false");
    assert_eq!(evaluated("!\"\""), "false");
}

#[test]
fn number_display() {
    assert_eq!(evaluated("3"), "3");
    assert_eq!(evaluated("2.50"), "2.5");
    assert_eq!(evaluated("7 / 2"), "3.5");
    assert_eq!(evaluated("-(4 - 10)"), "6");
    assert_eq!(evaluated("100000000000000000000000"), "100000000000000000000000");
    assert_eq!(evaluated("1000000000000000000000 * 1000"), "1000000000000000000000000");
}

#[test]
fn equality_never_coerces() {
    assert_eq!(evaluated("1 == 1"), "true");
    assert_eq!(evaluated("1 == \"1\""), "false");
    assert_eq!(evaluated("nil == false"), "false");
    assert_eq!(evaluated("nil != nil"), "false");
    assert_eq!(evaluated("\"a\" + \"b\" == \"ab\""), "true");
}

#[test]
fn operand_type_errors() {
    assert_eq!(runtime_error_of("print -\"abc\";"),
               "Operand must be a number.\n[line 1]");
    assert_eq!(runtime_error_of("print \"1\" - 2;"),
               "Operand must be a number.\n[line 1]");
    assert_eq!(runtime_error_of("print 1 + \"2\";"),
               "Operands must be two numbers or two strings.\n[line 1]");
    assert_eq!(runtime_error_of("print true < false;"),
               "Operand must be a number.\n[line 1]");
}

#[test]
fn undefined_variables() {
    assert_eq!(runtime_error_of("x = 1;"), "Undefined variable 'x'.\n[line 1]");
    assert_eq!(runtime_error_of("print 1;\n\nprint y;"),
               "Undefined variable 'y'.\n[line 3]");
}

#[test]
fn failed_assignment_does_not_define() {
    let mut interpreter = Interpreter::new(Vec::<u8>::new());
    let program = parse_program("x = 1;").unwrap_or_else(|e| panic!("{e}"));

    assert!(interpreter.interpret(&program).is_err());
    match &program[0] {
        Stmt::Expression { expr: Expr::Assign { name, .. } } => {
            assert!(interpreter.environment().get(name).is_err());
        },
        other => panic!("Unexpected statement {other:?}"),
    }
}

#[test]
fn output_before_a_runtime_error_is_kept() {
    let mut out = Vec::<u8>::new();
    let result = run("print \"before\"; print -nil; print \"after\";", &mut out);

    assert!(matches!(result, Err(Error::Runtime(_))));
    assert_eq!(out, b"before\n");
}

#[test]
fn nothing_runs_when_parsing_fails() {
    let mut out = Vec::<u8>::new();
    let result = run("print \"ok\"; print ;", &mut out);

    assert!(matches!(result, Err(Error::Parse(_))));
    assert!(out.is_empty());
}

#[test]
fn lexical_errors_are_all_reported() {
    match run("print \"open", &mut Vec::<u8>::new()) {
        Err(e @ Error::Lexical(_)) => {
            assert_eq!(e.to_string(), "[line 1] Error: Unterminated string.");
        },
        other => panic!("Expected a lexical error, got {other:?}"),
    }

    match run("$ print 1; #", &mut Vec::<u8>::new()) {
        Err(Error::Lexical(errors)) => assert_eq!(errors.len(), 2),
        other => panic!("Expected lexical errors, got {other:?}"),
    }
}
