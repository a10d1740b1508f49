use treelox::{
    ast::{Expr, Stmt},
    error::Error,
    interpreter::printer::AstPrinter,
    parse,
    parse_program,
};

fn printed(source: &str) -> String {
    match parse(source) {
        Ok(expr) => AstPrinter.print(&expr),
        Err(e) => panic!("Failed to parse {source:?}: {e}"),
    }
}

fn printed_program(source: &str) -> Vec<String> {
    match parse_program(source) {
        Ok(program) => program.iter().map(|stmt| AstPrinter.print_stmt(stmt)).collect(),
        Err(e) => panic!("Failed to parse {source:?}: {e}"),
    }
}

fn parse_error(source: &str) -> String {
    match parse(source) {
        Err(Error::Parse(e)) => format!("{e}{}", location_suffix(&e)),
        Err(e) => panic!("Expected a parse error for {source:?}, got {e}"),
        Ok(expr) => panic!("Expected a parse error for {source:?}, got {expr:?}"),
    }
}

fn location_suffix(e: &treelox::error::ParseError) -> String {
    format!(" |{}", e.location())
}

#[test]
fn literals() {
    assert_eq!(printed("nil"), "nil");
    assert_eq!(printed("true"), "true");
    assert_eq!(printed("false"), "false");
    assert_eq!(printed("42"), "42.0");
    assert_eq!(printed("0.25"), "0.25");
    assert_eq!(printed("\"hello\""), "hello");
    assert_eq!(printed("100000000000000000000000"), "100000000000000000000000.0");
}

#[test]
fn grouping_and_precedence() {
    assert_eq!(printed("(1 + 2) * 3"), "(* (group (+ 1.0 2.0)) 3.0)");
    assert_eq!(printed("1 + 2 * 3"), "(+ 1.0 (* 2.0 3.0))");
    assert_eq!(printed("1 < 2 == 3 >= 4"), "(== (< 1.0 2.0) (>= 3.0 4.0))");
    assert_eq!(printed("((nil))"), "(group (group nil))");
}

#[test]
fn binary_operators_are_left_associative() {
    assert_eq!(printed("1 - 2 - 3"), "(- (- 1.0 2.0) 3.0)");
    assert_eq!(printed("8 / 4 / 2"), "(/ (/ 8.0 4.0) 2.0)");
    assert_eq!(printed("a != b != c"), "(!= (!= a b) c)");
}

#[test]
fn unary_operators_nest_to_the_right() {
    assert_eq!(printed("!-x"), "(! (- x))");
    assert_eq!(printed("!!true"), "(! (! true))");
    assert_eq!(printed("-1 * -2"), "(* (- 1.0) (- 2.0))");
}

#[test]
fn printing_ignores_source_whitespace() {
    assert_eq!(printed("(1+2)*3"), printed("( 1 +\n 2 )   *  3"));
}

#[test]
fn assignment_is_right_associative() {
    assert_eq!(printed("a = b = 1"), "(= a (= b 1.0))");
    assert!(matches!(parse("a = 1"), Ok(Expr::Assign { .. })));
}

#[test]
fn invalid_assignment_target() {
    assert_eq!(parse_error("1 = 2"),
               "[line 1] Error: Invalid assignment target. | at '='");
    assert_eq!(parse_error("(a) = 2"),
               "[line 1] Error: Invalid assignment target. | at '='");
    assert_eq!(parse_error("a + b = c"),
               "[line 1] Error: Invalid assignment target. | at '='");
}

#[test]
fn missing_closing_paren() {
    assert_eq!(parse_error("(1 + 2"),
               "[line 1] Error: Expect ')' after expression. | at end");
    assert_eq!(parse_error("(1 2)"),
               "[line 1] Error: Expect ')' after expression. | at '2'");
}

#[test]
fn missing_expression() {
    assert_eq!(parse_error(""), "[line 1] Error: Expect expression. | at end");
    assert_eq!(parse_error("1 +\n"), "[line 2] Error: Expect expression. | at end");
    assert_eq!(parse_error(")"), "[line 1] Error: Expect expression. | at ')'");
}

#[test]
fn trailing_tokens_after_an_expression() {
    assert_eq!(parse_error("1 2"),
               "[line 1] Error: Expect end of expression. | at '2'");
    assert_eq!(parse_error("1;"),
               "[line 1] Error: Expect end of expression. | at ';'");
}

#[test]
fn lexical_errors_come_before_parsing() {
    match parse("1 + @") {
        Err(Error::Lexical(errors)) => assert_eq!(errors.len(), 1),
        other => panic!("Expected lexical errors, got {other:?}"),
    }
}

#[test]
fn programs() {
    assert_eq!(printed_program("var a = 1; var b; print a + b; a = 2;"),
               ["(var a 1.0)", "(var b)", "(print (+ a b))", "(; (= a 2.0))"]);
    assert!(printed_program("").is_empty());
    assert!(printed_program("// only a comment\n").is_empty());
}

#[test]
fn var_declaration_initializer_is_optional() {
    match parse_program("var x;").as_deref() {
        Ok([Stmt::Var { name, initializer: None }]) => assert_eq!(name.lexeme, "x"),
        other => panic!("Unexpected parse result {other:?}"),
    }
}

#[test]
fn statement_errors() {
    let message = |source: &str| match parse_program(source) {
        Err(Error::Parse(e)) => e.to_string(),
        other => panic!("Expected a parse error for {source:?}, got {other:?}"),
    };

    assert_eq!(message("print 1"), "[line 1] Error: Expect ';' after value.");
    assert_eq!(message("1 + 2"), "[line 1] Error: Expect ';' after value.");
    assert_eq!(message("var = 1;"), "[line 1] Error: Expect variable name.");
    assert_eq!(message("var a = 1"),
               "[line 1] Error: Expect ';' after variable declaration.");
    assert_eq!(message("var a;\n\nprint (a;"),
               "[line 3] Error: Expect ')' after expression.");
}

#[test]
fn first_error_aborts_the_program() {
    match parse_program("print 1;\n1 = 2;\nprint ;") {
        Err(Error::Parse(e)) => {
            assert_eq!(e.message, "Invalid assignment target.");
            assert_eq!(e.line(), 2);
        },
        other => panic!("Expected a parse error, got {other:?}"),
    }
}

#[test]
fn deep_nesting_is_a_parse_error() {
    let depth = 20_000;
    let nested = |open: &str, inner: &str, close: &str| {
        format!("{}{inner}{}", open.repeat(depth), close.repeat(depth))
    };

    for source in [nested("(", "1", ")"),
                   nested("!", "true", ""),
                   nested("-", "1", ""),
                   nested("a = ", "1", "")]
    {
        match parse(&source) {
            Err(Error::Parse(e)) => assert_eq!(e.message, "Expression nests too deeply."),
            other => panic!("Expected a nesting error, got {:?}", other.map(|_| ())),
        }
    }

    match parse_program(&format!("print {};", nested("(", "nil", ")"))) {
        Err(Error::Parse(e)) => assert_eq!(e.message, "Expression nests too deeply."),
        other => panic!("Expected a nesting error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn moderate_nesting_still_parses() {
    let source = format!("{}1{}", "(".repeat(100), ")".repeat(100));
    let expected = format!("{}1.0{}", "(group ".repeat(100), ")".repeat(100));
    assert_eq!(printed(&source), expected);

    assert_eq!(printed(&format!("{}x", "-".repeat(100))),
               format!("{}x{}", "(- ".repeat(100), ")".repeat(100)));
}
