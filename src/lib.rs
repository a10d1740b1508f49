//! # treelox
//!
//! treelox is a tree-walking interpreter for a small dynamically typed
//! scripting language written in Rust.
//! It scans, parses and evaluates source text with support for numbers,
//! strings, booleans, `nil`, global variables and `print` statements.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    ast::{Expr, Stmt},
    error::Error,
    interpreter::{
        evaluator::core::Interpreter,
        lexer::scan,
        parser::{core::parse_single_expression, statement},
        token::Token,
        value::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Stmt` enums that represent the
/// syntactic structure of source code as a tree, together with the visitor
/// traits through which the evaluator and the printer walk it.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Keeps operator tokens on the nodes for error reporting.
/// - Dispatches each node to the matching visitor method.
pub mod ast;
/// Provides unified error types for scanning, parsing and evaluation.
///
/// This module defines all errors that can be raised while running code. Each
/// error renders in the exact text shown to users, including the line it
/// occurred on.
///
/// # Responsibilities
/// - Defines one error type per phase (lexer, parser, evaluator).
/// - Attaches line numbers and offending tokens for context.
/// - Combines them into a single `Error` for whole-pipeline entry points.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and the syntax tree printer.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator and values.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities, currently number formatting.
pub mod util;

/// Scans source text into tokens.
///
/// Scanning never stops early: the tokens that could be recognized are
/// returned together with every lexical error. The token list always ends
/// with an `EOF` token.
///
/// # Example
/// ```
/// use treelox::tokenize;
///
/// let (tokens, errors) = tokenize("var x = 42;");
/// let lines: Vec<String> = tokens.iter().map(ToString::to_string).collect();
///
/// assert!(errors.is_empty());
/// assert_eq!(lines,
///            ["VAR var null",
///             "IDENTIFIER x null",
///             "EQUAL = null",
///             "NUMBER 42 42.0",
///             "SEMICOLON ; null",
///             "EOF  null"]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<error::LexicalError>) {
    scan(source)
}

/// Parses source text as a single expression.
///
/// # Errors
/// `Error::Lexical` if scanning failed, otherwise `Error::Parse` for the
/// first grammar violation, including tokens left over after the expression.
///
/// # Example
/// ```
/// use treelox::{interpreter::printer::AstPrinter, parse};
///
/// let expr = parse("(1 + 2) * 3").unwrap();
/// assert_eq!(AstPrinter.print(&expr), "(* (group (+ 1.0 2.0)) 3.0)");
///
/// assert!(parse("(1 + 2").is_err());
/// ```
pub fn parse(source: &str) -> Result<Expr, Error> {
    let tokens = scan_checked(source)?;
    Ok(parse_single_expression(&mut tokens.iter().peekable())?)
}

/// Parses source text as a program: a sequence of statements.
///
/// # Errors
/// `Error::Lexical` if scanning failed, otherwise the first `Error::Parse`.
pub fn parse_program(source: &str) -> Result<Vec<Stmt>, Error> {
    let tokens = scan_checked(source)?;
    Ok(statement::parse_program(&mut tokens.iter().peekable())?)
}

/// Parses and evaluates a single expression.
///
/// # Errors
/// Any lexical or parse error, or the `Error::Runtime` raised during
/// evaluation.
///
/// # Example
/// ```
/// use treelox::evaluate;
///
/// assert_eq!(evaluate("10 / 4").unwrap().to_string(), "2.5");
/// assert_eq!(evaluate("\"a\" + \"b\" == \"ab\"").unwrap().to_string(), "true");
///
/// let err = evaluate("\"1\" - 2").unwrap_err();
/// assert_eq!(err.to_string(), "Operand must be a number.\n[line 1]");
/// ```
pub fn evaluate(source: &str) -> Result<Value, Error> {
    let expr = parse(source)?;
    let mut interpreter = Interpreter::new(std::io::sink());
    Ok(interpreter.evaluate(&expr)?)
}

/// Parses and runs a program, writing the output of `print` statements to
/// `out`.
///
/// Nothing runs unless the whole program scans and parses. Output written
/// before a runtime error stays in `out`.
///
/// # Errors
/// Any lexical or parse error, or the first `Error::Runtime`.
///
/// # Example
/// ```
/// use treelox::run;
///
/// let mut out = Vec::new();
/// run("var a = 1; var b = 2; print a + b;", &mut out).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "3\n");
/// ```
pub fn run<W: Write>(source: &str, out: &mut W) -> Result<(), Error> {
    let program = parse_program(source)?;
    let mut interpreter = Interpreter::new(out);
    Ok(interpreter.interpret(&program)?)
}

fn scan_checked(source: &str) -> Result<Vec<Token>, Error> {
    let (tokens, errors) = scan(source);
    if errors.is_empty() {
        Ok(tokens)
    } else {
        Err(Error::Lexical(errors))
    }
}
