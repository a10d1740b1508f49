use std::iter::Peekable;

use crate::{
    ast::Stmt,
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{advance_if, consume, peek_kind},
        },
        token::Token,
    },
};

/// Parses a whole program.
///
/// Declarations are parsed one after another until the `Eof` token. There is
/// no error recovery: the first error aborts the parse.
///
/// Grammar: `program := declaration* EOF`
///
/// # Parameters
/// - `tokens`: The token stream produced by the lexer.
///
/// # Returns
/// The statements in source order.
///
/// # Example
/// ```
/// use treelox::{ast::Stmt, interpreter::{lexer::scan, parser::statement::parse_program}};
///
/// let (tokens, _) = scan("var a = 1; print a;");
/// let program = parse_program(&mut tokens.iter().peekable()).unwrap();
///
/// assert_eq!(program.len(), 2);
/// assert!(matches!(program[1], Stmt::Print { .. }));
/// ```
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Stmt>>
    where I: Iterator<Item = &'a Token>
{
    let mut statements = Vec::new();
    while peek_kind(tokens) != TokenKind::Eof {
        statements.push(parse_declaration(tokens)?);
    }
    Ok(statements)
}

/// Parses a declaration or, failing that, a statement.
///
/// Grammar: `declaration := var_declaration | statement`
pub fn parse_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    if advance_if(tokens, &[TokenKind::Var]).is_some() {
        return parse_var_declaration(tokens);
    }
    parse_statement(tokens)
}

/// Parses the rest of a variable declaration after `var`.
///
/// Grammar: `var_declaration := "var" IDENTIFIER ("=" expression)? ";"`
///
/// # Errors
/// - `Expect variable name.` if no identifier follows `var`.
/// - `Expect ';' after variable declaration.` if the semicolon is missing.
fn parse_var_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    let name = consume(tokens, TokenKind::Identifier, "Expect variable name.")?.clone();

    let initializer = if advance_if(tokens, &[TokenKind::Equal]).is_some() {
        Some(parse_expression(tokens)?)
    } else {
        None
    };

    consume(tokens,
            TokenKind::Semicolon,
            "Expect ';' after variable declaration.")?;

    Ok(Stmt::Var { name, initializer })
}

/// Parses a print statement or an expression statement.
///
/// Grammar: `statement := "print" expression ";" | expression ";"`
///
/// # Errors
/// `Expect ';' after value.` if the terminating semicolon is missing.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    let is_print = advance_if(tokens, &[TokenKind::Print]).is_some();
    let expr = parse_expression(tokens)?;
    consume(tokens, TokenKind::Semicolon, "Expect ';' after value.")?;

    if is_print {
        Ok(Stmt::Print { expr })
    } else {
        Ok(Stmt::Expression { expr })
    }
}
