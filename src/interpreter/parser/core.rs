use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::{
            binary::parse_equality,
            utils::{advance_if, check_depth, current, peek_kind},
        },
        token::Token,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How deeply groupings, prefix operators and assignments may nest before
/// parsing fails instead of exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, assignment, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := assignment`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_assignment(tokens, 0)
}

/// Parses an assignment or falls through to equality.
///
/// The left-hand side is parsed as an ordinary expression first. If an `=`
/// follows, the right-hand side is parsed recursively (so `a = b = c` groups
/// as `a = (b = c)`) and the left-hand side must turn out to be a variable
/// reference.
///
/// Grammar: `assignment := IDENTIFIER "=" assignment | equality`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: How many groupings, prefix operators and assignments enclose
///   this expression.
///
/// # Errors
/// - `Invalid assignment target.` at the `=` token when the left-hand side is
///   anything other than a variable, after the right-hand side has been
///   parsed.
/// - `Expression nests too deeply.` once `depth` exceeds
///   [`MAX_NESTING_DEPTH`].
pub fn parse_assignment<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    check_depth(tokens, depth)?;
    let expr = parse_equality(tokens, depth)?;

    let Some(equals) = advance_if(tokens, &[TokenKind::Equal]) else {
        return Ok(expr);
    };
    let value = parse_assignment(tokens, depth + 1)?;

    match expr {
        Expr::Variable { name } => Ok(Expr::Assign { name,
                                                     value: Box::new(value) }),
        _ => Err(ParseError::new(equals.clone(), "Invalid assignment target.")),
    }
}

/// Parses exactly one expression that must span the whole token stream.
///
/// Used by expression mode (`parse` and `evaluate`), where the input is a
/// single expression rather than a program.
///
/// # Errors
/// Propagates any error from [`parse_expression`], and returns
/// `Expect end of expression.` at the first leftover token.
pub fn parse_single_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let expr = parse_expression(tokens)?;
    if peek_kind(tokens) != TokenKind::Eof {
        return Err(ParseError::new(current(tokens), "Expect end of expression."));
    }
    Ok(expr)
}
