use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, parse_assignment},
            utils::{advance_if, check_depth, consume, current},
        },
        token::Token,
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `!`  (logical not)
///
/// Unary operators are right-associative, so an input like `!-x` is parsed as
/// `!( -x )`. If no unary operator is present, the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := ("-" | "!") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: The nesting depth; each prefix operator adds one.
///
/// # Returns
/// An [`Expr::Unary`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let Some(token) = advance_if(tokens, &[TokenKind::Bang, TokenKind::Minus]) else {
        return parse_primary(tokens, depth);
    };
    check_depth(tokens, depth + 1)?;
    let op = if token.kind == TokenKind::Bang {
        UnaryOperator::Not
    } else {
        UnaryOperator::Negate
    };
    let right = parse_unary(tokens, depth + 1)?;

    Ok(Expr::Unary { op,
                     token: token.clone(),
                     right: Box::new(right) })
}

/// Parses a primary expression.
///
/// Primary expressions are the atoms of the grammar:
/// - `true`, `false`, `nil`
/// - number and string literals
/// - identifiers (variable references)
/// - parenthesized expressions
///
/// A grouping parses its inner expression one level deeper than `depth`.
///
/// # Errors
/// - `Expect ')' after expression.` if a grouping is not closed.
/// - `Expression nests too deeply.` if the grouping exceeds the nesting
///   limit.
/// - `Expect expression.` if the next token cannot start an expression. The
///   token is not consumed.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let Some(token) = advance_if(tokens,
                                 &[TokenKind::False,
                                   TokenKind::True,
                                   TokenKind::Nil,
                                   TokenKind::Number,
                                   TokenKind::String,
                                   TokenKind::Identifier,
                                   TokenKind::LeftParen])
    else {
        return Err(ParseError::new(current(tokens), "Expect expression."));
    };

    let value = match token.kind {
        TokenKind::False => LiteralValue::Bool(false),
        TokenKind::True => LiteralValue::Bool(true),
        TokenKind::Nil => LiteralValue::Nil,
        TokenKind::Identifier => return Ok(Expr::Variable { name: token.clone() }),
        TokenKind::LeftParen => {
            let expr = parse_assignment(tokens, depth + 1)?;
            consume(tokens, TokenKind::RightParen, "Expect ')' after expression.")?;
            return Ok(Expr::Grouping { expr: Box::new(expr) });
        },
        _ => token.literal
                  .as_ref()
                  .map_or(LiteralValue::Nil, LiteralValue::from),
    };

    Ok(Expr::Literal { value })
}
