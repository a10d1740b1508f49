use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::TokenKind,
        parser::{core::ParseResult, unary::parse_unary, utils::advance_if},
        token::Token,
    },
};

/// Parses one left-associative precedence level.
///
/// Parses an operand with `next`, then keeps folding `operator operand`
/// pairs into a left-growing binary node while the next token is one of
/// `operators`.
fn parse_left_assoc<'a, I>(tokens: &mut Peekable<I>,
                           operators: &[TokenKind],
                           next: fn(&mut Peekable<I>, usize) -> ParseResult<Expr>,
                           depth: usize)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = next(tokens, depth)?;
    while let Some(token) = advance_if(tokens, operators)
          && let Some(op) = token_to_binary_operator(token.kind)
    {
        let right = next(tokens, depth)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              token: token.clone(),
                              right: Box::new(right) };
    }
    Ok(left)
}

/// Parses equality expressions.
///
/// The rule is: `equality := comparison (("!=" | "==") comparison)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: The nesting depth, passed through unchanged to the operands.
///
/// # Returns
/// An `Expr::Binary` tree, or the comparison-level node when no equality
/// operator follows.
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_assoc(tokens,
                     &[TokenKind::BangEqual, TokenKind::EqualEqual],
                     parse_comparison,
                     depth)
}

/// Parses comparison expressions.
///
/// The rule is: `comparison := term ((">" | ">=" | "<" | "<=") term)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_assoc(tokens,
                     &[TokenKind::Greater,
                       TokenKind::GreaterEqual,
                       TokenKind::Less,
                       TokenKind::LessEqual],
                     parse_term,
                     depth)
}

/// Parses addition and subtraction expressions.
///
/// The rule is: `term := factor (("-" | "+") factor)*`
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_assoc(tokens,
                     &[TokenKind::Minus, TokenKind::Plus],
                     parse_factor,
                     depth)
}

/// Parses multiplication and division expressions.
///
/// The rule is: `factor := unary (("/" | "*") unary)*`
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_assoc(tokens,
                     &[TokenKind::Slash, TokenKind::Star],
                     parse_unary,
                     depth)
}

/// Maps a token kind to its binary operator, if it is one.
///
/// # Example
/// ```
/// use treelox::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Star), Some(BinaryOperator::Mul));
/// assert_eq!(token_to_binary_operator(TokenKind::Bang), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        _ => None,
    }
}
