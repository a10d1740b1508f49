use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{MAX_NESTING_DEPTH, ParseResult},
        token::Token,
    },
};

/// Returns the kind of the next token without consuming it.
///
/// A stream that has run out reads as `Eof`.
pub(in crate::interpreter::parser) fn peek_kind<'a, I>(tokens: &mut Peekable<I>) -> TokenKind
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().map_or(TokenKind::Eof, |token| token.kind)
}

/// Returns a copy of the next token without consuming it.
///
/// Used to attach the offending token to a parse error. A stream that has
/// run out yields a synthetic `Eof` token.
pub(in crate::interpreter::parser) fn current<'a, I>(tokens: &mut Peekable<I>) -> Token
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().map_or_else(|| Token::eof(0), |token| (*token).clone())
}

/// Consumes the next token if its kind is one of `kinds`.
///
/// # Returns
/// The consumed token, or `None` when the next token does not match (the
/// stream is left untouched).
pub(in crate::interpreter::parser) fn advance_if<'a, I>(tokens: &mut Peekable<I>,
                                                        kinds: &[TokenKind])
                                                        -> Option<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    tokens.next_if(|token| kinds.contains(&token.kind))
}

/// Consumes a token of the required kind.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expected token.
/// - `kind`: The kind that must come next.
/// - `message`: The error message when it does not.
///
/// # Errors
/// Returns a `ParseError` carrying the next token and `message` if the next
/// token has a different kind. The token is not consumed in that case.
pub(in crate::interpreter::parser) fn consume<'a, I>(tokens: &mut Peekable<I>,
                                                     kind: TokenKind,
                                                     message: &str)
                                                     -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    advance_if(tokens, &[kind]).ok_or_else(|| ParseError::new(current(tokens), message))
}

/// Fails once an expression nests deeper than [`MAX_NESTING_DEPTH`].
///
/// # Errors
/// Returns `Expression nests too deeply.` at the next token.
pub(in crate::interpreter::parser) fn check_depth<'a, I>(tokens: &mut Peekable<I>,
                                                         depth: usize)
                                                         -> ParseResult<()>
    where I: Iterator<Item = &'a Token>
{
    if depth > MAX_NESTING_DEPTH {
        return Err(ParseError::new(current(tokens), "Expression nests too deeply."));
    }
    Ok(())
}
