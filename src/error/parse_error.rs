use thiserror::Error;

use crate::interpreter::{lexer::TokenKind, token::Token};

/// A grammar violation found while building the syntax tree.
///
/// The first parse error aborts the parse. It carries the offending token so
/// the line and the surrounding lexeme can be reported.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("[line {}] Error: {message}", .token.line)]
pub struct ParseError {
    /// The token at which parsing failed.
    pub token:   Token,
    /// Details about the parse error.
    pub message: String,
}

impl ParseError {
    /// Creates a parse error at `token`.
    #[must_use]
    pub fn new(token: Token, message: impl Into<String>) -> Self {
        Self { token,
               message: message.into() }
    }

    /// The source line of the offending token.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.token.line
    }

    /// Describes where on the line the error sits: ` at end` when the
    /// offending token is the end of input, ` at '<lexeme>'` otherwise.
    ///
    /// # Example
    /// ```
    /// use treelox::{
    ///     error::ParseError,
    ///     interpreter::{lexer::TokenKind, token::Token},
    /// };
    ///
    /// let error = ParseError::new(Token::new(TokenKind::Semicolon, ";", None, 2), "Expect expression.");
    /// assert_eq!(error.location(), " at ';'");
    /// assert_eq!(error.to_string(), "[line 2] Error: Expect expression.");
    ///
    /// let error = ParseError::new(Token::eof(3), "Expect expression.");
    /// assert_eq!(error.location(), " at end");
    /// ```
    #[must_use]
    pub fn location(&self) -> String {
        if self.token.kind == TokenKind::Eof {
            " at end".to_string()
        } else {
            format!(" at '{}'", self.token.lexeme)
        }
    }
}
