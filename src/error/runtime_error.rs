use thiserror::Error;

use crate::interpreter::token::Token;

/// Represents all errors that can occur while evaluating a program.
///
/// A runtime error aborts the remaining statements. Output already written
/// by earlier print statements stays written.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// An operand type violation or an undefined variable.
    #[error("{message}\n[line {}]", .token.line)]
    Evaluation {
        /// The operator or variable name that failed.
        token:   Token,
        /// Details about the failure.
        message: String,
    },
    /// The output sink rejected a print statement's line.
    #[error("Failed to write program output: {0}")]
    Output(#[from] std::io::Error),
}

impl RuntimeError {
    /// Creates an evaluation error at `token`.
    #[must_use]
    pub fn new(token: &Token, message: impl Into<String>) -> Self {
        Self::Evaluation { token:   token.clone(),
                           message: message.into(), }
    }

    /// An operator that only works on numbers received something else.
    ///
    /// # Example
    /// ```
    /// use treelox::{
    ///     error::RuntimeError,
    ///     interpreter::{lexer::TokenKind, token::Token},
    /// };
    ///
    /// let minus = Token::new(TokenKind::Minus, "-", None, 7);
    /// let error = RuntimeError::operand_not_number(&minus);
    ///
    /// assert_eq!(error.message(), "Operand must be a number.");
    /// assert_eq!(error.to_string(), "Operand must be a number.\n[line 7]");
    /// ```
    #[must_use]
    pub fn operand_not_number(operator: &Token) -> Self {
        Self::new(operator, "Operand must be a number.")
    }

    /// `+` received something other than two numbers or two strings.
    #[must_use]
    pub fn invalid_addition(operator: &Token) -> Self {
        Self::new(operator, "Operands must be two numbers or two strings.")
    }

    /// A variable was read or assigned before being declared.
    #[must_use]
    pub fn undefined_variable(name: &Token) -> Self {
        Self::new(name, format!("Undefined variable '{}'.", name.lexeme))
    }

    /// The message without the line suffix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Evaluation { message, .. } => message.clone(),
            Self::Output(err) => format!("Failed to write program output: {err}"),
        }
    }

    /// The token the error is attached to, if any.
    #[must_use]
    pub const fn token(&self) -> Option<&Token> {
        match self {
            Self::Evaluation { token, .. } => Some(token),
            Self::Output(_) => None,
        }
    }
}
