use std::fmt;

use crate::{interpreter::lexer::TokenKind, util::num::format_number_literal};

/// The literal payload carried by `NUMBER` and `STRING` tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// A double-precision number literal, such as `12.5`.
    Number(f64),
    /// The contents of a string literal, without the surrounding quotes.
    String(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_number_literal(*n)),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

/// A single lexical unit scanned from the source text.
///
/// Tokens are created once by the lexer and never mutated afterwards. The
/// `lexeme` is the exact source substring the token was scanned from, which
/// keeps diagnostics and the AST printer faithful to the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The lexical category.
    pub kind:    TokenKind,
    /// The exact source text of the token.
    pub lexeme:  String,
    /// The literal value, present only for numbers and strings.
    pub literal: Option<Literal>,
    /// The 1-based source line, used for diagnostics.
    pub line:    usize,
}

impl Token {
    /// Creates a token from its raw parts.
    #[must_use]
    pub fn new(kind: TokenKind,
               lexeme: impl Into<String>,
               literal: Option<Literal>,
               line: usize)
               -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               literal,
               line }
    }

    /// Builds a token from a scanned lexeme, deriving the literal payload
    /// for numbers and strings.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::{
    ///     lexer::TokenKind,
    ///     token::{Literal, Token},
    /// };
    ///
    /// let number = Token::from_lexeme(TokenKind::Number, "12.50", 3);
    /// assert_eq!(number.literal, Some(Literal::Number(12.5)));
    /// assert_eq!(number.lexeme, "12.50");
    ///
    /// let string = Token::from_lexeme(TokenKind::String, "\"hi\"", 1);
    /// assert_eq!(string.literal, Some(Literal::String("hi".to_string())));
    /// ```
    #[must_use]
    pub fn from_lexeme(kind: TokenKind, lexeme: &str, line: usize) -> Self {
        let literal = match kind {
            TokenKind::Number => lexeme.parse().ok().map(Literal::Number),
            TokenKind::String => lexeme.strip_prefix('"')
                                       .and_then(|rest| rest.strip_suffix('"'))
                                       .map(|contents| Literal::String(contents.to_string())),
            _ => None,
        };
        Self::new(kind, lexeme, literal, line)
    }

    /// The end-of-input sentinel that terminates every token sequence.
    #[must_use]
    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, "", None, line)
    }
}

/// Renders a token as `<KIND> <lexeme> <literal>`, with `null` standing in
/// for an absent literal.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{} {} {literal}", self.kind, self.lexeme),
            None => write!(f, "{} {} null", self.kind, self.lexeme),
        }
    }
}
