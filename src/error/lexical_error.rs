use thiserror::Error;

/// An error found while scanning source text.
///
/// Lexical errors do not stop the scan; every one found in a pass is
/// collected and reported together.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[line {line}] Error: {message}")]
pub struct LexicalError {
    /// The source line where the error occurred.
    pub line:    usize,
    /// Details about the error.
    pub message: String,
}

impl LexicalError {
    /// Creates a lexical error on `line`.
    #[must_use]
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self { line,
               message: message.into() }
    }

    /// A character that does not start any token.
    ///
    /// # Example
    /// ```
    /// use treelox::error::LexicalError;
    ///
    /// let error = LexicalError::unexpected_character("$", 4);
    /// assert_eq!(error.to_string(), "[line 4] Error: Unexpected character: $");
    /// ```
    #[must_use]
    pub fn unexpected_character(character: &str, line: usize) -> Self {
        Self::new(line, format!("Unexpected character: {character}"))
    }

    /// A string literal still open at the end of input.
    #[must_use]
    pub fn unterminated_string(line: usize) -> Self {
        Self::new(line, "Unterminated string.")
    }
}
