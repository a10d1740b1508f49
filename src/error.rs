use thiserror::Error;

/// Lexical errors.
///
/// Defines the error raised while scanning source text: an unexpected
/// character or an unterminated string literal.
pub mod lexical_error;
/// Parsing errors.
///
/// Defines the error raised when the token sequence does not follow the
/// grammar, such as a missing `)` or `;`, an invalid assignment target, or a
/// missing expression.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised during evaluation: operand type violations,
/// undefined variables, and failures of the output sink.
pub mod runtime_error;

pub use lexical_error::LexicalError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of a whole scan-parse-evaluate run.
#[derive(Debug, Error)]
pub enum Error {
    /// Scanning found one or more lexical errors.
    #[error("{}", join_lines(.0))]
    Lexical(Vec<LexicalError>),
    /// The token sequence did not parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

fn join_lines(errors: &[LexicalError]) -> String {
    errors.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join("\n")
}
