/// Core evaluation logic.
///
/// Contains the interpreter, which walks statements and expressions, owns
/// the environment and writes program output.
pub mod core;

/// Unary operator evaluation.
///
/// Implements numeric negation and logical NOT.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements arithmetic, string concatenation, comparisons and equality.
pub mod binary;
