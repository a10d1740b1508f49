/// Core parsing logic.
///
/// Defines the parse result type, the expression entry point, assignment,
/// and the single-expression mode used by `parse` and `evaluate`.
pub mod core;

/// Binary operator parsing.
///
/// One function per precedence level: equality, comparison, term and factor.
/// Each level is left-associative.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix `-` and `!`, literals, identifiers and parenthesized
/// groupings.
pub mod unary;

/// Statement parsing.
///
/// Parses whole programs: variable declarations, print statements and
/// expression statements.
pub mod statement;

/// Token stream helpers shared by the parsing functions.
pub mod utils;
