/// Number formatting helpers.
///
/// Numbers are double precision throughout the language, but they are shown
/// in two different forms: literals (tokens and the syntax tree printer)
/// always carry a fractional digit, while program output drops it for
/// integral values. Both forms are produced here so the lexer, the printer
/// and the evaluator agree.
pub mod num;
