/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// carrying its kind, the exact source text it was scanned from, an optional
/// literal value and its line. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Recognizes number and string literals, identifiers, keywords and
///   operators; skips whitespace and comments.
/// - Collects every lexical error instead of stopping at the first.
pub mod lexer;
/// Tokens as handed from the lexer to the parser.
pub mod token;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer with
/// recursive descent, one function per precedence level, and constructs
/// either a single expression or a whole program.
///
/// # Responsibilities
/// - Converts tokens into expression and statement nodes.
/// - Reports the first grammar violation together with the offending token.
pub mod parser;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST as a visitor, evaluates expressions,
/// executes statements and writes the output of `print` statements.
///
/// # Responsibilities
/// - Evaluates every expression kind under dynamic typing rules.
/// - Executes statements in order against a variable environment.
/// - Reports runtime errors such as type mismatches and undefined variables.
pub mod evaluator;
/// Variable storage.
///
/// Maps variable names to values, with an optional enclosing scope that is
/// consulted on a miss.
pub mod environment;
/// The value module defines the runtime data types for evaluation.
///
/// A closed set of variants: `nil`, booleans, numbers and strings, along
/// with truthiness and the display form used for program output.
pub mod value;
/// Prints syntax trees in a fully parenthesized prefix form.
pub mod printer;
