use std::fmt;

use logos::{Lexer, Logos, Skip};

use crate::{error::LexicalError, interpreter::token::Token};

/// The lexical category of a token.
///
/// The lexer is generated from the attributes on this enum. Whitespace,
/// newlines and `//` comments are skipped; newlines (including those inside
/// string literals) advance [`LexerExtras::line`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
#[logos(error = ScanErrorKind)]
pub enum TokenKind {
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `-`
    #[token("-")]
    Minus,
    /// `+`
    #[token("+")]
    Plus,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `/`
    #[token("/")]
    Slash,
    /// `*`
    #[token("*")]
    Star,

    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,

    /// Identifier tokens such as `count` or `_tmp1`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,
    /// String literals delimited by `"`. They may span lines and have no
    /// escape sequences.
    #[regex(r#""[^"]*""#, count_string_lines, allow_greedy = true)]
    #[regex(r#""[^"]*"#, unterminated_string, allow_greedy = true)]
    String,
    /// Number literals: a digit run with an optional fractional part. A
    /// trailing `.` without digits is left for the next token.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    /// `and`
    #[token("and")]
    And,
    /// `class`
    #[token("class")]
    Class,
    /// `else`
    #[token("else")]
    Else,
    /// `false`
    #[token("false")]
    False,
    /// `for`
    #[token("for")]
    For,
    /// `fun`
    #[token("fun")]
    Fun,
    /// `if`
    #[token("if")]
    If,
    /// `nil`
    #[token("nil")]
    Nil,
    /// `or`
    #[token("or")]
    Or,
    /// `print`
    #[token("print")]
    Print,
    /// `return`
    #[token("return")]
    Return,
    /// `super`
    #[token("super")]
    Super,
    /// `this`
    #[token("this")]
    This,
    /// `true`
    #[token("true")]
    True,
    /// `var`
    #[token("var")]
    Var,
    /// `while`
    #[token("while")]
    While,

    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Newlines only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        Skip
    })]
    NewLine,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,

    /// The end-of-input sentinel. Never produced by the generated lexer;
    /// [`scan`] appends it.
    Eof,
}

impl TokenKind {
    /// The upper-case name used when tokens are listed.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::LeftBrace => "LEFT_BRACE",
            Self::RightBrace => "RIGHT_BRACE",
            Self::Comma => "COMMA",
            Self::Dot => "DOT",
            Self::Minus => "MINUS",
            Self::Plus => "PLUS",
            Self::Semicolon => "SEMICOLON",
            Self::Slash => "SLASH",
            Self::Star => "STAR",
            Self::Bang => "BANG",
            Self::BangEqual => "BANG_EQUAL",
            Self::Equal => "EQUAL",
            Self::EqualEqual => "EQUAL_EQUAL",
            Self::Greater => "GREATER",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::Less => "LESS",
            Self::LessEqual => "LESS_EQUAL",
            Self::Identifier => "IDENTIFIER",
            Self::String => "STRING",
            Self::Number => "NUMBER",
            Self::And => "AND",
            Self::Class => "CLASS",
            Self::Else => "ELSE",
            Self::False => "FALSE",
            Self::For => "FOR",
            Self::Fun => "FUN",
            Self::If => "IF",
            Self::Nil => "NIL",
            Self::Or => "OR",
            Self::Print => "PRINT",
            Self::Return => "RETURN",
            Self::Super => "SUPER",
            Self::This => "THIS",
            Self::True => "TRUE",
            Self::Var => "VAR",
            Self::While => "WHILE",
            Self::Comment => "COMMENT",
            Self::NewLine => "NEWLINE",
            Self::Ignored => "IGNORED",
            Self::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// The ways a single scan step can fail.
///
/// Logos reports any input it cannot match as the default variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanErrorKind {
    /// A character that starts no token.
    #[default]
    UnexpectedCharacter,
    /// A `"` with no closing quote before the end of input.
    UnterminatedString,
}

fn count_newlines(lex: &Lexer<TokenKind>) -> usize {
    lex.slice().bytes().filter(|&b| b == b'\n').count()
}

/// Advances the line counter past any newlines inside a string literal.
fn count_string_lines(lex: &mut Lexer<TokenKind>) {
    lex.extras.line += count_newlines(lex);
}

/// Consumes an unclosed string up to the end of input and reports it.
///
/// The line counter is advanced first so the error is tagged with the line
/// where the closing quote was expected.
fn unterminated_string(lex: &mut Lexer<TokenKind>) -> Result<(), ScanErrorKind> {
    lex.extras.line += count_newlines(lex);
    Err(ScanErrorKind::UnterminatedString)
}

/// Converts source text into an EOF-terminated token sequence.
///
/// Scanning never stops at the first problem: every unexpected character and
/// an unterminated string are collected as [`LexicalError`]s and returned
/// alongside whatever tokens were recognized.
///
/// # Parameters
/// - `source`: The program text.
///
/// # Returns
/// The tokens (always ending with an `EOF` token on the final line) and the
/// lexical errors, in source order.
///
/// # Example
/// ```
/// use treelox::interpreter::lexer::{TokenKind, scan};
///
/// let (tokens, errors) = scan("var x = 1.5;\n@");
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::Var,
///                 TokenKind::Identifier,
///                 TokenKind::Equal,
///                 TokenKind::Number,
///                 TokenKind::Semicolon,
///                 TokenKind::Eof]);
/// assert_eq!(errors[0].to_string(), "[line 2] Error: Unexpected character: @");
/// ```
#[must_use]
pub fn scan(source: &str) -> (Vec<Token>, Vec<LexicalError>) {
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras::default());
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    while let Some(result) = lexer.next() {
        let line = lexer.extras.line;
        match result {
            Ok(kind) => tokens.push(Token::from_lexeme(kind, lexer.slice(), line)),
            Err(ScanErrorKind::UnexpectedCharacter) => {
                errors.push(LexicalError::unexpected_character(lexer.slice(), line));
            },
            Err(ScanErrorKind::UnterminatedString) => {
                errors.push(LexicalError::unterminated_string(line));
            },
        }
    }

    tokens.push(Token::eof(lexer.extras.line));
    (tokens, errors)
}
