use treelox::{
    error::LexicalError,
    interpreter::{
        lexer::{TokenKind, scan},
        token::Literal,
    },
    tokenize,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    scan(source).0.iter().map(|t| t.kind).collect()
}

fn listing(source: &str) -> Vec<String> {
    tokenize(source).0.iter().map(ToString::to_string).collect()
}

#[test]
fn punctuation_and_two_character_operators() {
    assert_eq!(kinds("(){},.-+;/*"),
               vec![TokenKind::LeftParen,
                    TokenKind::RightParen,
                    TokenKind::LeftBrace,
                    TokenKind::RightBrace,
                    TokenKind::Comma,
                    TokenKind::Dot,
                    TokenKind::Minus,
                    TokenKind::Plus,
                    TokenKind::Semicolon,
                    TokenKind::Slash,
                    TokenKind::Star,
                    TokenKind::Eof]);

    assert_eq!(kinds("! != = == < <= > >="),
               vec![TokenKind::Bang,
                    TokenKind::BangEqual,
                    TokenKind::Equal,
                    TokenKind::EqualEqual,
                    TokenKind::Less,
                    TokenKind::LessEqual,
                    TokenKind::Greater,
                    TokenKind::GreaterEqual,
                    TokenKind::Eof]);
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(kinds("and class else false for fun if nil or print return super this true var while"),
               vec![TokenKind::And,
                    TokenKind::Class,
                    TokenKind::Else,
                    TokenKind::False,
                    TokenKind::For,
                    TokenKind::Fun,
                    TokenKind::If,
                    TokenKind::Nil,
                    TokenKind::Or,
                    TokenKind::Print,
                    TokenKind::Return,
                    TokenKind::Super,
                    TokenKind::This,
                    TokenKind::True,
                    TokenKind::Var,
                    TokenKind::While,
                    TokenKind::Eof]);

    assert_eq!(listing("orchid _private var1"),
               ["IDENTIFIER orchid null",
                "IDENTIFIER _private null",
                "IDENTIFIER var1 null",
                "EOF  null"]);
}

#[test]
fn number_lexemes_are_preserved() {
    let (tokens, errors) = scan("123 45.67 0.5 007 1.50");
    assert!(errors.is_empty());

    let lexemes: Vec<&str> = tokens.iter()
                                   .filter(|t| t.kind == TokenKind::Number)
                                   .map(|t| t.lexeme.as_str())
                                   .collect();
    assert_eq!(lexemes, ["123", "45.67", "0.5", "007", "1.50"]);
    assert_eq!(tokens[3].literal, Some(Literal::Number(7.0)));
}

#[test]
fn number_literals_list_with_a_fractional_digit() {
    assert_eq!(listing("42 3.25"),
               ["NUMBER 42 42.0", "NUMBER 3.25 3.25", "EOF  null"]);
}

#[test]
fn large_number_literals_keep_their_shortest_form() {
    assert_eq!(listing("100000000000000000000000"),
               ["NUMBER 100000000000000000000000 100000000000000000000000.0", "EOF  null"]);
}

#[test]
fn trailing_dot_is_not_part_of_a_number() {
    assert_eq!(kinds("123."),
               vec![TokenKind::Number, TokenKind::Dot, TokenKind::Eof]);
    assert_eq!(listing("1.x"),
               ["NUMBER 1 1.0", "DOT . null", "IDENTIFIER x null", "EOF  null"]);
}

#[test]
fn strings_keep_their_quotes_in_the_lexeme() {
    assert_eq!(listing("\"hello world\""),
               ["STRING \"hello world\" hello world", "EOF  null"]);
    assert_eq!(listing("\"\""), ["STRING \"\" ", "EOF  null"]);
}

#[test]
fn comments_and_whitespace_are_skipped() {
    assert_eq!(kinds("// nothing here\n\t 1 // trailing\r\n"),
               vec![TokenKind::Number, TokenKind::Eof]);
    assert_eq!(kinds("a / b"),
               vec![TokenKind::Identifier, TokenKind::Slash, TokenKind::Identifier, TokenKind::Eof]);
}

#[test]
fn lines_are_counted() {
    let (tokens, _) = scan("a\nb\n\nc\n");
    let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, [1, 2, 4, 5]);
}

#[test]
fn multi_line_strings_advance_the_line_counter() {
    let (tokens, errors) = scan("\"one\ntwo\"\nx");
    assert!(errors.is_empty());
    assert_eq!(tokens[0].literal, Some(Literal::String("one\ntwo".to_string())));
    assert_eq!(tokens[1].lexeme, "x");
    assert_eq!(tokens[1].line, 3);
}

#[test]
fn unterminated_string_is_reported() {
    let (tokens, errors) = scan("\"open");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(), "[line 1] Error: Unterminated string.");
    assert_eq!(kinds_of(&tokens), vec![TokenKind::Eof]);
}

#[test]
fn unterminated_string_reports_the_last_line() {
    let (_, errors) = scan("print 1;\n\"never\nclosed");
    assert_eq!(errors, [LexicalError::new(3, "Unterminated string.")]);
}

#[test]
fn every_unexpected_character_is_collected() {
    let (tokens, errors) = scan(",.$(#\n@");
    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();

    assert_eq!(messages,
               ["[line 1] Error: Unexpected character: $",
                "[line 1] Error: Unexpected character: #",
                "[line 2] Error: Unexpected character: @"]);
    assert_eq!(kinds_of(&tokens),
               vec![TokenKind::Comma, TokenKind::Dot, TokenKind::LeftParen, TokenKind::Eof]);
}

#[test]
fn eof_sits_on_the_final_line() {
    let (tokens, _) = scan("1\n2\n");
    assert_eq!(tokens.last().map(|t| (t.kind, t.line)), Some((TokenKind::Eof, 3)));
}

fn kinds_of(tokens: &[treelox::interpreter::token::Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}
