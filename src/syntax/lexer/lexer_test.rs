use super::{LexError, tokenize};
use crate::syntax::{
    source::SourceFile,
    token::Token,
    token_type::{Bracket, Keyword, LiteralKind, Operator, Symbol, TokenType},
};

fn lex(input: &str) -> Vec<Token> {
    tokenize(&SourceFile::new(input, None)).expect("input should lex")
}

fn shapes(input: &str) -> Vec<(usize, TokenType, String)> {
    lex(input)
        .into_iter()
        .map(|token| (token.offset, token.token_type, token.text().to_string()))
        .collect()
}

fn types(input: &str) -> Vec<TokenType> {
    lex(input).into_iter().map(|token| token.token_type).collect()
}

#[test]
fn empty_input_is_just_the_end_marker() {
    assert_eq!(shapes(""), vec![(0, TokenType::Eof, String::new())]);
}

#[test]
fn whitespace_only_input_ends_at_its_length() {
    assert_eq!(shapes(" \t\r\n"), vec![(4, TokenType::Eof, String::new())]);
}

#[test]
fn decimal_number() {
    assert_eq!(
        shapes("3.14"),
        vec![
            (0, TokenType::Literal(LiteralKind::Number), "3.14".to_string()),
            (4, TokenType::Eof, String::new()),
        ]
    );
}

#[test]
fn trailing_dot_is_not_part_of_a_number() {
    assert_eq!(
        types("3."),
        vec![
            TokenType::Literal(LiteralKind::Number),
            TokenType::Symbol(Symbol::Dot),
            TokenType::Eof,
        ]
    );
}

#[test]
fn second_fraction_dot_is_rejected() {
    let err = tokenize(&SourceFile::new("3.1.4", None)).unwrap_err();
    assert_eq!(
        err,
        LexError::UnexpectedToken {
            lexeme: ".".to_string(),
            offset: 3,
        }
    );
}

#[test]
fn booleans_are_literals() {
    assert_eq!(
        shapes("true false"),
        vec![
            (0, TokenType::Literal(LiteralKind::Boolean), "true".to_string()),
            (5, TokenType::Literal(LiteralKind::Boolean), "false".to_string()),
            (10, TokenType::Eof, String::new()),
        ]
    );
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(
        types("func let if then else return truthy _x1"),
        vec![
            TokenType::Keyword(Keyword::Func),
            TokenType::Keyword(Keyword::Let),
            TokenType::Keyword(Keyword::If),
            TokenType::Keyword(Keyword::Then),
            TokenType::Keyword(Keyword::Else),
            TokenType::Keyword(Keyword::Return),
            TokenType::Identifier,
            TokenType::Identifier,
            TokenType::Eof,
        ]
    );
}

#[test]
fn brackets_and_symbols() {
    assert_eq!(
        types("(){}:.,->"),
        vec![
            TokenType::Pair(Bracket::OpenParen),
            TokenType::Pair(Bracket::CloseParen),
            TokenType::Pair(Bracket::OpenCurly),
            TokenType::Pair(Bracket::CloseCurly),
            TokenType::Symbol(Symbol::Colon),
            TokenType::Symbol(Symbol::Dot),
            TokenType::Symbol(Symbol::Comma),
            TokenType::Symbol(Symbol::Arrow),
            TokenType::Eof,
        ]
    );
}

#[test]
fn one_and_two_character_operators() {
    let input = "= == ! != - -- + ++ & && | || < <= << > >= >> * / %";
    let expected = [
        Operator::Equals,
        Operator::EqualsEquals,
        Operator::Bang,
        Operator::BangEquals,
        Operator::Minus,
        Operator::MinusMinus,
        Operator::Plus,
        Operator::PlusPlus,
        Operator::Amp,
        Operator::AmpAmp,
        Operator::Pipe,
        Operator::PipePipe,
        Operator::Less,
        Operator::LessEquals,
        Operator::LessLess,
        Operator::Greater,
        Operator::GreaterEquals,
        Operator::GreaterGreater,
        Operator::Star,
        Operator::Slash,
        Operator::Percent,
    ];

    let tokens = lex(input);
    assert_eq!(tokens.len(), expected.len() + 1);
    for (token, op) in tokens.iter().zip(expected) {
        assert_eq!(token.token_type, TokenType::Operator(op));
        assert_eq!(token.text(), op.lexeme());
    }
}

#[test]
fn strings_keep_their_delimiters() {
    assert_eq!(
        shapes(r#"'a b' "c""#),
        vec![
            (0, TokenType::Literal(LiteralKind::String), "'a b'".to_string()),
            (6, TokenType::Literal(LiteralKind::String), "\"c\"".to_string()),
            (9, TokenType::Eof, String::new()),
        ]
    );
}

#[test]
fn unterminated_string_reports_its_start() {
    let err = tokenize(&SourceFile::new("x = 'abc", None)).unwrap_err();
    assert_eq!(err, LexError::UnterminatedString { offset: 4 });
}

#[test]
fn unknown_character_is_fatal() {
    let err = tokenize(&SourceFile::new("a # b", None)).unwrap_err();
    assert_eq!(
        err,
        LexError::UnexpectedToken {
            lexeme: "#".to_string(),
            offset: 2,
        }
    );
    assert_eq!(err.to_string(), "Unexpected token: `#` at 2.");
}

#[test]
fn lexemes_reconstruct_the_source() {
    let input = "func main() -> {\n  print('Hello', x.y)\n}\r\nlet z: N = -1.5";
    for token in lex(input) {
        assert_eq!(&input[token.offset..token.offset + token.len()], token.text());
    }
}
