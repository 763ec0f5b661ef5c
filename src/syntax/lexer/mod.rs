//! The Lumen lexer - turns a [`Scanner`] into an ordered token sequence.
//!
//! The lexer is a state machine over characters: it consumes one character,
//! branches on it, and commits a token spanning `start..scanner.position()`.
//! `start` is reset after every committed token and after skipped whitespace.

mod helpers;
mod identifiers;
mod numbers;
mod strings;

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::syntax::{
    scanner::Scanner,
    source::SourceFile,
    token::Token,
    token_type::{Bracket, Operator, Symbol, TokenType},
};

use helpers::{is_identifier_start, is_whitespace};

/// Lexing failures. All of them abort tokenization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("Unexpected token: `{lexeme}` at {offset}.")]
    UnexpectedToken { lexeme: String, offset: usize },
    #[error("Unterminated string literal starting at {offset}.")]
    UnterminatedString { offset: usize },
}

impl LexError {
    pub fn offset(&self) -> usize {
        match self {
            LexError::UnexpectedToken { offset, .. } | LexError::UnterminatedString { offset } => {
                *offset
            }
        }
    }
}

pub type LexResult<T> = Result<T, LexError>;

/// Tokenizes a whole source file.
pub fn tokenize(source: &SourceFile) -> LexResult<Vec<Token>> {
    Lexer::new(Scanner::new(source)).tokenize()
}

pub struct Lexer<'src> {
    scanner: Scanner<'src>,
    contents: Arc<str>,
    /// Offset where the token being scanned began.
    start: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(scanner: Scanner<'src>) -> Self {
        let contents = scanner.source().contents_arc();
        let start = scanner.position();
        Self {
            scanner,
            contents,
            start,
        }
    }

    /// Consumes the remaining input. The last token is always `Eof` with an
    /// empty lexeme at the final offset.
    pub fn tokenize(mut self) -> LexResult<Vec<Token>> {
        let mut tokens = Vec::new();

        while self.scanner.has_next() {
            if let Some(token) = self.scan_token()? {
                tokens.push(token);
            }
        }
        tokens.push(Token::eof(self.scanner.position()));

        debug!(
            source = self.scanner.source().url().unwrap_or("<unknown>"),
            tokens = tokens.len(),
            "tokenized"
        );
        Ok(tokens)
    }

    fn scan_token(&mut self) -> LexResult<Option<Token>> {
        let Some(ch) = self.scanner.advance() else {
            return Ok(None);
        };

        let token = match ch {
            ':' => self.commit_static(TokenType::Symbol(Symbol::Colon), ":"),
            ',' => self.commit_static(TokenType::Symbol(Symbol::Comma), ","),
            '.' => self.commit_static(TokenType::Symbol(Symbol::Dot), "."),
            '(' => self.pair(Bracket::OpenParen),
            ')' => self.pair(Bracket::CloseParen),
            '{' => self.pair(Bracket::OpenCurly),
            '}' => self.pair(Bracket::CloseCurly),
            '*' => self.operator(Operator::Star),
            '/' => self.operator(Operator::Slash),
            '%' => self.operator(Operator::Percent),
            '+' => self.operator_or('+', Operator::PlusPlus, Operator::Plus),
            '-' => {
                if self.scanner.eat('>') {
                    self.commit_static(TokenType::Symbol(Symbol::Arrow), "->")
                } else {
                    self.operator_or('-', Operator::MinusMinus, Operator::Minus)
                }
            }
            '=' => self.operator_or('=', Operator::EqualsEquals, Operator::Equals),
            '!' => self.operator_or('=', Operator::BangEquals, Operator::Bang),
            '&' => self.operator_or('&', Operator::AmpAmp, Operator::Amp),
            '|' => self.operator_or('|', Operator::PipePipe, Operator::Pipe),
            '<' => {
                if self.scanner.eat('=') {
                    self.operator(Operator::LessEquals)
                } else {
                    self.operator_or('<', Operator::LessLess, Operator::Less)
                }
            }
            '>' => {
                if self.scanner.eat('=') {
                    self.operator(Operator::GreaterEquals)
                } else {
                    self.operator_or('>', Operator::GreaterGreater, Operator::Greater)
                }
            }
            '\'' | '"' => self.scan_string(ch)?,
            c if is_whitespace(c) => {
                self.start = self.scanner.position();
                return Ok(None);
            }
            c if c.is_ascii_digit() => self.scan_number()?,
            c if is_identifier_start(c) => self.scan_identifier_or_keyword(),
            _ => return Err(self.unexpected(self.start, self.scanner.position())),
        };

        Ok(Some(token))
    }

    fn pair(&mut self, bracket: Bracket) -> Token {
        self.commit_static(TokenType::Pair(bracket), bracket.lexeme())
    }

    fn operator(&mut self, op: Operator) -> Token {
        self.commit_static(TokenType::Operator(op), op.lexeme())
    }

    /// Two-character lookahead: `long` when `next` follows, `short` otherwise.
    fn operator_or(&mut self, next: char, long: Operator, short: Operator) -> Token {
        if self.scanner.eat(next) {
            self.operator(long)
        } else {
            self.operator(short)
        }
    }

    /// Commits a token with a fixed spelling.
    fn commit_static(&mut self, token_type: TokenType, lexeme: &'static str) -> Token {
        let token = Token::new(self.start, token_type, lexeme);
        self.start = self.scanner.position();
        token
    }

    /// Commits a token whose text is `start..position` of the source.
    fn commit(&mut self, token_type: TokenType) -> Token {
        let end = self.scanner.position();
        let token = Token::from_source(token_type, Arc::clone(&self.contents), self.start, end);
        self.start = end;
        token
    }

    /// Text of the token scanned so far.
    fn pending_text(&self) -> &'src str {
        self.scanner.substring(self.start, self.scanner.position())
    }

    fn unexpected(&self, start: usize, end: usize) -> LexError {
        LexError::UnexpectedToken {
            lexeme: self.scanner.substring(start, end).to_string(),
            offset: start,
        }
    }
}

#[cfg(test)]
mod lexer_test;
