//! Recursive-descent parser over a lexed token sequence.
//!
//! One [`Parser`] owns the tokens and an index into them. The grammar is
//! split by concern across sibling modules:
//!
//! * `operator` - operator tokens to [`OperatorType`](crate::ast::OperatorType)
//! * `expression` - precedence levels from assignment down to literals
//! * `statement` - `return`, `let` and expression statements
//! * `module` - top-level `func` / `let` declarations
//!
//! Missing delimiters are reported through the [`DiagnosticReporter`] and
//! replaced with synthesised tokens so the tree stays well formed. Running
//! out of tokens is fatal and surfaces as [`ParseError::EndOfFile`].

mod expression;
mod module;
mod operator;
mod statement;

use thiserror::Error;
use tracing::trace;

use crate::{
    ast::{AstFactory, DefaultAstFactory},
    diagnostics::{
        Diagnostic, DiagnosticCode, DiagnosticError, DiagnosticReporter, DiagnosticSink, FailFast,
    },
    syntax::{token::Token, token_type::TokenType},
};

#[derive(Debug, Clone, Error)]
pub enum ParseError {
    #[error("unexpected end of file: {0}")]
    EndOfFile(Diagnostic),
    /// A diagnostic the sink chose to escalate.
    #[error(transparent)]
    Reported(#[from] DiagnosticError),
}

impl ParseError {
    pub fn diagnostic(&self) -> &Diagnostic {
        match self {
            ParseError::EndOfFile(diagnostic) => diagnostic,
            ParseError::Reported(error) => error.diagnostic(),
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Something the current token can be tested against.
pub trait TokenMatcher {
    fn matches(&self, token: &Token) -> bool;
}

impl TokenMatcher for TokenType {
    fn matches(&self, token: &Token) -> bool {
        token.token_type == *self
    }
}

/// Type plus exact lexeme.
impl TokenMatcher for (TokenType, &str) {
    fn matches(&self, token: &Token) -> bool {
        token.token_type == self.0 && token.text() == self.1
    }
}

pub struct Parser<S: DiagnosticSink = FailFast, F: AstFactory = DefaultAstFactory> {
    tokens: Vec<Token>,
    position: usize,
    reporter: DiagnosticReporter<S>,
    factory: F,
}

impl<S: DiagnosticSink> Parser<S, DefaultAstFactory> {
    pub fn new(tokens: Vec<Token>, reporter: DiagnosticReporter<S>) -> Self {
        Self::with_factory(tokens, reporter, DefaultAstFactory)
    }
}

impl<S: DiagnosticSink, F: AstFactory> Parser<S, F> {
    pub fn with_factory(mut tokens: Vec<Token>, reporter: DiagnosticReporter<S>, factory: F) -> Self {
        if !tokens.last().is_some_and(|token| token.token_type.is_eof()) {
            let end = tokens.last().map_or(0, Token::end);
            tokens.push(Token::eof(end));
        }
        Self {
            tokens,
            position: 0,
            reporter,
            factory,
        }
    }

    pub fn reporter(&self) -> &DiagnosticReporter<S> {
        &self.reporter
    }

    pub fn into_sink(self) -> S {
        self.reporter.into_sink()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// True while a token other than the end marker remains.
    pub fn has_next(&self) -> bool {
        self.tokens
            .get(self.position)
            .is_some_and(|token| !token.token_type.is_eof())
    }

    /// Token `offset` places from the cursor. Reading outside the token
    /// sequence is fatal; the end marker itself can be peeked.
    pub fn peek_at(&self, offset: isize) -> ParseResult<&Token> {
        self.position
            .checked_add_signed(offset)
            .and_then(|index| self.tokens.get(index))
            .ok_or_else(|| self.end_of_file())
    }

    pub fn peek(&self) -> ParseResult<&Token> {
        self.peek_at(0)
    }

    pub fn previous(&self) -> ParseResult<&Token> {
        self.peek_at(-1)
    }

    pub fn advance(&mut self) -> ParseResult<Token> {
        if !self.has_next() {
            return Err(self.end_of_file());
        }
        self.position += 1;
        Ok(self.tokens[self.position - 1].clone())
    }

    pub fn check(&self, matcher: impl TokenMatcher) -> bool {
        self.check_ref(&matcher)
    }

    /// Consumes the first alternative that matches, if any.
    pub fn match_any<M: TokenMatcher>(&mut self, alternatives: &[M]) -> bool {
        for alternative in alternatives {
            if self.check_ref(alternative) {
                self.position += 1;
                return true;
            }
        }
        false
    }

    /// Consumes and returns the current token if it matches.
    pub fn eat(&mut self, matcher: impl TokenMatcher) -> Option<Token> {
        if self.check(matcher) {
            self.position += 1;
            Some(self.tokens[self.position - 1].clone())
        } else {
            None
        }
    }

    fn check_ref<M: TokenMatcher>(&self, matcher: &M) -> bool {
        self.has_next() && matcher.matches(&self.tokens[self.position])
    }

    fn end_of_file_token(&self) -> &Token {
        // `with_factory` guarantees a trailing end marker.
        &self.tokens[self.tokens.len() - 1]
    }

    fn end_of_file(&self) -> ParseError {
        let source = self.reporter.source().clone();
        let offset = source.len();
        ParseError::EndOfFile(Diagnostic::new(
            source,
            offset,
            0,
            DiagnosticCode::SyntaxEndOfFile,
        ))
    }

    fn report_token(&mut self, token: &Token, code: DiagnosticCode) -> ParseResult<()> {
        Ok(self.reporter.report_token(token, code)?)
    }

    /// Reports `code` at the current token and returns a placeholder of the
    /// kind that was expected there.
    fn recover(
        &mut self,
        code: DiagnosticCode,
        token_type: TokenType,
        lexeme: &'static str,
    ) -> ParseResult<Token> {
        let at = self.peek()?.clone();
        self.report_token(&at, code)?;
        trace!(code = code.name(), offset = at.offset, lexeme, "synthesised recovery token");
        Ok(Token::recovery(at.offset, token_type, lexeme))
    }
}
