//! String literal scanning
//!
//! A string runs from an opening `'` or `"` to the next identical quote and
//! may span lines. There are no escape sequences. The token's lexeme keeps
//! both delimiters.

use super::{LexError, LexResult, Lexer};
use crate::syntax::{
    token::Token,
    token_type::{LiteralKind, TokenType},
};

impl Lexer<'_> {
    /// Called with the opening quote already consumed.
    pub(super) fn scan_string(&mut self, quote: char) -> LexResult<Token> {
        loop {
            match self.scanner.advance() {
                Some(ch) if ch == quote => {
                    return Ok(self.commit(TokenType::Literal(LiteralKind::String)));
                }
                Some(_) => {}
                None => {
                    return Err(LexError::UnterminatedString { offset: self.start });
                }
            }
        }
    }
}
