//! Number literal scanning
//!
//! Supports decimal integers (`42`) and decimals (`3.14`). A `.` is part of
//! the number only when a digit follows it; a second `.` directly after the
//! fraction is rejected rather than starting a new token.

use super::{LexResult, Lexer};
use crate::syntax::{
    token::Token,
    token_type::{LiteralKind, TokenType},
};

impl Lexer<'_> {
    /// Called with the first digit already consumed.
    pub(super) fn scan_number(&mut self) -> LexResult<Token> {
        self.scanner.eat_while(|c| c.is_ascii_digit());

        let has_fraction = self.scanner.peek(0) == Some('.')
            && self.scanner.peek(1).is_some_and(|c| c.is_ascii_digit());

        if has_fraction {
            self.scanner.eat('.');
            self.scanner.eat_while(|c| c.is_ascii_digit());

            if self.scanner.peek(0) == Some('.') {
                let offset = self.scanner.position();
                return Err(self.unexpected(offset, offset + 1));
            }
        }

        Ok(self.commit(TokenType::Literal(LiteralKind::Number)))
    }
}
