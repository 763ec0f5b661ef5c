//! Identifier, keyword and boolean literal scanning

use super::{Lexer, helpers::is_identifier_continue};
use crate::syntax::{
    token::Token,
    token_type::{LiteralKind, TokenType, lookup_keyword},
};

impl Lexer<'_> {
    /// Called with the identifier's first character already consumed.
    pub(super) fn scan_identifier_or_keyword(&mut self) -> Token {
        self.scanner.eat_while(is_identifier_continue);

        let token_type = match self.pending_text() {
            "true" | "false" => TokenType::Literal(LiteralKind::Boolean),
            text => lookup_keyword(text).map_or(TokenType::Identifier, TokenType::Keyword),
        };
        self.commit(token_type)
    }
}
