use std::{fmt, sync::Arc};

use serde::Serialize;

use crate::syntax::lexeme::Lexeme;

use super::token_type::TokenType;

/// Lexeme given to tokens that stand in for text that was never written.
pub const ERROR_LEXEME: &str = "ಠ_ಠ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub offset: usize,
    pub token_type: TokenType,
    pub lexeme: Lexeme,
    /// Set on tokens synthesised during error recovery.
    pub error: bool,
}

impl Token {
    pub fn new(offset: usize, token_type: TokenType, lexeme: impl Into<Lexeme>) -> Self {
        Self {
            offset,
            token_type,
            lexeme: lexeme.into(),
            error: false,
        }
    }

    /// Token whose text is `start..end` of the shared source buffer.
    pub fn from_source(token_type: TokenType, source: Arc<str>, start: usize, end: usize) -> Self {
        Self::new(start, token_type, Lexeme::from_source(source, start..end))
    }

    pub fn eof(offset: usize) -> Self {
        Self::new(offset, TokenType::Eof, "")
    }

    /// A placeholder of the expected kind, standing at `offset`.
    pub fn recovery(offset: usize, token_type: TokenType, lexeme: &'static str) -> Self {
        Self {
            offset,
            token_type,
            lexeme: Lexeme::Static(lexeme),
            error: true,
        }
    }

    /// Copy of this token flagged as erroneous, with placeholder text.
    pub fn as_error(&self) -> Self {
        Self {
            offset: self.offset,
            token_type: self.token_type,
            lexeme: Lexeme::Static(ERROR_LEXEME),
            error: true,
        }
    }

    pub fn text(&self) -> &str {
        self.lexeme.as_str()
    }

    pub fn len(&self) -> usize {
        self.lexeme.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexeme.is_empty()
    }

    /// Offset one past the token's source text. Synthetic tokens occupy no
    /// source text.
    pub fn end(&self) -> usize {
        if self.error {
            self.offset
        } else {
            self.offset + self.len()
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token({}, {:?}, {})",
            self.token_type,
            self.lexeme.as_str(),
            self.offset
        )
    }
}
