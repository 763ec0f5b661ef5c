use std::fmt;

use serde::Serialize;

macro_rules! define_tokens {
    (
        operators { $($(#[$op_meta:meta])* $op_name:ident => $op_str:literal),* $(,)? }
        keywords { $($kw_name:ident => $kw_str:literal),* $(,)? }
    ) => {
        /// Operator lexemes, each variant spelled exactly as scanned.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum Operator {
            $($(#[$op_meta])* $op_name,)*
        }

        impl Operator {
            pub const ALL: &'static [Operator] = &[$(Operator::$op_name,)*];

            pub const fn lexeme(self) -> &'static str {
                match self {
                    $(Operator::$op_name => $op_str,)*
                }
            }
        }

        /// Reserved words.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum Keyword {
            $($kw_name,)*
        }

        impl Keyword {
            pub const ALL: &'static [Keyword] = &[$(Keyword::$kw_name,)*];

            pub const fn lexeme(self) -> &'static str {
                match self {
                    $(Keyword::$kw_name => $kw_str,)*
                }
            }
        }

        /// Called by the lexer to check if an identifier is a keyword
        pub fn lookup_keyword(ident: &str) -> Option<Keyword> {
            match ident {
                $($kw_str => Some(Keyword::$kw_name),)*
                _ => None,
            }
        }
    };
}

// ════════════════════════════════════════════════════════════════════════════
//  TOKEN DEFINITIONS
// ════════════════════════════════════════════════════════════════════════════

define_tokens! {
    operators {
        Plus           => "+",
        PlusPlus       => "++",
        Minus          => "-",
        MinusMinus     => "--",
        Star           => "*",
        Slash          => "/",
        Percent        => "%",
        Bang           => "!",
        BangEquals     => "!=",
        Equals         => "=",
        EqualsEquals   => "==",
        /// Reserved. Lexed but given no meaning by the parser.
        Amp            => "&",
        AmpAmp         => "&&",
        /// Reserved. Lexed but given no meaning by the parser.
        Pipe           => "|",
        PipePipe       => "||",
        Less           => "<",
        LessEquals     => "<=",
        LessLess       => "<<",
        Greater        => ">",
        GreaterEquals  => ">=",
        GreaterGreater => ">>",
    }

    keywords {
        Func   => "func",
        Let    => "let",
        If     => "if",
        Then   => "then",
        Else   => "else",
        Return => "return",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LiteralKind {
    Boolean,
    Number,
    String,
}

/// Bracket characters that always come in open/close pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Bracket {
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
}

impl Bracket {
    pub const fn lexeme(self) -> &'static str {
        match self {
            Bracket::OpenParen => "(",
            Bracket::CloseParen => ")",
            Bracket::OpenCurly => "{",
            Bracket::CloseCurly => "}",
        }
    }

    pub const fn is_close(self) -> bool {
        matches!(self, Bracket::CloseParen | Bracket::CloseCurly)
    }
}

/// Punctuation that is neither an operator nor a bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Symbol {
    Colon,
    Dot,
    Comma,
    Arrow,
}

impl Symbol {
    pub const fn lexeme(self) -> &'static str {
        match self {
            Symbol::Colon => ":",
            Symbol::Dot => ".",
            Symbol::Comma => ",",
            Symbol::Arrow => "->",
        }
    }
}

/// Lexical category of a token. Variants that carry a tag identify the exact
/// lexeme, so comparing two `TokenType`s compares category and spelling.
///
/// There is no recovery category: [`Token::recovery`] builds a token of the
/// expected type with `error` set.
///
/// [`Token::recovery`]: super::token::Token::recovery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum TokenType {
    /// End-of-input marker.
    Eof,
    Identifier,
    Keyword(Keyword),
    Literal(LiteralKind),
    Operator(Operator),
    Pair(Bracket),
    Symbol(Symbol),
}

impl TokenType {
    pub const fn is_eof(self) -> bool {
        matches!(self, TokenType::Eof)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Eof => f.write_str("<EOF>"),
            TokenType::Identifier => f.write_str("IDENTIFIER"),
            TokenType::Keyword(keyword) => write!(f, "KEYWORD({})", keyword.lexeme()),
            TokenType::Literal(kind) => write!(f, "LITERAL({kind:?})"),
            TokenType::Operator(op) => write!(f, "OPERATOR({})", op.lexeme()),
            TokenType::Pair(bracket) => write!(f, "PAIR({})", bracket.lexeme()),
            TokenType::Symbol(symbol) => write!(f, "SYMBOL({})", symbol.lexeme()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_lookup_matches_table() {
        for keyword in Keyword::ALL {
            assert_eq!(lookup_keyword(keyword.lexeme()), Some(*keyword));
        }
        assert_eq!(lookup_keyword("true"), None);
        assert_eq!(lookup_keyword("Func"), None);
    }

    #[test]
    fn operator_lexemes_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for op in Operator::ALL {
            assert!(seen.insert(op.lexeme()), "duplicate lexeme {}", op.lexeme());
        }
    }
}
