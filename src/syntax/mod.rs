pub mod lexeme;
pub mod lexer;
pub mod parser;
pub mod pipeline;
pub mod scanner;
pub mod source;
pub mod token;
pub mod token_type;

pub use scanner::Scanner;
pub use source::{SourceError, SourceFile, Span};
pub use token::Token;
pub use token_type::{Bracket, Keyword, LiteralKind, Operator, Symbol, TokenType};
pub use lexer::{LexError, Lexer, tokenize};
pub use parser::{ParseError, ParseResult, Parser, TokenMatcher};
