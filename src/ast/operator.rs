use std::fmt;

use serde::Serialize;

use crate::syntax::token::ERROR_LEXEME;

/// Semantic operator, resolved from an operator token by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OperatorType {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Remainder,
    Assignment,
    Equality,
    Inequality,
    And,
    Or,
    LessThan,
    LessThanOrEquals,
    GreaterThan,
    GreaterThanOrEquals,
    BitwiseShiftLeft,
    BitwiseShiftRight,
    Negation,
    UnaryNegative,
    UnaryPositive,
    PreIncrement,
    PreDecrement,
    PostIncrement,
    PostDecrement,
    /// Stand-in for an operator token that has no meaning in its position.
    InvalidOrError,
}

impl OperatorType {
    pub const fn lexeme(self) -> &'static str {
        match self {
            OperatorType::Addition | OperatorType::UnaryPositive => "+",
            OperatorType::Subtraction | OperatorType::UnaryNegative => "-",
            OperatorType::Multiplication => "*",
            OperatorType::Division => "/",
            OperatorType::Remainder => "%",
            OperatorType::Assignment => "=",
            OperatorType::Equality => "==",
            OperatorType::Inequality => "!=",
            OperatorType::And => "&&",
            OperatorType::Or => "||",
            OperatorType::LessThan => "<",
            OperatorType::LessThanOrEquals => "<=",
            OperatorType::GreaterThan => ">",
            OperatorType::GreaterThanOrEquals => ">=",
            OperatorType::BitwiseShiftLeft => "<<",
            OperatorType::BitwiseShiftRight => ">>",
            OperatorType::Negation => "!",
            OperatorType::PreIncrement | OperatorType::PostIncrement => "++",
            OperatorType::PreDecrement | OperatorType::PostDecrement => "--",
            OperatorType::InvalidOrError => ERROR_LEXEME,
        }
    }

    pub fn is_error(self) -> bool {
        self == OperatorType::InvalidOrError
    }
}

impl fmt::Display for OperatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.lexeme())
    }
}
