use super::{ParseResult, Parser};
use crate::{
    ast::{AstFactory, OperatorType},
    diagnostics::{DiagnosticCode, DiagnosticSink},
    syntax::{
        token::Token,
        token_type::{Operator, TokenType},
    },
};

impl<S: DiagnosticSink, F: AstFactory> Parser<S, F> {
    /// Operator meaning of `token` between two operands. The binary levels
    /// only hand over operators they accept, so the reserved `&` and `|`
    /// reach this only when called directly.
    pub fn match_binary_operator(&mut self, token: &Token) -> ParseResult<OperatorType> {
        let operator = match token.token_type {
            TokenType::Operator(op) => match op {
                Operator::Plus => Some(OperatorType::Addition),
                Operator::Minus => Some(OperatorType::Subtraction),
                Operator::Star => Some(OperatorType::Multiplication),
                Operator::Slash => Some(OperatorType::Division),
                Operator::Percent => Some(OperatorType::Remainder),
                Operator::Equals => Some(OperatorType::Assignment),
                Operator::EqualsEquals => Some(OperatorType::Equality),
                Operator::BangEquals => Some(OperatorType::Inequality),
                Operator::AmpAmp => Some(OperatorType::And),
                Operator::PipePipe => Some(OperatorType::Or),
                Operator::Less => Some(OperatorType::LessThan),
                Operator::LessEquals => Some(OperatorType::LessThanOrEquals),
                Operator::Greater => Some(OperatorType::GreaterThan),
                Operator::GreaterEquals => Some(OperatorType::GreaterThanOrEquals),
                Operator::LessLess => Some(OperatorType::BitwiseShiftLeft),
                Operator::GreaterGreater => Some(OperatorType::BitwiseShiftRight),
                _ => None,
            },
            _ => None,
        };
        self.resolve_operator(token, operator)
    }

    /// Operator meaning of `token` before its operand.
    pub fn match_prefix_operator(&mut self, token: &Token) -> ParseResult<OperatorType> {
        let operator = match token.token_type {
            TokenType::Operator(Operator::Bang) => Some(OperatorType::Negation),
            TokenType::Operator(Operator::Minus) => Some(OperatorType::UnaryNegative),
            TokenType::Operator(Operator::Plus) => Some(OperatorType::UnaryPositive),
            TokenType::Operator(Operator::MinusMinus) => Some(OperatorType::PreDecrement),
            TokenType::Operator(Operator::PlusPlus) => Some(OperatorType::PreIncrement),
            _ => None,
        };
        self.resolve_operator(token, operator)
    }

    /// Operator meaning of `token` after its operand.
    pub fn match_postfix_operator(&mut self, token: &Token) -> ParseResult<OperatorType> {
        let operator = match token.token_type {
            TokenType::Operator(Operator::MinusMinus) => Some(OperatorType::PostDecrement),
            TokenType::Operator(Operator::PlusPlus) => Some(OperatorType::PostIncrement),
            _ => None,
        };
        self.resolve_operator(token, operator)
    }

    fn resolve_operator(
        &mut self,
        token: &Token,
        operator: Option<OperatorType>,
    ) -> ParseResult<OperatorType> {
        match operator {
            Some(operator) => Ok(operator),
            None => {
                self.report_token(token, DiagnosticCode::SyntaxInvalidOperator)?;
                Ok(OperatorType::InvalidOrError)
            }
        }
    }

    /// Consumes the current token if it is one of `operators`.
    pub(super) fn eat_operator(&mut self, operators: &[Operator]) -> Option<Token> {
        operators
            .iter()
            .find_map(|&op| self.eat(TokenType::Operator(op)))
    }
}
