//! Expression grammar, loosest binding first:
//!
//! ```text
//! assignment  → conditional ( "=" conditional )*
//! conditional → "if" expr "then" expr "else" expr | logical_or
//! logical_or  → logical_and ( "||" logical_and )*
//! logical_and → equality ( "&&" equality )*
//! equality    → comparison ( ( "==" | "!=" ) comparison )*
//! comparison  → shift ( ( "<" | "<=" | ">" | ">=" ) shift )*
//! shift       → additive ( ( "<<" | ">>" ) additive )*
//! additive    → prefix ( ( "+" | "-" | "*" | "/" | "%" ) prefix )*
//! prefix      → ( "-" | "+" | "!" | "--" | "++" ) prefix | postfix
//! postfix     → call ( "--" | "++" )?
//! call        → group ( "(" arguments? ")" | "." identifier )*
//! group       → "(" expr ")" | literal
//! literal     → number | boolean | string | identifier
//! ```

use super::{ParseResult, Parser};
use crate::{
    ast::{AstFactory, Expression, Identifier},
    diagnostics::{DiagnosticCode, DiagnosticSink},
    syntax::{
        token::Token,
        token_type::{Bracket, Keyword, LiteralKind, Operator, Symbol, TokenType},
    },
};

const PREFIX_OPERATORS: &[Operator] = &[
    Operator::Minus,
    Operator::Plus,
    Operator::Bang,
    Operator::MinusMinus,
    Operator::PlusPlus,
];

impl<S: DiagnosticSink, F: AstFactory> Parser<S, F> {
    pub fn parse_expression(&mut self) -> ParseResult<Expression> {
        self.parse_assignment()
    }

    /// Parses an identifier. Anything else is consumed, reported, and
    /// replaced by an error-flagged identifier.
    pub fn parse_identifier(&mut self) -> ParseResult<Identifier> {
        if let Some(token) = self.eat(TokenType::Identifier) {
            return Ok(self.factory.create_identifier(token));
        }
        let token = self.advance()?;
        self.report_token(&token, DiagnosticCode::SyntaxExpectedIdentifier)?;
        Ok(self.factory.create_identifier(token.as_error()))
    }

    fn parse_assignment(&mut self) -> ParseResult<Expression> {
        self.parse_binary_level(&[Operator::Equals], Self::parse_conditional)
    }

    fn parse_conditional(&mut self) -> ParseResult<Expression> {
        let Some(if_token) = self.eat(TokenType::Keyword(Keyword::If)) else {
            return self.parse_logical_or();
        };
        let condition = self.parse_expression()?;
        self.expect_keyword(Keyword::Then, DiagnosticCode::SyntaxExpectedThen)?;
        let then_expression = self.parse_expression()?;
        self.expect_keyword(Keyword::Else, DiagnosticCode::SyntaxExpectedElse)?;
        let else_expression = self.parse_expression()?;
        Ok(self
            .factory
            .create_conditional(if_token, condition, then_expression, else_expression))
    }

    /// A missing keyword is reported and parsing carries on as if it were there.
    fn expect_keyword(&mut self, keyword: Keyword, code: DiagnosticCode) -> ParseResult<()> {
        if self.eat(TokenType::Keyword(keyword)).is_none() {
            let at = self.peek()?.clone();
            self.report_token(&at, code)?;
        }
        Ok(())
    }

    fn parse_logical_or(&mut self) -> ParseResult<Expression> {
        self.parse_binary_level(&[Operator::PipePipe], Self::parse_logical_and)
    }

    fn parse_logical_and(&mut self) -> ParseResult<Expression> {
        self.parse_binary_level(&[Operator::AmpAmp], Self::parse_equality)
    }

    fn parse_equality(&mut self) -> ParseResult<Expression> {
        self.parse_binary_level(
            &[Operator::EqualsEquals, Operator::BangEquals],
            Self::parse_comparison,
        )
    }

    fn parse_comparison(&mut self) -> ParseResult<Expression> {
        self.parse_binary_level(
            &[
                Operator::Less,
                Operator::LessEquals,
                Operator::Greater,
                Operator::GreaterEquals,
            ],
            Self::parse_bitwise_shift,
        )
    }

    fn parse_bitwise_shift(&mut self) -> ParseResult<Expression> {
        self.parse_binary_level(
            &[Operator::LessLess, Operator::GreaterGreater],
            Self::parse_additive,
        )
    }

    fn parse_additive(&mut self) -> ParseResult<Expression> {
        self.parse_binary_level(
            &[
                Operator::Plus,
                Operator::Minus,
                Operator::Star,
                Operator::Slash,
                Operator::Percent,
            ],
            Self::parse_prefix,
        )
    }

    /// Left-associative loop shared by every binary level.
    fn parse_binary_level(
        &mut self,
        operators: &[Operator],
        next: fn(&mut Self) -> ParseResult<Expression>,
    ) -> ParseResult<Expression> {
        let mut expression = next(self)?;
        while let Some(operator_token) = self.eat_operator(operators) {
            let operator = self.match_binary_operator(&operator_token)?;
            let right = next(self)?;
            expression = self
                .factory
                .create_binary(expression, operator_token, operator, right);
        }
        Ok(expression)
    }

    fn parse_prefix(&mut self) -> ParseResult<Expression> {
        let Some(operator_token) = self.eat_operator(PREFIX_OPERATORS) else {
            return self.parse_postfix();
        };
        let operator = self.match_prefix_operator(&operator_token)?;
        let operand = self.parse_prefix()?;
        Ok(self.factory.create_prefix(operator_token, operator, operand))
    }

    fn parse_postfix(&mut self) -> ParseResult<Expression> {
        let expression = self.parse_call()?;
        let is_postfix = self.check(TokenType::Operator(Operator::MinusMinus))
            || self.check(TokenType::Operator(Operator::PlusPlus));
        if !is_postfix || starts_operand(self.peek_at(1)?) {
            return Ok(expression);
        }
        let operator_token = self.advance()?;
        let operator = self.match_postfix_operator(&operator_token)?;
        Ok(self
            .factory
            .create_postfix(expression, operator_token, operator))
    }

    fn parse_call(&mut self) -> ParseResult<Expression> {
        let mut expression = self.parse_group()?;
        loop {
            if self.eat(TokenType::Pair(Bracket::OpenParen)).is_some() {
                let (arguments, close) = self.parse_arguments()?;
                expression = self.factory.create_call(expression, arguments, close);
            } else if self.eat(TokenType::Symbol(Symbol::Dot)).is_some() {
                let property = self.parse_identifier()?;
                expression = self.factory.create_property(expression, property);
            } else {
                return Ok(expression);
            }
        }
    }

    /// Arguments after an opening `(`, up to and including the `)`.
    fn parse_arguments(&mut self) -> ParseResult<(Vec<Expression>, Token)> {
        let close_paren = TokenType::Pair(Bracket::CloseParen);
        let mut arguments = Vec::new();
        while self.has_next() && !self.check(close_paren) {
            arguments.push(self.parse_expression()?);
            if self.eat(TokenType::Symbol(Symbol::Comma)).is_none()
                && self.has_next()
                && !self.check(close_paren)
            {
                let at = self.peek()?.clone();
                self.report_token(&at, DiagnosticCode::SyntaxExpectedComma)?;
            }
        }
        let close = match self.eat(close_paren) {
            Some(close) => close,
            None => self.recover(DiagnosticCode::SyntaxExpectedParentheses, close_paren, ")")?,
        };
        Ok((arguments, close))
    }

    fn parse_group(&mut self) -> ParseResult<Expression> {
        let Some(open) = self.eat(TokenType::Pair(Bracket::OpenParen)) else {
            return self.parse_literal();
        };
        let expression = self.parse_expression()?;
        let close_paren = TokenType::Pair(Bracket::CloseParen);
        let close = match self.eat(close_paren) {
            Some(close) => close,
            None => self.recover(DiagnosticCode::SyntaxExpectedParentheses, close_paren, ")")?,
        };
        Ok(self.factory.create_group(open, expression, close))
    }

    fn parse_literal(&mut self) -> ParseResult<Expression> {
        if let Some(token) = self.eat(TokenType::Literal(LiteralKind::Number)) {
            let value = match token.text().parse::<f64>() {
                Ok(value) => value,
                Err(_) => {
                    self.report_token(&token, DiagnosticCode::SyntaxUnexpectedToken)?;
                    f64::NAN
                }
            };
            return Ok(self.factory.create_literal_number(token, value));
        }
        if let Some(token) = self.eat(TokenType::Literal(LiteralKind::Boolean)) {
            let value = token.text() == "true";
            return Ok(self.factory.create_literal_boolean(token, value));
        }
        if let Some(token) = self.eat(TokenType::Literal(LiteralKind::String)) {
            let value = strip_delimiters(token.text()).to_string();
            return Ok(self.factory.create_literal_string(token, value));
        }
        Ok(Expression::Identifier(self.parse_identifier()?))
    }
}

/// Whether `token` can begin a primary expression.
fn starts_operand(token: &Token) -> bool {
    matches!(
        token.token_type,
        TokenType::Identifier
            | TokenType::Literal(_)
            | TokenType::Keyword(Keyword::If)
            | TokenType::Pair(Bracket::OpenParen)
    )
}

fn strip_delimiters(text: &str) -> &str {
    let end = text.len().saturating_sub(1);
    text.get(1..end).unwrap_or_default()
}
