use super::{ParseResult, Parser};
use crate::{
    ast::{AstFactory, Statement, VariableDefinition},
    diagnostics::{DiagnosticCode, DiagnosticSink},
    syntax::{
        token::Token,
        token_type::{Keyword, Operator, Symbol, TokenType},
    },
};

impl<S: DiagnosticSink, F: AstFactory> Parser<S, F> {
    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        if let Some(keyword) = self.eat(TokenType::Keyword(Keyword::Return)) {
            let expression = self.parse_expression()?;
            return Ok(self.factory.create_return(keyword, expression));
        }
        if let Some(keyword) = self.eat(TokenType::Keyword(Keyword::Let)) {
            return Ok(Statement::Variable(self.parse_variable(keyword)?));
        }
        if self.has_next() && cannot_start_statement(self.peek()?) {
            let token = self.advance()?;
            self.report_token(&token, DiagnosticCode::SyntaxUnexpectedToken)?;
            return Ok(self.factory.create_recovery(token.as_error()));
        }
        Ok(Statement::Expression(self.parse_expression()?))
    }

    /// `name[: Type][ = value]`, after the `let` keyword.
    pub(super) fn parse_variable(&mut self, keyword: Token) -> ParseResult<VariableDefinition> {
        let name = self.parse_identifier()?;
        let type_annotation = match self.eat(TokenType::Symbol(Symbol::Colon)) {
            Some(_) => Some(self.parse_identifier()?),
            None => None,
        };
        let initial_value = match self.eat(TokenType::Operator(Operator::Equals)) {
            Some(_) => Some(self.parse_expression()?),
            None => None,
        };
        Ok(self
            .factory
            .create_variable(keyword, name, type_annotation, initial_value))
    }
}

fn cannot_start_statement(token: &Token) -> bool {
    match token.token_type {
        TokenType::Pair(bracket) => bracket.is_close(),
        TokenType::Symbol(_) => true,
        _ => false,
    }
}
