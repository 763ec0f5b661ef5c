use tracing::debug;

use super::{ParseResult, Parser};
use crate::{
    ast::{
        AstFactory, Declaration, ModuleDeclaration, ModuleRoot, Parameter, ParameterList,
        StatementBlock,
    },
    diagnostics::{DiagnosticCode, DiagnosticSink},
    syntax::{
        token::Token,
        token_type::{Bracket, Keyword, Operator, Symbol, TokenType},
    },
};

impl<S: DiagnosticSink, F: AstFactory> Parser<S, F> {
    /// Parses a whole file.
    pub fn parse_module_root(&mut self) -> ParseResult<ModuleRoot> {
        let module = self.parse_module_declaration()?;
        debug!(
            declarations = module.declarations.len(),
            "parsed module"
        );
        let end_of_file = self.end_of_file_token().clone();
        Ok(self.factory.create_module_root(vec![module], end_of_file))
    }

    /// Top-level declarations until input runs out or something other than
    /// `func` / `let` shows up.
    fn parse_module_declaration(&mut self) -> ParseResult<ModuleDeclaration> {
        let boundary = self.peek()?.clone();
        let mut declarations = Vec::new();

        while self.has_next() {
            if let Some(keyword) = self.eat(TokenType::Keyword(Keyword::Func)) {
                declarations.push(self.parse_function(keyword)?);
            } else if let Some(keyword) = self.eat(TokenType::Keyword(Keyword::Let)) {
                declarations.push(Declaration::Variable(self.parse_variable(keyword)?));
            } else {
                let offset = self.peek()?.offset;
                self.reporter
                    .report_offset(offset, 1, DiagnosticCode::SyntaxExpectedDeclaration)?;
                break;
            }
        }

        Ok(self.factory.create_module(declarations, boundary))
    }

    fn parse_function(&mut self, keyword: Token) -> ParseResult<Declaration> {
        let name = self.parse_identifier()?;
        let parameters = self.parse_parameter_list()?;
        let return_type = match self.eat(TokenType::Symbol(Symbol::Colon)) {
            Some(_) => Some(self.parse_identifier()?),
            None => None,
        };
        let body = match self.eat(TokenType::Symbol(Symbol::Arrow)) {
            Some(_) => Some(self.parse_block()?),
            None => None,
        };
        Ok(self
            .factory
            .create_function(keyword, name, parameters, return_type, body))
    }

    fn parse_parameter_list(&mut self) -> ParseResult<ParameterList> {
        let open_paren = TokenType::Pair(Bracket::OpenParen);
        let close_paren = TokenType::Pair(Bracket::CloseParen);

        let open = match self.eat(open_paren) {
            Some(open) => open,
            None => self.recover(DiagnosticCode::SyntaxExpectedParentheses, open_paren, "(")?,
        };

        let mut parameters = Vec::new();
        while self.has_next() && !self.check(close_paren) {
            parameters.push(self.parse_parameter()?);
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
        Ok(self.factory.create_parameter_list(open, parameters, close))
    }

    fn parse_parameter(&mut self) -> ParseResult<Parameter> {
        let name = self.parse_identifier()?;
        let type_annotation = match self.eat(TokenType::Symbol(Symbol::Colon)) {
            Some(_) => Some(self.parse_identifier()?),
            None => None,
        };
        let default_value = match self.eat(TokenType::Operator(Operator::Equals)) {
            Some(_) => Some(self.parse_expression()?),
            None => None,
        };
        Ok(self
            .factory
            .create_parameter(name, type_annotation, default_value))
    }

    fn parse_block(&mut self) -> ParseResult<StatementBlock> {
        let open_curly = TokenType::Pair(Bracket::OpenCurly);
        let close_curly = TokenType::Pair(Bracket::CloseCurly);

        let open = match self.eat(open_curly) {
            Some(open) => open,
            None => self.recover(DiagnosticCode::SyntaxExpectedCurly, open_curly, "{")?,
        };

        let mut statements = Vec::new();
        while self.has_next() && !self.check(close_curly) {
            statements.push(self.parse_statement()?);
        }

        let close = match self.eat(close_curly) {
            Some(close) => close,
            None => self.recover(DiagnosticCode::SyntaxExpectedCurly, close_curly, "}")?,
        };
        Ok(self.factory.create_block(open, statements, close))
    }
}
