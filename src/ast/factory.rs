//! Node construction.
//!
//! The parser builds every node through an [`AstFactory`], so a caller can
//! observe or decorate construction without touching the grammar code.
//! Every method has a default that builds the plain node.

use crate::syntax::token::Token;

use super::{
    expression::{
        BinaryExpression, CallExpression, ConditionalExpression, Expression, GroupExpression,
        Identifier, LiteralBoolean, LiteralNumber, LiteralString, PostfixExpression,
        PrefixExpression, PropertyExpression,
    },
    operator::OperatorType,
    statement::{
        Declaration, FunctionDeclaration, ModuleDeclaration, ModuleRoot, Parameter,
        ParameterList, RecoveryNode, ReturnStatement, Statement, StatementBlock,
        VariableDefinition,
    },
};

pub trait AstFactory {
    fn create_identifier(&mut self, token: Token) -> Identifier {
        Identifier { token }
    }

    fn create_literal_boolean(&mut self, token: Token, value: bool) -> Expression {
        Expression::LiteralBoolean(LiteralBoolean { token, value })
    }

    fn create_literal_number(&mut self, token: Token, value: f64) -> Expression {
        Expression::LiteralNumber(LiteralNumber { token, value })
    }

    fn create_literal_string(&mut self, token: Token, value: String) -> Expression {
        Expression::LiteralString(LiteralString { token, value })
    }

    fn create_binary(
        &mut self,
        left: Expression,
        operator_token: Token,
        operator: OperatorType,
        right: Expression,
    ) -> Expression {
        Expression::Binary(BinaryExpression {
            left: Box::new(left),
            operator,
            operator_token,
            right: Box::new(right),
        })
    }

    fn create_prefix(
        &mut self,
        operator_token: Token,
        operator: OperatorType,
        expression: Expression,
    ) -> Expression {
        Expression::Prefix(PrefixExpression {
            operator,
            operator_token,
            expression: Box::new(expression),
        })
    }

    fn create_postfix(
        &mut self,
        expression: Expression,
        operator_token: Token,
        operator: OperatorType,
    ) -> Expression {
        Expression::Postfix(PostfixExpression {
            expression: Box::new(expression),
            operator,
            operator_token,
        })
    }

    fn create_call(
        &mut self,
        receiver: Expression,
        arguments: Vec<Expression>,
        close_token: Token,
    ) -> Expression {
        Expression::Call(CallExpression {
            receiver: Box::new(receiver),
            arguments,
            close_token,
        })
    }

    fn create_property(&mut self, receiver: Expression, property: Identifier) -> Expression {
        Expression::Property(PropertyExpression {
            receiver: Box::new(receiver),
            property,
        })
    }

    fn create_group(&mut self, open: Token, expression: Expression, close: Token) -> Expression {
        Expression::Group(GroupExpression {
            open,
            expression: Box::new(expression),
            close,
        })
    }

    fn create_conditional(
        &mut self,
        if_token: Token,
        condition: Expression,
        then_expression: Expression,
        else_expression: Expression,
    ) -> Expression {
        Expression::Conditional(ConditionalExpression {
            if_token,
            condition: Box::new(condition),
            then_expression: Box::new(then_expression),
            else_expression: Box::new(else_expression),
        })
    }

    fn create_return(&mut self, keyword: Token, expression: Expression) -> Statement {
        Statement::Return(ReturnStatement {
            keyword,
            expression,
        })
    }

    fn create_variable(
        &mut self,
        keyword: Token,
        name: Identifier,
        type_annotation: Option<Identifier>,
        initial_value: Option<Expression>,
    ) -> VariableDefinition {
        VariableDefinition {
            keyword,
            name,
            type_annotation,
            initial_value,
        }
    }

    fn create_recovery(&mut self, token: Token) -> Statement {
        Statement::Recovery(RecoveryNode { token })
    }

    fn create_block(
        &mut self,
        open: Token,
        statements: Vec<Statement>,
        close: Token,
    ) -> StatementBlock {
        StatementBlock {
            open,
            statements,
            close,
        }
    }

    fn create_parameter(
        &mut self,
        name: Identifier,
        type_annotation: Option<Identifier>,
        default_value: Option<Expression>,
    ) -> Parameter {
        Parameter {
            name,
            type_annotation,
            default_value,
        }
    }

    fn create_parameter_list(
        &mut self,
        open: Token,
        parameters: Vec<Parameter>,
        close: Token,
    ) -> ParameterList {
        ParameterList {
            open,
            parameters,
            close,
        }
    }

    fn create_function(
        &mut self,
        keyword: Token,
        name: Identifier,
        parameters: ParameterList,
        return_type: Option<Identifier>,
        body: Option<StatementBlock>,
    ) -> Declaration {
        Declaration::Function(FunctionDeclaration {
            keyword,
            name,
            parameters,
            return_type,
            body,
        })
    }

    fn create_module(&mut self, declarations: Vec<Declaration>, boundary: Token) -> ModuleDeclaration {
        ModuleDeclaration {
            declarations,
            boundary,
        }
    }

    fn create_module_root(
        &mut self,
        modules: Vec<ModuleDeclaration>,
        end_of_file: Token,
    ) -> ModuleRoot {
        ModuleRoot {
            modules,
            end_of_file,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultAstFactory;

impl AstFactory for DefaultAstFactory {}

impl<F: AstFactory + ?Sized> AstFactory for &mut F {
    fn create_identifier(&mut self, token: Token) -> Identifier {
        (**self).create_identifier(token)
    }

    fn create_literal_boolean(&mut self, token: Token, value: bool) -> Expression {
        (**self).create_literal_boolean(token, value)
    }

    fn create_literal_number(&mut self, token: Token, value: f64) -> Expression {
        (**self).create_literal_number(token, value)
    }

    fn create_literal_string(&mut self, token: Token, value: String) -> Expression {
        (**self).create_literal_string(token, value)
    }

    fn create_binary(
        &mut self,
        left: Expression,
        operator_token: Token,
        operator: OperatorType,
        right: Expression,
    ) -> Expression {
        (**self).create_binary(left, operator_token, operator, right)
    }

    fn create_prefix(
        &mut self,
        operator_token: Token,
        operator: OperatorType,
        expression: Expression,
    ) -> Expression {
        (**self).create_prefix(operator_token, operator, expression)
    }

    fn create_postfix(
        &mut self,
        expression: Expression,
        operator_token: Token,
        operator: OperatorType,
    ) -> Expression {
        (**self).create_postfix(expression, operator_token, operator)
    }

    fn create_call(
        &mut self,
        receiver: Expression,
        arguments: Vec<Expression>,
        close_token: Token,
    ) -> Expression {
        (**self).create_call(receiver, arguments, close_token)
    }

    fn create_property(&mut self, receiver: Expression, property: Identifier) -> Expression {
        (**self).create_property(receiver, property)
    }

    fn create_group(&mut self, open: Token, expression: Expression, close: Token) -> Expression {
        (**self).create_group(open, expression, close)
    }

    fn create_conditional(
        &mut self,
        if_token: Token,
        condition: Expression,
        then_expression: Expression,
        else_expression: Expression,
    ) -> Expression {
        (**self).create_conditional(if_token, condition, then_expression, else_expression)
    }

    fn create_return(&mut self, keyword: Token, expression: Expression) -> Statement {
        (**self).create_return(keyword, expression)
    }

    fn create_variable(
        &mut self,
        keyword: Token,
        name: Identifier,
        type_annotation: Option<Identifier>,
        initial_value: Option<Expression>,
    ) -> VariableDefinition {
        (**self).create_variable(keyword, name, type_annotation, initial_value)
    }

    fn create_recovery(&mut self, token: Token) -> Statement {
        (**self).create_recovery(token)
    }

    fn create_block(
        &mut self,
        open: Token,
        statements: Vec<Statement>,
        close: Token,
    ) -> StatementBlock {
        (**self).create_block(open, statements, close)
    }

    fn create_parameter(
        &mut self,
        name: Identifier,
        type_annotation: Option<Identifier>,
        default_value: Option<Expression>,
    ) -> Parameter {
        (**self).create_parameter(name, type_annotation, default_value)
    }

    fn create_parameter_list(
        &mut self,
        open: Token,
        parameters: Vec<Parameter>,
        close: Token,
    ) -> ParameterList {
        (**self).create_parameter_list(open, parameters, close)
    }

    fn create_function(
        &mut self,
        keyword: Token,
        name: Identifier,
        parameters: ParameterList,
        return_type: Option<Identifier>,
        body: Option<StatementBlock>,
    ) -> Declaration {
        (**self).create_function(keyword, name, parameters, return_type, body)
    }

    fn create_module(&mut self, declarations: Vec<Declaration>, boundary: Token) -> ModuleDeclaration {
        (**self).create_module(declarations, boundary)
    }

    fn create_module_root(
        &mut self,
        modules: Vec<ModuleDeclaration>,
        end_of_file: Token,
    ) -> ModuleRoot {
        (**self).create_module_root(modules, end_of_file)
    }
}
