use crate::syntax::token::Token;

use super::{
    expression::{Expression, Identifier},
    node::AstNode,
    visit::AstVisitor,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Expression(Expression),
    Return(ReturnStatement),
    Variable(VariableDefinition),
    /// Input that could not be parsed as a statement.
    Recovery(RecoveryNode),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Function(FunctionDeclaration),
    Variable(VariableDefinition),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub keyword: Token,
    pub expression: Expression,
}

/// `let name[: Type][ = value]`, both at module level and inside blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDefinition {
    pub keyword: Token,
    pub name: Identifier,
    pub type_annotation: Option<Identifier>,
    pub initial_value: Option<Expression>,
}

/// Placeholder for skipped input. Its token is error-flagged and carries no
/// source text.
#[derive(Debug, Clone, PartialEq)]
pub struct RecoveryNode {
    pub token: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatementBlock {
    pub open: Token,
    pub statements: Vec<Statement>,
    pub close: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: Identifier,
    pub type_annotation: Option<Identifier>,
    pub default_value: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterList {
    pub open: Token,
    pub parameters: Vec<Parameter>,
    pub close: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDeclaration {
    pub keyword: Token,
    pub name: Identifier,
    pub parameters: ParameterList,
    pub return_type: Option<Identifier>,
    pub body: Option<StatementBlock>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModuleDeclaration {
    pub declarations: Vec<Declaration>,
    /// Token the declaration list started at; stands in for an empty module.
    pub boundary: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModuleRoot {
    pub modules: Vec<ModuleDeclaration>,
    pub end_of_file: Token,
}

impl AstNode for Statement {
    fn first_token(&self) -> &Token {
        match self {
            Statement::Expression(node) => node.first_token(),
            Statement::Return(node) => node.first_token(),
            Statement::Variable(node) => node.first_token(),
            Statement::Recovery(node) => node.first_token(),
        }
    }

    fn last_token(&self) -> &Token {
        match self {
            Statement::Expression(node) => node.last_token(),
            Statement::Return(node) => node.last_token(),
            Statement::Variable(node) => node.last_token(),
            Statement::Recovery(node) => node.last_token(),
        }
    }

    fn accept<R, C, V: AstVisitor<R, C> + ?Sized>(&self, visitor: &mut V, context: &mut C) -> R {
        match self {
            Statement::Expression(node) => node.accept(visitor, context),
            Statement::Return(node) => visitor.visit_return(node, context),
            Statement::Variable(node) => visitor.visit_variable(node, context),
            Statement::Recovery(node) => visitor.visit_recovery(node, context),
        }
    }
}

impl AstNode for Declaration {
    fn first_token(&self) -> &Token {
        match self {
            Declaration::Function(node) => node.first_token(),
            Declaration::Variable(node) => node.first_token(),
        }
    }

    fn last_token(&self) -> &Token {
        match self {
            Declaration::Function(node) => node.last_token(),
            Declaration::Variable(node) => node.last_token(),
        }
    }

    fn accept<R, C, V: AstVisitor<R, C> + ?Sized>(&self, visitor: &mut V, context: &mut C) -> R {
        match self {
            Declaration::Function(node) => visitor.visit_function(node, context),
            Declaration::Variable(node) => visitor.visit_variable(node, context),
        }
    }
}

impl AstNode for ReturnStatement {
    fn first_token(&self) -> &Token {
        &self.keyword
    }

    fn last_token(&self) -> &Token {
        self.expression.last_token()
    }

    fn accept<R, C, V: AstVisitor<R, C> + ?Sized>(&self, visitor: &mut V, context: &mut C) -> R {
        visitor.visit_return(self, context)
    }
}

impl AstNode for VariableDefinition {
    fn first_token(&self) -> &Token {
        &self.keyword
    }

    fn last_token(&self) -> &Token {
        if let Some(value) = &self.initial_value {
            return value.last_token();
        }
        match &self.type_annotation {
            Some(type_annotation) => type_annotation.last_token(),
            None => self.name.last_token(),
        }
    }

    fn accept<R, C, V: AstVisitor<R, C> + ?Sized>(&self, visitor: &mut V, context: &mut C) -> R {
        visitor.visit_variable(self, context)
    }
}

impl AstNode for RecoveryNode {
    fn first_token(&self) -> &Token {
        &self.token
    }

    fn last_token(&self) -> &Token {
        &self.token
    }

    fn accept<R, C, V: AstVisitor<R, C> + ?Sized>(&self, visitor: &mut V, context: &mut C) -> R {
        visitor.visit_recovery(self, context)
    }
}

impl AstNode for StatementBlock {
    fn first_token(&self) -> &Token {
        &self.open
    }

    fn last_token(&self) -> &Token {
        &self.close
    }

    fn accept<R, C, V: AstVisitor<R, C> + ?Sized>(&self, visitor: &mut V, context: &mut C) -> R {
        visitor.visit_block(self, context)
    }
}

impl AstNode for Parameter {
    fn first_token(&self) -> &Token {
        self.name.first_token()
    }

    fn last_token(&self) -> &Token {
        if let Some(value) = &self.default_value {
            return value.last_token();
        }
        match &self.type_annotation {
            Some(type_annotation) => type_annotation.last_token(),
            None => self.name.last_token(),
        }
    }

    fn accept<R, C, V: AstVisitor<R, C> + ?Sized>(&self, visitor: &mut V, context: &mut C) -> R {
        visitor.visit_parameter(self, context)
    }
}

impl AstNode for ParameterList {
    fn first_token(&self) -> &Token {
        &self.open
    }

    fn last_token(&self) -> &Token {
        &self.close
    }

    fn accept<R, C, V: AstVisitor<R, C> + ?Sized>(&self, visitor: &mut V, context: &mut C) -> R {
        visitor.visit_parameter_list(self, context)
    }
}

impl AstNode for FunctionDeclaration {
    fn first_token(&self) -> &Token {
        &self.keyword
    }

    fn last_token(&self) -> &Token {
        if let Some(body) = &self.body {
            return body.last_token();
        }
        match &self.return_type {
            Some(return_type) => return_type.last_token(),
            None => self.parameters.last_token(),
        }
    }

    fn accept<R, C, V: AstVisitor<R, C> + ?Sized>(&self, visitor: &mut V, context: &mut C) -> R {
        visitor.visit_function(self, context)
    }
}

impl AstNode for ModuleDeclaration {
    fn first_token(&self) -> &Token {
        self.declarations
            .first()
            .map_or(&self.boundary, Declaration::first_token)
    }

    fn last_token(&self) -> &Token {
        self.declarations
            .last()
            .map_or(&self.boundary, Declaration::last_token)
    }

    fn accept<R, C, V: AstVisitor<R, C> + ?Sized>(&self, visitor: &mut V, context: &mut C) -> R {
        visitor.visit_module(self, context)
    }
}

impl AstNode for ModuleRoot {
    fn first_token(&self) -> &Token {
        self.modules
            .first()
            .map_or(&self.end_of_file, ModuleDeclaration::first_token)
    }

    fn last_token(&self) -> &Token {
        &self.end_of_file
    }

    fn accept<R, C, V: AstVisitor<R, C> + ?Sized>(&self, visitor: &mut V, context: &mut C) -> R {
        visitor.visit_module_root(self, context)
    }
}
