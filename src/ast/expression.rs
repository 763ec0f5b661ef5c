use crate::syntax::token::Token;

use super::{
    node::AstNode,
    operator::OperatorType,
    visit::AstVisitor,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    LiteralBoolean(LiteralBoolean),
    LiteralNumber(LiteralNumber),
    LiteralString(LiteralString),
    Binary(BinaryExpression),
    Prefix(PrefixExpression),
    Postfix(PostfixExpression),
    Call(CallExpression),
    Property(PropertyExpression),
    Group(GroupExpression),
    Conditional(ConditionalExpression),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
}

impl Identifier {
    pub fn name(&self) -> &str {
        self.token.text()
    }

    /// True when the identifier was synthesised in place of missing input.
    pub fn is_error(&self) -> bool {
        self.token.error
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiteralBoolean {
    pub token: Token,
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiteralNumber {
    pub token: Token,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiteralString {
    pub token: Token,
    /// Contents without the delimiters.
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub left: Box<Expression>,
    pub operator: OperatorType,
    pub operator_token: Token,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpression {
    pub operator: OperatorType,
    pub operator_token: Token,
    pub expression: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostfixExpression {
    pub expression: Box<Expression>,
    pub operator: OperatorType,
    pub operator_token: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub receiver: Box<Expression>,
    pub arguments: Vec<Expression>,
    pub close_token: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyExpression {
    pub receiver: Box<Expression>,
    pub property: Identifier,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupExpression {
    pub open: Token,
    pub expression: Box<Expression>,
    pub close: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalExpression {
    pub if_token: Token,
    pub condition: Box<Expression>,
    pub then_expression: Box<Expression>,
    pub else_expression: Box<Expression>,
}

impl AstNode for Expression {
    fn first_token(&self) -> &Token {
        match self {
            Expression::Identifier(node) => node.first_token(),
            Expression::LiteralBoolean(node) => node.first_token(),
            Expression::LiteralNumber(node) => node.first_token(),
            Expression::LiteralString(node) => node.first_token(),
            Expression::Binary(node) => node.first_token(),
            Expression::Prefix(node) => node.first_token(),
            Expression::Postfix(node) => node.first_token(),
            Expression::Call(node) => node.first_token(),
            Expression::Property(node) => node.first_token(),
            Expression::Group(node) => node.first_token(),
            Expression::Conditional(node) => node.first_token(),
        }
    }

    fn last_token(&self) -> &Token {
        match self {
            Expression::Identifier(node) => node.last_token(),
            Expression::LiteralBoolean(node) => node.last_token(),
            Expression::LiteralNumber(node) => node.last_token(),
            Expression::LiteralString(node) => node.last_token(),
            Expression::Binary(node) => node.last_token(),
            Expression::Prefix(node) => node.last_token(),
            Expression::Postfix(node) => node.last_token(),
            Expression::Call(node) => node.last_token(),
            Expression::Property(node) => node.last_token(),
            Expression::Group(node) => node.last_token(),
            Expression::Conditional(node) => node.last_token(),
        }
    }

    fn accept<R, C, V: AstVisitor<R, C> + ?Sized>(&self, visitor: &mut V, context: &mut C) -> R {
        match self {
            Expression::Identifier(node) => visitor.visit_identifier(node, context),
            Expression::LiteralBoolean(node) => visitor.visit_literal_boolean(node, context),
            Expression::LiteralNumber(node) => visitor.visit_literal_number(node, context),
            Expression::LiteralString(node) => visitor.visit_literal_string(node, context),
            Expression::Binary(node) => visitor.visit_binary(node, context),
            Expression::Prefix(node) => visitor.visit_prefix(node, context),
            Expression::Postfix(node) => visitor.visit_postfix(node, context),
            Expression::Call(node) => visitor.visit_call(node, context),
            Expression::Property(node) => visitor.visit_property(node, context),
            Expression::Group(node) => visitor.visit_group(node, context),
            Expression::Conditional(node) => visitor.visit_conditional(node, context),
        }
    }
}

macro_rules! leaf_node {
    ($($node:ident => $visit:ident),* $(,)?) => {
        $(
            impl AstNode for $node {
                fn first_token(&self) -> &Token {
                    &self.token
                }

                fn last_token(&self) -> &Token {
                    &self.token
                }

                fn accept<R, C, V: AstVisitor<R, C> + ?Sized>(
                    &self,
                    visitor: &mut V,
                    context: &mut C,
                ) -> R {
                    visitor.$visit(self, context)
                }
            }
        )*
    };
}

leaf_node! {
    Identifier => visit_identifier,
    LiteralBoolean => visit_literal_boolean,
    LiteralNumber => visit_literal_number,
    LiteralString => visit_literal_string,
}

impl AstNode for BinaryExpression {
    fn first_token(&self) -> &Token {
        self.left.first_token()
    }

    fn last_token(&self) -> &Token {
        self.right.last_token()
    }

    fn accept<R, C, V: AstVisitor<R, C> + ?Sized>(&self, visitor: &mut V, context: &mut C) -> R {
        visitor.visit_binary(self, context)
    }
}

impl AstNode for PrefixExpression {
    fn first_token(&self) -> &Token {
        &self.operator_token
    }

    fn last_token(&self) -> &Token {
        self.expression.last_token()
    }

    fn accept<R, C, V: AstVisitor<R, C> + ?Sized>(&self, visitor: &mut V, context: &mut C) -> R {
        visitor.visit_prefix(self, context)
    }
}

impl AstNode for PostfixExpression {
    fn first_token(&self) -> &Token {
        self.expression.first_token()
    }

    fn last_token(&self) -> &Token {
        &self.operator_token
    }

    fn accept<R, C, V: AstVisitor<R, C> + ?Sized>(&self, visitor: &mut V, context: &mut C) -> R {
        visitor.visit_postfix(self, context)
    }
}

impl AstNode for CallExpression {
    fn first_token(&self) -> &Token {
        self.receiver.first_token()
    }

    fn last_token(&self) -> &Token {
        &self.close_token
    }

    fn accept<R, C, V: AstVisitor<R, C> + ?Sized>(&self, visitor: &mut V, context: &mut C) -> R {
        visitor.visit_call(self, context)
    }
}

impl AstNode for PropertyExpression {
    fn first_token(&self) -> &Token {
        self.receiver.first_token()
    }

    fn last_token(&self) -> &Token {
        self.property.last_token()
    }

    fn accept<R, C, V: AstVisitor<R, C> + ?Sized>(&self, visitor: &mut V, context: &mut C) -> R {
        visitor.visit_property(self, context)
    }
}

impl AstNode for GroupExpression {
    fn first_token(&self) -> &Token {
        &self.open
    }

    fn last_token(&self) -> &Token {
        &self.close
    }

    fn accept<R, C, V: AstVisitor<R, C> + ?Sized>(&self, visitor: &mut V, context: &mut C) -> R {
        visitor.visit_group(self, context)
    }
}

impl AstNode for ConditionalExpression {
    fn first_token(&self) -> &Token {
        &self.if_token
    }

    fn last_token(&self) -> &Token {
        self.else_expression.last_token()
    }

    fn accept<R, C, V: AstVisitor<R, C> + ?Sized>(&self, visitor: &mut V, context: &mut C) -> R {
        visitor.visit_conditional(self, context)
    }
}
