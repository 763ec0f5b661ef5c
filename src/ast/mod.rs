//! Syntax tree produced by the parser, plus the visitors that render it.

pub mod expression;
pub mod factory;
pub mod humanize;
pub mod node;
pub mod operator;
pub mod statement;
pub mod tree;
pub mod visit;
pub mod writer;

pub use expression::{
    BinaryExpression, CallExpression, ConditionalExpression, Expression, GroupExpression,
    Identifier, LiteralBoolean, LiteralNumber, LiteralString, PostfixExpression,
    PrefixExpression, PropertyExpression,
};
pub use factory::{AstFactory, DefaultAstFactory};
pub use humanize::{Humanizer, humanize};
pub use node::AstNode;
pub use operator::OperatorType;
pub use statement::{
    Declaration, FunctionDeclaration, ModuleDeclaration, ModuleRoot, Parameter, ParameterList,
    RecoveryNode, ReturnStatement, Statement, StatementBlock, VariableDefinition,
};
pub use tree::{TreeWriter, dump_tree};
pub use visit::AstVisitor;
pub use writer::SourceWriter;
