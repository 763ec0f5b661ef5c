use super::{
    expression::{
        BinaryExpression, CallExpression, ConditionalExpression, GroupExpression, Identifier,
        LiteralBoolean, LiteralNumber, LiteralString, PostfixExpression, PrefixExpression,
        PropertyExpression,
    },
    statement::{
        FunctionDeclaration, ModuleDeclaration, ModuleRoot, Parameter, ParameterList,
        RecoveryNode, ReturnStatement, StatementBlock, VariableDefinition,
    },
};

/// Double-dispatch visitor over the syntax tree.
///
/// There is one method per concrete node kind. `R` is what each visit
/// produces and `C` is a context value threaded through the traversal.
/// Children are not visited automatically; an implementation recurses by
/// calling [`AstNode::accept`](super::AstNode::accept) on the children it
/// cares about.
pub trait AstVisitor<R, C = ()> {
    fn visit_identifier(&mut self, node: &Identifier, context: &mut C) -> R;
    fn visit_literal_boolean(&mut self, node: &LiteralBoolean, context: &mut C) -> R;
    fn visit_literal_number(&mut self, node: &LiteralNumber, context: &mut C) -> R;
    fn visit_literal_string(&mut self, node: &LiteralString, context: &mut C) -> R;
    fn visit_binary(&mut self, node: &BinaryExpression, context: &mut C) -> R;
    fn visit_prefix(&mut self, node: &PrefixExpression, context: &mut C) -> R;
    fn visit_postfix(&mut self, node: &PostfixExpression, context: &mut C) -> R;
    fn visit_call(&mut self, node: &CallExpression, context: &mut C) -> R;
    fn visit_property(&mut self, node: &PropertyExpression, context: &mut C) -> R;
    fn visit_group(&mut self, node: &GroupExpression, context: &mut C) -> R;
    fn visit_conditional(&mut self, node: &ConditionalExpression, context: &mut C) -> R;

    fn visit_return(&mut self, node: &ReturnStatement, context: &mut C) -> R;
    fn visit_variable(&mut self, node: &VariableDefinition, context: &mut C) -> R;
    fn visit_recovery(&mut self, node: &RecoveryNode, context: &mut C) -> R;
    fn visit_block(&mut self, node: &StatementBlock, context: &mut C) -> R;

    fn visit_parameter(&mut self, node: &Parameter, context: &mut C) -> R;
    fn visit_parameter_list(&mut self, node: &ParameterList, context: &mut C) -> R;
    fn visit_function(&mut self, node: &FunctionDeclaration, context: &mut C) -> R;
    fn visit_module(&mut self, node: &ModuleDeclaration, context: &mut C) -> R;
    fn visit_module_root(&mut self, node: &ModuleRoot, context: &mut C) -> R;
}
