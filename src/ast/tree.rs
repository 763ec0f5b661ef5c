//! Indented dump of a syntax tree, one node kind per line.
//!
//! ```text
//! BinaryExpression
//!   operator: Addition
//!   left:
//!     Identifier
//!       name: a
//!   right:
//!     Identifier
//!       name: b
//! ```

use std::fmt::Display;

use super::{
    expression::{
        BinaryExpression, CallExpression, ConditionalExpression, GroupExpression, Identifier,
        LiteralBoolean, LiteralNumber, LiteralString, PostfixExpression, PrefixExpression,
        PropertyExpression,
    },
    node::AstNode,
    statement::{
        FunctionDeclaration, ModuleDeclaration, ModuleRoot, Parameter, ParameterList,
        RecoveryNode, ReturnStatement, StatementBlock, VariableDefinition,
    },
    visit::AstVisitor,
    writer::SourceWriter,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct TreeWriter;

pub fn dump_tree<N: AstNode + ?Sized>(node: &N) -> String {
    let mut writer = SourceWriter::new();
    node.accept(&mut TreeWriter, &mut writer);
    writer.finish()
}

impl TreeWriter {
    fn open(&mut self, kind: &str, out: &mut SourceWriter) {
        out.writeln(kind);
        out.indent();
    }

    fn close(&mut self, out: &mut SourceWriter) {
        out.dedent();
    }

    fn field(&mut self, name: &str, value: impl Display, out: &mut SourceWriter) {
        out.writeln(&format!("{name}: {value}"));
    }

    fn child<N: AstNode + ?Sized>(&mut self, name: &str, node: &N, out: &mut SourceWriter) {
        out.writeln(&format!("{name}:"));
        out.indent();
        node.accept(self, out);
        out.dedent();
    }

    fn optional<N: AstNode>(&mut self, name: &str, node: Option<&N>, out: &mut SourceWriter) {
        if let Some(node) = node {
            self.child(name, node, out);
        }
    }

    fn children<N: AstNode>(&mut self, name: &str, nodes: &[N], out: &mut SourceWriter) {
        if nodes.is_empty() {
            out.writeln(&format!("{name}: []"));
            return;
        }
        out.writeln(&format!("{name}:"));
        out.indent();
        for node in nodes {
            node.accept(self, out);
        }
        out.dedent();
    }
}

impl AstVisitor<(), SourceWriter> for TreeWriter {
    fn visit_identifier(&mut self, node: &Identifier, out: &mut SourceWriter) {
        self.open("Identifier", out);
        self.field("name", node.name(), out);
        if node.is_error() {
            self.field("error", true, out);
        }
        self.close(out);
    }

    fn visit_literal_boolean(&mut self, node: &LiteralBoolean, out: &mut SourceWriter) {
        self.open("LiteralBoolean", out);
        self.field("value", node.value, out);
        self.close(out);
    }

    fn visit_literal_number(&mut self, node: &LiteralNumber, out: &mut SourceWriter) {
        self.open("LiteralNumber", out);
        self.field("value", node.value, out);
        self.close(out);
    }

    fn visit_literal_string(&mut self, node: &LiteralString, out: &mut SourceWriter) {
        self.open("LiteralString", out);
        self.field("value", format_args!("{:?}", node.value), out);
        self.close(out);
    }

    fn visit_binary(&mut self, node: &BinaryExpression, out: &mut SourceWriter) {
        self.open("BinaryExpression", out);
        self.field("operator", format_args!("{:?}", node.operator), out);
        self.child("left", node.left.as_ref(), out);
        self.child("right", node.right.as_ref(), out);
        self.close(out);
    }

    fn visit_prefix(&mut self, node: &PrefixExpression, out: &mut SourceWriter) {
        self.open("PrefixExpression", out);
        self.field("operator", format_args!("{:?}", node.operator), out);
        self.child("expression", node.expression.as_ref(), out);
        self.close(out);
    }

    fn visit_postfix(&mut self, node: &PostfixExpression, out: &mut SourceWriter) {
        self.open("PostfixExpression", out);
        self.field("operator", format_args!("{:?}", node.operator), out);
        self.child("expression", node.expression.as_ref(), out);
        self.close(out);
    }

    fn visit_call(&mut self, node: &CallExpression, out: &mut SourceWriter) {
        self.open("CallExpression", out);
        self.child("receiver", node.receiver.as_ref(), out);
        self.children("arguments", &node.arguments, out);
        self.close(out);
    }

    fn visit_property(&mut self, node: &PropertyExpression, out: &mut SourceWriter) {
        self.open("PropertyExpression", out);
        self.child("receiver", node.receiver.as_ref(), out);
        self.child("property", &node.property, out);
        self.close(out);
    }

    fn visit_group(&mut self, node: &GroupExpression, out: &mut SourceWriter) {
        self.open("GroupExpression", out);
        self.child("expression", node.expression.as_ref(), out);
        self.close(out);
    }

    fn visit_conditional(&mut self, node: &ConditionalExpression, out: &mut SourceWriter) {
        self.open("ConditionalExpression", out);
        self.child("condition", node.condition.as_ref(), out);
        self.child("then", node.then_expression.as_ref(), out);
        self.child("else", node.else_expression.as_ref(), out);
        self.close(out);
    }

    fn visit_return(&mut self, node: &ReturnStatement, out: &mut SourceWriter) {
        self.open("ReturnStatement", out);
        self.child("expression", &node.expression, out);
        self.close(out);
    }

    fn visit_variable(&mut self, node: &VariableDefinition, out: &mut SourceWriter) {
        self.open("VariableDefinition", out);
        self.child("name", &node.name, out);
        self.optional("type", node.type_annotation.as_ref(), out);
        self.optional("value", node.initial_value.as_ref(), out);
        self.close(out);
    }

    fn visit_recovery(&mut self, node: &RecoveryNode, out: &mut SourceWriter) {
        self.open("RecoveryNode", out);
        self.field("offset", node.token.offset, out);
        self.close(out);
    }

    fn visit_block(&mut self, node: &StatementBlock, out: &mut SourceWriter) {
        self.open("StatementBlock", out);
        self.children("statements", &node.statements, out);
        self.close(out);
    }

    fn visit_parameter(&mut self, node: &Parameter, out: &mut SourceWriter) {
        self.open("Parameter", out);
        self.child("name", &node.name, out);
        self.optional("type", node.type_annotation.as_ref(), out);
        self.optional("default", node.default_value.as_ref(), out);
        self.close(out);
    }

    fn visit_parameter_list(&mut self, node: &ParameterList, out: &mut SourceWriter) {
        self.open("ParameterList", out);
        self.children("parameters", &node.parameters, out);
        self.close(out);
    }

    fn visit_function(&mut self, node: &FunctionDeclaration, out: &mut SourceWriter) {
        self.open("FunctionDeclaration", out);
        self.child("name", &node.name, out);
        self.child("parameters", &node.parameters, out);
        self.optional("returns", node.return_type.as_ref(), out);
        self.optional("body", node.body.as_ref(), out);
        self.close(out);
    }

    fn visit_module(&mut self, node: &ModuleDeclaration, out: &mut SourceWriter) {
        self.open("ModuleDeclaration", out);
        self.children("declarations", &node.declarations, out);
        self.close(out);
    }

    fn visit_module_root(&mut self, node: &ModuleRoot, out: &mut SourceWriter) {
        self.open("ModuleRoot", out);
        self.children("modules", &node.modules, out);
        self.close(out);
    }
}
