//! Renders a syntax tree back into source form.

use crate::syntax::token::ERROR_LEXEME;

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

/// Pretty-printer. Re-parsing its output yields a tree that prints the same.
#[derive(Debug, Default, Clone, Copy)]
pub struct Humanizer;

/// Renders any node with a fresh [`Humanizer`].
pub fn humanize<N: AstNode + ?Sized>(node: &N) -> String {
    let mut writer = SourceWriter::new();
    node.accept(&mut Humanizer, &mut writer);
    writer.finish()
}

impl Humanizer {
    fn separated<N: AstNode>(&mut self, nodes: &[N], separator: &str, out: &mut SourceWriter) {
        for (index, node) in nodes.iter().enumerate() {
            if index > 0 {
                out.write(separator);
            }
            node.accept(self, out);
        }
    }
}

impl AstVisitor<(), SourceWriter> for Humanizer {
    fn visit_identifier(&mut self, node: &Identifier, out: &mut SourceWriter) {
        out.write(node.name());
    }

    fn visit_literal_boolean(&mut self, node: &LiteralBoolean, out: &mut SourceWriter) {
        out.write(if node.value { "true" } else { "false" });
    }

    fn visit_literal_number(&mut self, node: &LiteralNumber, out: &mut SourceWriter) {
        out.write(&node.value.to_string());
    }

    fn visit_literal_string(&mut self, node: &LiteralString, out: &mut SourceWriter) {
        // No escapes, so pick the delimiter the contents do not use.
        let quote = if node.value.contains('\'') { "\"" } else { "'" };
        out.write(quote);
        out.write_verbatim(&node.value);
        out.write(quote);
    }

    fn visit_binary(&mut self, node: &BinaryExpression, out: &mut SourceWriter) {
        node.left.accept(self, out);
        out.write(" ");
        out.write(node.operator.lexeme());
        out.write(" ");
        node.right.accept(self, out);
    }

    fn visit_prefix(&mut self, node: &PrefixExpression, out: &mut SourceWriter) {
        let lexeme = node.operator.lexeme();
        out.write(lexeme);
        // `- -a` printed as `--a` would lex as a decrement.
        let operand = node.expression.first_token().text();
        if lexeme.chars().next().is_some_and(|ch| operand.starts_with(ch)) {
            out.write(" ");
        }
        node.expression.accept(self, out);
    }

    fn visit_postfix(&mut self, node: &PostfixExpression, out: &mut SourceWriter) {
        node.expression.accept(self, out);
        out.write(node.operator.lexeme());
    }

    fn visit_call(&mut self, node: &CallExpression, out: &mut SourceWriter) {
        node.receiver.accept(self, out);
        out.write("(");
        self.separated(&node.arguments, ", ", out);
        out.write(")");
    }

    fn visit_property(&mut self, node: &PropertyExpression, out: &mut SourceWriter) {
        node.receiver.accept(self, out);
        out.write(".");
        node.property.accept(self, out);
    }

    fn visit_group(&mut self, node: &GroupExpression, out: &mut SourceWriter) {
        out.write("(");
        node.expression.accept(self, out);
        out.write(")");
    }

    fn visit_conditional(&mut self, node: &ConditionalExpression, out: &mut SourceWriter) {
        out.write("if ");
        node.condition.accept(self, out);
        out.write(" then ");
        node.then_expression.accept(self, out);
        out.write(" else ");
        node.else_expression.accept(self, out);
    }

    fn visit_return(&mut self, node: &ReturnStatement, out: &mut SourceWriter) {
        out.write("return ");
        node.expression.accept(self, out);
    }

    fn visit_variable(&mut self, node: &VariableDefinition, out: &mut SourceWriter) {
        out.write("let ");
        node.name.accept(self, out);
        if let Some(type_annotation) = &node.type_annotation {
            out.write(": ");
            type_annotation.accept(self, out);
        }
        if let Some(value) = &node.initial_value {
            out.write(" = ");
            value.accept(self, out);
        }
    }

    fn visit_recovery(&mut self, _node: &RecoveryNode, out: &mut SourceWriter) {
        out.write(ERROR_LEXEME);
    }

    fn visit_block(&mut self, node: &StatementBlock, out: &mut SourceWriter) {
        if node.statements.is_empty() {
            out.write("{}");
            return;
        }
        out.write("{");
        out.indent();
        for statement in &node.statements {
            out.write("\n");
            statement.accept(self, out);
        }
        out.dedent();
        out.write("\n}");
    }

    fn visit_parameter(&mut self, node: &Parameter, out: &mut SourceWriter) {
        node.name.accept(self, out);
        if let Some(type_annotation) = &node.type_annotation {
            out.write(": ");
            type_annotation.accept(self, out);
        }
        if let Some(value) = &node.default_value {
            out.write(" = ");
            value.accept(self, out);
        }
    }

    fn visit_parameter_list(&mut self, node: &ParameterList, out: &mut SourceWriter) {
        out.write("(");
        self.separated(&node.parameters, ", ", out);
        out.write(")");
    }

    fn visit_function(&mut self, node: &FunctionDeclaration, out: &mut SourceWriter) {
        out.write("func ");
        node.name.accept(self, out);
        node.parameters.accept(self, out);
        if let Some(return_type) = &node.return_type {
            out.write(": ");
            return_type.accept(self, out);
        }
        if let Some(body) = &node.body {
            out.write(" -> ");
            body.accept(self, out);
        }
    }

    fn visit_module(&mut self, node: &ModuleDeclaration, out: &mut SourceWriter) {
        self.separated(&node.declarations, "\n", out);
    }

    fn visit_module_root(&mut self, node: &ModuleRoot, out: &mut SourceWriter) {
        self.separated(&node.modules, "\n", out);
    }
}
