use lumen::{
    ast::{Declaration, Expression, Statement, humanize},
    diagnostics::{Collector, DiagnosticCode, DiagnosticReporter},
    syntax::{Bracket, ParseError, Parser, SourceFile, TokenType, tokenize},
};

#[cfg(test)]
mod tests {
    use super::*;

    fn collecting(input: &str) -> Parser<Collector> {
        let source = SourceFile::named(input, "recovery.lm");
        let tokens = tokenize(&source).unwrap();
        Parser::new(tokens, DiagnosticReporter::new(source, Collector::new()))
    }

    fn reported(parser: Parser<Collector>) -> Vec<(DiagnosticCode, usize)> {
        parser
            .into_sink()
            .diagnostics()
            .iter()
            .map(|diagnostic| (diagnostic.code(), diagnostic.offset()))
            .collect()
    }

    #[test]
    fn missing_then_is_reported_and_skipped() {
        let mut parser = collecting("if a b else c");
        let expression = parser.parse_expression().unwrap();
        assert_eq!(humanize(&expression), "if a then b else c");
        assert_eq!(reported(parser), [(DiagnosticCode::SyntaxExpectedThen, 5)]);
    }

    #[test]
    fn missing_else_is_reported_and_skipped() {
        let mut parser = collecting("if a then b c");
        let expression = parser.parse_expression().unwrap();
        assert!(matches!(expression, Expression::Conditional(_)));
        assert_eq!(reported(parser), [(DiagnosticCode::SyntaxExpectedElse, 12)]);
    }

    #[test]
    fn missing_else_branch_at_end_of_input_is_fatal() {
        let mut parser = collecting("if a then b");
        let err = parser.parse_expression().unwrap_err();
        assert!(matches!(err, ParseError::EndOfFile(_)));
        assert_eq!(err.diagnostic().offset(), 11);
        assert_eq!(reported(parser), [(DiagnosticCode::SyntaxExpectedElse, 11)]);
    }

    #[test]
    fn function_without_parameters_recovers_both_parentheses() {
        let mut parser = collecting("func x");
        let root = parser.parse_module_root().unwrap();
        assert_eq!(humanize(&root), "func x()");

        let Declaration::Function(function) = &root.modules[0].declarations[0] else {
            panic!("expected function");
        };
        assert!(function.parameters.open.error);
        assert!(function.parameters.close.error);
        assert_eq!(function.parameters.close.text(), ")");
        assert_eq!(
            function.parameters.open.token_type,
            TokenType::Pair(Bracket::OpenParen)
        );
        assert_eq!(function.parameters.close.end(), function.parameters.close.offset);

        assert_eq!(
            reported(parser),
            [
                (DiagnosticCode::SyntaxExpectedParentheses, 6),
                (DiagnosticCode::SyntaxExpectedParentheses, 6),
            ]
        );
    }

    #[test]
    fn unclosed_block() {
        let mut parser = collecting("func f() -> {\n  return 1\n");
        let root = parser.parse_module_root().unwrap();
        assert_eq!(humanize(&root), "func f() -> {\n  return 1\n}");

        let Declaration::Function(function) = &root.modules[0].declarations[0] else {
            panic!("expected function");
        };
        let body = function.body.as_ref().unwrap();
        assert!(body.close.error);
        assert_eq!(body.close.text(), "}");
        assert_eq!(reported(parser), [(DiagnosticCode::SyntaxExpectedCurly, 25)]);
    }

    #[test]
    fn missing_comma_between_arguments() {
        let mut parser = collecting("f(a b)");
        let expression = parser.parse_expression().unwrap();
        assert_eq!(humanize(&expression), "f(a, b)");
        assert_eq!(reported(parser), [(DiagnosticCode::SyntaxExpectedComma, 4)]);
    }

    #[test]
    fn missing_comma_between_parameters() {
        let mut parser = collecting("func f(a: A b: B)");
        let root = parser.parse_module_root().unwrap();
        assert_eq!(humanize(&root), "func f(a: A, b: B)");
        assert_eq!(reported(parser), [(DiagnosticCode::SyntaxExpectedComma, 12)]);
    }

    #[test]
    fn trailing_comma_is_accepted() {
        let mut parser = collecting("f(a, b,)");
        let expression = parser.parse_expression().unwrap();
        assert_eq!(humanize(&expression), "f(a, b)");
        assert!(reported(parser).is_empty());
    }

    #[test]
    fn unclosed_group() {
        let mut parser = collecting("(a + b");
        let expression = parser.parse_expression().unwrap();
        assert_eq!(humanize(&expression), "(a + b)");
        assert_eq!(
            reported(parser),
            [(DiagnosticCode::SyntaxExpectedParentheses, 6)]
        );
    }

    #[test]
    fn non_identifier_property_is_replaced() {
        let mut parser = collecting("a.1");
        let Expression::Property(property) = parser.parse_expression().unwrap() else {
            panic!("expected property access");
        };
        assert!(property.property.is_error());
        assert_eq!(property.property.name(), lumen::syntax::token::ERROR_LEXEME);
        assert_eq!(
            reported(parser),
            [(DiagnosticCode::SyntaxExpectedIdentifier, 2)]
        );
    }

    #[test]
    fn stray_closer_inside_a_block() {
        let mut parser = collecting("func f() -> {\n  ) return 1\n}");
        let root = parser.parse_module_root().unwrap();
        let Declaration::Function(function) = &root.modules[0].declarations[0] else {
            panic!("expected function");
        };
        let statements = &function.body.as_ref().unwrap().statements;
        assert!(matches!(statements[0], Statement::Recovery(_)));
        assert!(matches!(statements[1], Statement::Return(_)));
        assert_eq!(reported(parser), [(DiagnosticCode::SyntaxUnexpectedToken, 16)]);
    }

    #[test]
    fn running_out_of_tokens_is_fatal() {
        for input in ["let x =", "let x = a.", "let x = if a then", "let x = -"] {
            let mut parser = collecting(input);
            let err = parser.parse_module_root().unwrap_err();
            assert_eq!(
                err.diagnostic().code(),
                DiagnosticCode::SyntaxEndOfFile,
                "{input:?}"
            );
            assert_eq!(err.diagnostic().offset(), input.len());
            assert_eq!(err.diagnostic().length(), 0);
        }
    }
}
