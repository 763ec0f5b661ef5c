use lumen::{
    FrontendError, parse_batch, parse_source,
    ast::humanize,
    diagnostics::{Collector, DiagnosticCode, FailFast},
    syntax::{LexError, ParseError, SourceFile},
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_source_parses() {
        let source = SourceFile::named("let a = 1\nfunc f() -> {\n  return a\n}", "ok.lm");
        let root = parse_source(&source, FailFast).unwrap();
        assert_eq!(humanize(&root), source.contents());
    }

    #[test]
    fn fail_fast_stops_at_the_first_problem() {
        let source = SourceFile::named("let a = f(1 2 3)", "bad.lm");
        let err = parse_source(&source, FailFast).unwrap_err();
        let FrontendError::Parse(ParseError::Reported(error)) = err else {
            panic!("expected a reported diagnostic");
        };
        assert_eq!(error.diagnostic().code(), DiagnosticCode::SyntaxExpectedComma);
        assert_eq!(error.diagnostic().offset(), 12);
    }

    #[test]
    fn collector_sees_every_problem() {
        let source = SourceFile::named("let a = f(1 2 3)", "bad.lm");
        let mut collector = Collector::new();
        let root = parse_source(&source, &mut collector).unwrap();
        assert_eq!(humanize(&root), "let a = f(1, 2, 3)");
        let offsets: Vec<_> = collector.diagnostics().iter().map(|d| d.offset()).collect();
        assert_eq!(offsets, [12, 14]);
    }

    #[test]
    fn lexer_errors_come_first() {
        let source = SourceFile::new("let s = 'open", None);
        let err = parse_source(&source, Collector::new()).unwrap_err();
        assert!(matches!(
            err,
            FrontendError::Lex(LexError::UnterminatedString { offset: 8 })
        ));
    }

    #[test]
    fn batch_keeps_input_order() {
        let sources = vec![
            SourceFile::named("let a", "a.lm"),
            SourceFile::named("func b(", "b.lm"),
            SourceFile::named("let c = 3.1.4", "c.lm"),
            SourceFile::named("func d(x y) -> {}", "d.lm"),
        ];
        let outcomes = parse_batch(&sources);
        let names: Vec<_> = outcomes.iter().map(|o| o.source.url()).collect();
        assert_eq!(names, [Some("a.lm"), Some("b.lm"), Some("c.lm"), Some("d.lm")]);

        assert!(outcomes[0].is_clean());

        // `func b(` recovers the `)` before running out of input.
        assert!(outcomes[1].result.is_ok());
        assert_eq!(
            outcomes[1]
                .diagnostics
                .iter()
                .map(|d| d.code())
                .collect::<Vec<_>>(),
            [DiagnosticCode::SyntaxExpectedParentheses]
        );

        assert!(matches!(outcomes[2].result, Err(FrontendError::Lex(_))));
        assert!(outcomes[2].diagnostics.is_empty());

        assert!(outcomes[3].result.is_ok());
        assert_eq!(
            outcomes[3].diagnostics[0].code(),
            DiagnosticCode::SyntaxExpectedComma
        );
    }

    #[test]
    fn empty_batch() {
        assert!(parse_batch(&[]).is_empty());
    }
}
