//! Routing of diagnostics raised by the parser.
//!
//! The parser never decides what happens to a diagnostic: it hands each one
//! to a [`DiagnosticReporter`], whose [`DiagnosticSink`] either stores it,
//! drops it, or turns it into an error that aborts the parse.

use tracing::debug;

use super::{
    code::DiagnosticCode,
    diagnostic::{Diagnostic, DiagnosticError},
};
use crate::{ast::AstNode, syntax::source::SourceFile, syntax::token::Token};

pub trait DiagnosticSink {
    /// Returning an error stops the parse that reported the diagnostic.
    fn accept(&mut self, diagnostic: Diagnostic) -> Result<(), DiagnosticError>;
}

/// Raises the first diagnostic as an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailFast;

impl DiagnosticSink for FailFast {
    fn accept(&mut self, diagnostic: Diagnostic) -> Result<(), DiagnosticError> {
        Err(DiagnosticError(diagnostic))
    }
}

/// Keeps every diagnostic in report order.
#[derive(Debug, Default, Clone)]
pub struct Collector {
    diagnostics: Vec<Diagnostic>,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }
}

impl DiagnosticSink for Collector {
    fn accept(&mut self, diagnostic: Diagnostic) -> Result<(), DiagnosticError> {
        self.diagnostics.push(diagnostic);
        Ok(())
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ignore;

impl DiagnosticSink for Ignore {
    fn accept(&mut self, _diagnostic: Diagnostic) -> Result<(), DiagnosticError> {
        Ok(())
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn accept(&mut self, diagnostic: Diagnostic) -> Result<(), DiagnosticError> {
        (**self).accept(diagnostic)
    }
}

/// Builds diagnostics against one source file and forwards them to a sink.
#[derive(Debug)]
pub struct DiagnosticReporter<S: DiagnosticSink = FailFast> {
    source: SourceFile,
    sink: S,
}

impl DiagnosticReporter<FailFast> {
    pub fn fail_fast(source: SourceFile) -> Self {
        Self::new(source, FailFast)
    }
}

impl<S: DiagnosticSink> DiagnosticReporter<S> {
    pub fn new(source: SourceFile, sink: S) -> Self {
        Self { source, sink }
    }

    pub fn source(&self) -> &SourceFile {
        &self.source
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn report_offset(
        &mut self,
        offset: usize,
        length: usize,
        code: DiagnosticCode,
    ) -> Result<(), DiagnosticError> {
        debug!(code = code.name(), offset, length, "diagnostic reported");
        let diagnostic = Diagnostic::new(self.source.clone(), offset, length, code);
        self.sink.accept(diagnostic)
    }

    /// Reports at a token, covering its lexeme.
    pub fn report_token(&mut self, token: &Token, code: DiagnosticCode) -> Result<(), DiagnosticError> {
        self.report_offset(token.offset, token.len(), code)
    }

    /// Reports over a node, from its first token to the end of its last.
    pub fn report_node<N: AstNode + ?Sized>(
        &mut self,
        node: &N,
        code: DiagnosticCode,
    ) -> Result<(), DiagnosticError> {
        let start = node.first_token().offset;
        let end = node.last_token().end().max(start);
        self.report_offset(start, end - start, code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::token_type::TokenType;

    #[test]
    fn fail_fast_raises_first_report() {
        let mut reporter = DiagnosticReporter::fail_fast(SourceFile::named("abc", "t.lm"));
        let err = reporter
            .report_offset(1, 1, DiagnosticCode::SyntaxExpectedComma)
            .unwrap_err();
        assert_eq!(err.diagnostic().code(), DiagnosticCode::SyntaxExpectedComma);
        assert_eq!(err.diagnostic().offset(), 1);
    }

    #[test]
    fn collector_keeps_report_order() {
        let mut reporter = DiagnosticReporter::new(SourceFile::new("a b", None), Collector::new());
        let a = Token::new(0, TokenType::Identifier, "a");
        let b = Token::new(2, TokenType::Identifier, "b");
        reporter.report_token(&b, DiagnosticCode::SyntaxExpectedThen).unwrap();
        reporter.report_token(&a, DiagnosticCode::SyntaxExpectedElse).unwrap();

        let codes: Vec<_> = reporter.sink().diagnostics().iter().map(|d| d.code()).collect();
        assert_eq!(
            codes,
            [DiagnosticCode::SyntaxExpectedThen, DiagnosticCode::SyntaxExpectedElse]
        );
    }

    #[test]
    fn borrowed_sink_outlives_reporter() {
        let mut collector = Collector::new();
        {
            let mut reporter = DiagnosticReporter::new(SourceFile::new("x", None), &mut collector);
            reporter.report_offset(0, 1, DiagnosticCode::SyntaxUnexpectedToken).unwrap();
        }
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn ignore_drops_everything() {
        let mut reporter = DiagnosticReporter::new(SourceFile::new("x", None), Ignore);
        assert!(reporter.report_offset(0, 1, DiagnosticCode::SyntaxEndOfFile).is_ok());
    }
}
