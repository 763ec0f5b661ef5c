//! Scan → lex → parse in one call.

use rayon::prelude::*;
use thiserror::Error;
use tracing::debug;

use crate::{
    ast::ModuleRoot,
    diagnostics::{Collector, Diagnostic, DiagnosticReporter, DiagnosticSink},
    syntax::{
        lexer::{LexError, tokenize},
        parser::{ParseError, Parser},
        source::SourceFile,
    },
};

#[derive(Debug, Clone, Error)]
pub enum FrontendError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Parses `source` as a module, sending diagnostics to `sink`.
pub fn parse_source<S: DiagnosticSink>(
    source: &SourceFile,
    sink: S,
) -> Result<ModuleRoot, FrontendError> {
    let tokens = tokenize(source)?;
    let reporter = DiagnosticReporter::new(source.clone(), sink);
    let mut parser = Parser::new(tokens, reporter);
    Ok(parser.parse_module_root()?)
}

/// Result of parsing one file with a collecting sink.
#[derive(Debug)]
pub struct ParseOutcome {
    pub source: SourceFile,
    pub result: Result<ModuleRoot, FrontendError>,
    /// Recoverable diagnostics, in report order.
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutcome {
    pub fn is_clean(&self) -> bool {
        self.result.is_ok() && self.diagnostics.is_empty()
    }
}

/// Parses independent files in parallel, collecting every diagnostic.
/// Outcomes are returned in input order.
pub fn parse_batch(sources: &[SourceFile]) -> Vec<ParseOutcome> {
    debug!(files = sources.len(), "parsing batch");
    sources
        .par_iter()
        .map(|source| {
            let mut collector = Collector::new();
            let result = parse_source(source, &mut collector);
            ParseOutcome {
                source: source.clone(),
                result,
                diagnostics: collector.into_diagnostics(),
            }
        })
        .collect()
}
