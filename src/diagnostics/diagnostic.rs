use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::code::{DiagnosticCategory, DiagnosticCode};
use crate::syntax::source::{SourceError, SourceFile, Span};

/// A static issue found while parsing, located by byte offset and length.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    source: SourceFile,
    offset: usize,
    length: usize,
    code: DiagnosticCode,
}

/// Flat, serializable view of a [`Diagnostic`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticRecord {
    pub source: Option<String>,
    pub offset: usize,
    pub length: usize,
    pub line: usize,
    pub column: usize,
    pub code: DiagnosticCode,
    pub category: DiagnosticCategory,
}

/// A diagnostic raised as an error, which is what the fail-fast sink does.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct DiagnosticError(pub Diagnostic);

impl DiagnosticError {
    pub fn diagnostic(&self) -> &Diagnostic {
        &self.0
    }
}

impl Diagnostic {
    pub fn new(source: SourceFile, offset: usize, length: usize, code: DiagnosticCode) -> Self {
        Self {
            source,
            offset,
            length,
            code,
        }
    }

    pub fn source(&self) -> &SourceFile {
        &self.source
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn code(&self) -> DiagnosticCode {
        self.code
    }

    pub fn category(&self) -> DiagnosticCategory {
        self.code.category()
    }

    /// Source text covered by the diagnostic, clamped to the file.
    pub fn span(&self) -> Result<Span<'_>, SourceError> {
        let len = self.source.len();
        let start = self.offset.min(len);
        let mut end = self.offset.saturating_add(self.length).min(len);
        while !self.source.contents().is_char_boundary(end) {
            end -= 1;
        }
        self.source.span(start, end.max(start))
    }

    pub fn line_and_column(&self) -> (usize, usize) {
        let offset = self.offset.min(self.source.len());
        self.source
            .compute_line_and_column(offset)
            .unwrap_or((0, offset))
    }

    pub fn to_record(&self) -> DiagnosticRecord {
        let (line, column) = self.line_and_column();
        DiagnosticRecord {
            source: self.source.url().map(str::to_string),
            offset: self.offset,
            length: self.length,
            line,
            column,
            code: self.code,
            category: self.category(),
        }
    }

    /// Multi-line report with the offending source line and a caret
    /// underline. Lines and columns are shown 1-based.
    pub fn render(&self) -> String {
        let (line, column) = self.line_and_column();
        let file = self.source.url().unwrap_or("<unknown>");
        let mut out = String::new();

        out.push_str(&format!(
            "-- {}: {} [{}]\n",
            self.category(),
            self.code.title(),
            self.code.name()
        ));
        out.push_str(&format!("  --> {}:{}:{}\n", file, line + 1, column + 1));

        let line_text = source_line(&self.source, line);
        let gutter = (line + 1).to_string();
        let width = gutter.len();
        let caret_start = column.min(line_text.len());
        let caret_len = self
            .length
            .min(line_text.len().saturating_sub(caret_start))
            .max(1);

        out.push_str(&format!("{:>width$} |\n", ""));
        out.push_str(&format!("{gutter} | {line_text}\n"));
        out.push_str(&format!(
            "{:>width$} | {}{}",
            "",
            " ".repeat(caret_start),
            "^".repeat(caret_len)
        ));
        out
    }
}

/// Text of `line` without its terminator.
fn source_line(source: &SourceFile, line: usize) -> &str {
    let starts = source.line_starts();
    let contents = source.contents();
    let start = if line == 0 { 0 } else { starts[line - 1] };
    let end = starts.get(line).copied().unwrap_or(contents.len());
    contents[start..end].trim_end_matches(['\n', '\r'])
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.category().as_str().to_uppercase();
        match self.span() {
            Ok(span) => write!(f, "[{label}] {span}: ({})", self.code),
            Err(_) => write!(f, "[{label}] offset {}: ({})", self.offset, self.code),
        }
    }
}

/// Renders every diagnostic, separated by blank lines.
pub fn render_diagnostics(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(Diagnostic::render)
        .collect::<Vec<_>>()
        .join("\n\n")
}
