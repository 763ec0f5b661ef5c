pub mod code;
pub mod diagnostic;
pub mod reporter;

pub use code::{DiagnosticCategory, DiagnosticCode};
pub use diagnostic::{Diagnostic, DiagnosticError, DiagnosticRecord, render_diagnostics};
pub use reporter::{Collector, DiagnosticReporter, DiagnosticSink, FailFast, Ignore};
