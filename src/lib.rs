//! Lumen front end: scanner, lexer, recursive-descent parser and
//! position-aware diagnostics for a small expression-oriented language.

pub mod ast;
pub mod diagnostics;
pub mod syntax;

pub use syntax::pipeline::{FrontendError, ParseOutcome, parse_batch, parse_source};
