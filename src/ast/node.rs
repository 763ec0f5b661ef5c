use crate::syntax::{
    source::{SourceError, SourceFile, Span},
    token::Token,
};

use super::visit::AstVisitor;

/// Behaviour shared by every syntax tree node.
///
/// A node's source range is never stored; it is recovered from the first
/// and last tokens the node holds, directly or through its children.
pub trait AstNode {
    fn first_token(&self) -> &Token;

    fn last_token(&self) -> &Token;

    fn accept<R, C, V: AstVisitor<R, C> + ?Sized>(&self, visitor: &mut V, context: &mut C) -> R;

    /// Source text from the first token up to the end of the last one.
    /// Synthesised tokens contribute no text.
    fn span<'src>(&self, source: &'src SourceFile) -> Result<Span<'src>, SourceError> {
        let start = self.first_token().offset;
        let end = self.last_token().end().max(start);
        source.span(start, end)
    }
}
