//! Character-level cursor over a [`SourceFile`].
//!
//! Invariants:
//! - `position` is a byte offset into the source and always lies on a
//!   character boundary.
//! - Only `advance` and a successful `eat` move `position`.

use crate::syntax::source::SourceFile;

/// Something `Scanner::eat` can test the upcoming input against.
pub trait ScanPattern {
    /// Returns the number of bytes matched at the start of `rest`, if any.
    fn match_len(&self, rest: &str) -> Option<usize>;
}

impl ScanPattern for char {
    fn match_len(&self, rest: &str) -> Option<usize> {
        rest.starts_with(*self).then(|| self.len_utf8())
    }
}

impl ScanPattern for &str {
    fn match_len(&self, rest: &str) -> Option<usize> {
        rest.starts_with(*self).then(|| self.len())
    }
}

impl<F> ScanPattern for F
where
    F: Fn(char) -> bool,
{
    fn match_len(&self, rest: &str) -> Option<usize> {
        let ch = rest.chars().next()?;
        self(ch).then(|| ch.len_utf8())
    }
}

#[derive(Debug, Clone)]
pub struct Scanner<'src> {
    source: &'src SourceFile,
    position: usize,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src SourceFile) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    pub fn source(&self) -> &'src SourceFile {
        self.source
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn has_next(&self) -> bool {
        self.position < self.source.len()
    }

    fn rest(&self) -> &'src str {
        &self.source.contents()[self.position..]
    }

    /// Text between two offsets; never moves the cursor.
    pub fn substring(&self, start: usize, end: usize) -> &'src str {
        let contents = self.source.contents();
        let end = end.min(contents.len());
        contents.get(start.min(end)..end).unwrap_or("")
    }

    /// Consumes `pattern` if the input continues with it.
    pub fn eat(&mut self, pattern: impl ScanPattern) -> bool {
        match pattern.match_len(self.rest()) {
            Some(len) => {
                self.position += len;
                true
            }
            None => false,
        }
    }

    /// Consumes characters while `predicate` holds.
    pub fn eat_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.eat(&predicate) {}
    }

    /// Consumes one character. Returns `None` only when called at the end
    /// of input, which callers guard against with `has_next`.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.rest().chars().next()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    /// Looks `offset` characters ahead without consuming.
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.rest().chars().nth(offset)
    }
}
