use std::{fmt, ops::Deref, ops::Range, sync::Arc};

use serde::{Serialize, Serializer};

/// Text of a token.
///
/// Scanned text is a byte range into the file's shared buffer, so cloning a
/// token never copies characters.
#[derive(Clone)]
pub enum Lexeme {
    /// Fixed spellings: operators, brackets, synthetic placeholders.
    Static(&'static str),
    Source { text: Arc<str>, range: Range<usize> },
}

impl Lexeme {
    /// `range` must lie on char boundaries of `text`; the lexer only cuts
    /// between scanned characters.
    pub fn from_source(text: Arc<str>, range: Range<usize>) -> Self {
        debug_assert!(text.get(range.clone()).is_some(), "bad lexeme range {range:?}");
        Lexeme::Source { text, range }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Lexeme::Static(text) => text,
            Lexeme::Source { text, range } => text.get(range.clone()).unwrap_or_default(),
        }
    }
}

impl Deref for Lexeme {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq for Lexeme {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Lexeme {}

impl PartialEq<&str> for Lexeme {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Debug for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Lexeme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl From<&'static str> for Lexeme {
    fn from(text: &'static str) -> Self {
        Lexeme::Static(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_lexeme_reads_its_range() {
        let text: Arc<str> = Arc::from("let name = 1");
        let lexeme = Lexeme::from_source(Arc::clone(&text), 4..8);
        assert_eq!(lexeme.as_str(), "name");
        assert_eq!(lexeme.len(), 4);
        assert_eq!(lexeme, Lexeme::Static("name"));
    }

    #[test]
    fn serializes_as_plain_text() {
        let json = serde_json::to_string(&Lexeme::Static("->")).unwrap();
        assert_eq!(json, "\"->\"");
    }
}
