//! Source text ownership and offset → line/column mapping.
//!
//! Offsets are byte offsets into the UTF-8 contents. Lines and columns are
//! 0-based; a column counts bytes from the start of its line.

use std::{
    cell::OnceCell,
    fmt,
    sync::{Arc, OnceLock},
};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("offset {offset} is out of range for source of length {length}")]
    OffsetOutOfRange { offset: usize, length: usize },
    #[error("span start {start} is after end {end}")]
    InvertedRange { start: usize, end: usize },
    #[error("offset {offset} is not on a character boundary")]
    NotCharBoundary { offset: usize },
}

#[derive(Debug)]
struct SourceFileInner {
    contents: Arc<str>,
    url: Option<String>,
    line_starts: OnceLock<Vec<usize>>,
}

/// Immutable source text plus an optional origin label.
///
/// Cloning is cheap; clones share the text and the cached line table.
#[derive(Debug, Clone)]
pub struct SourceFile {
    inner: Arc<SourceFileInner>,
}

impl SourceFile {
    pub fn new(contents: impl Into<String>, url: Option<String>) -> Self {
        let contents: String = contents.into();
        Self {
            inner: Arc::new(SourceFileInner {
                contents: Arc::from(contents),
                url,
                line_starts: OnceLock::new(),
            }),
        }
    }

    pub fn named(contents: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(contents, Some(url.into()))
    }

    pub fn contents(&self) -> &str {
        &self.inner.contents
    }

    /// Shared handle on the contents, used by lexemes that point into them.
    pub fn contents_arc(&self) -> Arc<str> {
        Arc::clone(&self.inner.contents)
    }

    pub fn url(&self) -> Option<&str> {
        self.inner.url.as_deref()
    }

    pub fn len(&self) -> usize {
        self.inner.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.contents.is_empty()
    }

    /// Offsets of the first byte after every line break, ascending.
    ///
    /// `\n`, `\r\n` and a lone `\r` each count as exactly one break. A trailing
    /// break yields a final entry equal to `len()`.
    pub fn line_starts(&self) -> &[usize] {
        self.inner
            .line_starts
            .get_or_init(|| compute_line_starts(&self.inner.contents))
    }

    fn check_offset(&self, offset: usize) -> Result<(), SourceError> {
        if offset > self.len() {
            return Err(SourceError::OffsetOutOfRange {
                offset,
                length: self.len(),
            });
        }
        Ok(())
    }

    /// Returns `(line, column)` for `offset`; `offset == len()` is valid.
    pub fn compute_line_and_column(&self, offset: usize) -> Result<(usize, usize), SourceError> {
        self.check_offset(offset)?;
        let starts = self.line_starts();
        let line = starts.partition_point(|&start| start <= offset);
        let line_start = if line == 0 { 0 } else { starts[line - 1] };
        Ok((line, offset - line_start))
    }

    pub fn span(&self, start: usize, end: usize) -> Result<Span<'_>, SourceError> {
        self.check_offset(start)?;
        self.check_offset(end)?;
        if start > end {
            return Err(SourceError::InvertedRange { start, end });
        }
        let text = self
            .contents()
            .get(start..end)
            .ok_or_else(|| SourceError::NotCharBoundary {
                offset: if self.contents().is_char_boundary(start) {
                    end
                } else {
                    start
                },
            })?;
        Ok(Span {
            file: self,
            offset: start,
            text,
            line_and_column: OnceCell::new(),
        })
    }
}

fn compute_line_starts(contents: &str) -> Vec<usize> {
    let bytes = contents.as_bytes();
    let mut starts = Vec::new();

    for (i, &byte) in bytes.iter().enumerate() {
        match byte {
            b'\n' => starts.push(i + 1),
            b'\r' if bytes.get(i + 1) != Some(&b'\n') => starts.push(i + 1),
            _ => {}
        }
    }

    starts
}

/// A fragment of a [`SourceFile`]; line and column are computed on first use.
#[derive(Clone)]
pub struct Span<'src> {
    file: &'src SourceFile,
    offset: usize,
    text: &'src str,
    line_and_column: OnceCell<(usize, usize)>,
}

impl<'src> Span<'src> {
    pub fn file(&self) -> &'src SourceFile {
        self.file
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn text(&self) -> &'src str {
        self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn line_and_column(&self) -> (usize, usize) {
        *self.line_and_column.get_or_init(|| {
            // The offset was validated when the span was created.
            self.file
                .compute_line_and_column(self.offset)
                .unwrap_or((0, self.offset))
        })
    }

    pub fn line(&self) -> usize {
        self.line_and_column().0
    }

    pub fn column(&self) -> usize {
        self.line_and_column().1
    }
}

impl fmt::Debug for Span<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Span")
            .field("offset", &self.offset)
            .field("text", &self.text)
            .finish()
    }
}

impl fmt::Display for Span<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{} {:?}",
            self.file.url().unwrap_or("<unknown>"),
            self.line(),
            self.column(),
            self.text
        )
    }
}
