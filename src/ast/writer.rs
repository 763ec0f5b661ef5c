/// String builder that indents every line it starts.
#[derive(Debug, Clone)]
pub struct SourceWriter {
    out: String,
    level: usize,
    unit: &'static str,
    at_line_start: bool,
}

impl Default for SourceWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceWriter {
    pub fn new() -> Self {
        Self::with_indent_unit("  ")
    }

    pub fn with_indent_unit(unit: &'static str) -> Self {
        Self {
            out: String::new(),
            level: 0,
            unit,
            at_line_start: true,
        }
    }

    pub fn indent(&mut self) {
        self.level += 1;
    }

    pub fn dedent(&mut self) {
        self.level = self.level.saturating_sub(1);
    }

    /// Appends `text`. Indentation is inserted before the first character
    /// of each non-empty line.
    pub fn write(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.out.push('\n');
                self.at_line_start = true;
                continue;
            }
            if self.at_line_start {
                for _ in 0..self.level {
                    self.out.push_str(self.unit);
                }
                self.at_line_start = false;
            }
            self.out.push(ch);
        }
    }

    /// Appends `text` with no indentation inside it. Used for string
    /// literal contents, where inserted spaces would change the value.
    pub fn write_verbatim(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.at_line_start {
            for _ in 0..self.level {
                self.out.push_str(self.unit);
            }
        }
        self.out.push_str(text);
        self.at_line_start = text.ends_with('\n');
    }

    pub fn writeln(&mut self, text: &str) {
        self.write(text);
        self.write("\n");
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn finish(self) -> String {
        self.out
    }
}
