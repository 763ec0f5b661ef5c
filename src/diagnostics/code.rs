//! Closed set of diagnostic codes.

use std::fmt;

use serde::Serialize;

/// Severity class of a diagnostic, which also fixes its compatibility policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticCategory {
    /// Prohibits compilation. Adding or removing an error is a breaking change.
    Error,
    /// Compiles, but likely wrong. Not a breaking change to add or remove.
    Warning,
    /// Usually-undesired code, such as unused elements.
    Hint,
    /// Style and idiom suggestions.
    Tip,
}

impl DiagnosticCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            DiagnosticCategory::Error => "error",
            DiagnosticCategory::Warning => "warning",
            DiagnosticCategory::Hint => "hint",
            DiagnosticCategory::Tip => "tip",
        }
    }
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! define_codes {
    ($($variant:ident => ($name:literal, $category:ident, $title:literal)),* $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum DiagnosticCode {
            $(
                #[serde(rename = $name)]
                $variant,
            )*
        }

        impl DiagnosticCode {
            pub const ALL: &'static [DiagnosticCode] = &[$(DiagnosticCode::$variant,)*];

            /// Stable upper-case name, e.g. `SYNTAX_EXPECTED_THEN`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(DiagnosticCode::$variant => $name,)*
                }
            }

            pub const fn category(self) -> DiagnosticCategory {
                match self {
                    $(DiagnosticCode::$variant => DiagnosticCategory::$category,)*
                }
            }

            /// Short human-readable description.
            pub const fn title(self) -> &'static str {
                match self {
                    $(DiagnosticCode::$variant => $title,)*
                }
            }
        }
    };
}

define_codes! {
    SyntaxEndOfFile           => ("SYNTAX_END_OF_FILE", Error, "unexpected end of file"),
    SyntaxExpectedIdentifier  => ("SYNTAX_EXPECTED_IDENTIFIER", Error, "expected an identifier"),
    SyntaxInvalidOperator     => ("SYNTAX_INVALID_OPERATOR", Error, "invalid operator"),
    SyntaxUnexpectedToken     => ("SYNTAX_UNEXPECTED_TOKEN", Error, "unexpected token"),
    SyntaxExpectedComma       => ("SYNTAX_EXPECTED_COMMA", Error, "expected `,`"),
    SyntaxExpectedElse        => ("SYNTAX_EXPECTED_ELSE", Error, "expected `else`"),
    SyntaxExpectedThen        => ("SYNTAX_EXPECTED_THEN", Error, "expected `then`"),
    SyntaxExpectedParentheses => ("SYNTAX_EXPECTED_PARENTHESES", Error, "expected parentheses"),
    SyntaxExpectedCurly       => ("SYNTAX_EXPECTED_CURLY", Error, "expected curly braces"),
    SyntaxExpectedDeclaration => ("SYNTAX_EXPECTED_DECLARATION", Error, "expected a declaration"),
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
