use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Kind of finding. Declaration order is the order categories appear in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    ParseError,
    LegacyPattern,
    HardcodedColor,
    NonStandardSpacing,
    NonStandardRadius,
}

impl Category {
    pub const ALL: [Self; 5] = [
        Self::ParseError,
        Self::LegacyPattern,
        Self::HardcodedColor,
        Self::NonStandardSpacing,
        Self::NonStandardRadius,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ParseError => "parse-error",
            Self::LegacyPattern => "legacy-pattern",
            Self::HardcodedColor => "hardcoded-color",
            Self::NonStandardSpacing => "non-standard-spacing",
            Self::NonStandardRadius => "non-standard-radius",
        }
    }

    /// Section heading used by the text report.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::ParseError => "Parse Errors",
            Self::LegacyPattern => "YAML 1.1 Legacy Patterns",
            Self::HardcodedColor => "Hardcoded Colors",
            Self::NonStandardSpacing => "Non-standard Spacing",
            Self::NonStandardRadius => "Non-standard Border Radius",
        }
    }

    /// Short noun used in the "...and K more" elision line.
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::ParseError => "parse",
            Self::LegacyPattern => "legacy pattern",
            Self::HardcodedColor => "color",
            Self::NonStandardSpacing => "spacing",
            Self::NonStandardRadius => "radius",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub path: PathBuf,
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
    pub category: Category,
    pub literal: String,
    pub source_line: String,
    pub message: String,
}

impl Diagnostic {
    #[must_use]
    pub fn new(
        path: &Path,
        line: usize,
        category: Category,
        literal: impl Into<String>,
        source_line: &str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            path: path.to_path_buf(),
            line,
            column: None,
            category,
            literal: literal.into(),
            source_line: source_line.trim().to_string(),
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn with_column(mut self, column: Option<usize>) -> Self {
        self.column = column;
        self
    }

    /// Sort key giving reports a stable order independent of visitation order.
    #[must_use]
    pub fn sort_key(&self) -> (&Path, usize, Option<usize>) {
        (&self.path, self.line, self.column)
    }
}

#[cfg(test)]
#[path = "diagnostic_tests.rs"]
mod tests;
