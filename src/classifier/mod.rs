//! Heuristic line classification.
//!
//! Decides whether a pattern match is real code or sits inside a comment, an open
//! string literal, or a mapping key. None of this is a lexer: every predicate looks at
//! the physical line only, and escaped quotes are not recognized.

mod suppress;

pub use suppress::{KeyContext, KeywordGate, QuoteParity, Suppressor};

/// Line prefixes that disable scanning for YAML documents.
pub const YAML_SKIP_PREFIXES: &[&str] = &["#"];

/// Line prefixes that disable scanning for script and stylesheet sources.
pub const SOURCE_SKIP_PREFIXES: &[&str] = &["/*", "//", "import ", "require"];

/// Whole-line gate applied before any rule is evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClassifier {
    skip_prefixes: Vec<String>,
}

impl LineClassifier {
    #[must_use]
    pub fn new(skip_prefixes: &[&str]) -> Self {
        Self {
            skip_prefixes: skip_prefixes.iter().map(|p| (*p).to_string()).collect(),
        }
    }

    #[must_use]
    pub fn yaml() -> Self {
        Self::new(YAML_SKIP_PREFIXES)
    }

    #[must_use]
    pub fn source() -> Self {
        Self::new(SOURCE_SKIP_PREFIXES)
    }

    /// Returns `true` when the trimmed line starts with a comment or import marker.
    #[must_use]
    pub fn is_skipped(&self, line: &str) -> bool {
        let trimmed = line.trim();
        self.skip_prefixes
            .iter()
            .any(|prefix| trimmed.starts_with(prefix.as_str()))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
