//! Per-file auditing: runs the detector over every line of one file's content.

mod style;
mod tree;
mod yaml;

pub use style::StyleAuditor;
pub use tree::{
    AuditResult, FileAuditError, FileOutcome, FileReader, RealFileReader, audit_files,
    audit_path, audit_tree,
};
pub use yaml::{ParseFailure, StrictYamlParser, YamlAuditor, YamlParser};

use std::collections::BTreeMap;
use std::path::Path;

use crate::classifier::LineClassifier;
use crate::detector::PatternDetector;
use crate::diagnostic::{Category, Diagnostic};

/// Audits the full text of one file. Implementations are pure.
pub trait FileAuditor: Send + Sync {
    fn audit(&self, path: &Path, content: &str) -> FileAudit;
}

/// Diagnostics of one file grouped by category, each list in line order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileAudit {
    pub diagnostics: BTreeMap<Category, Vec<Diagnostic>>,
    /// Number of YAML documents parsed; `None` for non-YAML audits or failed parses.
    pub documents: Option<usize>,
}

impl FileAudit {
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics
            .entry(diagnostic.category)
            .or_default()
            .push(diagnostic);
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.values().all(Vec::is_empty)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.diagnostics.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn get(&self, category: Category) -> &[Diagnostic] {
        self.diagnostics
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn has_parse_error(&self) -> bool {
        !self.get(Category::ParseError).is_empty()
    }

    /// All diagnostics, category by category.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.values().flatten()
    }
}

/// Splits on `\n`, `\r\n` and bare `\r`, the line breaks YAML recognizes.
pub(crate) fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .split_terminator('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}

/// Shared line loop: 1-based numbering, whole-line skips, then detection.
fn scan_lines(
    classifier: &LineClassifier,
    detector: &PatternDetector,
    path: &Path,
    content: &str,
) -> FileAudit {
    let mut audit = FileAudit::default();
    for (idx, line) in split_lines(content).enumerate() {
        if classifier.is_skipped(line) {
            continue;
        }
        for diagnostic in detector.detect(path, line, idx + 1) {
            audit.push(diagnostic);
        }
    }
    audit
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
