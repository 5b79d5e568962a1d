use std::path::Path;

use crate::classifier::LineClassifier;
use crate::detector::PatternDetector;
use crate::registry::AllowedValues;

use super::{FileAudit, FileAuditor, scan_lines};

/// Flags hardcoded colors, spacing and radii in scripts and stylesheets.
pub struct StyleAuditor {
    classifier: LineClassifier,
    detector: PatternDetector,
}

impl StyleAuditor {
    #[must_use]
    pub fn new(allowed: AllowedValues) -> Self {
        Self {
            classifier: LineClassifier::source(),
            detector: PatternDetector::design_tokens(allowed),
        }
    }

    #[must_use]
    pub const fn with_parts(classifier: LineClassifier, detector: PatternDetector) -> Self {
        Self {
            classifier,
            detector,
        }
    }

    #[must_use]
    pub const fn allowed(&self) -> &AllowedValues {
        self.detector.allowed()
    }
}

impl Default for StyleAuditor {
    fn default() -> Self {
        Self::new(AllowedValues::default())
    }
}

impl FileAuditor for StyleAuditor {
    fn audit(&self, path: &Path, content: &str) -> FileAudit {
        scan_lines(&self.classifier, &self.detector, path, content)
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
