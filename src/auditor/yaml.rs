use std::path::Path;

use serde::Deserialize;

use crate::classifier::LineClassifier;
use crate::detector::PatternDetector;
use crate::diagnostic::{Category, Diagnostic};

use super::{FileAudit, FileAuditor, scan_lines, split_lines};

/// Location and reason of a failed parse. Line and column are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    pub line: Option<usize>,
    pub column: Option<usize>,
    pub message: String,
}

impl From<serde_yaml::Error> for ParseFailure {
    fn from(err: serde_yaml::Error) -> Self {
        let location = err.location();
        Self {
            line: location.as_ref().map(serde_yaml::Location::line),
            column: location.as_ref().map(serde_yaml::Location::column),
            message: err.to_string(),
        }
    }
}

/// A YAML 1.2 parser treated as a black box.
pub trait YamlParser: Send + Sync {
    /// Parses every document in `content`, returning how many there were.
    ///
    /// # Errors
    /// Returns the first syntax or construction failure.
    fn parse(&self, content: &str) -> Result<usize, ParseFailure>;
}

/// Multi-document parse through `serde_yaml`, which follows the 1.2 core schema.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictYamlParser;

impl YamlParser for StrictYamlParser {
    fn parse(&self, content: &str) -> Result<usize, ParseFailure> {
        let mut documents = 0;
        for document in serde_yaml::Deserializer::from_str(content) {
            serde_yaml::Value::deserialize(document)?;
            documents += 1;
        }
        // The deserializer yields one null document for a stream with no content.
        if split_lines(content).all(is_blank_or_comment) {
            return Ok(0);
        }
        Ok(documents)
    }
}

fn is_blank_or_comment(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Parse first, then scan for YAML 1.1 literals whose meaning changed in 1.2.
pub struct YamlAuditor<P: YamlParser = StrictYamlParser> {
    parser: P,
    classifier: LineClassifier,
    detector: PatternDetector,
}

impl YamlAuditor<StrictYamlParser> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_parser(StrictYamlParser)
    }
}

impl Default for YamlAuditor<StrictYamlParser> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: YamlParser> YamlAuditor<P> {
    #[must_use]
    pub fn with_parser(parser: P) -> Self {
        Self {
            parser,
            classifier: LineClassifier::yaml(),
            detector: PatternDetector::legacy_yaml(),
        }
    }

    fn parse_error(path: &Path, content: &str, failure: ParseFailure) -> FileAudit {
        // Unknown locations are reported on line 0.
        let line = failure.line.unwrap_or(0);
        let source_line = line
            .checked_sub(1)
            .and_then(|idx| split_lines(content).nth(idx))
            .unwrap_or_default();

        let mut audit = FileAudit::default();
        audit.push(
            Diagnostic::new(
                path,
                line,
                Category::ParseError,
                "",
                source_line,
                failure.message,
            )
            .with_column(failure.column),
        );
        audit
    }
}

impl<P: YamlParser> FileAuditor for YamlAuditor<P> {
    fn audit(&self, path: &Path, content: &str) -> FileAudit {
        match self.parser.parse(content) {
            Err(failure) => Self::parse_error(path, content, failure),
            Ok(documents) => {
                let mut audit = scan_lines(&self.classifier, &self.detector, path, content);
                audit.documents = Some(documents);
                audit
            }
        }
    }
}

#[cfg(test)]
#[path = "yaml_tests.rs"]
mod tests;
