use std::collections::BTreeMap;

use serde::Serialize;

use crate::auditor::{AuditResult, FileAuditError, FileOutcome};
use crate::diagnostic::{Category, Diagnostic};
use crate::error::Result;
use crate::registry::ThemeMode;

use super::OutputFormatter;

/// Machine-readable reports. Every diagnostic is listed; nothing is truncated.
pub struct JsonFormatter;

#[derive(Serialize)]
struct AuditOutput<'a> {
    mode: Option<ThemeMode>,
    summary: AuditSummary,
    diagnostics: Vec<&'a Diagnostic>,
    failures: Vec<Failure>,
}

#[derive(Serialize)]
struct AuditSummary {
    total_files_scanned: usize,
    files_with_issues: usize,
    files_not_audited: usize,
    total_issues: usize,
    by_category: BTreeMap<Category, usize>,
}

#[derive(Serialize)]
struct Failure {
    path: String,
    error: String,
}

#[derive(Serialize)]
struct YamlOutput<'a> {
    summary: YamlSummary,
    files: Vec<YamlFile<'a>>,
}

#[derive(Serialize)]
struct YamlSummary {
    total_files: usize,
    valid: usize,
    failed: usize,
    warnings: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum YamlStatus {
    Valid,
    Invalid,
    Unreadable,
}

#[derive(Serialize)]
struct YamlFile<'a> {
    path: String,
    status: YamlStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    documents: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    diagnostics: Vec<&'a Diagnostic>,
}

impl OutputFormatter for JsonFormatter {
    fn format_audit(&self, result: &AuditResult, mode: Option<ThemeMode>) -> Result<String> {
        let by_category = Category::ALL
            .into_iter()
            .map(|c| (c, result.count(c)))
            .filter(|(_, n)| *n > 0)
            .collect();

        let output = AuditOutput {
            mode,
            summary: AuditSummary {
                total_files_scanned: result.total_files_scanned,
                files_with_issues: result.files_with_issues(),
                files_not_audited: result.failures.len(),
                total_issues: result.total_issues(),
                by_category,
            },
            diagnostics: Category::ALL
                .into_iter()
                .flat_map(|c| result.diagnostics(c))
                .collect(),
            failures: result.failures.values().map(convert_failure).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_yaml(&self, outcomes: &[FileOutcome]) -> Result<String> {
        let files: Vec<YamlFile<'_>> = outcomes.iter().map(convert_yaml_file).collect();
        let failed = outcomes.iter().filter(|o| o.is_blocking()).count();
        let warnings = outcomes
            .iter()
            .filter_map(|o| o.outcome.as_ref().ok())
            .map(|a| a.get(Category::LegacyPattern).len())
            .sum();

        let output = YamlOutput {
            summary: YamlSummary {
                total_files: outcomes.len(),
                valid: outcomes.len() - failed,
                failed,
                warnings,
            },
            files,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_failure(failure: &FileAuditError) -> Failure {
    Failure {
        path: failure.path().display().to_string(),
        error: failure.to_string(),
    }
}

fn convert_yaml_file(file: &FileOutcome) -> YamlFile<'_> {
    let path = file.path.display().to_string();
    match &file.outcome {
        Err(e) => YamlFile {
            path,
            status: YamlStatus::Unreadable,
            documents: None,
            error: Some(e.to_string()),
            diagnostics: Vec::new(),
        },
        Ok(audit) => YamlFile {
            path,
            status: if audit.has_parse_error() {
                YamlStatus::Invalid
            } else {
                YamlStatus::Valid
            },
            documents: audit.documents,
            error: None,
            diagnostics: audit.iter().collect(),
        },
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
