use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

use crate::auditor::{AuditResult, FileAuditError, FileOutcome};
use crate::diagnostic::{Category, Diagnostic};
use crate::error::Result;
use crate::registry::{AllowedValues, ThemeMode};

use super::{ColorMode, OutputFormatter, ansi, no_color_requested};

/// Entries listed per category before eliding the rest.
pub const DEFAULT_MAX_LISTED: usize = 10;

const RULE: &str = "============================================================";

pub struct TextFormatter {
    use_colors: bool,
    max_listed: usize,
    spacing: Vec<u32>,
    radii: Vec<u32>,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        let allowed = AllowedValues::default();
        Self {
            use_colors: Self::should_use_colors(mode),
            max_listed: DEFAULT_MAX_LISTED,
            spacing: allowed.spacing().iter().copied().collect(),
            radii: allowed.radii().iter().copied().collect(),
        }
    }

    #[must_use]
    pub const fn with_max_listed(mut self, max_listed: usize) -> Self {
        self.max_listed = max_listed;
        self
    }

    /// Fix hints list the sanctioned spacing and radius values of this run.
    #[must_use]
    pub fn with_allowed(mut self, allowed: &AllowedValues) -> Self {
        self.spacing = allowed.spacing().iter().copied().collect();
        self.radii = allowed.radii().iter().copied().collect();
        self
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                !no_color_requested() && std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn fix_hint(&self, category: Category) -> Option<String> {
        match category {
            Category::HardcodedColor => Some("Use design token instead".to_string()),
            Category::NonStandardSpacing => Some(format!(
                "Use spacing token ({}px)",
                join_values(&self.spacing)
            )),
            Category::NonStandardRadius => Some(format!(
                "Use border radius token ({}px)",
                join_values(&self.radii)
            )),
            Category::ParseError | Category::LegacyPattern => None,
        }
    }

    fn format_category(&self, result: &AuditResult, category: Category, output: &mut Vec<u8>) {
        let diagnostics = result.diagnostics(category);
        if diagnostics.is_empty() {
            return;
        }

        writeln!(
            output,
            "### {} ({} issues)\n",
            category.title(),
            diagnostics.len()
        )
        .ok();

        let label = if category == Category::HardcodedColor {
            "Color"
        } else {
            "Value"
        };
        for diagnostic in diagnostics.iter().take(self.max_listed) {
            writeln!(
                output,
                "**{}:{}**",
                diagnostic.path.display(),
                diagnostic.line
            )
            .ok();
            writeln!(output, "- {label}: `{}`", diagnostic.literal).ok();
            writeln!(output, "- Line: `{}`", diagnostic.source_line).ok();
            match self.fix_hint(category) {
                Some(hint) => writeln!(output, "- Fix: {hint}\n").ok(),
                None => writeln!(output, "- Note: {}\n", diagnostic.message).ok(),
            };
        }

        let hidden = diagnostics.len().saturating_sub(self.max_listed);
        if hidden > 0 {
            writeln!(output, "...and {hidden} more {} issues\n", category.noun()).ok();
        }
    }

    fn format_failures(&self, failures: &BTreeMap<PathBuf, FileAuditError>, output: &mut Vec<u8>) {
        if failures.is_empty() {
            return;
        }
        writeln!(output, "## Files Not Audited\n").ok();
        for failure in failures.values() {
            writeln!(output, "- {}", self.paint(&failure.to_string(), ansi::RED)).ok();
        }
        writeln!(output).ok();
    }

    fn format_yaml_file(&self, file: &FileOutcome, output: &mut Vec<u8>) {
        writeln!(output, "{RULE}").ok();
        writeln!(output, "YAML 1.2 Check: {}", file.path.display()).ok();
        writeln!(output, "{RULE}").ok();

        let audit = match &file.outcome {
            Ok(audit) => audit,
            Err(e) => {
                let status = self.paint("✗ Could not check file", ansi::RED);
                writeln!(output, "{status}: {e}\n").ok();
                return;
            }
        };

        if audit.has_parse_error() {
            writeln!(output, "{}\n", self.paint("✗ YAML parse failed", ansi::RED)).ok();
            for diagnostic in audit.get(Category::ParseError) {
                writeln!(output, "  ✗{}: {}", location(diagnostic), diagnostic.message).ok();
            }
            writeln!(
                output,
                "\nFix YAML syntax errors before checking for legacy patterns.\n"
            )
            .ok();
            return;
        }

        let documents = audit.documents.unwrap_or(0);
        let plural = if documents == 1 { "" } else { "s" };
        let valid = format!("✓ YAML syntax valid ({documents} document{plural} found)");
        writeln!(output, "{}\n", self.paint(&valid, ansi::GREEN)).ok();

        let warnings = audit.get(Category::LegacyPattern);
        if warnings.is_empty() {
            let clean = self.paint("✓ No YAML 1.1 legacy patterns detected", ansi::GREEN);
            writeln!(output, "{clean}\n").ok();
            return;
        }

        let heading = format!("⚠ YAML 1.1 Legacy Patterns ({} found):", warnings.len());
        writeln!(output, "{}", self.paint(&heading, ansi::YELLOW)).ok();
        for warning in warnings {
            writeln!(output, "  • Line {}: {}", warning.line, warning.message).ok();
        }
        writeln!(output).ok();
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format_audit(&self, result: &AuditResult, mode: Option<ThemeMode>) -> Result<String> {
        let mut output = Vec::new();

        writeln!(output, "# Design Token Compliance Report").ok();
        writeln!(output, "Mode: {}\n", mode.map_or("all", ThemeMode::as_str)).ok();
        writeln!(output, "## Summary").ok();
        writeln!(output, "- Total files scanned: {}", result.total_files_scanned).ok();
        writeln!(output, "- Files with issues: {}", result.files_with_issues()).ok();
        writeln!(output, "- Files not audited: {}\n", result.failures.len()).ok();
        writeln!(output, "## Issues Found\n").ok();

        if result.total_issues() == 0 {
            let clean = self.paint("✓ No design token compliance issues found!", ansi::GREEN);
            writeln!(output, "{clean}\n").ok();
        } else {
            for category in Category::ALL {
                self.format_category(result, category, &mut output);
            }
        }

        self.format_failures(&result.failures, &mut output);

        Ok(String::from_utf8_lossy(&output).trim_end().to_string() + "\n")
    }

    fn format_yaml(&self, outcomes: &[FileOutcome]) -> Result<String> {
        let mut output = Vec::new();

        for file in outcomes {
            self.format_yaml_file(file, &mut output);
        }

        let failed = outcomes.iter().filter(|o| o.is_blocking()).count();
        let warnings: usize = outcomes
            .iter()
            .filter_map(|o| o.outcome.as_ref().ok())
            .map(|a| a.get(Category::LegacyPattern).len())
            .sum();
        let failed_str = self.paint(&failed.to_string(), ansi::RED);
        let warnings_str = self.paint(&warnings.to_string(), ansi::YELLOW);
        writeln!(
            output,
            "Summary: {} files checked, {} valid, {failed_str} failed, {warnings_str} legacy pattern warnings",
            outcomes.len(),
            outcomes.len() - failed,
        )
        .ok();

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

fn join_values(values: &[u32]) -> String {
    values
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// ` (line L, col C)`, or nothing when the parser gave no position.
fn location(diagnostic: &Diagnostic) -> String {
    if diagnostic.line == 0 {
        return String::new();
    }
    let column = diagnostic
        .column
        .map_or_else(|| "?".to_string(), |c| c.to_string());
    format!(" (line {}, col {column})", diagnostic.line)
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
