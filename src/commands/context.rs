use std::error::Error;
use std::fs;
use std::path::Path;

use crate::cli::ColorChoice;
use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult, ScannerConfig};
use crate::output::{
    ColorMode, ErrorOutput, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use crate::registry::AllowedValues;
use crate::scanner::{DirectoryScanner, ExtensionFilter};
use crate::{LiteralGuardError, Result};

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load configuration from an explicit file, the default locations, or not at all.
///
/// # Errors
/// Returns an error if a configuration file exists but cannot be loaded.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Builds the directory walker from `[scanner]` plus command-specific extensions and excludes.
///
/// # Errors
/// Returns an error if an exclude pattern is not a valid glob.
pub(crate) fn build_scanner(
    scanner: &ScannerConfig,
    extensions: Vec<String>,
    extra_excludes: &[String],
) -> Result<DirectoryScanner<ExtensionFilter>> {
    let mut exclude = scanner.exclude.clone();
    exclude.extend_from_slice(extra_excludes);
    let filter = ExtensionFilter::new(extensions, scanner.exclude_dirs.clone(), &exclude)?;
    Ok(DirectoryScanner::with_gitignore(filter, scanner.gitignore))
}

pub(crate) fn formatter(format: OutputFormat, color: ColorChoice) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(color_choice_to_mode(color))),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Like [`formatter`], with text truncation and fix hints tuned to this run.
pub(crate) fn audit_formatter(
    format: OutputFormat,
    color: ColorChoice,
    max_listed: usize,
    allowed: &AllowedValues,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(
            TextFormatter::new(color_choice_to_mode(color))
                .with_max_listed(max_listed)
                .with_allowed(allowed),
        ),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Write output to a file or stdout.
///
/// `quiet` only silences stdout; file writes always happen.
///
/// # Errors
/// Returns an error if the file or its parent directories cannot be written.
pub fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

/// Prints a setup failure with its source chain as detail.
pub fn report_error(error: &LiteralGuardError, color: ColorChoice) {
    let detail = error.source().map(ToString::to_string);
    let suggestion = match error {
        LiteralGuardError::Config(_) | LiteralGuardError::TomlParse(_) => {
            Some("Fix the configuration file or rerun with --no-config")
        }
        LiteralGuardError::PathNotFound(_) => Some("Pass an existing file or directory"),
        LiteralGuardError::InvalidPattern { .. } => Some("Check the glob syntax of --exclude"),
        _ => None,
    };
    ErrorOutput::new(color_choice_to_mode(color)).print_error_with_detail(
        error.error_type(),
        &error.to_string(),
        detail.as_deref(),
        suggestion,
    );
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
