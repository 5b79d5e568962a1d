use std::path::PathBuf;

use crate::auditor::{FileOutcome, RealFileReader, YamlAuditor, audit_files};
use crate::cli::{Cli, YamlArgs};
use crate::config::Config;
use crate::output::{ErrorOutput, ScanProgress};
use crate::scanner::FileScanner;
use crate::{EXIT_CONFIG_ERROR, EXIT_ISSUES_FOUND, EXIT_SUCCESS, Result};

use super::context::{
    build_scanner, color_choice_to_mode, formatter, load_config, report_error, write_output,
};

#[must_use]
pub fn run_yaml(args: &YamlArgs, cli: &Cli) -> i32 {
    match run_yaml_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            report_error(&e, cli.color);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Checks YAML files in the order given.
///
/// Returns 1 when any file fails to parse or cannot be read. Legacy patterns are advisory.
///
/// # Errors
/// Returns an error for setup failures: configuration or unwritable output.
pub fn run_yaml_impl(args: &YamlArgs, cli: &Cli) -> Result<i32> {
    let loaded = load_config(args.config.as_deref(), cli.no_config)?;
    if cli.verbose > 0
        && let Some(source) = &loaded.source
    {
        ErrorOutput::new(color_choice_to_mode(cli.color))
            .print_note(&format!("Using configuration {}", source.display()));
    }

    let paths = expand_paths(&args.paths, &loaded.config)?;
    let progress = ScanProgress::new(paths.len() as u64, cli.quiet);
    let outcomes = audit_files(&YamlAuditor::new(), &RealFileReader, &paths, &progress);
    progress.finish();

    let output = formatter(args.format, cli.color).format_yaml(&outcomes)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    Ok(if outcomes.iter().any(FileOutcome::is_blocking) {
        EXIT_ISSUES_FOUND
    } else {
        EXIT_SUCCESS
    })
}

/// Directories expand to their YAML files; anything else is checked as given,
/// so a missing file surfaces as a per-file failure.
fn expand_paths(paths: &[PathBuf], config: &Config) -> Result<Vec<PathBuf>> {
    let scanner = build_scanner(&config.scanner, config.yaml.extensions.clone(), &[])?;
    let mut expanded = Vec::with_capacity(paths.len());
    for path in paths {
        if path.is_dir() {
            expanded.extend(scanner.scan(path)?);
        } else {
            expanded.push(path.clone());
        }
    }
    Ok(expanded)
}

#[cfg(test)]
#[path = "yaml_tests.rs"]
mod tests;
