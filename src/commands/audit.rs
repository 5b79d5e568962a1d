use std::path::Path;

use crate::auditor::{RealFileReader, StyleAuditor, audit_tree};
use crate::cli::{AuditArgs, Cli};
use crate::config::{Config, validate_config_semantics};
use crate::output::{ErrorOutput, ScanProgress};
use crate::registry::AllowedValues;
use crate::{EXIT_CONFIG_ERROR, EXIT_ISSUES_FOUND, EXIT_SUCCESS, Result};

use super::context::{
    audit_formatter, build_scanner, color_choice_to_mode, load_config, report_error, write_output,
};

#[must_use]
pub fn run_audit(args: &AuditArgs, cli: &Cli) -> i32 {
    match run_audit_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            report_error(&e, cli.color);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Audits a tree for hardcoded design values.
///
/// Returns 1 when any diagnostic or per-file failure exists, otherwise 0.
///
/// # Errors
/// Returns an error for setup failures: configuration, a missing root, or unwritable output.
pub fn run_audit_impl(args: &AuditArgs, cli: &Cli) -> Result<i32> {
    let stderr = ErrorOutput::new(color_choice_to_mode(cli.color));

    let loaded = load_config(args.config.as_deref(), cli.no_config)?;
    if cli.verbose > 0
        && let Some(source) = &loaded.source
    {
        stderr.print_note(&format!("Using configuration {}", source.display()));
    }

    let mut config = loaded.config;
    apply_cli_overrides(&mut config, args);
    validate_config_semantics(&config)?;

    let allowed = load_allowed_values(&config, cli, &stderr);
    let auditor = StyleAuditor::new(allowed);

    let scanner = build_scanner(&config.scanner, config.audit.extensions.clone(), &[])?;
    if cli.verbose > 0
        && args.path.is_dir()
        && is_excluded_root(&args.path, &config.scanner.exclude_dirs)
    {
        stderr.print_note(&format!(
            "{} is an excluded directory; nothing under it is audited",
            args.path.display()
        ));
    }

    let progress = ScanProgress::new(0, cli.quiet);
    let result = audit_tree(&args.path, &scanner, &auditor, &RealFileReader, &progress)?;

    if cli.verbose > 0 {
        stderr.print_note(&format!(
            "Audited {} files, {} issues",
            result.total_files_scanned,
            result.total_issues()
        ));
    }

    let output = audit_formatter(
        args.format,
        cli.color,
        config.audit.max_listed,
        auditor.allowed(),
    )
    .format_audit(&result, config.audit.mode)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    Ok(if result.is_clean() {
        EXIT_SUCCESS
    } else {
        EXIT_ISSUES_FOUND
    })
}

fn is_excluded_root(root: &Path, exclude_dirs: &[String]) -> bool {
    root.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| exclude_dirs.iter().any(|d| d == name))
}

fn apply_cli_overrides(config: &mut Config, args: &AuditArgs) {
    if let Some(ext) = &args.ext {
        config.audit.extensions.clone_from(ext);
    }
    if args.tokens.is_some() {
        config.audit.tokens.clone_from(&args.tokens);
    }
    if args.mode.is_some() {
        config.audit.mode = args.mode;
    }
    if let Some(max_listed) = args.max_listed {
        config.audit.max_listed = max_listed;
    }
    config.scanner.exclude.extend(args.exclude.iter().cloned());
}

/// Defaults, extended by the token document when one is configured.
///
/// A token file that cannot be used is reported and the defaults stay in effect.
fn load_allowed_values(config: &Config, cli: &Cli, stderr: &ErrorOutput) -> AllowedValues {
    let Some(path) = &config.audit.tokens else {
        return AllowedValues::default();
    };

    let (allowed, notice) = AllowedValues::load_or_default(path, config.audit.mode);
    match notice {
        Some(e) if !cli.quiet => stderr.print_warning_with_detail(
            &e.to_string(),
            None,
            Some("Continuing with the built-in allowed values"),
        ),
        Some(_) => {}
        None if cli.verbose > 0 => stderr.print_note(&format!(
            "Loaded tokens from {}: {} colors, {} spacing values, {} radii allowed",
            path.display(),
            allowed.colors().len(),
            allowed.spacing().len(),
            allowed.radii().len()
        )),
        None => {}
    }
    allowed
}

#[cfg(test)]
#[path = "audit_tests.rs"]
mod tests;
