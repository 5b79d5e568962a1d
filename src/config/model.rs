use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::output::DEFAULT_MAX_LISTED;
use crate::registry::ThemeMode;
use crate::scanner::DEFAULT_EXCLUDED_DIRS;

/// Root of `.literal-guard.toml`. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub audit: AuditConfig,

    #[serde(default)]
    pub yaml: YamlConfig,
}

/// Directory walking shared by both commands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// Directory names never entered, matched per path component.
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,

    /// Glob patterns for files or directories to skip.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Respect .gitignore rules while walking.
    #[serde(default)]
    pub gitignore: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            exclude_dirs: default_exclude_dirs(),
            exclude: Vec::new(),
            gitignore: false,
        }
    }
}

/// `[audit]`: the design-token audit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AuditConfig {
    #[serde(default = "default_audit_extensions")]
    pub extensions: Vec<String>,

    /// Token document extending the allowed values.
    #[serde(default)]
    pub tokens: Option<PathBuf>,

    /// Restrict token colors to one theme mode.
    #[serde(default)]
    pub mode: Option<ThemeMode>,

    /// Entries listed per category in the text report.
    #[serde(default = "default_max_listed")]
    pub max_listed: usize,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            extensions: default_audit_extensions(),
            tokens: None,
            mode: None,
            max_listed: DEFAULT_MAX_LISTED,
        }
    }
}

/// `[yaml]`: the YAML 1.1 legacy-pattern check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct YamlConfig {
    /// Extensions picked up when a directory is given.
    #[serde(default = "default_yaml_extensions")]
    pub extensions: Vec<String>,
}

impl Default for YamlConfig {
    fn default() -> Self {
        Self {
            extensions: default_yaml_extensions(),
        }
    }
}

fn default_exclude_dirs() -> Vec<String> {
    DEFAULT_EXCLUDED_DIRS.iter().map(|&d| d.to_string()).collect()
}

fn default_audit_extensions() -> Vec<String> {
    ["tsx", "ts", "jsx", "js", "css", "scss"]
        .iter()
        .map(|&e| e.to_string())
        .collect()
}

fn default_yaml_extensions() -> Vec<String> {
    vec!["yaml".to_string(), "yml".to_string()]
}

const fn default_max_listed() -> usize {
    DEFAULT_MAX_LISTED
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
