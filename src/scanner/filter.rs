use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{LiteralGuardError, Result};

/// Directory names skipped by default: dependencies and build output.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] =
    &["node_modules", ".next", "dist", "build", ".git", "target"];

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;

    /// Whether the walker should enter `dir` at all.
    fn should_descend(&self, _dir: &Path) -> bool {
        true
    }
}

pub struct ExtensionFilter {
    extensions: Vec<String>,
    excluded_dirs: Vec<String>,
    exclude_patterns: GlobSet,
}

impl ExtensionFilter {
    /// Create a new filter.
    ///
    /// Extensions may be given with or without the leading dot.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(
        extensions: Vec<String>,
        excluded_dirs: Vec<String>,
        exclude_patterns: &[String],
    ) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| LiteralGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| LiteralGuardError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            extensions: extensions
                .into_iter()
                .map(|e| e.trim_start_matches('.').to_string())
                .collect(),
            excluded_dirs,
            exclude_patterns,
        })
    }

    fn has_valid_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }

        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    fn is_excluded_dir_name(&self, dir: &Path) -> bool {
        dir.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.excluded_dirs.iter().any(|d| d == name))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }
}

impl FileFilter for ExtensionFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_valid_extension(path) && !self.is_excluded(path)
    }

    fn should_descend(&self, dir: &Path) -> bool {
        !self.is_excluded_dir_name(dir) && !self.is_excluded(dir)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
