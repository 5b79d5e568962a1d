use std::any::Any;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use thiserror::Error;

use crate::diagnostic::{Category, Diagnostic};
use crate::error::{LiteralGuardError, Result};
use crate::output::ScanProgress;
use crate::scanner::FileScanner;

use super::{FileAudit, FileAuditor};

/// A failure isolated to one file; the run continues with the others.
#[derive(Debug, Error)]
pub enum FileAuditError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("internal error while auditing '{}': {message}", path.display())]
    Internal { path: PathBuf, message: String },
}

impl FileAuditError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path } | Self::Read { path, .. } | Self::Internal { path, .. } => {
                path
            }
        }
    }
}

/// Source of file bytes (for testability).
pub trait FileReader: Send + Sync {
    /// Read file contents as bytes.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileReader;

impl FileReader for RealFileReader {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}

/// The audit of one path, successful or not.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub outcome: std::result::Result<FileAudit, FileAuditError>,
}

impl FileOutcome {
    /// Unreadable files and parse failures block; pattern diagnostics alone do not.
    #[must_use]
    pub fn is_blocking(&self) -> bool {
        match &self.outcome {
            Ok(audit) => audit.has_parse_error(),
            Err(_) => true,
        }
    }
}

/// Aggregated result of a run. Maps are keyed by path so iteration is sorted.
#[derive(Debug, Default)]
pub struct AuditResult {
    pub total_files_scanned: usize,
    /// Only files with at least one diagnostic.
    pub files: BTreeMap<PathBuf, FileAudit>,
    pub failures: BTreeMap<PathBuf, FileAuditError>,
}

impl AuditResult {
    #[must_use]
    pub fn from_outcomes(outcomes: Vec<FileOutcome>) -> Self {
        let mut result = Self {
            total_files_scanned: outcomes.len(),
            ..Self::default()
        };
        for FileOutcome { path, outcome } in outcomes {
            match outcome {
                Ok(audit) if audit.is_clean() => {}
                Ok(audit) => {
                    result.files.insert(path, audit);
                }
                Err(e) => {
                    result.failures.insert(path, e);
                }
            }
        }
        result
    }

    #[must_use]
    pub fn files_with_issues(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn total_issues(&self) -> usize {
        self.files.values().map(FileAudit::total).sum()
    }

    #[must_use]
    pub fn count(&self, category: Category) -> usize {
        self.files.values().map(|f| f.get(category).len()).sum()
    }

    /// Every diagnostic of `category` across files, sorted by path then line.
    #[must_use]
    pub fn diagnostics(&self, category: Category) -> Vec<&Diagnostic> {
        let mut all: Vec<&Diagnostic> = self
            .files
            .values()
            .flat_map(|f| f.get(category))
            .collect();
        all.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        all
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.files.is_empty() && self.failures.is_empty()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

/// Reads and audits one file. Read failures and auditor panics stay with the file.
///
/// # Errors
/// Returns the per-file failure; callers record it instead of aborting.
pub fn audit_path<A, R>(
    auditor: &A,
    reader: &R,
    path: &Path,
) -> std::result::Result<FileAudit, FileAuditError>
where
    A: FileAuditor + ?Sized,
    R: FileReader + ?Sized,
{
    let bytes = reader.read(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            FileAuditError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            FileAuditError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let content = String::from_utf8_lossy(&bytes);

    panic::catch_unwind(AssertUnwindSafe(|| auditor.audit(path, &content))).map_err(|payload| {
        FileAuditError::Internal {
            path: path.to_path_buf(),
            message: panic_message(payload.as_ref()),
        }
    })
}

/// Audits `paths` in parallel. Outcomes come back in input order.
pub fn audit_files<A, R>(
    auditor: &A,
    reader: &R,
    paths: &[PathBuf],
    progress: &ScanProgress,
) -> Vec<FileOutcome>
where
    A: FileAuditor + ?Sized,
    R: FileReader + ?Sized,
{
    paths
        .par_iter()
        .map(|path| {
            let outcome = audit_path(auditor, reader, path);
            progress.inc();
            FileOutcome {
                path: path.clone(),
                outcome,
            }
        })
        .collect()
}

/// Audits a single file, or every matching file below a directory.
///
/// A file root is audited regardless of its extension.
///
/// # Errors
/// Returns an error if `root` does not exist or cannot be walked.
pub fn audit_tree<A, R, S>(
    root: &Path,
    scanner: &S,
    auditor: &A,
    reader: &R,
    progress: &ScanProgress,
) -> Result<AuditResult>
where
    A: FileAuditor + ?Sized,
    R: FileReader + ?Sized,
    S: FileScanner + ?Sized,
{
    let paths = if root.is_file() {
        vec![root.to_path_buf()]
    } else if root.is_dir() {
        scanner.scan(root)?
    } else {
        return Err(LiteralGuardError::PathNotFound(root.to_path_buf()));
    };

    progress.set_length(paths.len() as u64);
    let outcomes = audit_files(auditor, reader, &paths, progress);
    progress.finish();

    Ok(AuditResult::from_outcomes(outcomes))
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
