//! Filesystem primitives used by every command, plus the best-effort step log.
//!
//! Each primitive is attempted exactly once and reports its own
//! [`ScaffoldError`] variant. Callers record results in a [`StepLog`], which
//! prints failures and lets the command keep going.

use colored::Colorize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::ScaffoldError;

/// Create a single directory level. Fails if `path` already exists or its
/// parent is missing.
pub fn create_directory(path: &Path) -> Result<(), ScaffoldError> {
    tracing::debug!(path = %path.display(), "create directory");
    fs::create_dir(path).map_err(|source| ScaffoldError::DirectoryCreate {
        path: path.to_path_buf(),
        source,
    })
}

/// Create a new file and write `content` into it. An existing file is left
/// untouched and reported as [`ScaffoldError::FileCreate`].
pub fn create_file(path: &Path, content: &str) -> Result<(), ScaffoldError> {
    tracing::debug!(path = %path.display(), bytes = content.len(), "create file");
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| ScaffoldError::FileCreate {
            path: path.to_path_buf(),
            source,
        })?;
    file.write_all(content.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|source| ScaffoldError::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Delete a file.
pub fn remove_entry(path: &Path) -> Result<(), ScaffoldError> {
    tracing::debug!(path = %path.display(), "remove file");
    fs::remove_file(path).map_err(|source| ScaffoldError::Remove {
        path: path.to_path_buf(),
        source,
    })
}

/// Create or truncate a file and write `content` into it.
pub fn write_file(path: &Path, content: &str) -> Result<(), ScaffoldError> {
    tracing::debug!(path = %path.display(), bytes = content.len(), "write file");
    fs::write(path, content).map_err(|source| ScaffoldError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Collects the outcome of independent scaffolding steps.
///
/// Failures are printed to stderr as they happen and counted; nothing is
/// propagated, so the next step always runs.
#[derive(Debug, Default)]
pub struct StepLog {
    errors: Vec<ScaffoldError>,
}

impl StepLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one step. Returns `true` if it succeeded.
    pub fn record(&mut self, result: Result<(), ScaffoldError>) -> bool {
        match result {
            Ok(()) => true,
            Err(err) => {
                tracing::debug!(error = %err, "scaffold step failed");
                eprintln!("  {} {}", "x".red(), err.to_string().red());
                self.errors.push(err);
                false
            }
        }
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[ScaffoldError] {
        &self.errors
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn create_directory_is_not_recursive() {
        let tmp = TempDir::new().unwrap();
        let err = create_directory(&tmp.path().join("a/b")).unwrap_err();
        assert!(matches!(err, ScaffoldError::DirectoryCreate { .. }));
        assert!(!tmp.path().join("a").exists());
    }

    #[test]
    fn create_directory_fails_when_present() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("fonts");
        create_directory(&dir).unwrap();
        assert!(matches!(
            create_directory(&dir),
            Err(ScaffoldError::DirectoryCreate { .. })
        ));
    }

    #[test]
    fn create_file_refuses_to_overwrite() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("Button.tsx");
        create_file(&path, "first").unwrap();

        let err = create_file(&path, "second").unwrap_err();
        assert!(matches!(err, ScaffoldError::FileCreate { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "first");
    }

    #[test]
    fn write_file_truncates() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("globals.css");
        fs::write(&path, "body { margin: 0 }").unwrap();

        write_file(&path, "").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn remove_missing_file_fails() {
        let tmp = TempDir::new().unwrap();
        let err = remove_entry(&tmp.path().join("next.svg")).unwrap_err();
        assert!(matches!(err, ScaffoldError::Remove { .. }));
    }

    #[test]
    fn step_log_keeps_going_after_failures() {
        let tmp = TempDir::new().unwrap();
        let mut log = StepLog::new();

        assert!(!log.record(remove_entry(&tmp.path().join("missing"))));
        assert!(log.record(create_directory(&tmp.path().join("img"))));
        assert!(!log.record(create_directory(&tmp.path().join("img"))));

        assert_eq!(log.error_count(), 2);
        assert!(!log.is_clean());
        assert!(tmp.path().join("img").is_dir());
    }
}
