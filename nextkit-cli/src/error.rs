use std::path::PathBuf;

use thiserror::Error;

/// Exit status for a successful run, including runs that logged step failures.
pub const EXIT_OK: i32 = 0;
/// Exit status when a required argument is missing.
pub const EXIT_MISSING_ARGUMENT: i32 = 1;
/// Exit status for usage errors such as an unrecognized command.
pub const EXIT_USAGE: i32 = 2;

/// Every failure the scaffolder can report.
///
/// Filesystem variants keep the path they were acting on so the message shown
/// to the user points at the exact entry.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Error reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error parsing {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Error creating folder {}: {source}", path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error creating file {}: {source}", path.display())]
    FileCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error writing to file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error deleting file {}: {source}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Please provide {0} name.")]
    MissingArgument(&'static str),
    #[error("'{0}' is not a nextkit command.")]
    UnrecognizedCommand(String),
}

impl ScaffoldError {
    /// Process exit status when this error ends the run.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScaffoldError::MissingArgument(_) => EXIT_MISSING_ARGUMENT,
            ScaffoldError::UnrecognizedCommand(_) => EXIT_USAGE,
            _ => EXIT_OK,
        }
    }
}
