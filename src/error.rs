use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while discovering, reading, or emitting seed data.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read input directory {path}: {source}")]
    ReadDir { path: PathBuf, source: io::Error },
    #[error("failed to read {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("malformed CSV in {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },
    #[error("failed to write {path}: {source}")]
    WriteOutput { path: PathBuf, source: io::Error },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SeedError {
    pub fn read_file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SeedError::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        SeedError::Csv {
            path: path.into(),
            source,
        }
    }

    pub fn write_output(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SeedError::WriteOutput {
            path: path.into(),
            source,
        }
    }

    /// Errors scoped to a single input file; the run logs these and moves on.
    pub fn is_per_file(&self) -> bool {
        matches!(self, SeedError::ReadFile { .. } | SeedError::Csv { .. })
    }
}
