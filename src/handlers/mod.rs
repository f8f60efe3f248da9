//! Request handlers for the binary: load inputs, run the engine, shape output.

pub mod predict;
pub mod zones;

use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to load an input file
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid snapshot JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid zone CSV in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl SnapshotError {
    /// Stable code for the JSON error envelope
    pub fn code(&self) -> &'static str {
        match self {
            SnapshotError::Io { .. } => "READ_FAILED",
            SnapshotError::Json { .. } => "INVALID_SNAPSHOT",
            SnapshotError::Csv { .. } => "INVALID_ZONES",
        }
    }
}

/// Read a whole input file; `-` reads stdin
pub fn read_input(path: &Path) -> Result<String, SnapshotError> {
    let io_err = |source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    };

    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(io_err)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).map_err(io_err)
    }
}
