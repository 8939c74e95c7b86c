use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while building the inventory or analyzing dependencies.
///
/// Nothing here is retried: any variant aborts the whole analysis.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("Failed to read {}: {source}", .path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to walk {}: {source}", .root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: ignore::Error,
    },

    #[error("Failed to parse {} at {line}:{column}: {message}", .path.display())]
    SyntaxParse { path: PathBuf, line: usize, column: usize, message: String },

    #[error("Invalid configuration: {0}")]
    Validation(String),
}

impl AnalyzeError {
    pub(crate) fn file_system(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AnalyzeError::FileSystem { path: path.into(), source }
    }

    /// True for filesystem failures, whether they came from a read or from the directory walk.
    pub fn is_file_system(&self) -> bool {
        matches!(self, AnalyzeError::FileSystem { .. } | AnalyzeError::Walk { .. })
    }
}

pub type Result<T> = std::result::Result<T, AnalyzeError>;
