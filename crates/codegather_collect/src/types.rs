use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CollectResult {
    pub root: PathBuf,
    /// Result paths of the dependency analysis, most recently discovered first
    pub files: Vec<PathBuf>,
    pub chunks: Vec<String>,
    /// cl100k_base token count of each chunk, parallel to `chunks`
    pub chunk_tokens: Vec<usize>,
    pub total_tokens: usize,
}

/// Output of the `deps` command; paths are relative to `root`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyReport {
    pub root: String,
    pub files: Vec<String>,
}
