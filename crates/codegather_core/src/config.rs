use log::debug;
use std::path::PathBuf;

use crate::{
    constants::{DEFAULT_ALIAS_MARKER, DEFAULT_DEPTH, DEFAULT_EXTENSIONS, DEFAULT_IGNORE_DIRS},
    error::{AnalyzeError, Result},
};

/// Controls which files the inventory scanner collects.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Directory names pruned from the walk, matched against the bare name
    pub ignore_dirs: Vec<String>,
    /// File name suffixes to collect, with leading dot
    pub extensions: Vec<String>,
    /// Also honor `.gitignore` files found during the walk
    pub git_ignore: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            ignore_dirs: DEFAULT_IGNORE_DIRS.iter().map(|d| d.to_string()).collect(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            git_ignore: false,
        }
    }
}

/// Inputs of one dependency analysis run.
///
/// All path lists are relative to `root`. An empty `start_paths` means the
/// whole inventory is returned without traversal.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub root: PathBuf,
    pub start_paths: Vec<String>,
    pub scope_paths: Vec<String>,
    pub ignore_paths: Vec<String>,
    /// Maximum number of hops from the start set; `None` is unbounded
    pub depth: Option<i64>,
    pub scan: ScanConfig,
    /// Prefix marking JS/TS specifiers that resolve from the project root
    pub alias_marker: String,
}

impl AnalyzerConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            start_paths: Vec::new(),
            scope_paths: Vec::new(),
            ignore_paths: Vec::new(),
            depth: None,
            scan: ScanConfig::default(),
            alias_marker: DEFAULT_ALIAS_MARKER.to_string(),
        }
    }

    pub fn with_start_paths<S: AsRef<str>>(mut self, paths: &[S]) -> Self {
        self.start_paths = paths.iter().map(|p| p.as_ref().to_string()).collect();
        self
    }

    pub fn with_scope_paths<S: AsRef<str>>(mut self, paths: &[S]) -> Self {
        self.scope_paths = paths.iter().map(|p| p.as_ref().to_string()).collect();
        self
    }

    pub fn with_ignore_paths<S: AsRef<str>>(mut self, paths: &[S]) -> Self {
        self.ignore_paths = paths.iter().map(|p| p.as_ref().to_string()).collect();
        self
    }

    pub fn with_depth(mut self, depth: i64) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Checks the configuration and returns the canonical root and the effective depth.
    pub(crate) fn validate(&self) -> Result<(PathBuf, usize)> {
        if !self.root.is_dir() {
            return Err(AnalyzeError::Validation(format!(
                "root {} is not an existing directory",
                self.root.display()
            )));
        }
        let root = self
            .root
            .canonicalize()
            .map_err(|e| AnalyzeError::file_system(&self.root, e))?;

        let depth = match self.depth {
            None => DEFAULT_DEPTH,
            Some(d) if d < 0 => {
                return Err(AnalyzeError::Validation(format!(
                    "depth must be non-negative, got {}",
                    d
                )));
            }
            Some(d) => usize::try_from(d).unwrap_or(DEFAULT_DEPTH),
        };

        if self.scan.extensions.is_empty() {
            return Err(AnalyzeError::Validation(
                "at least one file extension is required".to_string(),
            ));
        }
        if self.alias_marker.is_empty() {
            return Err(AnalyzeError::Validation("alias marker must not be empty".to_string()));
        }

        debug!("Validated config: root={}, depth={}", root.display(), depth);
        Ok((root, depth))
    }
}
