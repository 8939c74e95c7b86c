use ignore::WalkBuilder;
use log::{debug, trace};
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use crate::{
    config::ScanConfig,
    error::{AnalyzeError, Result},
    paths::{has_path_prefix, make_absolute_path},
};

/// The recognized source files under a root, after scope and ignore filtering.
///
/// Keeps walk order for iteration and a hash index for membership tests.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    files: Vec<PathBuf>,
    index: HashSet<PathBuf>,
}

impl Inventory {
    pub fn from_paths(files: Vec<PathBuf>) -> Self {
        let index = files.iter().cloned().collect();
        Self { files, index }
    }

    /// Walks `root` and applies the scope and ignore filters (both root-relative).
    pub fn build(
        root: &Path,
        scan: &ScanConfig,
        scope_paths: &[String],
        ignore_paths: &[String],
    ) -> Result<Self> {
        let files = scan_files(root, scan)?;
        let files = retain_in_scope(root, files, scope_paths);
        let files = remove_ignored(root, files, ignore_paths);
        debug!("Inventory holds {} files under {}", files.len(), root.display());
        Ok(Self::from_paths(files))
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.index.contains(path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.files
    }

    /// Files whose path text starts with `prefix` without being equal to it.
    pub fn strictly_under<'a>(
        &'a self,
        prefix: &'a Path,
    ) -> impl Iterator<Item = &'a PathBuf> + 'a {
        self.files.iter().filter(move |f| f.as_path() != prefix && has_path_prefix(f, prefix))
    }
}

/// Recursively collects files under `root` whose names end with one of the configured extensions.
///
/// Directories named in `ignore_dirs` are pruned, so nothing below them is visited.
/// Walk failures (unreadable directory, permission denied) are returned, not skipped.
pub fn scan_files(root: &Path, scan: &ScanConfig) -> Result<Vec<PathBuf>> {
    debug!("Walking directory tree from root: {}", root.display());
    let ignore_dirs = scan.ignore_dirs.clone();
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .git_ignore(scan.git_ignore)
        .require_git(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |dent| {
            let is_dir = dent.file_type().is_some_and(|ft| ft.is_dir());
            if dent.depth() == 0 || !is_dir {
                return true;
            }
            let name = dent.file_name().to_string_lossy();
            let keep = !ignore_dirs.iter().any(|d| d.as_str() == name);
            if !keep {
                trace!("Pruning ignored directory: {}", dent.path().display());
            }
            keep
        });

    let mut files = Vec::new();
    for res in builder.build() {
        let dent = res.map_err(|source| AnalyzeError::Walk { root: root.to_path_buf(), source })?;
        let p = dent.path();
        if !p.is_file() {
            continue;
        }

        let name = dent.file_name().to_string_lossy();
        if scan.extensions.iter().any(|ext| name.ends_with(ext.as_str())) {
            trace!("Collected file: {}", p.display());
            files.push(p.to_path_buf());
        }
    }
    debug!("Collected {} files", files.len());
    Ok(files)
}

/// Keeps only files under at least one scope prefix. No scopes means no restriction.
pub fn retain_in_scope(root: &Path, files: Vec<PathBuf>, scope_paths: &[String]) -> Vec<PathBuf> {
    if scope_paths.is_empty() {
        return files;
    }
    let scopes: Vec<PathBuf> = scope_paths.iter().map(|p| make_absolute_path(root, p)).collect();
    debug!("Restricting inventory to scopes: {:?}", scopes);
    files.into_iter().filter(|f| scopes.iter().any(|s| has_path_prefix(f, s))).collect()
}

/// Drops files under any ignore prefix. No ignores means nothing is dropped.
pub fn remove_ignored(root: &Path, files: Vec<PathBuf>, ignore_paths: &[String]) -> Vec<PathBuf> {
    if ignore_paths.is_empty() {
        return files;
    }
    let ignores: Vec<PathBuf> = ignore_paths.iter().map(|p| make_absolute_path(root, p)).collect();
    debug!("Excluding ignored paths: {:?}", ignores);
    files.into_iter().filter(|f| !ignores.iter().any(|i| has_path_prefix(f, i))).collect()
}
