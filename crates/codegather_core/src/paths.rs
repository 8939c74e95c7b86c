use path_clean::clean;
use std::path::{Path, PathBuf};

/// Joins a root-relative path onto `root`.
///
/// Leading slashes are stripped first so that `/src/a` and `src/a` land on the
/// same file. The result is lexically cleaned (`.` and `..` collapsed) but never
/// touches the filesystem.
pub fn make_absolute_path(root: &Path, relative: &str) -> PathBuf {
    let relative = relative.trim_start_matches('/');
    if relative.is_empty() {
        return clean(root);
    }
    clean(root.join(relative))
}

/// Renders `absolute` relative to `root`, falling back to the full path when it lies outside.
pub fn make_relative_path(root: &Path, absolute: &Path) -> String {
    match absolute.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => rel.to_string_lossy().to_string(),
        Err(_) => absolute.to_string_lossy().to_string(),
    }
}

/// Plain string prefix test on the raw path text.
///
/// Not `Path::starts_with`: a scope of `src/app` also
/// matches `src/application.ts`, the same way a textual prefix would.
pub fn has_path_prefix(path: &Path, prefix: &Path) -> bool {
    path.as_os_str().as_encoded_bytes().starts_with(prefix.as_os_str().as_encoded_bytes())
}
