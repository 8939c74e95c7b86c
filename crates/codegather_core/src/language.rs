use std::path::Path;

use crate::constants::{JAVASCRIPT_EXTENSIONS, PYTHON_EXTENSIONS};

/// Source language of a file, decided by extension alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    JavaScript,
    Unknown,
}

impl Language {
    /// Classifies `path` by its extension. Total: anything unrecognized is `Unknown`.
    pub fn classify(path: &Path) -> Language {
        let ext = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => format!(".{}", ext),
            None => return Language::Unknown,
        };

        if PYTHON_EXTENSIONS.contains(&ext.as_str()) {
            Language::Python
        } else if JAVASCRIPT_EXTENSIONS.contains(&ext.as_str()) {
            Language::JavaScript
        } else {
            Language::Unknown
        }
    }
}
