//! Per-language strategies that turn one source file into the inventory files it imports.

mod javascript;
mod python;
mod unknown;

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    error::{AnalyzeError, Result},
    scanner::Inventory,
};

pub use javascript::{JsAnalyzer, extract_module_paths};
pub use python::{FromImport, PyAnalyzer, extract_from_imports};
pub use unknown::UnknownAnalyzer;

/// Finds the dependencies of a single file.
///
/// Implementations only return paths contained in `inventory`; unresolvable
/// imports are dropped silently. Duplicates are allowed through.
pub trait FileAnalyzer {
    fn analyze(&self, file: &Path, inventory: &Inventory) -> Result<Vec<PathBuf>>;
}

pub(crate) fn read_source(file: &Path) -> Result<String> {
    fs::read_to_string(file).map_err(|e| AnalyzeError::file_system(file, e))
}
