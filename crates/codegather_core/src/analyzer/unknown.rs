use std::path::{Path, PathBuf};

use super::FileAnalyzer;
use crate::{error::Result, scanner::Inventory};

/// Stand-in for files no analyzer understands. Never reads the file.
#[derive(Debug, Clone, Default)]
pub struct UnknownAnalyzer;

impl FileAnalyzer for UnknownAnalyzer {
    fn analyze(&self, _file: &Path, _inventory: &Inventory) -> Result<Vec<PathBuf>> {
        Ok(Vec::new())
    }
}
