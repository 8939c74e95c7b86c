use log::{debug, trace};
use regex::Regex;
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use super::{FileAnalyzer, read_source};
use crate::{
    constants::RESOLVE_EXTENSIONS, error::Result, paths::make_absolute_path, scanner::Inventory,
};

// `import ... from '<module>'` and `export ... from '<module>'`, possibly spanning lines
static FROM_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\b(?:import|export)\b[^;]*?\bfrom\s*['"]([^'"]+)['"]"#)
        .expect("import/export pattern is valid")
});

/// Extracts aliased module paths from `import`/`export ... from` statements.
///
/// Only specifiers starting with `alias_marker` are kept, with the marker removed.
/// Relative (`./x`) and bare package (`react`) specifiers are ignored.
pub fn extract_module_paths(content: &str, alias_marker: &str) -> Vec<String> {
    FROM_CLAUSE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| m.as_str().strip_prefix(alias_marker))
        .map(str::to_string)
        .collect()
}

/// JavaScript/TypeScript analyzer driven by the root alias marker (`@/` by default).
#[derive(Debug, Clone)]
pub struct JsAnalyzer {
    root: PathBuf,
    alias_marker: String,
}

impl JsAnalyzer {
    pub fn new(root: impl Into<PathBuf>, alias_marker: impl Into<String>) -> Self {
        Self { root: root.into(), alias_marker: alias_marker.into() }
    }

    /// Tries `<root>/<module_path><ext>` for each resolve extension in order;
    /// the first inventory hit wins.
    pub fn resolve_module_path(&self, module_path: &str, inventory: &Inventory) -> Option<PathBuf> {
        let base = make_absolute_path(&self.root, module_path);
        trace!("Probing base path: {}", base.display());

        for ext in RESOLVE_EXTENSIONS {
            let mut candidate = OsString::from(base.as_os_str());
            candidate.push(ext);
            let candidate = PathBuf::from(candidate);
            if inventory.contains(&candidate) {
                trace!("Resolved '{}' to {}", module_path, candidate.display());
                return Some(candidate);
            }
        }

        trace!("No inventory file matches '{}'", module_path);
        None
    }
}

impl FileAnalyzer for JsAnalyzer {
    fn analyze(&self, file: &Path, inventory: &Inventory) -> Result<Vec<PathBuf>> {
        trace!("Scanning JS/TS imports in {}", file.display());
        let src = read_source(file)?;
        let module_paths = extract_module_paths(&src, &self.alias_marker);

        let deps: Vec<PathBuf> = module_paths
            .iter()
            .filter_map(|m| self.resolve_module_path(m, inventory))
            .collect();

        debug!(
            "Resolved {} of {} aliased imports in {}",
            deps.len(),
            module_paths.len(),
            file.display()
        );
        Ok(deps)
    }
}
