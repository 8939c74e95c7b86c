use log::{debug, info, trace};
use std::{
    collections::{HashSet, VecDeque},
    path::PathBuf,
};

use crate::{
    analyzer::{FileAnalyzer, JsAnalyzer, PyAnalyzer, UnknownAnalyzer},
    config::AnalyzerConfig,
    error::Result,
    language::Language,
    paths::{make_absolute_path, make_relative_path},
    scanner::Inventory,
};

/// Breadth-first, depth-limited dependency traversal over the inventory.
///
/// Each instance owns its inventory and analyzers; nothing is shared between
/// instances and nothing is cached across `analyze` calls.
pub struct DependencyAnalyzer {
    root: PathBuf,
    start_paths: Vec<PathBuf>,
    inventory: Inventory,
    max_depth: usize,
    python: PyAnalyzer,
    javascript: JsAnalyzer,
    unknown: UnknownAnalyzer,
}

impl DependencyAnalyzer {
    /// Validates the config, resolves paths against the canonical root and scans the
    /// inventory once.
    pub fn factory(cfg: &AnalyzerConfig) -> Result<Self> {
        let (root, max_depth) = cfg.validate()?;
        info!("Using root directory: {}", root.display());

        let start_paths: Vec<PathBuf> =
            cfg.start_paths.iter().map(|p| make_absolute_path(&root, p)).collect();
        debug!("Start paths: {:?}", start_paths);

        let inventory = Inventory::build(&root, &cfg.scan, &cfg.scope_paths, &cfg.ignore_paths)?;
        info!("Found {} candidate files", inventory.len());

        Ok(Self {
            python: PyAnalyzer::new(&root),
            javascript: JsAnalyzer::new(&root, &cfg.alias_marker),
            unknown: UnknownAnalyzer,
            root,
            start_paths,
            inventory,
            max_depth,
        })
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    fn analyzer_for(&self, language: Language) -> &dyn FileAnalyzer {
        match language {
            Language::Python => &self.python,
            Language::JavaScript => &self.javascript,
            Language::Unknown => &self.unknown,
        }
    }

    /// Returns the visited files, most recently discovered first.
    ///
    /// With no start paths the whole inventory is returned untraversed; with a
    /// depth of zero the start paths come back unchanged. Any read or parse
    /// failure aborts the traversal.
    pub fn analyze(&self) -> Result<Vec<PathBuf>> {
        if self.start_paths.is_empty() {
            debug!("No start paths, returning the whole inventory");
            return Ok(self.inventory.paths().to_vec());
        }
        if self.max_depth == 0 {
            debug!("Depth 0, returning start paths unexpanded");
            return Ok(self.start_paths.clone());
        }

        info!("== Parsing module dependencies ==");
        let mut result: VecDeque<PathBuf> = VecDeque::new();
        let mut visited: HashSet<PathBuf> = HashSet::new();
        let mut frontier: Vec<PathBuf> = self.start_paths.clone();

        for depth in 0..=self.max_depth {
            info!("Depth: {}", depth);
            let mut next: Vec<PathBuf> = Vec::new();

            for path in &frontier {
                if visited.contains(path) {
                    trace!("Already visited: {}", path.display());
                    continue;
                }

                // a directory-like path pulls in everything beneath it
                next.extend(self.inventory.strictly_under(path).cloned());

                if !self.inventory.contains(path) {
                    trace!("Not in inventory, skipping: {}", path.display());
                    continue;
                }

                info!("  {}", make_relative_path(&self.root, path));
                visited.insert(path.clone());
                result.push_front(path.clone());

                let language = Language::classify(path);
                let deps = self.analyzer_for(language).analyze(path, &self.inventory)?;
                trace!("{} yielded {} dependencies", path.display(), deps.len());
                next.extend(deps);
            }

            if next.is_empty() {
                debug!("Frontier exhausted after depth {}", depth);
                break;
            }
            frontier = next;
        }

        debug!("Visited {} files", result.len());
        Ok(result.into())
    }
}
