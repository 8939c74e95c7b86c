use anyhow::Result;
use codegather_core::{DependencyAnalyzer, make_relative_path};
use log::{debug, info};

use crate::{
    collector::FileContentCollector,
    config::{CollectConfig, DepsConfig},
    optimizer::ContentSizeOptimizer,
    types::{CollectResult, DependencyReport},
};

/// Analyzes dependencies of the targets, reads every result file and packs
/// the contents into chunks.
pub fn run_collect(mut cfg: CollectConfig) -> Result<CollectResult> {
    info!("Starting collect");
    cfg.validate()?;
    let root = cfg.initialize()?;
    debug!(
        "Config: targets={:?}, depth={}, scope={:?}, ignore={:?}",
        cfg.targets, cfg.depth, cfg.scope, cfg.ignore
    );

    let analyzer = DependencyAnalyzer::factory(&cfg.analyzer_config(root.clone()))?;
    let files = analyzer.analyze()?;
    info!("Dependency analysis returned {} files", files.len());

    let contents = FileContentCollector::new(&root, cfg.no_comment).collect(&files)?;
    let optimizer = ContentSizeOptimizer::new(cfg.max_char, cfg.max_token)?;
    let chunks = optimizer.optimize(&contents);
    let chunk_tokens: Vec<usize> = chunks.iter().map(|c| optimizer.count_tokens(c)).collect();
    let total_tokens: usize = chunk_tokens.iter().sum();
    info!(
        "Collected {} files into {} chunks ({} tokens)",
        files.len(),
        chunks.len(),
        total_tokens
    );

    Ok(CollectResult { root, files, chunks, chunk_tokens, total_tokens })
}

/// Analyzes dependencies of the targets and reports them relative to the root.
pub fn run_deps(mut cfg: DepsConfig) -> Result<DependencyReport> {
    info!("Starting dependency listing");
    let root = cfg.initialize()?;

    let analyzer = DependencyAnalyzer::factory(&cfg.analyzer_config(root.clone()))?;
    let files = analyzer.analyze()?;
    info!("Dependency analysis returned {} files", files.len());

    Ok(DependencyReport {
        root: root.to_string_lossy().to_string(),
        files: files.iter().map(|f| make_relative_path(&root, f)).collect(),
    })
}
