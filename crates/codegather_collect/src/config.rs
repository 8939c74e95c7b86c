use anyhow::{Context, Result, bail};
use clap::Parser;
use codegather_core::AnalyzerConfig;
use log::{debug, trace};
use std::{env, path::PathBuf};

/// Default number of hops followed from the targets
pub const DEFAULT_COLLECT_DEPTH: i64 = 999;

/// Default character budget per chunk; large enough to mean "one chunk"
pub const DEFAULT_MAX_CHAR: usize = 999_999_999;

/// Default token budget per chunk (cl100k_base tokens)
pub const DEFAULT_MAX_TOKEN: usize = 120_000;

#[derive(Debug, Clone, Parser)]
#[command(name = "collect")]
#[command(about = "Collect the contents of files reachable from the targets")]
pub struct CollectConfig {
    /// Root directory of the project (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Files or directories to start from, relative to the root. Empty collects everything
    pub targets: Vec<String>,

    /// Maximum depth of dependency analysis
    #[arg(short, long, default_value_t = DEFAULT_COLLECT_DEPTH, allow_negative_numbers = true)]
    pub depth: i64,

    /// Strip comments and docstrings from the collected contents
    #[arg(long)]
    pub no_comment: bool,

    /// Maximum number of characters per chunk
    #[arg(long, default_value_t = DEFAULT_MAX_CHAR)]
    pub max_char: usize,

    /// Maximum number of tokens per chunk
    #[arg(long, default_value_t = DEFAULT_MAX_TOKEN)]
    pub max_token: usize,

    /// Restrict analysis to these paths (relative to the root)
    #[arg(short, long, num_args = 1..)]
    pub scope: Vec<String>,

    /// Exclude these paths from analysis (relative to the root)
    #[arg(short, long, num_args = 1..)]
    pub ignore: Vec<String>,

    /// Also skip files matched by .gitignore
    #[arg(long)]
    pub git_ignore: bool,

    /// Write the chunks to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CollectConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            targets: Vec::new(),
            depth: DEFAULT_COLLECT_DEPTH,
            no_comment: false,
            max_char: DEFAULT_MAX_CHAR,
            max_token: DEFAULT_MAX_TOKEN,
            scope: Vec::new(),
            ignore: Vec::new(),
            git_ignore: false,
            output: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.depth < 0 {
            bail!("depth must be non-negative, got {}", self.depth);
        }
        if self.max_char < 1 {
            bail!("max-char must be at least 1, got {}", self.max_char);
        }
        if self.max_token < 1 {
            bail!("max-token must be at least 1, got {}", self.max_token);
        }
        Ok(())
    }

    /// Resolves and canonicalizes the root, storing it back into the config.
    pub fn initialize(&mut self) -> Result<PathBuf> {
        let root = resolve_root(self.root.take())?;
        self.root = Some(root.clone());
        Ok(root)
    }

    pub fn analyzer_config(&self, root: PathBuf) -> AnalyzerConfig {
        let mut cfg = AnalyzerConfig::new(root)
            .with_start_paths(&self.targets)
            .with_scope_paths(&self.scope)
            .with_ignore_paths(&self.ignore)
            .with_depth(self.depth);
        cfg.scan.git_ignore = self.git_ignore;
        cfg
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "deps")]
#[command(about = "List the files reachable from the targets")]
pub struct DepsConfig {
    /// Root directory of the project (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Files or directories to start from, relative to the root. Empty lists everything
    pub targets: Vec<String>,

    /// Maximum depth of dependency analysis (unbounded when omitted)
    #[arg(short, long, allow_negative_numbers = true)]
    pub depth: Option<i64>,

    /// Restrict analysis to these paths (relative to the root)
    #[arg(short, long, num_args = 1..)]
    pub scope: Vec<String>,

    /// Exclude these paths from analysis (relative to the root)
    #[arg(short, long, num_args = 1..)]
    pub ignore: Vec<String>,

    /// Also skip files matched by .gitignore
    #[arg(long)]
    pub git_ignore: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl DepsConfig {
    pub fn initialize(&mut self) -> Result<PathBuf> {
        let root = resolve_root(self.root.take())?;
        self.root = Some(root.clone());
        Ok(root)
    }

    pub fn analyzer_config(&self, root: PathBuf) -> AnalyzerConfig {
        let mut cfg = AnalyzerConfig::new(root)
            .with_start_paths(&self.targets)
            .with_scope_paths(&self.scope)
            .with_ignore_paths(&self.ignore);
        cfg.scan.git_ignore = self.git_ignore;
        match self.depth {
            Some(depth) => cfg.with_depth(depth),
            None => cfg,
        }
    }
}

pub(crate) fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf> {
    let root = match root {
        Some(r) => {
            debug!("Using provided root directory: {:?}", r);
            r
        }
        None => {
            let cwd = env::current_dir().context("Failed to read the current directory")?;
            debug!("No root provided, using current directory: {:?}", cwd);
            cwd
        }
    };
    let canonical = root
        .canonicalize()
        .with_context(|| format!("Root directory {} does not exist", root.display()))?;
    trace!("Canonical root: {:?}", canonical);
    Ok(canonical)
}
