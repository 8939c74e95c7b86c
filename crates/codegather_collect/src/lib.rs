//! Collects the source of a project's dependency closure into paste-ready chunks.
//!
//! Built on [`codegather_core`]: the dependency analysis picks the files, this
//! crate reads them, optionally strips comments, formats each one as a fenced
//! block under its root-relative path and packs the blocks into chunks that
//! respect a character and a token budget.
//!
//! # Examples
//!
//! ```no_run
//! use codegather_collect::{CollectConfig, print_chunks, print_result, run_collect};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut cfg = CollectConfig::new("/path/to/project");
//! cfg.targets = vec!["src/main.py".to_string()];
//! cfg.max_char = 50_000;
//!
//! let result = run_collect(cfg.clone())?;
//!
//! let mut stdout = BufWriter::new(std::io::stdout());
//! print_chunks(&mut stdout, &result)?;
//! print_result(&mut stdout, &result, cfg.max_char, cfg.max_token)?;
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```

mod collector;
mod config;
mod optimizer;
mod reporter;
mod runner;
mod types;
mod writer;

// Re-export public API
pub use collector::{FileContentCollector, remove_js_comments, remove_py_comments};
pub use config::{
    CollectConfig, DEFAULT_COLLECT_DEPTH, DEFAULT_MAX_CHAR, DEFAULT_MAX_TOKEN, DepsConfig,
};
pub use optimizer::ContentSizeOptimizer;
pub use reporter::{
    format_number, print_chunks, print_dependency_report, print_result, print_saved,
};
pub use runner::{run_collect, run_deps};
pub use types::{CollectResult, DependencyReport};
pub use writer::write_chunks;
