//! Dependency analysis core for codegather.
//!
//! This crate finds the source files a set of start files depends on:
//! - Scanning a project root into an inventory of recognized files
//! - Classifying files by extension (Python, JavaScript family, unknown)
//! - Extracting imports per language (aliased `@/` specifiers for JS/TS,
//!   `from` imports for Python) and resolving them against the inventory
//! - Walking the import graph breadth-first up to a depth limit

mod analyzer;
mod config;
mod constants;
mod dependency;
mod error;
mod language;
mod paths;
mod scanner;

// Re-export public API
pub use analyzer::{
    FileAnalyzer, FromImport, JsAnalyzer, PyAnalyzer, UnknownAnalyzer, extract_from_imports,
    extract_module_paths,
};
pub use config::{AnalyzerConfig, ScanConfig};
pub use constants::{
    DEFAULT_ALIAS_MARKER, DEFAULT_DEPTH, DEFAULT_EXTENSIONS, DEFAULT_IGNORE_DIRS,
    RESOLVE_EXTENSIONS,
};
pub use dependency::DependencyAnalyzer;
pub use error::{AnalyzeError, Result};
pub use language::Language;
pub use paths::{has_path_prefix, make_absolute_path, make_relative_path};
pub use scanner::{Inventory, remove_ignored, retain_in_scope, scan_files};
