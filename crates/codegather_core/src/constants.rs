//! Constants for file extensions, pruned directories and traversal limits.
//!
//! ## Recognized Extensions
//!
//! - **Python**: `.py`
//! - **JavaScript family**: `.js`, `.json`, `.jsx`, `.ts`, `.tsx`
//!
//! Extensions are stored with their leading dot because the scanner matches
//! them against the end of the file name, not against `Path::extension`.

/// Extensions classified as Python sources
pub const PYTHON_EXTENSIONS: &[&str] = &[".py"];

/// Extensions classified as JavaScript-family sources
pub const JAVASCRIPT_EXTENSIONS: &[&str] = &[
    ".js",   // JavaScript
    ".json", // JSON modules
    ".jsx",  // JavaScript with JSX
    ".ts",   // TypeScript
    ".tsx",  // TypeScript with JSX
];

/// Extensions the scanner collects by default
pub const DEFAULT_EXTENSIONS: &[&str] = &[".py", ".js", ".json", ".jsx", ".ts", ".tsx"];

/// Extensions appended to an aliased module path when probing the inventory (in priority order)
pub const RESOLVE_EXTENSIONS: &[&str] = &[".js", ".json", ".jsx", ".ts", ".tsx"];

/// Directory names whose subtrees are never walked
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[
    "__pycache__",
    "node_modules",
    "cypress",
    "coverage",
    ".next",
    ".devcontainer",
    ".storybook",
    ".swc",
    ".vscode",
];

/// Import prefix that marks a JS/TS specifier as relative to the project root
pub const DEFAULT_ALIAS_MARKER: &str = "@/";

/// Traversal depth used when none is given; large enough to act as "unbounded"
pub const DEFAULT_DEPTH: usize = 9999;

/// File name that turns a Python directory into a package
pub const PYTHON_PACKAGE_INIT: &str = "__init__.py";
