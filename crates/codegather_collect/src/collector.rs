use anyhow::{Context, Result};
use codegather_core::{Language, make_relative_path};
use log::{debug, trace};
use regex::Regex;
use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

static PY_DOCSTRING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)""".*?"""\n"#).expect("docstring pattern is valid"));
static PY_LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"# .*?\n").expect("line comment pattern is valid"));
static JS_BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("block comment pattern is valid"));
static JS_LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"// .*?\n").expect("line comment pattern is valid"));

/// Removes `"""..."""` blocks (with the newline after them) and `# ` comments up to end of line.
pub fn remove_py_comments(content: &str) -> String {
    let without_docstrings = PY_DOCSTRING.replace_all(content, "");
    PY_LINE_COMMENT.replace_all(&without_docstrings, "").into_owned()
}

/// Removes `/* ... */` blocks and `// ` comments up to end of line.
pub fn remove_js_comments(content: &str) -> String {
    let without_blocks = JS_BLOCK_COMMENT.replace_all(content, "");
    JS_LINE_COMMENT.replace_all(&without_blocks, "").into_owned()
}

/// Reads result files and renders each as a fenced block headed by its root-relative path.
#[derive(Debug, Clone)]
pub struct FileContentCollector {
    root: PathBuf,
    strip_comments: bool,
}

impl FileContentCollector {
    pub fn new(root: impl Into<PathBuf>, strip_comments: bool) -> Self {
        Self { root: root.into(), strip_comments }
    }

    /// One formatted entry per path, in the given order.
    pub fn collect(&self, paths: &[PathBuf]) -> Result<Vec<String>> {
        debug!("Collecting contents of {} files", paths.len());
        paths
            .iter()
            .map(|path| {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                let content = self.without_comments(path, content);
                Ok(self.format_content(path, &content))
            })
            .collect()
    }

    fn without_comments(&self, path: &Path, content: String) -> String {
        if !self.strip_comments {
            return content;
        }
        match Language::classify(path) {
            Language::Python => {
                trace!("Stripping Python comments from {}", path.display());
                remove_py_comments(&content)
            }
            Language::JavaScript => {
                trace!("Stripping JS comments from {}", path.display());
                remove_js_comments(&content)
            }
            Language::Unknown => content,
        }
    }

    pub fn format_content(&self, path: &Path, content: &str) -> String {
        let relative = make_relative_path(&self.root, path);
        format!("{}\n```\n{}\n```\n", relative, content)
    }
}
