use log::{debug, trace};
use std::{
    collections::{BTreeSet, VecDeque},
    fs,
    path::{Path, PathBuf},
};
use tree_sitter::{Node, Parser, Tree};

use super::{FileAnalyzer, read_source};
use crate::{
    constants::PYTHON_PACKAGE_INIT,
    error::{AnalyzeError, Result},
    paths::make_absolute_path,
    scanner::Inventory,
};

/// One `from X import ...` statement: the dotted module text and its count of leading dots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FromImport {
    pub module: String,
    pub level: usize,
}

/// Parses `source` and returns every `from ... import` statement, nested ones included.
///
/// Statements are yielded breadth-first, so module-level imports come before
/// imports inside functions or classes. Any syntax error fails the whole file.
pub fn extract_from_imports(path: &Path, source: &str) -> Result<Vec<FromImport>> {
    let tree = parse_python(path, source)?;
    let mut imports = Vec::new();

    let mut queue: VecDeque<Node> = VecDeque::new();
    queue.push_back(tree.root_node());
    while let Some(node) = queue.pop_front() {
        if node.kind() == "import_from_statement"
            && let Some(module_node) = node.child_by_field_name("module_name")
        {
            let text = module_node.utf8_text(source.as_bytes()).unwrap_or_default();
            let text: String = text.chars().filter(|c| !c.is_whitespace()).collect();
            let level = text.chars().take_while(|c| *c == '.').count();
            let module = text[level..].to_string();
            trace!("Found from-import: level={} module='{}'", level, module);
            imports.push(FromImport { module, level });
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            queue.push_back(child);
        }
    }

    Ok(imports)
}

fn parse_python(path: &Path, source: &str) -> Result<Tree> {
    let syntax_error = |line: usize, column: usize, message: String| AnalyzeError::SyntaxParse {
        path: path.to_path_buf(),
        line,
        column,
        message,
    };

    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::language())
        .map_err(|e| syntax_error(0, 0, format!("Python grammar unavailable: {}", e)))?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| syntax_error(0, 0, "parser produced no syntax tree".to_string()))?;

    if tree.root_node().has_error() {
        let (line, column, message) = first_error(tree.root_node());
        return Err(syntax_error(line, column, message));
    }
    if let Some((line, column, message)) = first_python2_construct(tree.root_node()) {
        return Err(syntax_error(line, column, message));
    }
    Ok(tree)
}

/// The grammar also accepts Python 2 statements and unindented suites; Python 3 rejects both.
fn first_python2_construct(root: Node) -> Option<(usize, usize, String)> {
    let mut queue: VecDeque<Node> = VecDeque::new();
    queue.push_back(root);
    while let Some(node) = queue.pop_front() {
        let pos = node.start_position();
        match node.kind() {
            "print_statement" => {
                let message = "missing parentheses in call to 'print'".to_string();
                return Some((pos.row + 1, pos.column + 1, message));
            }
            "exec_statement" => {
                return Some((pos.row + 1, pos.column + 1, "invalid syntax".to_string()));
            }
            "block" => {
                if let Some(parent) = node.parent() {
                    let header = parent.start_position();
                    let body = first_statement(node).unwrap_or(node).start_position();
                    if body.row > header.row && body.column <= header.column {
                        let message = "expected an indented block".to_string();
                        return Some((body.row + 1, body.column + 1, message));
                    }
                }
            }
            _ => {}
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            queue.push_back(child);
        }
    }
    None
}

fn first_statement(block: Node) -> Option<Node> {
    let mut cursor = block.walk();
    let first = block.named_children(&mut cursor).find(|c| c.kind() != "comment");
    first
}

/// Locates the first error or missing node, reported 1-based.
fn first_error(root: Node) -> (usize, usize, String) {
    let mut queue: VecDeque<Node> = VecDeque::new();
    queue.push_back(root);
    while let Some(node) = queue.pop_front() {
        if node.is_error() || node.is_missing() {
            let pos = node.start_position();
            let message = if node.is_missing() {
                format!("missing '{}'", node.kind())
            } else {
                "invalid syntax".to_string()
            };
            return (pos.row + 1, pos.column + 1, message);
        }
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.has_error() || child.is_missing() {
                queue.push_back(child);
            }
        }
    }
    let pos = root.start_position();
    (pos.row + 1, pos.column + 1, "invalid syntax".to_string())
}

/// Python analyzer: resolves `from` imports to `.py` files under the root.
#[derive(Debug, Clone)]
pub struct PyAnalyzer {
    root: PathBuf,
}

impl PyAnalyzer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Turns a possibly relative import into an absolute dotted module name.
    ///
    /// Level 1 is the importing file's own directory; each further level
    /// ascends one more directory. That directory, as a dotted path relative
    /// to the root, becomes the package prefix.
    pub fn absolute_module_name(&self, file: &Path, import: &FromImport) -> String {
        if import.level == 0 {
            return import.module.clone();
        }

        let mut base = file.parent().unwrap_or(&self.root);
        for _ in 1..import.level {
            base = base.parent().unwrap_or(base);
        }
        let package = self.package_name(base);
        trace!(
            "Relative import level {} from {} uses package '{}'",
            import.level,
            file.display(),
            package
        );

        match (package.is_empty(), import.module.is_empty()) {
            (true, _) => import.module.clone(),
            (false, true) => package,
            (false, false) => format!("{}.{}", package, import.module),
        }
    }

    fn package_name(&self, dir: &Path) -> String {
        match dir.strip_prefix(&self.root) {
            Ok(rel) => rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy().to_string())
                .collect::<Vec<_>>()
                .join("."),
            // outside the root only the directory name is known
            Err(_) => dir.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default(),
        }
    }

    fn module_dir(&self, module: &str) -> PathBuf {
        make_absolute_path(&self.root, &module.replace('.', "/"))
    }

    /// True when `module` names a directory under the root holding `__init__.py`.
    pub fn is_package(&self, module: &str) -> bool {
        !module.is_empty() && self.module_dir(module).join(PYTHON_PACKAGE_INIT).is_file()
    }

    /// Immediate submodules of a package: `.py` files other than `__init__.py`
    /// plus subdirectories that are packages themselves, sorted by name.
    pub fn submodules(&self, module: &str) -> Result<Vec<String>> {
        let dir = self.module_dir(module);
        let entries = fs::read_dir(&dir).map_err(|e| AnalyzeError::file_system(&dir, e))?;

        let mut names = BTreeSet::new();
        for entry in entries {
            let entry = entry.map_err(|e| AnalyzeError::file_system(&dir, e))?;
            let path = entry.path();
            let file_name = entry.file_name().to_string_lossy().to_string();

            let name = if path.is_dir() {
                if !path.join(PYTHON_PACKAGE_INIT).is_file() {
                    continue;
                }
                file_name
            } else {
                match file_name.strip_suffix(".py") {
                    Some(stem) if stem != "__init__" => stem.to_string(),
                    _ => continue,
                }
            };
            if name.is_empty() || name.contains('.') {
                continue;
            }
            names.insert(name);
        }
        Ok(names.into_iter().collect())
    }

    /// Resolved module names for one import; packages expand into all of their submodules.
    fn module_names(&self, file: &Path, import: &FromImport) -> Result<Vec<String>> {
        let module = self.absolute_module_name(file, import);
        if self.is_package(&module) {
            let subs = self.submodules(&module)?;
            debug!("Expanding package '{}' into {} submodules", module, subs.len());
            return Ok(subs.into_iter().map(|s| format!("{}.{}", module, s)).collect());
        }
        Ok(vec![module])
    }

    /// `pkg.mod` becomes `<root>/pkg/mod.py`.
    pub fn module_to_path(&self, module: &str) -> PathBuf {
        make_absolute_path(&self.root, &format!("{}.py", module.replace('.', "/")))
    }
}

impl FileAnalyzer for PyAnalyzer {
    fn analyze(&self, file: &Path, inventory: &Inventory) -> Result<Vec<PathBuf>> {
        trace!("Parsing Python imports in {}", file.display());
        let src = read_source(file)?;
        let imports = extract_from_imports(file, &src)?;

        let mut module_names = Vec::new();
        for import in &imports {
            module_names.extend(self.module_names(file, import)?);
        }

        let deps: Vec<PathBuf> = module_names
            .iter()
            .filter(|m| !m.is_empty())
            .map(|m| self.module_to_path(m))
            .filter(|p| {
                let known = inventory.contains(p);
                if !known {
                    trace!("Dropping module outside inventory: {}", p.display());
                }
                known
            })
            .collect();

        debug!(
            "Resolved {} dependencies from {} from-imports in {}",
            deps.len(),
            imports.len(),
            file.display()
        );
        Ok(deps)
    }
}
