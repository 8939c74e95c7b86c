//! Mock project shared by the integration tests.
//!
//! Layout (33 recognized files, 13 of them under `ts_mock/`):
//! - `ts_mock/`: `ts_mock_1.ts` imports `ts_mock_a_1` and `ts_mock_b_1` through the
//!   `@/` alias, each of which imports the `*_1` file of its two subdirectories
//! - `py_mock/`: the same shape in Python with absolute `from` imports, plus
//!   `py_mock_a/py_mock_a_2.py` using relative imports
//! - `js_mock/`, `pkg_mock/` and `pkg_consumer.py`: JSX/JSON resolution and
//!   package expansion
//! - noise that must never be collected: a README, a stylesheet and files in
//!   pruned directories

#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};
use tempfile::TempDir;

pub const TOTAL_FILES: usize = 33;
pub const TS_MOCK_FILES: usize = 13;

pub fn create_test_file(dir: &Path, path: &str, content: &str) -> PathBuf {
    let file_path = dir.join(path);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(&file_path, content).expect("Failed to write test file");
    file_path
}

fn ts_body(name: &str) -> String {
    let export = format!("export const {name} = '{name}';\n\n");
    let point = "interface Point {\n  x: number;\n  y: number;\n}\n\n";
    format!("{export}{point}console.log({name});\n")
}

fn py_body(name: &str) -> String {
    format!("{name} = '{name}'\n\n\ndef describe() -> str:\n    return {name}\n")
}

fn write_ts(root: &Path, rel: &str, imports: &[&str]) {
    let name = Path::new(rel).file_stem().unwrap().to_string_lossy().to_string();
    let mut content = String::new();
    for target in imports {
        let ident = Path::new(target).file_name().unwrap().to_string_lossy().to_string();
        content.push_str(&format!("import {{ {ident} }} from '@/{target}';\n"));
    }
    content.push('\n');
    content.push_str(&ts_body(&name));
    create_test_file(root, rel, &content);
}

fn write_py(root: &Path, rel: &str, header: &str) {
    let name = Path::new(rel).file_stem().unwrap().to_string_lossy().to_string();
    create_test_file(root, rel, &format!("{header}\n{}", py_body(&name)));
}

/// Builds the mock project in a fresh temp dir.
pub fn build_mock_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    // ts_mock: 13 files
    write_ts(
        root,
        "ts_mock/ts_mock_1.ts",
        &["ts_mock/ts_mock_a/ts_mock_a_1", "ts_mock/ts_mock_b/ts_mock_b_1"],
    );
    for branch in ["a", "b"] {
        let dir = format!("ts_mock/ts_mock_{branch}");
        write_ts(
            root,
            &format!("{dir}/ts_mock_{branch}_1.ts"),
            &[
                &format!("{dir}/ts_mock_{branch}_a/ts_mock_{branch}_a_1"),
                &format!("{dir}/ts_mock_{branch}_b/ts_mock_{branch}_b_1"),
            ],
        );
        write_ts(root, &format!("{dir}/ts_mock_{branch}_2.ts"), &[]);
        for leaf in ["a", "b"] {
            for n in [1, 2] {
                write_ts(
                    root,
                    &format!("{dir}/ts_mock_{branch}_{leaf}/ts_mock_{branch}_{leaf}_{n}.ts"),
                    &[],
                );
            }
        }
    }

    // py_mock: 13 files
    write_py(
        root,
        "py_mock/py_mock_1.py",
        concat!(
            "import os\nimport sys\n\n",
            "from py_mock.py_mock_a.py_mock_a_1 import py_mock_a_1\n",
            "from py_mock.py_mock_b.py_mock_b_1 import py_mock_b_1\n",
        ),
    );
    for branch in ["a", "b"] {
        let pkg = format!("py_mock.py_mock_{branch}");
        let dir = format!("py_mock/py_mock_{branch}");
        let imports: String = ["a", "b"]
            .iter()
            .map(|leaf| {
                let module = format!("py_mock_{branch}_{leaf}_1");
                format!("from {pkg}.py_mock_{branch}_{leaf}.{module} import {module}\n")
            })
            .collect();
        write_py(root, &format!("{dir}/py_mock_{branch}_1.py"), &imports);
        for leaf in ["a", "b"] {
            for n in [1, 2] {
                let file = format!("{dir}/py_mock_{branch}_{leaf}/py_mock_{branch}_{leaf}_{n}.py");
                write_py(root, &file, "");
            }
        }
    }
    write_py(
        root,
        "py_mock/py_mock_a/py_mock_a_2.py",
        concat!(
            "from .py_mock_a_a.py_mock_a_a_2 import py_mock_a_a_2\n",
            "from .py_mock_a_b.py_mock_a_b_2 import py_mock_a_b_2\n",
        ),
    );
    write_py(root, "py_mock/py_mock_b/py_mock_b_2.py", "");

    // js_mock, pkg_mock, pkg_consumer.py: 7 files
    create_test_file(
        root,
        "js_mock/js_mock_1.js",
        concat!(
            "import Widget from '@/js_mock/js_mock_2';\n",
            "import config from '@/js_mock/config';\n",
            "import React from 'react';\n\n",
            "export default Widget;\n",
        ),
    );
    create_test_file(
        root,
        "js_mock/js_mock_2.jsx",
        "export default function Widget() {\n  return <div />;\n}\n",
    );
    create_test_file(root, "js_mock/config.json", "{\n  \"name\": \"js_mock\"\n}\n");
    create_test_file(root, "pkg_mock/__init__.py", "");
    write_py(root, "pkg_mock/pkg_mock_1.py", "");
    write_py(root, "pkg_mock/pkg_mock_2.py", "");
    write_py(root, "pkg_consumer.py", "from pkg_mock import pkg_mock_1\n");

    // noise
    create_test_file(root, "README.md", "# mock\n");
    create_test_file(root, "ts_mock/styles.css", "body {}\n");
    create_test_file(root, "node_modules/left-pad/index.js", "module.exports = () => {};\n");
    create_test_file(root, "__pycache__/cached.py", "");
    create_test_file(root, ".vscode/settings.json", "{}\n");

    temp_dir
}

/// Canonical root of the mock project, matching what the analyzer reports.
pub fn mock_root(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().canonicalize().unwrap()
}
