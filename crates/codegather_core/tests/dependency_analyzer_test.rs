mod common;

use codegather_core::{AnalyzerConfig, DependencyAnalyzer, has_path_prefix};
use common::{TOTAL_FILES, TS_MOCK_FILES, build_mock_project, mock_root};
use std::path::PathBuf;

fn analyze(cfg: &AnalyzerConfig) -> Vec<PathBuf> {
    DependencyAnalyzer::factory(cfg).unwrap().analyze().unwrap()
}

#[test]
fn test_whole_tree_without_start_paths() {
    let temp_dir = build_mock_project();
    let root = mock_root(&temp_dir);

    let result = analyze(&AnalyzerConfig::new(&root));
    assert_eq!(result.len(), TOTAL_FILES);
    assert!(!result.contains(&root.join("README.md")));
    assert!(!result.contains(&root.join("node_modules/left-pad/index.js")));
    assert!(!result.contains(&root.join("__pycache__/cached.py")));
}

#[test]
fn test_ts_analyze() {
    let temp_dir = build_mock_project();
    let root = mock_root(&temp_dir);

    let result = analyze(&AnalyzerConfig::new(&root).with_start_paths(&["ts_mock/ts_mock_1.ts"]));
    assert_eq!(result.len(), 7);
    for rel in [
        "ts_mock/ts_mock_1.ts",
        "ts_mock/ts_mock_a/ts_mock_a_1.ts",
        "ts_mock/ts_mock_b/ts_mock_b_1.ts",
        "ts_mock/ts_mock_a/ts_mock_a_a/ts_mock_a_a_1.ts",
        "ts_mock/ts_mock_a/ts_mock_a_b/ts_mock_a_b_1.ts",
        "ts_mock/ts_mock_b/ts_mock_b_a/ts_mock_b_a_1.ts",
        "ts_mock/ts_mock_b/ts_mock_b_b/ts_mock_b_b_1.ts",
    ] {
        assert!(result.contains(&root.join(rel)), "missing {}", rel);
    }
}

#[test]
fn test_ts_analyze_order_is_most_recent_first() {
    let temp_dir = build_mock_project();
    let root = mock_root(&temp_dir);

    let result = analyze(&AnalyzerConfig::new(&root).with_start_paths(&["ts_mock/ts_mock_1.ts"]));
    let expected: Vec<PathBuf> = [
        "ts_mock/ts_mock_b/ts_mock_b_b/ts_mock_b_b_1.ts",
        "ts_mock/ts_mock_b/ts_mock_b_a/ts_mock_b_a_1.ts",
        "ts_mock/ts_mock_a/ts_mock_a_b/ts_mock_a_b_1.ts",
        "ts_mock/ts_mock_a/ts_mock_a_a/ts_mock_a_a_1.ts",
        "ts_mock/ts_mock_b/ts_mock_b_1.ts",
        "ts_mock/ts_mock_a/ts_mock_a_1.ts",
        "ts_mock/ts_mock_1.ts",
    ]
    .iter()
    .map(|rel| root.join(rel))
    .collect();
    assert_eq!(result, expected);
}

#[test]
fn test_py_analyze() {
    let temp_dir = build_mock_project();
    let root = mock_root(&temp_dir);

    let result = analyze(&AnalyzerConfig::new(&root).with_start_paths(&["py_mock/py_mock_1.py"]));
    assert_eq!(result.len(), 7);
    for rel in [
        "py_mock/py_mock_1.py",
        "py_mock/py_mock_a/py_mock_a_1.py",
        "py_mock/py_mock_b/py_mock_b_1.py",
        "py_mock/py_mock_a/py_mock_a_a/py_mock_a_a_1.py",
        "py_mock/py_mock_a/py_mock_a_b/py_mock_a_b_1.py",
        "py_mock/py_mock_b/py_mock_b_a/py_mock_b_a_1.py",
        "py_mock/py_mock_b/py_mock_b_b/py_mock_b_b_1.py",
    ] {
        assert!(result.contains(&root.join(rel)), "missing {}", rel);
    }
}

#[test]
fn test_py_analyze_with_relative_import() {
    let temp_dir = build_mock_project();
    let root = mock_root(&temp_dir);

    let cfg = AnalyzerConfig::new(&root).with_start_paths(&["py_mock/py_mock_a/py_mock_a_2.py"]);
    let result = analyze(&cfg);
    assert_eq!(result.len(), 3);
    assert!(result.contains(&root.join("py_mock/py_mock_a/py_mock_a_2.py")));
    assert!(result.contains(&root.join("py_mock/py_mock_a/py_mock_a_a/py_mock_a_a_2.py")));
    assert!(result.contains(&root.join("py_mock/py_mock_a/py_mock_a_b/py_mock_a_b_2.py")));
}

#[test]
fn test_py_package_import_expands_to_submodules() {
    let temp_dir = build_mock_project();
    let root = mock_root(&temp_dir);

    let result = analyze(&AnalyzerConfig::new(&root).with_start_paths(&["pkg_consumer.py"]));
    assert_eq!(
        result,
        vec![
            root.join("pkg_mock/pkg_mock_2.py"),
            root.join("pkg_mock/pkg_mock_1.py"),
            root.join("pkg_consumer.py"),
        ]
    );
}

#[test]
fn test_js_resolves_jsx_and_json() {
    let temp_dir = build_mock_project();
    let root = mock_root(&temp_dir);

    let result = analyze(&AnalyzerConfig::new(&root).with_start_paths(&["js_mock/js_mock_1.js"]));
    assert_eq!(
        result,
        vec![
            root.join("js_mock/config.json"),
            root.join("js_mock/js_mock_2.jsx"),
            root.join("js_mock/js_mock_1.js"),
        ]
    );
}

#[test]
fn test_scope_paths() {
    let temp_dir = build_mock_project();
    let root = mock_root(&temp_dir);

    let result = analyze(&AnalyzerConfig::new(&root).with_scope_paths(&["ts_mock"]));
    assert_eq!(result.len(), TS_MOCK_FILES);
    let prefix = root.join("ts_mock");
    assert!(result.iter().all(|p| has_path_prefix(p, &prefix)));
}

#[test]
fn test_ignore_paths() {
    let temp_dir = build_mock_project();
    let root = mock_root(&temp_dir);

    let result = analyze(&AnalyzerConfig::new(&root).with_ignore_paths(&["ts_mock"]));
    assert_eq!(result.len(), TOTAL_FILES - TS_MOCK_FILES);
    let prefix = root.join("ts_mock");
    assert!(result.iter().all(|p| !has_path_prefix(p, &prefix)));
}

#[test]
fn test_scope_limits_traversal() {
    let temp_dir = build_mock_project();
    let root = mock_root(&temp_dir);

    // ts_mock_b is ignored, so the traversal cannot enter it
    let cfg = AnalyzerConfig::new(&root)
        .with_start_paths(&["ts_mock/ts_mock_1.ts"])
        .with_ignore_paths(&["ts_mock/ts_mock_b"]);
    let result = analyze(&cfg);
    assert_eq!(result.len(), 4);
    let ignored = root.join("ts_mock/ts_mock_b");
    assert!(result.iter().all(|p| !has_path_prefix(p, &ignored)));
}

#[test]
fn test_depth_zero_identity() {
    let temp_dir = build_mock_project();
    let root = mock_root(&temp_dir);

    let starts = ["py_mock/py_mock_1.py", "ts_mock/ts_mock_1.ts"];
    let result = analyze(&AnalyzerConfig::new(&root).with_start_paths(&starts).with_depth(0));
    let expected: Vec<PathBuf> = starts.iter().map(|s| root.join(s)).collect();
    assert_eq!(result, expected);
}

#[test]
fn test_depth_is_monotonic_and_converges() {
    let temp_dir = build_mock_project();
    let root = mock_root(&temp_dir);

    let sizes: Vec<usize> = (0..5)
        .map(|depth| {
            let cfg = AnalyzerConfig::new(&root)
                .with_start_paths(&["ts_mock/ts_mock_1.ts"])
                .with_depth(depth);
            analyze(&cfg).len()
        })
        .collect();
    assert_eq!(sizes, vec![1, 3, 7, 7, 7]);
}

#[test]
fn test_analyze_is_idempotent() {
    let temp_dir = build_mock_project();
    let root = mock_root(&temp_dir);

    let cfg = AnalyzerConfig::new(&root)
        .with_start_paths(&["py_mock/py_mock_1.py", "js_mock/js_mock_1.js"]);
    let analyzer = DependencyAnalyzer::factory(&cfg).unwrap();
    let first = analyzer.analyze().unwrap();
    let second = analyzer.analyze().unwrap();
    assert_eq!(first, second);

    // a second instance sees the same result; nothing leaks between instances
    let third = DependencyAnalyzer::factory(&cfg).unwrap().analyze().unwrap();
    assert_eq!(first, third);
}

#[test]
fn test_results_stay_inside_inventory() {
    let temp_dir = build_mock_project();
    let root = mock_root(&temp_dir);

    let cfg = AnalyzerConfig::new(&root).with_start_paths(&[
        "ts_mock/ts_mock_1.ts",
        "py_mock/py_mock_1.py",
        "README.md",
        "node_modules/left-pad/index.js",
    ]);
    let analyzer = DependencyAnalyzer::factory(&cfg).unwrap();
    let result = analyzer.analyze().unwrap();
    assert_eq!(result.len(), 14);
    assert!(result.iter().all(|p| analyzer.inventory().contains(p)));
}

#[test]
fn test_directory_start_path() {
    let temp_dir = build_mock_project();
    let root = mock_root(&temp_dir);

    let result = analyze(&AnalyzerConfig::new(&root).with_start_paths(&["ts_mock/ts_mock_a"]));
    assert_eq!(result.len(), 6);
    let prefix = root.join("ts_mock/ts_mock_a");
    assert!(result.iter().all(|p| has_path_prefix(p, &prefix)));
}
