use repocast::{
    convert,
    index_paths,
    common_prefix,
    ConvertOptions,
    ConvertOptionsBuilder,
    DiagnosticKind,
    FileTree,
    MemorySource,
    RepocastError,
    Selection,
};
use serde_json::json;
#[test]
fn test_build_preserves_file_paths() {
    let tree = FileTree::build(["b.txt", "a/c.txt", "a/d/e.txt"]);
    let mut file_nodes: Vec<String> = tree
        .node_paths()
        .into_iter()
        .filter(|p| !p.ends_with('/'))
        .collect();
    file_nodes.sort();
    assert_eq!(file_nodes, tree.files);
    assert_eq!(tree.files, ["a/c.txt", "a/d/e.txt", "b.txt"]);
    assert!(tree.diagnostics.is_empty());
}
#[test]
fn test_promotion_is_order_independent() {
    for input in [vec!["a", "a/b"], vec!["a/b", "a"]] {
        let tree = FileTree::build(input);
        let node = tree.find("a/").unwrap();
        assert!(node.is_folder());
        assert_eq!(node.path, "a/");
        let child = node.children().unwrap().get("b").unwrap();
        assert!(child.is_file());
        assert_eq!(child.path, "a/b");
        assert_eq!(tree.diagnostics.len(), 1);
        assert_eq!(tree.diagnostics[0].kind, DiagnosticKind::Promotion);
    }
}
#[test]
fn test_resolve_root_covers_every_file() {
    let tree = FileTree::build(["b.txt", "a/x.txt", "a/y.txt"]);
    let mut selection = Selection::all();
    selection.insert("a/x.txt");
    let covered = selection.resolve(&tree);
    assert_eq!(covered, ["a/x.txt", "a/y.txt", "b.txt"]);
}
#[test]
fn test_resolve_folder_prefix_scan() {
    let tree = FileTree::build(["src/a.rs", "src/sub/b.rs", "other.txt"]);
    let selection = Selection::from_iter(["src/"]);
    assert_eq!(selection.resolve(&tree), ["src/a.rs", "src/sub/b.rs"]);
}
#[test]
fn test_resolve_ignores_unknown_paths() {
    let tree = FileTree::build(["a.txt"]);
    let selection = Selection::from_iter(["missing/", "nope.txt"]);
    assert!(selection.resolve(&tree).is_empty());
}
#[test]
fn test_common_prefix_cases() {
    assert_eq!(common_prefix(&["x/y/a.txt"]), "x/y/");
    assert_eq!(common_prefix(&["a.txt", "b.txt"]), "");
    assert_eq!(common_prefix(&["x/a.txt", "x/y/b.txt"]), "x/");
    assert_eq!(common_prefix(&["src/a.py", "src2/b.py"]), "");
}
#[test]
fn test_assemble_round_trip() {
    let mut source = MemorySource::new();
    source.insert("src/a.py", "1");
    source.insert("src/b/c.py", "2");
    let tree = index_paths(source.file_paths());
    let result = convert(
        &tree,
        &Selection::all(),
        &mut source,
        &ConvertOptions::default(),
    )
    .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&result.json).unwrap();
    assert_eq!(parsed, json!({"a.py": "1", "b": {"c.py": "2"}}));
}
#[test]
fn test_single_file_keeps_bare_key() {
    let mut source = MemorySource::new();
    source.insert("deep/nested/only.txt", "solo");
    let tree = index_paths(source.file_paths());
    let result = convert(
        &tree,
        &Selection::all(),
        &mut source,
        &ConvertOptions::default(),
    )
    .unwrap();
    assert_eq!(
        result.document.get("only.txt").and_then(|d| d.as_text()),
        Some("solo")
    );
}
#[test]
fn test_unreadable_file_becomes_inline_diagnostic() {
    let mut source = MemorySource::new();
    source.insert("d/ok.txt", "fine");
    let tree = index_paths(["d/ok.txt", "d/x.bin"]);
    let result = convert(
        &tree,
        &Selection::all(),
        &mut source,
        &ConvertOptions::default(),
    )
    .unwrap();
    let leaf = result
        .document
        .get("x.bin")
        .and_then(|d| d.as_text())
        .unwrap();
    assert!(leaf.contains("d/x.bin"));
    assert!(leaf.contains("No entry"));
    assert_eq!(
        result.document.get("ok.txt").and_then(|d| d.as_text()),
        Some("fine")
    );
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].kind, DiagnosticKind::UnreadableFile);
}
#[test]
fn test_convert_is_idempotent() {
    let mut source = MemorySource::new();
    source.insert("a/one.txt", "1");
    source.insert("a/two.txt", "2");
    let tree = index_paths(source.file_paths());
    let selection = Selection::all();
    let options = ConvertOptions::default();
    let first = convert(&tree, &selection, &mut source, &options).unwrap();
    let second = convert(&tree, &selection, &mut source, &options).unwrap();
    assert_eq!(first.json, second.json);
}
#[test]
fn test_empty_selection_yields_empty_document() {
    let mut source = MemorySource::new();
    source.insert("a.txt", "x");
    let tree = index_paths(source.file_paths());
    let result = convert(
        &tree,
        &Selection::new(),
        &mut source,
        &ConvertOptions::default(),
    )
    .unwrap();
    assert!(result.document.is_empty());
    assert_eq!(result.json, "{}");
}
#[test]
fn test_assembly_collision_overwrites_and_warns() {
    let mut source = MemorySource::new();
    source.insert("a", "leaf");
    source.insert("a/b", "nested");
    let tree = index_paths(source.file_paths());
    let result = convert(
        &tree,
        &Selection::all(),
        &mut source,
        &ConvertOptions::default(),
    )
    .unwrap();
    assert_eq!(
        result
            .document
            .get("a")
            .and_then(|d| d.get("b"))
            .and_then(|d| d.as_text()),
        Some("nested")
    );
    assert!(result
        .diagnostics
        .iter()
        .any(|d| d.kind == DiagnosticKind::Overwrite));
}
#[test]
fn test_strict_mode_rejects_collision() {
    let mut source = MemorySource::new();
    source.insert("a", "leaf");
    source.insert("a/b", "nested");
    let tree = index_paths(source.file_paths());
    let options = ConvertOptionsBuilder::new().strict_collisions(true).build();
    let err = convert(&tree, &Selection::all(), &mut source, &options).unwrap_err();
    assert!(matches!(err, RepocastError::Collision { .. }));
}
#[test]
fn test_binary_content_is_flagged_and_decoded_lossily() {
    let mut source = MemorySource::new();
    source.insert("blob.bin", vec![0u8, 0x9f, 0x92, 0x96]);
    let tree = index_paths(source.file_paths());
    let result = convert(
        &tree,
        &Selection::all(),
        &mut source,
        &ConvertOptions::default(),
    )
    .unwrap();
    let text = result
        .document
        .get("blob.bin")
        .and_then(|d| d.as_text())
        .unwrap();
    assert!(text.contains('\u{FFFD}'));
    assert!(result
        .diagnostics
        .iter()
        .any(|d| d.kind == DiagnosticKind::BinaryContent));
}
#[test]
fn test_compact_output() {
    let mut source = MemorySource::new();
    source.insert("a.txt", "x");
    let tree = index_paths(source.file_paths());
    let options = ConvertOptionsBuilder::new().pretty(false).build();
    let result = convert(&tree, &Selection::all(), &mut source, &options).unwrap();
    assert_eq!(result.json, "{\"a.txt\":\"x\"}");
}
