//! Output formatting: JSON serialization and tree rendering.
//!
//! Serialization keeps folder keys in insertion order, so converting the
//! same tree under the same selection twice produces byte-identical text.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::RepocastError;
use crate::options::ConvertOptions;
use crate::tree::{FileTree, Node};
use crate::types::Document;

/// Serializes a document to JSON text.
///
/// Pretty output indents with `options.indent_width` spaces.
pub fn to_json(document: &Document, options: &ConvertOptions) -> Result<String, RepocastError> {
    if !options.pretty {
        return Ok(serde_json::to_string(document)?);
    }
    let indent = " ".repeat(options.indent_width);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    document.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Writes serialized output to a file.
pub fn write_to_file(contents: &str, path: impl AsRef<Path>) -> Result<(), RepocastError> {
    fs::write(&path, contents).map_err(|e| RepocastError::io(path.as_ref(), e))
}

/// Renders the indexed hierarchy as an indented listing.
///
/// Folders come before files at each level and carry a `/` suffix; entries
/// within each group are sorted by name.
pub fn render_tree(tree: &FileTree) -> String {
    let mut lines = Vec::new();
    render_level(&tree.root, 0, &mut lines);
    lines.join("\n")
}

fn render_level(node: &Node, depth: usize, lines: &mut Vec<String>) {
    let Some(children) = node.children() else {
        return;
    };
    let mut items: Vec<&Node> = children.values().collect();
    items.sort_by_key(|n| (n.is_file(), n.name.as_str()));
    for child in items {
        let suffix = if child.is_folder() { "/" } else { "" };
        lines.push(format!("{}{}{}", "    ".repeat(depth), child.name, suffix));
        render_level(child, depth + 1, lines);
    }
}
