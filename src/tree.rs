//! Hierarchical index over a flat file listing.
//!
//! A [`FileTree`] is built once per listing and is immutable afterward.
//! Selection state lives in [`crate::Selection`], never on the nodes, so
//! one tree can be queried under any number of selections without a
//! rebuild.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::Diagnostic;

/// Variant of a [`Node`]: a file leaf or a folder with children.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    File,
    Folder {
        /// Children keyed by name. Names are unique within one folder.
        children: BTreeMap<String, Node>,
    },
}

/// One path segment in the indexed hierarchy.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    /// Final path segment. Empty only for the root.
    pub name: String,
    /// Canonical path: the exact listing path for files, with exactly one
    /// trailing `/` for folders.
    pub path: String,
    /// Node variant and, for folders, the owned children.
    pub kind: NodeKind,
}

impl Node {
    fn file(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            kind: NodeKind::File,
        }
    }

    fn folder(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            kind: NodeKind::Folder {
                children: BTreeMap::new(),
            },
        }
    }

    /// Whether this node is a file leaf.
    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File)
    }

    /// Whether this node is a folder.
    pub fn is_folder(&self) -> bool {
        matches!(self.kind, NodeKind::Folder { .. })
    }

    /// The children map, if this is a folder.
    pub fn children(&self) -> Option<&BTreeMap<String, Node>> {
        match &self.kind {
            NodeKind::Folder { children } => Some(children),
            NodeKind::File => None,
        }
    }
}

/// A built index: the root folder plus the authoritative flat file list.
#[derive(Debug, Clone, Serialize)]
pub struct FileTree {
    /// Root folder node, `path = ""`.
    pub root: Node,
    /// Every input file path, sorted ascending and deduplicated. Selection
    /// resolution scans this list rather than traversing node objects.
    pub files: Vec<String>,
    /// Promotion events recorded during the build.
    pub diagnostics: Vec<Diagnostic>,
}

impl FileTree {
    /// Builds the index from a flat list of `/`-separated file paths.
    ///
    /// The input is sorted internally before insertion, so promotion order
    /// is deterministic regardless of listing order. Directories are never
    /// listed standalone; every folder node is implied by some file beneath
    /// it.
    pub fn build<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut files: Vec<String> = paths.into_iter().map(Into::into).collect();
        files.sort();
        files.dedup();

        let mut root = Node::folder("", "");
        let mut diagnostics = Vec::new();
        for path in &files {
            insert(&mut root, path, &mut diagnostics);
        }
        Self {
            root,
            files,
            diagnostics,
        }
    }

    /// Walks the tree segment by segment and returns the node at `path`.
    ///
    /// Folder paths may be given with or without their trailing `/`; the
    /// empty path returns the root. A path with no matching node yields
    /// `None`, never an error.
    pub fn find(&self, path: &str) -> Option<&Node> {
        let mut current = &self.root;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            current = current.children()?.get(segment)?;
        }
        Some(current)
    }

    /// Canonical paths of every node, depth-first, root excluded. Folder
    /// entries keep their trailing `/`; these are the keys a selection
    /// uses.
    pub fn node_paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_paths(&self.root, &mut out);
        out
    }
}

fn collect_paths(node: &Node, out: &mut Vec<String>) {
    if let Some(children) = node.children() {
        for child in children.values() {
            out.push(child.path.clone());
            collect_paths(child, out);
        }
    }
}

fn insert(root: &mut Node, path: &str, diagnostics: &mut Vec<Diagnostic>) {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let mut current = root;
    for (i, segment) in segments.iter().enumerate() {
        let NodeKind::Folder { children } = &mut current.kind else {
            unreachable!("walk only descends into folders");
        };
        if i + 1 == segments.len() {
            children.insert(segment.to_string(), Node::file(segment, path));
            return;
        }
        let folder_path = {
            let mut joined = segments[..=i].join("/");
            joined.push('/');
            joined
        };
        let entry = children
            .entry(segment.to_string())
            .or_insert_with(|| Node::folder(segment, &folder_path));
        if entry.is_file() {
            // An earlier, shorter path claimed this segment as a leaf; the
            // folder wins and the file's path information is dropped.
            diagnostics.push(Diagnostic::promotion(&folder_path).emit());
            entry.path = folder_path;
            entry.kind = NodeKind::Folder {
                children: BTreeMap::new(),
            };
        }
        current = entry;
    }
}
