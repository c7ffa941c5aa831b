//! Resolution of file and folder selections against a built index.

use std::collections::BTreeSet;

use crate::tree::{FileTree, NodeKind};

/// An externally owned set of selected node paths.
///
/// Paths use the canonical form the index produces: the exact listing path
/// for files, a trailing `/` for folders. The set carries no tie to any
/// particular tree; an entry with no matching node simply contributes
/// nothing at resolution time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    paths: BTreeSet<String>,
}

impl Selection {
    /// An empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// A selection of the root folder, covering every file in the tree.
    pub fn all() -> Self {
        Self::from_iter([""])
    }

    /// Adds a node path to the selection.
    pub fn insert(&mut self, path: impl Into<String>) {
        self.paths.insert(path.into());
    }

    /// Removes a node path. Returns whether it was present.
    pub fn remove(&mut self, path: &str) -> bool {
        self.paths.remove(path)
    }

    /// Whether the selection contains `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// Number of selected node paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterates the selected node paths in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    /// Expands the selection into the sorted, deduplicated set of file
    /// paths it covers, using the tree's own file list as the authority.
    pub fn resolve(&self, tree: &FileTree) -> Vec<String> {
        self.resolve_with(tree, &tree.files)
    }

    /// Expands the selection against an explicitly supplied authoritative
    /// file list.
    ///
    /// File hits contribute their own path. Folder hits are expanded with a
    /// trailing-separator-inclusive prefix scan over `all_files` rather
    /// than a subtree traversal, so the result stays correct even when the
    /// tree and the listing come from slightly different snapshots.
    /// Selecting the root folder covers every file.
    pub fn resolve_with(&self, tree: &FileTree, all_files: &[String]) -> Vec<String> {
        let mut covered = BTreeSet::new();
        for selected in &self.paths {
            let Some(node) = tree.find(selected) else {
                tracing::debug!(path = %selected, "selected path has no matching node");
                continue;
            };
            match &node.kind {
                NodeKind::File => {
                    covered.insert(node.path.clone());
                }
                NodeKind::Folder { .. } => {
                    for file in all_files {
                        if file.starts_with(&node.path) {
                            covered.insert(file.clone());
                        }
                    }
                }
            }
        }
        covered.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for Selection {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.paths.extend(iter.into_iter().map(Into::into));
    }
}
