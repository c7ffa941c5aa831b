//! Byte sources: where selected file contents come from.
//!
//! The conversion core issues one [`ByteSource::read`] per selected file,
//! sequentially. Implementations own whatever I/O that takes — a zip
//! archive entry, a file under a directory root, or a prefetched
//! in-memory map.

use std::collections::BTreeMap;
use std::fs;
use std::io::{Read, Seek};
use std::path::PathBuf;

use ignore::WalkBuilder;
use zip::ZipArchive;

use crate::error::RepocastError;

/// Supplies raw bytes for canonical file paths.
pub trait ByteSource {
    /// Reads the full contents of the file at `path`.
    fn read(&mut self, path: &str) -> Result<Vec<u8>, RepocastError>;
}

/// Byte source over a zip archive.
pub struct ZipSource<R: Read + Seek> {
    archive: ZipArchive<R>,
}

impl<R: Read + Seek> ZipSource<R> {
    /// Opens the archive. A malformed container fails here, before any
    /// indexing or assembly runs.
    pub fn new(reader: R) -> Result<Self, RepocastError> {
        Ok(Self {
            archive: ZipArchive::new(reader)?,
        })
    }

    /// Entry names that denote files (no trailing `/`), sorted ascending.
    /// Directory entries are dropped; the index infers folders from the
    /// file paths alone.
    pub fn file_paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self
            .archive
            .file_names()
            .filter(|name| !name.ends_with('/'))
            .map(str::to_owned)
            .collect();
        paths.sort();
        paths
    }
}

impl<R: Read + Seek> ByteSource for ZipSource<R> {
    fn read(&mut self, path: &str) -> Result<Vec<u8>, RepocastError> {
        let mut entry = self.archive.by_name(path)?;
        let mut bytes = Vec::with_capacity(entry.size() as usize);
        entry
            .read_to_end(&mut bytes)
            .map_err(|e| RepocastError::io(path, e))?;
        Ok(bytes)
    }
}

/// Byte source over a directory on disk.
///
/// Listing walks the root with gitignore and hidden-file handling and
/// reports paths relative to the root with `/` separators, matching the
/// canonical form the index expects.
pub struct DirSource {
    root: PathBuf,
    respect_gitignore: bool,
    include_hidden: bool,
    ignore_patterns: Vec<String>,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            respect_gitignore: true,
            include_hidden: false,
            ignore_patterns: Vec::new(),
        }
    }

    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.respect_gitignore = yes;
        self
    }

    pub fn include_hidden(mut self, yes: bool) -> Self {
        self.include_hidden = yes;
        self
    }

    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    /// Walks the root and returns every file path, `/`-separated and
    /// relative to the root, sorted ascending.
    pub fn file_paths(&self) -> Result<Vec<String>, RepocastError> {
        let mut builder = WalkBuilder::new(&self.root);
        builder
            .git_ignore(self.respect_gitignore)
            .hidden(!self.include_hidden)
            .ignore(false);
        if !self.ignore_patterns.is_empty() {
            let mut glob_builder = globset::GlobSetBuilder::new();
            for pattern in &self.ignore_patterns {
                let glob = globset::Glob::new(pattern).map_err(|e| {
                    RepocastError::Walk(format!("Invalid glob pattern '{}': {}", pattern, e))
                })?;
                glob_builder.add(glob);
            }
            let matcher = glob_builder
                .build()
                .map_err(|e| RepocastError::Walk(format!("Failed to build glob set: {}", e)))?;
            builder.filter_entry(move |entry| !matcher.is_match(entry.path()));
        }
        let mut paths = Vec::new();
        for result in builder.build() {
            let entry = result.map_err(|e| RepocastError::Walk(e.to_string()))?;
            if !entry.path().is_file() {
                continue;
            }
            let relative = entry.path().strip_prefix(&self.root).unwrap_or(entry.path());
            let segments: Vec<String> = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            paths.push(segments.join("/"));
        }
        paths.sort();
        Ok(paths)
    }
}

impl ByteSource for DirSource {
    fn read(&mut self, path: &str) -> Result<Vec<u8>, RepocastError> {
        let full = self.root.join(path.split('/').collect::<PathBuf>());
        fs::read(&full).map_err(|e| RepocastError::io(full, e))
    }
}

/// In-memory byte source, for tests and for collaborators that prefetch
/// remote content before handing it to the core.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one entry, replacing any previous bytes for the same path.
    pub fn insert(&mut self, path: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.entries.insert(path.into(), bytes.into());
    }

    /// Every stored path, sorted ascending.
    pub fn file_paths(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

impl ByteSource for MemorySource {
    fn read(&mut self, path: &str) -> Result<Vec<u8>, RepocastError> {
        self.entries
            .get(path)
            .cloned()
            .ok_or_else(|| RepocastError::EntryMissing {
                path: path.to_string(),
            })
    }
}
