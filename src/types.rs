use indexmap::IndexMap;
use serde::Serialize;

/// A nested document assembled from selected files.
///
/// Folder keys keep their insertion order, so serializing the same document
/// twice yields byte-identical JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Document {
    /// Decoded file content, or an inline diagnostic for an unreadable file.
    Text(String),
    /// A subfolder, mapping child name to nested document.
    Folder(IndexMap<String, Document>),
}

impl Document {
    /// An empty folder document.
    pub fn empty() -> Self {
        Document::Folder(IndexMap::new())
    }

    /// Whether this is a folder with no entries.
    pub fn is_empty(&self) -> bool {
        match self {
            Document::Text(_) => false,
            Document::Folder(children) => children.is_empty(),
        }
    }

    /// Looks up a direct child by name. `None` on text leaves.
    pub fn get(&self, name: &str) -> Option<&Document> {
        match self {
            Document::Text(_) => None,
            Document::Folder(children) => children.get(name),
        }
    }

    /// The text value, if this is a leaf.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Document::Text(text) => Some(text),
            Document::Folder(_) => None,
        }
    }
}

/// Kind of non-fatal event raised during indexing or assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticKind {
    /// A file node was promoted to a folder to host children.
    Promotion,
    /// An assembled leaf was overwritten by a folder mapping.
    Overwrite,
    /// A selected file could not be read from its source.
    UnreadableFile,
    /// File content looked binary and was decoded lossily.
    BinaryContent,
}

/// Non-fatal event recorded while indexing paths or assembling a document.
///
/// The conversion never fails outright because of one of these; they are
/// collected on the result and mirrored to the `tracing` warn channel.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// Path where the event occurred.
    pub path: String,
    /// Human-readable message.
    pub message: String,
    /// Kind of event.
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    /// Create a promotion diagnostic for a folder path.
    pub fn promotion(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            message: format!("Path conflict: '{path}' was a file, now treated as a folder"),
            path,
            kind: DiagnosticKind::Promotion,
        }
    }

    /// Create an overwrite diagnostic for an assembled segment path.
    pub fn overwrite(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            message: format!("Structure conflict: '{path}' was a file, now treated as a folder"),
            path,
            kind: DiagnosticKind::Overwrite,
        }
    }

    /// Create an unreadable-file diagnostic.
    pub fn unreadable(path: impl Into<String>, error: &crate::error::RepocastError) -> Self {
        let path = path.into();
        Self {
            message: format!("Read error: {error}"),
            path,
            kind: DiagnosticKind::UnreadableFile,
        }
    }

    /// Create a binary-content diagnostic.
    pub fn binary(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            message: "Content looks binary, decoded lossily".to_string(),
            path,
            kind: DiagnosticKind::BinaryContent,
        }
    }

    /// Log the diagnostic on the warn channel and return it for collection.
    pub(crate) fn emit(self) -> Self {
        tracing::warn!(path = %self.path, kind = ?self.kind, "{}", self.message);
        self
    }
}

/// The complete result of a convert operation.
#[derive(Debug)]
pub struct ConvertResult {
    /// The assembled nested document.
    pub document: Document,
    /// The document serialized to JSON text.
    pub json: String,
    /// Non-fatal events recorded during assembly.
    pub diagnostics: Vec<Diagnostic>,
}
