//! Assembly of selected files into a nested document.

use indexmap::IndexMap;

use crate::error::RepocastError;
use crate::options::ConvertOptions;
use crate::prefix;
use crate::source::ByteSource;
use crate::types::{Diagnostic, Document};

/// Reads every selected file and inserts its decoded content into a nested
/// [`Document`], keyed by the path segments left after stripping `prefix`.
///
/// Content is decoded as UTF-8 with replacement for invalid sequences. A
/// failed read never aborts the assembly: the leaf value becomes a
/// diagnostic string naming the path and the error, and the event is
/// recorded. A segment that must become a folder but already holds a leaf
/// is overwritten with a fresh map (the earlier content is lost) unless
/// `strict_collisions` is set, in which case the whole conversion fails.
pub(crate) fn assemble(
    selected: &[String],
    prefix: &str,
    source: &mut dyn ByteSource,
    options: &ConvertOptions,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Document, RepocastError> {
    let mut root = IndexMap::new();
    for path in selected {
        let content = match source.read(path) {
            Ok(bytes) => {
                if looks_binary(&bytes) {
                    diagnostics.push(Diagnostic::binary(path).emit());
                }
                String::from_utf8_lossy(&bytes).into_owned()
            }
            Err(error) => {
                diagnostics.push(Diagnostic::unreadable(path, &error).emit());
                format!("Error reading file '{path}': {error}")
            }
        };
        let relative = prefix::relativize(path, prefix);
        insert(&mut root, relative, content, options, diagnostics)?;
    }
    Ok(Document::Folder(root))
}

fn insert(
    root: &mut IndexMap<String, Document>,
    relative: &str,
    content: String,
    options: &ConvertOptions,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<(), RepocastError> {
    let segments: Vec<&str> = relative.split('/').filter(|s| !s.is_empty()).collect();
    let Some((leaf, dirs)) = segments.split_last() else {
        return Ok(());
    };
    let mut current = root;
    for (i, segment) in dirs.iter().enumerate() {
        let entry = current
            .entry((*segment).to_string())
            .or_insert_with(Document::empty);
        if matches!(entry, Document::Text(_)) {
            let clash = dirs[..=i].join("/");
            if options.strict_collisions {
                return Err(RepocastError::Collision { path: clash });
            }
            // An earlier file claimed this segment as a leaf; the folder
            // wins and the decoded content is lost.
            diagnostics.push(Diagnostic::overwrite(&clash).emit());
            *entry = Document::empty();
        }
        let Document::Folder(children) = entry else {
            unreachable!("entry was just made a folder");
        };
        current = children;
    }
    current.insert((*leaf).to_string(), Document::Text(content));
    Ok(())
}

fn looks_binary(bytes: &[u8]) -> bool {
    if bytes.is_empty() {
        return false;
    }
    let probe = &bytes[..bytes.len().min(4096)];
    content_inspector::inspect(probe).is_binary()
}
