//! End-to-end conversion pipeline: index, resolve, normalize, assemble,
//! serialize.

use crate::assemble::assemble;
use crate::error::RepocastError;
use crate::options::ConvertOptions;
use crate::output;
use crate::prefix::common_prefix;
use crate::select::Selection;
use crate::source::ByteSource;
use crate::tree::FileTree;
use crate::types::{ConvertResult, Document};

/// Indexes a flat file listing into a hierarchy.
///
/// Thin wrapper over [`FileTree::build`]; a display layer calls this once
/// per listing and renders its selection widgets from the returned tree.
pub fn index_paths<I, S>(paths: I) -> FileTree
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    FileTree::build(paths)
}

/// Resolves `selection` against `tree`, reads every covered file from
/// `source`, and assembles the nested document plus its JSON text.
///
/// Re-invocable any number of times against the same tree with different
/// selections; identical inputs produce byte-identical JSON. An empty or
/// fully unmatched selection yields the empty document, not an error.
pub fn convert(
    tree: &FileTree,
    selection: &Selection,
    source: &mut dyn ByteSource,
    options: &ConvertOptions,
) -> Result<ConvertResult, RepocastError> {
    tracing::debug!(
        selected = selection.len(),
        files = tree.files.len(),
        "starting conversion"
    );
    let covered = selection.resolve(tree);
    if covered.is_empty() {
        let document = Document::empty();
        let json = output::to_json(&document, options)?;
        return Ok(ConvertResult {
            document,
            json,
            diagnostics: Vec::new(),
        });
    }
    let prefix = common_prefix(&covered);
    tracing::debug!(files = covered.len(), prefix = %prefix, "selection resolved");
    let mut diagnostics = Vec::new();
    let document = assemble(&covered, &prefix, source, options, &mut diagnostics)?;
    let json = output::to_json(&document, options)?;
    Ok(ConvertResult {
        document,
        json,
        diagnostics,
    })
}
