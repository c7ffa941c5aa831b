//! # Repocast
//!
//! `repocast` converts a collection of files — the entry listing of a zip
//! archive, a directory on disk, or any flat list of paths — into a single
//! nested JSON document restricted to a caller-selected subset of paths.
//!
//! The pipeline: index a flat path list into a [`FileTree`], resolve a
//! [`Selection`] of files and folders into the full set of covered files,
//! strip the longest common directory prefix, and assemble the contents
//! into a nested [`Document`] serialized with stable key order. Name
//! collisions between files and folders are resolved deterministically
//! (promotion on index, overwrite on assembly) and reported as
//! [`Diagnostic`] values alongside `tracing` warnings; a single bad file
//! never fails the whole conversion.
//!
//! # Example
//!
//! ```no_run
//! use repocast::{convert, index_paths, ConvertOptions, MemorySource, Selection};
//!
//! let mut source = MemorySource::new();
//! source.insert("src/main.rs", "fn main() {}");
//! source.insert("src/util.rs", "pub fn noop() {}");
//! source.insert("README.md", "# demo");
//!
//! let tree = index_paths(source.file_paths());
//! let selection = Selection::from_iter(["src/"]);
//! let result = convert(&tree, &selection, &mut source, &ConvertOptions::default())
//!     .expect("conversion failed");
//!
//! println!("{}", result.json);
//! ```

mod assemble;
mod engine;
mod error;
mod options;
mod prefix;
mod select;
mod source;
mod tree;
mod types;

pub mod output;

pub use engine::{convert, index_paths};
pub use error::RepocastError;
pub use options::{ConvertOptions, ConvertOptionsBuilder};
pub use prefix::common_prefix;
pub use select::Selection;
pub use source::{ByteSource, DirSource, MemorySource, ZipSource};
pub use tree::{FileTree, Node, NodeKind};
pub use types::{ConvertResult, Diagnostic, DiagnosticKind, Document};
