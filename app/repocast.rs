//! Command-line interface for repocast.
//!
//! Opens a zip archive or walks a directory, indexes the file listing,
//! and either prints the hierarchy, prints the selectable node paths, or
//! converts a selection into a nested JSON document.

use clap::{Parser, ValueEnum};
use repocast::{
    ByteSource, ConvertOptions, ConvertOptionsBuilder, DirSource, FileTree, RepocastError,
    Selection, ZipSource, convert, index_paths, output,
};
use std::fs::File;
use std::path::PathBuf;
use std::process::exit;
use tracing_subscriber::EnvFilter;

/// repocast — selective repository-to-JSON converter
#[derive(Parser)]
#[command(name = "repocast", version, about, long_about = None)]
struct Cli {
    /// Input: a .zip archive or a directory
    input: PathBuf,

    /// Operation mode
    #[arg(long, value_enum, default_value_t = Mode::Convert)]
    mode: Mode,

    /// Node paths to include (folders end with '/'; can be repeated).
    /// Everything is included when no selection is given.
    #[arg(short, long = "select")]
    select: Vec<String>,

    /// Output file (stdout if not set)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,

    /// Indent width for pretty JSON
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Fail on file/folder name collisions instead of overwriting
    #[arg(long)]
    strict: bool,

    /// Include hidden files (directory input)
    #[arg(long)]
    hidden: bool,

    /// Disable .gitignore handling (directory input)
    #[arg(long)]
    no_gitignore: bool,

    /// Ignore patterns (directory input, can be repeated)
    #[arg(short = 'I', long = "ignore")]
    ignore_patterns: Vec<String>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Assemble the selected files into a JSON document
    Convert,
    /// Print the indexed hierarchy
    Tree,
    /// Print every selectable node path
    Paths,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

fn run(cli: Cli) -> Result<(), RepocastError> {
    let options = ConvertOptionsBuilder::new()
        .pretty(!cli.compact)
        .indent_width(cli.indent)
        .strict_collisions(cli.strict)
        .build();

    if cli.input.is_dir() {
        let mut source = DirSource::new(&cli.input)
            .respect_gitignore(!cli.no_gitignore)
            .include_hidden(cli.hidden)
            .ignore_patterns(cli.ignore_patterns.clone());
        let tree = index_paths(source.file_paths()?);
        run_mode(&cli, &tree, &mut source, &options)
    } else {
        let file = File::open(&cli.input).map_err(|e| RepocastError::Io {
            path: cli.input.clone(),
            source: e,
        })?;
        let mut source = ZipSource::new(file)?;
        let tree = index_paths(source.file_paths());
        run_mode(&cli, &tree, &mut source, &options)
    }
}

fn run_mode(
    cli: &Cli,
    tree: &FileTree,
    source: &mut dyn ByteSource,
    options: &ConvertOptions,
) -> Result<(), RepocastError> {
    match cli.mode {
        Mode::Tree => emit(cli, &output::render_tree(tree)),
        Mode::Paths => emit(cli, &tree.node_paths().join("\n")),
        Mode::Convert => {
            let selection = if cli.select.is_empty() {
                Selection::all()
            } else {
                cli.select.iter().cloned().collect()
            };
            let result = convert(tree, &selection, source, options)?;
            emit(cli, &result.json)
        }
    }
}

fn emit(cli: &Cli, text: &str) -> Result<(), RepocastError> {
    match &cli.output {
        Some(path) => output::write_to_file(text, path),
        None => {
            println!("{}", text);
            Ok(())
        }
    }
}
