//! Longest common directory prefix across selected file paths.

/// Computes the longest directory prefix shared by every given file path.
///
/// The result is either empty or ends in `/`, and always falls on a
/// directory boundary — never inside a file or folder name. A single path
/// yields its own containing directory, so a lone selected file becomes a
/// bare top-level key in the assembled document. Paths with no shared
/// ancestor (two top-level files, say) yield the empty prefix, as do `.`
/// results.
pub fn common_prefix<S: AsRef<str>>(paths: &[S]) -> String {
    let mut dirs = paths.iter().map(|p| parent_dir(p.as_ref()));
    let Some(first) = dirs.next() else {
        return String::new();
    };
    let mut common: Vec<&str> = split_segments(first);
    for dir in dirs {
        if common.is_empty() {
            break;
        }
        let segments = split_segments(dir);
        let shared = common
            .iter()
            .zip(&segments)
            .take_while(|(a, b)| a == b)
            .count();
        common.truncate(shared);
    }
    if common.is_empty() || common == ["."] {
        String::new()
    } else {
        let mut prefix = common.join("/");
        prefix.push('/');
        prefix
    }
}

/// Strips `prefix` from the start of `path` if present.
pub(crate) fn relativize<'a>(path: &'a str, prefix: &str) -> &'a str {
    if prefix.is_empty() {
        path
    } else {
        path.strip_prefix(prefix).unwrap_or(path)
    }
}

/// The directory part of `path`, without trailing separator. Empty for
/// top-level files.
fn parent_dir(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[..idx],
        None => "",
    }
}

fn split_segments(dir: &str) -> Vec<&str> {
    if dir.is_empty() {
        Vec::new()
    } else {
        dir.split('/').collect()
    }
}
