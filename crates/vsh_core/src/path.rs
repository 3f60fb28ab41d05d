//! Virtual path resolution.
//!
//! Paths in the engine are plain `/`-separated strings typed by the user.
//! [`resolve`] turns one of them into an absolute segment vector against a
//! base directory (usually the session's working directory). The resolver is
//! purely lexical: it never consults the name tree, so a resolved path may
//! still name a missing entry.
//!
//! Rules:
//! - a leading `/` anchors the walk at the root, discarding the base
//! - empty segments (from `//` or a trailing `/`) and `.` are discarded
//! - `..` pops the last segment and is a no-op at the root
//! - the empty input string is rejected

use thiserror::Error;

use crate::error::ShellError;

/// Failure to turn a typed path into segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    /// The typed path was the empty string.
    #[error("no path provided")]
    Empty,
}

impl From<PathError> for ShellError {
    fn from(err: PathError) -> Self {
        match err {
            PathError::Empty => ShellError::validation("Error: No path provided"),
        }
    }
}

/// Resolve `path` against `base` into absolute segments from the root.
pub fn resolve(path: &str, base: &[String]) -> Result<Vec<String>, PathError> {
    if path.is_empty() {
        return Err(PathError::Empty);
    }
    let mut segments: Vec<String> = if path.starts_with('/') {
        Vec::new()
    } else {
        base.to_vec()
    };
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                // Popping past the root is a no-op, never an error.
                segments.pop();
            }
            _ => segments.push(part.to_string()),
        }
    }
    Ok(segments)
}

/// Render absolute segments as the canonical path string.
pub fn display(segments: &[String]) -> String {
    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segs(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn relative_path_appends_to_base() {
        let base = segs(&["docs"]);
        assert_eq!(resolve("notes/old", &base), Ok(segs(&["docs", "notes", "old"])));
    }

    #[test]
    fn absolute_path_discards_base() {
        let base = segs(&["docs", "notes"]);
        assert_eq!(resolve("/tmp", &base), Ok(segs(&["tmp"])));
    }

    #[test]
    fn dot_and_empty_segments_are_discarded() {
        let base = segs(&[]);
        assert_eq!(resolve("a//b/./c/", &base), Ok(segs(&["a", "b", "c"])));
    }

    #[test]
    fn dotdot_pops_one_segment() {
        let base = segs(&["a", "b"]);
        assert_eq!(resolve("../c", &base), Ok(segs(&["a", "c"])));
    }

    #[test]
    fn dotdot_at_root_is_a_noop() {
        let base = segs(&[]);
        assert_eq!(resolve("../../x", &base), Ok(segs(&["x"])));
        assert_eq!(resolve("/..", &base), Ok(segs(&[])));
    }

    #[test]
    fn bare_slash_resolves_to_root() {
        let base = segs(&["docs"]);
        assert_eq!(resolve("/", &base), Ok(segs(&[])));
    }

    #[test]
    fn empty_path_is_rejected() {
        assert_eq!(resolve("", &segs(&["docs"])), Err(PathError::Empty));
    }

    #[test]
    fn display_renders_root_and_nested_paths() {
        assert_eq!(display(&segs(&[])), "/");
        assert_eq!(display(&segs(&["docs", "notes"])), "/docs/notes");
    }

    #[test]
    fn empty_path_maps_to_the_catalog_line() {
        let err: ShellError = PathError::Empty.into();
        assert_eq!(err.to_string(), "Error: No path provided");
    }
}
