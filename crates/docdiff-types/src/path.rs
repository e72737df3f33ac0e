//! Structural paths and side attribution for tree-shaped comparisons.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which original input should be consulted to resolve a structural
/// difference's approximate source line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    File1,
    File2,
    Both,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Side::File1 => "file1",
            Side::File2 => "file2",
            Side::Both => "both",
        };
        write!(f, "{s}")
    }
}

/// One segment of a structural path: a mapping key or a list index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// A slash/bracket-delimited address into a tree value, e.g. `a/b[2]/c`.
///
/// Key segments are joined with `/`; index segments attach to the preceding
/// segment as `[i]`. The empty path renders as `root`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreePath {
    segments: Vec<PathSegment>,
}

impl TreePath {
    /// The empty (root) path.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Extend with a mapping key.
    pub fn child_key(&self, key: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Key(key.to_string()));
        Self { segments }
    }

    /// Extend with a list index.
    pub fn child_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// The last key segment's name, ignoring any trailing indices.
    ///
    /// `a/b[2]` and `a/b` both yield `b`; a pure-index path yields `None`.
    pub fn last_key(&self) -> Option<&str> {
        self.segments.iter().rev().find_map(|s| match s {
            PathSegment::Key(k) => Some(k.as_str()),
            PathSegment::Index(_) => None,
        })
    }

    /// Number of `/` separators in the rendered path.
    pub fn separators(&self) -> usize {
        // A key segment writes a separator unless it opens the path.
        self.segments
            .iter()
            .enumerate()
            .filter(|(i, s)| *i > 0 && matches!(s, PathSegment::Key(_)))
            .count()
    }
}

impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "root");
        }
        let mut first = true;
        for segment in &self.segments {
            match segment {
                PathSegment::Key(k) => {
                    if !first {
                        write!(f, "/")?;
                    }
                    write!(f, "{k}")?;
                    first = false;
                }
                PathSegment::Index(i) => {
                    write!(f, "[{i}]")?;
                    first = false;
                }
            }
        }
        Ok(())
    }
}
