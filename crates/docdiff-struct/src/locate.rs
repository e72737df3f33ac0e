//! Heuristic recovery of an approximate source line for a structural path.

use docdiff_types::TreePath;

/// Map a structural path back to an approximate 1-based line number in the
/// raw source text.
///
/// The scan takes the path's last key name and looks for the first line that
/// contains the quoted key and starts with at least the indentation a
/// conventional 2-space-per-level serialization would give it. This is an
/// approximation, not a source map: repeated keys or other indentation
/// conventions can mislead it, and callers must treat the result as
/// presentation metadata only.
pub fn locate_line(text: &str, path: &TreePath) -> Option<usize> {
    let key = path.last_key()?;
    let needle = format!("\"{key}\"");
    let expected_indent = 2 + 2 * path.separators();

    for (idx, line) in text.lines().enumerate() {
        if line.contains(&needle) && leading_spaces(line) >= expected_indent {
            return Some(idx + 1);
        }
    }

    tracing::debug!(path = %path, "no line matched the indentation heuristic");
    None
}

fn leading_spaces(line: &str) -> usize {
    line.chars().take_while(|c| *c == ' ').count()
}
