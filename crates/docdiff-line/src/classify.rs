//! Severity classification for a pair of aligned lines.

use docdiff_types::Severity;

/// Classify two aligned lines, returning `None` when they match byte-for-byte
/// after trailing-newline stripping.
///
/// Exactly one classification applies to any non-equal pair, determined
/// solely by whether the trimmed contents and the leading-whitespace widths
/// agree.
pub(crate) fn classify_pair(left: &str, right: &str) -> Option<(Severity, String)> {
    let left = left.trim_end_matches('\n');
    let right = right.trim_end_matches('\n');

    if left == right {
        return None;
    }

    let left_trimmed = left.trim();
    let right_trimmed = right.trim();

    if left_trimmed == right_trimmed {
        let left_indent = leading_width(left);
        let right_indent = leading_width(right);
        if left_indent != right_indent {
            return Some((
                Severity::Error,
                format!("indentation difference: {left_indent} vs {right_indent} spaces"),
            ));
        }
        return Some((
            Severity::Warning,
            format!("whitespace/spaces difference: '{left}' vs '{right}'"),
        ));
    }

    Some((
        Severity::Critical,
        format!("content difference: '{left_trimmed}' vs '{right_trimmed}'"),
    ))
}

fn leading_width(line: &str) -> usize {
    line.len() - line.trim_start().len()
}
