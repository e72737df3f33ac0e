//! Opcode walk over the aligned line sequences.

use docdiff_types::{DiffRecord, Severity};
use similar::{DiffOp, TextDiff};

use crate::classify::classify_pair;

/// Compute the classified line diff of two texts.
///
/// Lines are split with their terminators retained, so a missing trailing
/// newline on the last line is itself a difference.
pub fn diff_lines(left: &str, right: &str) -> Vec<DiffRecord> {
    let left_lines: Vec<&str> = left.split_inclusive('\n').collect();
    let right_lines: Vec<&str> = right.split_inclusive('\n').collect();
    diff_line_seqs(&left_lines, &right_lines)
}

/// Compute the classified diff of two pre-split line sequences.
///
/// Element-wise equal sequences short-circuit to an empty record list
/// without invoking alignment.
pub fn diff_line_seqs(left: &[&str], right: &[&str]) -> Vec<DiffRecord> {
    if left == right {
        return Vec::new();
    }

    let diff = TextDiff::from_slices(left, right);
    let mut records = Vec::new();

    for op in diff.ops() {
        match *op {
            DiffOp::Equal { .. } => {}
            DiffOp::Delete {
                old_index, old_len, ..
            } => {
                for i in old_index..old_index + old_len {
                    records.push(extra_record(Extra::Left, i, left[i]));
                }
            }
            DiffOp::Insert {
                new_index, new_len, ..
            } => {
                for j in new_index..new_index + new_len {
                    records.push(extra_record(Extra::Right, j, right[j]));
                }
            }
            DiffOp::Replace {
                old_index,
                old_len,
                new_index,
                new_len,
            } => {
                let paired = old_len.min(new_len);
                for k in 0..paired {
                    let line_no = old_index + k + 1;
                    if let Some((level, description)) =
                        classify_pair(left[old_index + k], right[new_index + k])
                    {
                        records.push(DiffRecord::new(format!("Line {line_no}"), level, description));
                    }
                }
                // Unpaired tail of the longer range, reported at its own
                // absolute index.
                for k in paired..old_len {
                    let i = old_index + k;
                    records.push(extra_record(Extra::Left, i, left[i]));
                }
                for k in paired..new_len {
                    let j = new_index + k;
                    records.push(extra_record(Extra::Right, j, right[j]));
                }
            }
        }
    }

    records
}

enum Extra {
    Left,
    Right,
}

fn extra_record(side: Extra, index: usize, line: &str) -> DiffRecord {
    let (label, file) = match side {
        Extra::Left => ("Left Line", "file1"),
        Extra::Right => ("Right Line", "file2"),
    };
    DiffRecord::new(
        format!("{label} {}", index + 1),
        Severity::Critical,
        format!("extra content in {file}: {}", line.trim()),
    )
}
