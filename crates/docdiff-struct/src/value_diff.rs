//! Recursive tree comparison over parsed JSON values.

use std::collections::BTreeSet;

use serde_json::Value;

use docdiff_types::{Side, TreePath};

/// One structural difference.
///
/// Every structural record is CRITICAL; granularity below "this key/value
/// differs" is not attempted. The `side` names which original content should
/// be consulted for line-number recovery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructRecord {
    pub path: TreePath,
    pub description: String,
    pub side: Side,
}

impl StructRecord {
    fn new(path: &TreePath, description: impl Into<String>, side: Side) -> Self {
        Self {
            path: path.clone(),
            description: description.into(),
            side,
        }
    }
}

/// Recursively compare two parsed tree values.
///
/// Deeply equal inputs short-circuit to an empty record list without
/// traversal. Mapping keys are visited in lexicographic order so output is
/// deterministic regardless of input key order.
pub fn diff_values(left: &Value, right: &Value) -> Vec<StructRecord> {
    if left == right {
        return Vec::new();
    }
    let mut records = Vec::new();
    walk(left, right, &TreePath::root(), &mut records);
    records
}

fn walk(left: &Value, right: &Value, path: &TreePath, out: &mut Vec<StructRecord>) {
    let left_type = type_name(left);
    let right_type = type_name(right);
    if left_type != right_type {
        out.push(StructRecord::new(
            path,
            format!("type mismatch: {left_type} vs {right_type}"),
            Side::Both,
        ));
        return;
    }

    match (left, right) {
        (Value::Object(left_map), Value::Object(right_map)) => {
            let keys: BTreeSet<&str> = left_map
                .keys()
                .chain(right_map.keys())
                .map(String::as_str)
                .collect();
            for key in keys {
                let child = path.child_key(key);
                match (left_map.get(key), right_map.get(key)) {
                    (None, Some(_)) => {
                        out.push(StructRecord::new(&child, "missing in file1", Side::File2));
                    }
                    (Some(_), None) => {
                        out.push(StructRecord::new(&child, "missing in file2", Side::File1));
                    }
                    (Some(l), Some(r)) => walk(l, r, &child, out),
                    (None, None) => unreachable!("key came from the union"),
                }
            }
        }
        (Value::Array(left_items), Value::Array(right_items)) => {
            for i in 0..left_items.len().max(right_items.len()) {
                let child = path.child_index(i);
                match (left_items.get(i), right_items.get(i)) {
                    (None, Some(_)) => {
                        out.push(StructRecord::new(&child, "missing in file1", Side::File2));
                    }
                    (Some(_), None) => {
                        out.push(StructRecord::new(&child, "missing in file2", Side::File1));
                    }
                    (Some(l), Some(r)) => walk(l, r, &child, out),
                    (None, None) => unreachable!("index bounded by max length"),
                }
            }
        }
        (l, r) => {
            if l != r {
                out.push(StructRecord::new(
                    path,
                    format!("value mismatch: {} vs {}", fmt_scalar(l), fmt_scalar(r)),
                    Side::Both,
                ));
            }
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn fmt_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
