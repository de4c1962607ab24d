//! JSON document comparison
//!
//! Walks two parsed documents in a single pass, accumulating the worst
//! match classification encountered while rendering a JSON-shaped report
//! of the differences.

use crate::error::{DiffError, DiffResult};
use crate::options::CompareOptions;
use serde_json::{Map, Value};
use std::fmt;

/// How closely two JSON documents match
///
/// Ordered from best to worst; the walk keeps the worst finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Classification {
    /// The documents are semantically equivalent (key order irrelevant)
    FullMatch,
    /// The right document contains everything the left one has, plus
    /// members the left one lacks
    SupersetMatch,
    /// At least one value differs or is missing from the right document
    NoMatch,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::FullMatch => write!(f, "full match"),
            Classification::SupersetMatch => write!(f, "superset match"),
            Classification::NoMatch => write!(f, "no match"),
        }
    }
}

/// Result of comparing two documents under one rendering configuration
#[derive(Debug)]
pub struct Comparison {
    pub classification: Classification,
    pub report: String,
}

/// Compare two JSON byte sequences.
///
/// Classification and report come out of the same walk; call once per
/// rendering configuration when both a console and a report rendering are
/// wanted for the same pair.
pub fn compare(left: &[u8], right: &[u8], options: &CompareOptions) -> DiffResult<Comparison> {
    let left: Value =
        serde_json::from_slice(left).map_err(|source| DiffError::LeftInvalid { source })?;
    let right: Value =
        serde_json::from_slice(right).map_err(|source| DiffError::RightInvalid { source })?;

    let mut walker = Walker {
        options,
        classification: Classification::FullMatch,
    };
    let report = walker.diff(&left, &right, 0);

    Ok(Comparison {
        classification: walker.classification,
        report,
    })
}

struct Walker<'a> {
    options: &'a CompareOptions,
    classification: Classification,
}

impl Walker<'_> {
    /// Record a finding, keeping the worst one seen so far.
    fn note(&mut self, found: Classification) {
        if found > self.classification {
            self.classification = found;
        }
    }

    fn indent(&self, depth: usize) -> String {
        self.options.indent.repeat(depth)
    }

    /// Render the relation of two values as a block without a trailing
    /// newline. Equal values of any shape render compactly; containers of
    /// the same kind expand to one entry per line.
    fn diff(&mut self, left: &Value, right: &Value, depth: usize) -> String {
        if left == right {
            return plain(left);
        }
        match (left, right) {
            (Value::Object(lo), Value::Object(ro)) => self.diff_objects(lo, ro, depth),
            (Value::Array(la), Value::Array(ra)) => self.diff_arrays(la, ra, depth),
            _ => {
                self.note(Classification::NoMatch);
                self.options
                    .changed
                    .wrap(&format!("{} => {}", plain(left), plain(right)))
            }
        }
    }

    fn diff_objects(
        &mut self,
        left: &Map<String, Value>,
        right: &Map<String, Value>,
        depth: usize,
    ) -> String {
        let child_indent = self.indent(depth + 1);
        let mut lines = Vec::new();

        for (key, left_value) in left {
            match right.get(key) {
                Some(right_value) if left_value == right_value => {
                    if !self.options.skip_matches {
                        lines.push(format!(
                            "{}{}: {}",
                            child_indent,
                            quote(key),
                            plain(left_value)
                        ));
                    }
                }
                Some(right_value) => {
                    let body = self.diff(left_value, right_value, depth + 1);
                    lines.push(format!("{}{}: {}", child_indent, quote(key), body));
                }
                None => {
                    self.note(Classification::NoMatch);
                    let entry = format!("{}: {}", quote(key), plain(left_value));
                    lines.push(format!("{}{}", child_indent, self.options.removed.wrap(&entry)));
                }
            }
        }

        for (key, right_value) in right {
            if !left.contains_key(key) {
                self.note(Classification::SupersetMatch);
                let entry = format!("{}: {}", quote(key), plain(right_value));
                lines.push(format!("{}{}", child_indent, self.options.added.wrap(&entry)));
            }
        }

        format!("{{\n{}\n{}}}", lines.join(",\n"), self.indent(depth))
    }

    fn diff_arrays(&mut self, left: &[Value], right: &[Value], depth: usize) -> String {
        let child_indent = self.indent(depth + 1);
        let mut lines = Vec::new();

        let shared = left.len().min(right.len());
        for (left_value, right_value) in left.iter().zip(right.iter()) {
            if left_value == right_value {
                if !self.options.skip_matches {
                    lines.push(format!("{}{}", child_indent, plain(left_value)));
                }
            } else {
                let body = self.diff(left_value, right_value, depth + 1);
                lines.push(format!("{}{}", child_indent, body));
            }
        }
        for left_value in &left[shared..] {
            self.note(Classification::NoMatch);
            lines.push(format!(
                "{}{}",
                child_indent,
                self.options.removed.wrap(&plain(left_value))
            ));
        }
        for right_value in &right[shared..] {
            self.note(Classification::SupersetMatch);
            lines.push(format!(
                "{}{}",
                child_indent,
                self.options.added.wrap(&plain(right_value))
            ));
        }

        format!("[\n{}\n{}]", lines.join(",\n"), self.indent(depth))
    }
}

/// Compact single-line rendering of a value.
fn plain(value: &Value) -> String {
    value.to_string()
}

/// JSON-quote an object key.
fn quote(key: &str) -> String {
    Value::String(key.to_string()).to_string()
}
