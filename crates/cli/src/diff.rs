// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unified diff rendering for mismatched outputs.

use similar::{ChangeTag, TextDiff};

/// Lines of unchanged context around each hunk.
pub const CONTEXT_LINES: usize = 3;

const OLD_LABEL: &str = "Expected";
const NEW_LABEL: &str = "Actual";

/// Render a unified diff from `expected` to `actual`.
///
/// Line terminators of the inputs are kept; a final line without one is
/// terminated in the output. Identical texts render as an empty string.
pub fn unified(expected: &str, actual: &str) -> String {
    let diff = TextDiff::from_lines(expected, actual);
    let mut unified = diff.unified_diff();
    unified.context_radius(CONTEXT_LINES);

    let mut out = String::new();
    for (idx, hunk) in unified.iter_hunks().enumerate() {
        if idx == 0 {
            out.push_str(&format!("--- {OLD_LABEL}\n+++ {NEW_LABEL}\n"));
        }
        out.push_str(&format!("{}\n", hunk.header()));
        for change in hunk.iter_changes() {
            out.push(match change.tag() {
                ChangeTag::Delete => '-',
                ChangeTag::Insert => '+',
                ChangeTag::Equal => ' ',
            });
            let value: &str = change.value();
            out.push_str(value);
            if !value.ends_with('\n') {
                out.push('\n');
            }
        }
    }
    out
}

/// Role of a rendered diff line, used for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `---`/`+++` file headers.
    Header,
    /// `@@` hunk ranges.
    Hunk,
    Removed,
    Added,
    Context,
}

/// Split [`unified`] output into classified lines (terminators kept).
pub fn classify_lines(diff: &str) -> impl Iterator<Item = (LineKind, &str)> {
    diff.split_inclusive('\n').enumerate().map(|(idx, line)| {
        let kind = if idx < 2 {
            LineKind::Header
        } else if line.starts_with("@@") {
            LineKind::Hunk
        } else if line.starts_with('-') {
            LineKind::Removed
        } else if line.starts_with('+') {
            LineKind::Added
        } else {
            LineKind::Context
        };
        (kind, line)
    })
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
