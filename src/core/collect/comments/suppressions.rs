//! Suppression tracking by line.

use std::collections::HashSet;

/// Range representing disabled lines [start, end] inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisabledRange {
    pub start: usize,
    pub end: usize, // usize::MAX for open-ended
}

/// Suppressed lines for a single file.
#[derive(Debug, Default)]
pub struct Suppressions {
    /// Lines targeted by `ariabtn-disable-next-line`.
    pub disabled_lines: HashSet<usize>,
    /// Ranges opened by `ariabtn-disable`.
    pub disabled_ranges: Vec<DisabledRange>,
}

impl Suppressions {
    pub fn is_suppressed(&self, line: usize) -> bool {
        self.disabled_lines.contains(&line)
            || self
                .disabled_ranges
                .iter()
                .any(|r| line >= r.start && line <= r.end)
    }
}
