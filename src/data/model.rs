use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// NumberList – everything the loader accepted, in input order
// ---------------------------------------------------------------------------

/// The parsed numeric values of one input file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberList {
    /// Finite values in input order, duplicates preserved.
    pub values: Vec<f64>,
    /// Lines whose remainder was dropped because of a non-numeric token.
    pub skipped_lines: usize,
}

impl NumberList {
    pub fn from_values(values: Vec<f64>) -> Self {
        NumberList {
            values,
            skipped_lines: 0,
        }
    }

    /// Number of parsed values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing was parsed.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ---------------------------------------------------------------------------
// SquareResult – one value confirmed to be a natural square
// ---------------------------------------------------------------------------

/// The truncated integer form of a classified value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SquareResult(pub i64);

impl SquareResult {
    pub fn value(self) -> i64 {
        self.0
    }
}

/// Canonical base-10 form, which is also the output record minus its newline.
impl fmt::Display for SquareResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
