use serde::{Deserialize, Serialize};
use std::fmt;

/// A hex on the sector map. Values are 0-based.
/// Ordering is by row, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HexPosition {
    pub row: usize,
    pub col: usize,
}

impl HexPosition {
    pub fn new(row: usize, col: usize) -> Self {
        HexPosition { row, col }
    }

    /// True if the hex lies inside a `rows` x `cols` grid.
    pub fn within(&self, rows: usize, cols: usize) -> bool {
        self.row < rows && self.col < cols
    }
}

impl fmt::Display for HexPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}
