//! Observations of the grid world.
use grid_mdp_core::Obs;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell of the grid, `(0, 0)` being the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row, growing downwards.
    pub row: usize,

    /// Column, growing to the right.
    pub col: usize,
}

impl Coord {
    /// Constructs a coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The start cell.
    pub const ORIGIN: Coord = Coord::new(0, 0);
}

impl Obs for Coord {
    fn multi_index(&self) -> Vec<usize> {
        vec![self.row, self.col]
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
