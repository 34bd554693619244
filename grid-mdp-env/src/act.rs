//! Actions of the grid world.
use grid_mdp_core::Act;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A move to one of the four neighbouring cells.
///
/// The discriminants are the action indices used by the transition tensor
/// and by tabular policies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridAct {
    /// `(+1, 0)`.
    Down = 0,

    /// `(0, +1)`.
    Right = 1,

    /// `(-1, 0)`.
    Up = 2,

    /// `(0, -1)`.
    Left = 3,
}

impl GridAct {
    /// All actions in index order.
    pub const ALL: [GridAct; 4] = [GridAct::Down, GridAct::Right, GridAct::Up, GridAct::Left];

    /// Number of actions.
    pub const N: usize = 4;

    /// Returns the `(row, col)` direction vector.
    pub fn direction(&self) -> (isize, isize) {
        match self {
            Self::Down => (1, 0),
            Self::Right => (0, 1),
            Self::Up => (-1, 0),
            Self::Left => (0, -1),
        }
    }
}

impl Act for GridAct {
    fn index(&self) -> usize {
        *self as usize
    }

    fn from_index(ix: usize) -> Option<Self> {
        Self::ALL.get(ix).copied()
    }
}

impl fmt::Display for GridAct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
