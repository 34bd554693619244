//! Geometry of the grid world.
use crate::{Coord, GridAct};
use grid_mdp_core::{ActionMask, GridMdpError};

/// Smallest supported side length. Below it, the goal and hazard cells
/// would not be distinct from the start cell.
pub const MIN_SIZE: usize = 3;

/// A `size x size` grid with a goal in the bottom-right corner and a hazard
/// diagonally next to it.
///
/// Cells are linearly indexed in row-major order, `index = row * size + col`.
/// The mapping is a bijection between all cells and `0..size^2`, independent
/// of which cells are reachable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    goal: Coord,
    hazard: Coord,
}

impl Grid {
    /// Constructs the geometry of a grid with the given side length.
    pub fn new(size: usize) -> Result<Self, GridMdpError> {
        if size < MIN_SIZE {
            return Err(GridMdpError::InvalidConfiguration(format!(
                "size has to be greater than {} but is {}",
                MIN_SIZE - 1,
                size
            )));
        }
        Ok(Self {
            size,
            goal: Coord::new(size - 1, size - 1),
            hazard: Coord::new(size - 2, size - 2),
        })
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells, `size^2`.
    pub fn n_states(&self) -> usize {
        self.size * self.size
    }

    /// The goal cell, `(size-1, size-1)`.
    pub fn goal(&self) -> Coord {
        self.goal
    }

    /// The hazard cell, `(size-2, size-2)`.
    pub fn hazard(&self) -> Coord {
        self.hazard
    }

    /// Returns `true` if the coordinate lies in the grid.
    pub fn contains(&self, coord: &Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Returns `true` for the goal and the hazard cells.
    pub fn is_terminal(&self, coord: &Coord) -> bool {
        *coord == self.goal || *coord == self.hazard
    }

    /// Linear index of a cell.
    pub fn state_index(&self, coord: &Coord) -> Result<usize, GridMdpError> {
        if !self.contains(coord) {
            return Err(GridMdpError::StateOutOfRange(format!(
                "{} is outside of a {}x{} grid",
                coord, self.size, self.size
            )));
        }
        Ok(coord.row * self.size + coord.col)
    }

    /// Cell of a linear index, the inverse of [`Grid::state_index`].
    pub fn coord_of(&self, ix: usize) -> Result<Coord, GridMdpError> {
        if ix >= self.n_states() {
            return Err(GridMdpError::StateOutOfRange(format!(
                "index {} is not less than {}",
                ix,
                self.n_states()
            )));
        }
        Ok(Coord::new(ix / self.size, ix % self.size))
    }

    /// Actions that keep the agent inside the grid, in index order.
    ///
    /// Corners have two legal actions, other border cells three and interior
    /// cells four. Goal and hazard are ordinary cells here. No action is legal
    /// at a coordinate outside of the grid.
    pub fn legal_actions(&self, coord: &Coord) -> Vec<GridAct> {
        if !self.contains(coord) {
            return vec![];
        }
        let last = self.size - 1;
        GridAct::ALL
            .iter()
            .copied()
            .filter(|act| match act {
                GridAct::Down => coord.row < last,
                GridAct::Right => coord.col < last,
                GridAct::Up => coord.row > 0,
                GridAct::Left => coord.col > 0,
            })
            .collect()
    }

    /// Returns `true` if `act` is legal at `coord`.
    pub fn is_legal(&self, coord: &Coord, act: GridAct) -> bool {
        self.legal_actions(coord).contains(&act)
    }

    /// The cell reached by applying `act` at `coord`, or `None` if the action is illegal.
    ///
    /// This is the pure geometric move, without rewards or termination.
    pub fn next_coord(&self, coord: &Coord, act: GridAct) -> Option<Coord> {
        if !self.is_legal(coord, act) {
            return None;
        }
        let (dr, dc) = act.direction();
        Some(Coord::new(
            coord.row.checked_add_signed(dr)?,
            coord.col.checked_add_signed(dc)?,
        ))
    }
}

impl ActionMask<Coord, GridAct> for Grid {
    fn legal_actions(&self, obs: &Coord) -> Vec<GridAct> {
        Grid::legal_actions(self, obs)
    }
}
