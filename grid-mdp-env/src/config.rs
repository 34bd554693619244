//! Configuration of [`GridWorld`](super::GridWorld).
use grid_mdp_core::Configurable;
use serde::{Deserialize, Serialize};

/// Configuration of [`GridWorld`](super::GridWorld).
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
pub struct GridWorldConfig {
    /// Side length of the grid, greater than 2.
    pub size: usize,

    /// Maximum number of legal steps in an episode before it is truncated.
    pub max_steps: Option<usize>,
}

impl Default for GridWorldConfig {
    fn default() -> Self {
        Self {
            size: 5,
            max_steps: None,
        }
    }
}

impl GridWorldConfig {
    /// Sets the side length of the grid.
    pub fn size(mut self, v: usize) -> Self {
        self.size = v;
        self
    }

    /// Sets the maximum number of steps in an episode.
    pub fn max_steps(mut self, v: Option<usize>) -> Self {
        self.max_steps = v;
        self
    }
}

impl Configurable for GridWorldConfig {}
