//! Initial distributions of a policy table.
use grid_mdp_core::GridMdpError;
use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// How the policy table is filled at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyInit {
    /// Every action has probability `1 / n_actions` in every state.
    Uniform,

    /// Every state puts probability 1 on a single action drawn uniformly at random.
    ///
    /// The draw happens once, the table is not re-sampled afterwards.
    Greedy,
}

impl Default for PolicyInit {
    fn default() -> Self {
        Self::Uniform
    }
}

impl PolicyInit {
    /// Returns a `(n_states, n_acts)` table, one distribution per row.
    pub fn table<R: Rng>(&self, n_states: usize, n_acts: usize, rng: &mut R) -> Array2<f64> {
        match self {
            Self::Uniform => uniform(n_states, n_acts),
            Self::Greedy => greedy(n_states, n_acts, rng),
        }
    }
}

fn uniform(n_states: usize, n_acts: usize) -> Array2<f64> {
    Array2::from_elem((n_states, n_acts), 1.0 / n_acts as f64)
}

fn greedy<R: Rng>(n_states: usize, n_acts: usize, rng: &mut R) -> Array2<f64> {
    let mut table = Array2::zeros((n_states, n_acts));
    for mut row in table.rows_mut() {
        row[rng.gen_range(0..n_acts)] = 1.0;
    }
    table
}

impl FromStr for PolicyInit {
    type Err = GridMdpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uniform" => Ok(Self::Uniform),
            "greedy" => Ok(Self::Greedy),
            _ => Err(GridMdpError::InvalidConfiguration(format!(
                "policy type has to be uniform or greedy but is {}",
                s
            ))),
        }
    }
}

impl fmt::Display for PolicyInit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uniform => write!(f, "uniform"),
            Self::Greedy => write!(f, "greedy"),
        }
    }
}
