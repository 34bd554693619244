//! Observation and action spaces.
use serde::{Deserialize, Serialize};

/// Shape of a discrete observation or action space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Space {
    /// `n` values `0..n`.
    Discrete(usize),

    /// One discrete axis per element, the i-th with `nvec[i]` values.
    MultiDiscrete(Vec<usize>),
}

impl Space {
    /// Returns the extent of each dimension.
    ///
    /// [`Space::Discrete`] is regarded as a single dimension.
    pub fn nvec(&self) -> Vec<usize> {
        match self {
            Self::Discrete(n) => vec![*n],
            Self::MultiDiscrete(nvec) => nvec.clone(),
        }
    }

    /// Returns the number of dimensions.
    pub fn ndim(&self) -> usize {
        match self {
            Self::Discrete(_) => 1,
            Self::MultiDiscrete(nvec) => nvec.len(),
        }
    }

    /// Returns the total number of elements in the space.
    pub fn n(&self) -> usize {
        match self {
            Self::Discrete(n) => *n,
            Self::MultiDiscrete(nvec) => nvec.iter().product(),
        }
    }

    /// Returns `true` if `ixs` is a point of the space.
    pub fn contains(&self, ixs: &[usize]) -> bool {
        let nvec = self.nvec();
        ixs.len() == nvec.len() && ixs.iter().zip(nvec.iter()).all(|(i, n)| i < n)
    }
}
