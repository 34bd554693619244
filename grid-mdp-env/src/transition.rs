//! Transition-probability tensor of the grid world.
use crate::{Grid, GridAct};
use grid_mdp_core::Act;
use log::debug;
use ndarray::{Array3, ArrayView1, ArrayView3};

/// `T[action][state_index][next_state_index]` for a deterministic grid world.
///
/// A row `T[a][s][..]` holds a single `1.0` at the successor of `s` under `a`
/// if `a` is legal at `s`, and is all zero otherwise. Illegal moves are encoded
/// as missing transitions, not as self-loops. Rows of the goal and the hazard
/// are filled like any other cell, as rewards and termination follow from the
/// fixed positions of these cells.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionTensor {
    probs: Array3<f32>,
}

impl TransitionTensor {
    /// Sweeps every action and every cell of `grid`.
    pub fn build(grid: &Grid) -> Self {
        let n_states = grid.n_states();
        let mut probs = Array3::<f32>::zeros((GridAct::N, n_states, n_states));
        let mut n_transitions = 0;

        for act in GridAct::ALL {
            for ix in 0..n_states {
                let Ok(coord) = grid.coord_of(ix) else {
                    continue;
                };
                if let Some(next) = grid.next_coord(&coord, act) {
                    if let Ok(ix_next) = grid.state_index(&next) {
                        probs[[act.index(), ix, ix_next]] = 1.0;
                        n_transitions += 1;
                    }
                }
            }
        }
        debug!(
            "Built transition tensor of shape {:?} with {} transitions",
            probs.shape(),
            n_transitions
        );

        Self { probs }
    }

    /// The whole tensor.
    pub fn view(&self) -> ArrayView3<'_, f32> {
        self.probs.view()
    }

    /// Distribution over next states for `act` at state index `ix`.
    ///
    /// Panics if `ix` is not a state index of the grid.
    pub fn row(&self, act: GridAct, ix: usize) -> ArrayView1<'_, f32> {
        self.probs.slice(ndarray::s![act.index(), ix, ..])
    }

    /// Probability of moving from `ix` to `ix_next` with `act`.
    ///
    /// Returns `None` for indices outside of the state space.
    pub fn prob(&self, act: GridAct, ix: usize, ix_next: usize) -> Option<f32> {
        self.probs.get([act.index(), ix, ix_next]).copied()
    }

    /// Index of the successor of `ix` under `act`, if the move is legal.
    pub fn successor(&self, act: GridAct, ix: usize) -> Option<usize> {
        if ix >= self.n_states() {
            return None;
        }
        self.row(act, ix).iter().position(|&p| p > 0.0)
    }

    /// Number of states, the size of the last two axes.
    pub fn n_states(&self) -> usize {
        self.probs.shape()[1]
    }
}
