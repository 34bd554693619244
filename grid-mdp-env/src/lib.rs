//! A deterministic grid world MDP.
//!
//! [`GridWorld`] is a `size x size` grid where an agent starting at `(0, 0)`
//! moves down, right, up or left. The bottom-right cell is the goal and the
//! cell diagonally next to it is a hazard; both end an episode.
//!
//! ## State space
//!
//! Every cell has a linear index `row * size + col`, see [`Grid::state_index`]
//! and [`Grid::coord_of`]. The mapping covers all cells, reachable or not.
//!
//! ## Transition tensor
//!
//! At construction, [`GridWorld`] sweeps all actions and cells and records the
//! successor of every legal move in a [`TransitionTensor`], an array
//! `T[action][state_index][next_state_index]` with entries in `{0, 1}`.
//! Exact dynamic programming methods can consume it without touching the
//! environment's own state.
//!
//! ## Legal actions
//!
//! Actions leading out of the grid are illegal. [`GridWorld`] implements
//! [`MaskedEnv`], which lets policies mask them before sampling. Illegal
//! actions given to [`Env::step`] are ignored.
//!
//! [`MaskedEnv`]: grid_mdp_core::MaskedEnv
//! [`Env::step`]: grid_mdp_core::Env::step
mod act;
mod base;
mod config;
mod grid;
mod obs;
mod transition;
pub use act::GridAct;
pub use base::{GridInfo, GridWorld, GOAL_REWARD, HAZARD_REWARD, ILLEGAL_REWARD, STEP_REWARD};
pub use config::GridWorldConfig;
pub use grid::{Grid, MIN_SIZE};
pub use obs::Coord;
pub use transition::TransitionTensor;
