//! Core functionalities.
mod env;
mod policy;
mod space;
mod step;
pub use env::{ActionMask, Env, MaskedEnv};
pub use policy::{Configurable, Policy};
pub use space::Space;
use std::fmt::Debug;
pub use step::{Info, Step};

/// An observation of an environment.
///
/// Observations of a finite MDP are points of a (multi-)discrete space.
/// [`Obs::multi_index`] exposes the point as one index per dimension, which
/// is how tabular policies address their tables.
pub trait Obs: Clone + Debug {
    /// Returns one index per dimension of the observation space.
    fn multi_index(&self) -> Vec<usize>;
}

/// An action of an environment.
///
/// Actions of a finite MDP are enumerable, so every action has an index
/// in `0..n` for an action space [`Space::Discrete`]`(n)`.
pub trait Act: Clone + Debug {
    /// Returns the index of the action.
    fn index(&self) -> usize;

    /// Returns the action with the given index, if any.
    fn from_index(ix: usize) -> Option<Self>
    where
        Self: Sized;
}
