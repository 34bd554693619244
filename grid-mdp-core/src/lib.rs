#![warn(missing_docs)]
//! Core traits and types of a finite MDP simulator.
//!
//! An environment implementing [`Env`] emits [`Step`]s in response to actions
//! sampled by a [`Policy`]. Environments with illegal actions implement
//! [`MaskedEnv`], handing out an [`ActionMask`] that lets a policy zero out
//! illegal actions before sampling.
pub mod error;
pub mod record;
pub mod util;

mod base;
pub use base::{
    Act, ActionMask, Configurable, Env, Info, MaskedEnv, Obs, Policy, Space, Step,
};
pub use error::GridMdpError;
