//! A finite grid MDP simulator with an action-masked stochastic policy.
//!
//! The workspace consists of the following crates:
//!
//! * [grid-mdp-core](grid_mdp_core) provides traits generic to finite environments
//!   and policies, records and rollout utilities.
//! * [grid-mdp-env](grid_mdp_env) is a deterministic grid world with a precomputed
//!   transition tensor.
//! * [grid-mdp-policy](grid_mdp_policy) is a tabular stochastic policy that masks
//!   illegal actions before sampling.
//!
//! This crate re-exports them and hosts runnable examples.
pub use grid_mdp_core as core;
pub use grid_mdp_env as env;
pub use grid_mdp_policy as policy;
