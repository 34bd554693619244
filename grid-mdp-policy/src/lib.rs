//! Tabular stochastic policy with action masking.
//!
//! [`MaskedPolicy`] keeps a probability distribution over actions for every
//! state of a finite environment. Before sampling at a state, it zeroes the
//! probabilities of actions the environment reports as illegal there and
//! renormalizes the rest.
mod config;
mod init;
mod masked;
pub use config::MaskedPolicyConfig;
pub use init::PolicyInit;
pub use masked::MaskedPolicy;
