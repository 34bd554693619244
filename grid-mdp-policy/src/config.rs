//! Configuration of [`MaskedPolicy`](super::MaskedPolicy).
use crate::PolicyInit;
use grid_mdp_core::Configurable;
use serde::{Deserialize, Serialize};

/// Configuration of [`MaskedPolicy`](super::MaskedPolicy).
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
pub struct MaskedPolicyConfig {
    /// If `true`, illegal actions are masked before sampling.
    pub masking: bool,

    /// Seed of the random number generator. Taken from the OS if `None`.
    pub seed: Option<u64>,

    /// Initial distribution of the policy table.
    pub policy_init: PolicyInit,
}

impl Default for MaskedPolicyConfig {
    fn default() -> Self {
        Self {
            masking: true,
            seed: None,
            policy_init: PolicyInit::Uniform,
        }
    }
}

impl MaskedPolicyConfig {
    /// Enables or disables masking of illegal actions.
    pub fn masking(mut self, v: bool) -> Self {
        self.masking = v;
        self
    }

    /// Sets the random seed.
    pub fn seed(mut self, v: Option<u64>) -> Self {
        self.seed = v;
        self
    }

    /// Sets the initial distribution of the policy table.
    pub fn policy_init(mut self, v: PolicyInit) -> Self {
        self.policy_init = v;
        self
    }
}

impl Configurable for MaskedPolicyConfig {}
