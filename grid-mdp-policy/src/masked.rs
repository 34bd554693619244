//! Tabular policy with action masking.
use crate::MaskedPolicyConfig;
use anyhow::Result;
use grid_mdp_core::{Act, ActionMask, GridMdpError, MaskedEnv, Obs, Policy, Space};
use log::{info, trace, warn};
use ndarray::{ArrayView1, ArrayView2};
use rand::{
    distributions::{Distribution, WeightedIndex},
    rngs::SmallRng,
    SeedableRng,
};

/// A stochastic policy over a finite environment.
///
/// The policy table holds one distribution over actions per state. With
/// masking enabled, every call of [`MaskedPolicy::get_action`] first zeroes
/// the probabilities of the actions that are illegal at the given state and
/// renormalizes the row. Once a row has been masked, masking it again leaves
/// it unchanged.
///
/// If no legal action keeps a positive probability, the row falls back to a
/// uniform distribution over the legal actions.
///
/// The policy holds the legality predicate of the environment it was built
/// against, not the environment itself, so the environment stays free to be
/// stepped between two samples.
///
/// ```
/// use grid_mdp_env::{Coord, GridAct, GridWorld};
/// use grid_mdp_policy::{MaskedPolicy, MaskedPolicyConfig};
///
/// let env = GridWorld::new(5).unwrap();
/// let config = MaskedPolicyConfig::default().seed(Some(42));
/// let mut policy = MaskedPolicy::build(&env, config).unwrap();
///
/// let act = policy.get_action(&Coord::new(0, 0)).unwrap();
/// assert!(act == GridAct::Down || act == GridAct::Right);
/// ```
pub struct MaskedPolicy<E: MaskedEnv> {
    mask: E::Mask,

    masking: bool,

    obs_space: Space,

    n_acts: usize,

    /// `(n_states, n_acts)`, states flattened in row-major order of the observation space.
    table: ndarray::Array2<f64>,

    rng: SmallRng,
}

impl<E: MaskedEnv> MaskedPolicy<E> {
    /// Constructs the policy against an environment.
    ///
    /// The action space has to be [`Space::Discrete`] and the observation space
    /// [`Space::Discrete`] or [`Space::MultiDiscrete`], all with positive extents.
    pub fn build(env: &E, config: MaskedPolicyConfig) -> Result<Self, GridMdpError> {
        let n_acts = match env.action_space() {
            Space::Discrete(n) if n > 0 => n,
            space => {
                return Err(GridMdpError::InvalidConfiguration(format!(
                    "action space has to be a non-empty Discrete space but is {:?}",
                    space
                )))
            }
        };
        let obs_space = env.observation_space();
        if obs_space.ndim() == 0 || obs_space.n() == 0 {
            return Err(GridMdpError::InvalidConfiguration(format!(
                "observation space has to be a non-empty Discrete or MultiDiscrete space but is {:?}",
                obs_space
            )));
        }

        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let table = config.policy_init.table(obs_space.n(), n_acts, &mut rng);
        info!(
            "Initialize MaskedPolicy, table shape = {:?} x {}, init = {}, masking = {}",
            obs_space.nvec(),
            n_acts,
            config.policy_init,
            config.masking
        );

        Ok(Self {
            mask: env.action_mask(),
            masking: config.masking,
            obs_space,
            n_acts,
            table,
            rng,
        })
    }

    /// Returns `true` if illegal actions are masked.
    pub fn is_masking(&self) -> bool {
        self.masking
    }

    /// Number of actions.
    pub fn n_acts(&self) -> usize {
        self.n_acts
    }

    /// Shape of the policy table, the extents of the observation space followed by `n_acts`.
    pub fn table_shape(&self) -> Vec<usize> {
        let mut shape = self.obs_space.nvec();
        shape.push(self.n_acts);
        shape
    }

    /// The policy table with states flattened into rows in row-major order.
    pub fn policy_table(&self) -> ArrayView2<'_, f64> {
        self.table.view()
    }

    /// Row of the policy table for `state`.
    fn flat_index(&self, state: &E::Obs) -> Result<usize, GridMdpError> {
        let ixs = state.multi_index();
        if ixs.len() != self.obs_space.ndim() {
            return Err(GridMdpError::ShapeMismatch {
                expected: self.obs_space.ndim(),
                actual: ixs.len(),
            });
        }
        if !self.obs_space.contains(&ixs) {
            return Err(GridMdpError::StateOutOfRange(format!(
                "{:?} is outside of the observation space {:?}",
                ixs, self.obs_space
            )));
        }
        Ok(ixs
            .iter()
            .zip(self.obs_space.nvec())
            .fold(0, |flat, (&ix, n)| flat * n + ix))
    }

    /// Current distribution over actions at `state`.
    pub fn probs(&self, state: &E::Obs) -> Result<ArrayView1<'_, f64>, GridMdpError> {
        let flat = self.flat_index(state)?;
        Ok(self.table.row(flat))
    }

    /// Overwrites the distribution at `state`.
    ///
    /// `probs` are non-negative weights, one per action, normalized before
    /// being stored. No mask is applied here.
    pub fn set_probs(&mut self, state: &E::Obs, probs: &[f64]) -> Result<(), GridMdpError> {
        let flat = self.flat_index(state)?;
        if probs.len() != self.n_acts {
            return Err(GridMdpError::ShapeMismatch {
                expected: self.n_acts,
                actual: probs.len(),
            });
        }
        if probs.iter().any(|p| !p.is_finite() || *p < 0.0) {
            return Err(GridMdpError::InvalidConfiguration(format!(
                "probabilities have to be finite and non-negative but are {:?}",
                probs
            )));
        }
        let sum: f64 = probs.iter().sum();
        if sum <= 0.0 {
            return Err(GridMdpError::DegenerateDistribution(format!(
                "weights at {:?} sum to zero",
                state
            )));
        }
        for (p, &w) in self.table.row_mut(flat).iter_mut().zip(probs.iter()) {
            *p = w / sum;
        }
        Ok(())
    }

    /// Zeroes the probabilities of illegal actions at `state` and renormalizes the row.
    ///
    /// The row is rescaled only when some probability was removed, so a row
    /// that is already masked is left bit-for-bit unchanged. Does nothing if
    /// masking is disabled.
    pub fn update_mask(&mut self, state: &E::Obs) -> Result<(), GridMdpError> {
        let flat = self.flat_index(state)?;
        if !self.masking {
            return Ok(());
        }

        let legal: Vec<usize> = self
            .mask
            .legal_actions(state)
            .iter()
            .map(Act::index)
            .filter(|&a| a < self.n_acts)
            .collect();
        if legal.is_empty() {
            return Err(GridMdpError::DegenerateDistribution(format!(
                "no legal action at {:?}",
                state
            )));
        }

        let mut row = self.table.row_mut(flat);
        let mut removed = 0.0;
        for (a, p) in row.iter_mut().enumerate() {
            if !legal.contains(&a) && *p != 0.0 {
                removed += *p;
                *p = 0.0;
            }
        }
        let sum = row.sum();
        if sum > 0.0 {
            if removed > 0.0 {
                row.mapv_inplace(|p| p / sum);
            }
        } else {
            warn!(
                "No probability left on legal actions at {:?}, fall back to uniform over {:?}",
                state, legal
            );
            let p = 1.0 / legal.len() as f64;
            for a in legal {
                row[a] = p;
            }
        }
        Ok(())
    }

    /// Samples an action at `state` after updating the mask of its row.
    pub fn get_action(&mut self, state: &E::Obs) -> Result<E::Act, GridMdpError> {
        self.update_mask(state)?;

        let flat = self.flat_index(state)?;
        let dist = WeightedIndex::new(self.table.row(flat).iter()).map_err(|e| {
            GridMdpError::DegenerateDistribution(format!("{:?} at {:?}", e, state))
        })?;
        let ix = dist.sample(&mut self.rng);
        trace!("MaskedPolicy::get_action({:?}) = {}", state, ix);

        E::Act::from_index(ix).ok_or_else(|| {
            GridMdpError::InvalidConfiguration(format!(
                "action index {} is not an action of the environment",
                ix
            ))
        })
    }
}

impl<E: MaskedEnv> Policy<E> for MaskedPolicy<E> {
    fn sample(&mut self, obs: &E::Obs) -> Result<E::Act> {
        Ok(self.get_action(obs)?)
    }
}
