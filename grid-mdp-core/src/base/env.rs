//! Environment.
use super::{Act, Info, Obs, Space, Step};
use crate::record::Record;
use anyhow::Result;

/// Represents an environment, typically an MDP.
pub trait Env {
    /// Configurations.
    type Config: Clone;

    /// Observation of the environment.
    type Obs: Obs;

    /// Action of the environment.
    type Act: Act;

    /// Information in the [self::Step] object.
    type Info: Info;

    /// Builds an environment with a given random seed.
    fn build(config: &Self::Config, seed: i64) -> Result<Self>
    where
        Self: Sized;

    /// Returns the observation space.
    fn observation_space(&self) -> Space;

    /// Returns the action space.
    fn action_space(&self) -> Space;

    /// Performes an environment step.
    ///
    /// The environment is not reset when an episode ends.
    fn step(&mut self, a: &Self::Act) -> (Step<Self>, Record)
    where
        Self: Sized;

    /// Resets the environment and returns the initial observation.
    fn reset(&mut self) -> Result<Self::Obs>;

    /// Performes an environment step and reset the environment if an episode ends.
    ///
    /// The observation after the reset is stored in [`Step::init_obs`].
    fn step_with_reset(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)>
    where
        Self: Sized,
    {
        let (mut step, record) = self.step(a);
        if step.is_done() {
            step.init_obs = Some(self.reset()?);
        }
        Ok((step, record))
    }
}

/// Tells which actions are legal at an observation.
///
/// Legality is a property of the observation only, not of the history of
/// an environment, so a mask can be held apart from the environment it
/// was taken from.
pub trait ActionMask<O, A> {
    /// Returns legal actions at `obs`, sorted by [`Act::index`].
    fn legal_actions(&self, obs: &O) -> Vec<A>;
}

/// An environment with illegal actions.
pub trait MaskedEnv: Env {
    /// The legality predicate of the environment.
    type Mask: ActionMask<Self::Obs, Self::Act> + Clone;

    /// Returns the legality predicate.
    fn action_mask(&self) -> Self::Mask;
}
