//! Grid world environment.
#![allow(clippy::float_cmp)]
use crate::{Coord, Grid, GridAct, GridWorldConfig, TransitionTensor};
use anyhow::Result;
use grid_mdp_core::{
    record::{Record, RecordValue},
    Env, GridMdpError, Info, MaskedEnv, Space, Step,
};
use log::{info, trace};
use ndarray::ArrayView3;

/// Reward for entering the goal cell.
pub const GOAL_REWARD: f32 = 10.0;

/// Reward for entering the hazard cell.
pub const HAZARD_REWARD: f32 = -10.0;

/// Reward for any other legal move.
pub const STEP_REWARD: f32 = -1.0;

/// Reward for an illegal action, which leaves the state unchanged.
pub const ILLEGAL_REWARD: f32 = 0.0;

/// Information given at every step of the interaction with the environment.
///
/// Currently, it is empty and used to match the type signature.
#[derive(Clone, Debug, Default)]
pub struct GridInfo {}

impl Info for GridInfo {}

/// A deterministic `size x size` grid world.
///
/// The agent starts at `(0, 0)`. Entering the goal `(size-1, size-1)` gives
/// [`GOAL_REWARD`] and entering the hazard `(size-2, size-2)` gives
/// [`HAZARD_REWARD`]; both terminate the episode. Other moves cost
/// [`STEP_REWARD`]. The environment never resets itself, see
/// [`Env::step_with_reset`] for that.
///
/// The transition tensor over all cells and actions is built at construction
/// and never changes afterwards.
///
/// ```
/// use grid_mdp_core::Env;
/// use grid_mdp_env::{Coord, GridAct, GridWorld};
///
/// let mut env = GridWorld::new(5).unwrap();
/// let (step, _) = env.step(&GridAct::Down);
/// assert_eq!(step.obs, Coord::new(1, 0));
/// assert_eq!(step.reward, -1.0);
/// ```
#[derive(Debug, Clone)]
pub struct GridWorld {
    grid: Grid,

    state: Coord,

    transitions: TransitionTensor,

    count_steps: usize,

    max_steps: Option<usize>,
}

impl GridWorld {
    /// Constructs a grid world with the given side length and no step limit.
    pub fn new(size: usize) -> Result<Self, GridMdpError> {
        Self::from_config(&GridWorldConfig::default().size(size))
    }

    /// Constructs a grid world from a configuration.
    pub fn from_config(config: &GridWorldConfig) -> Result<Self, GridMdpError> {
        if config.max_steps == Some(0) {
            return Err(GridMdpError::InvalidConfiguration(
                "max_steps has to be positive".to_string(),
            ));
        }
        let grid = Grid::new(config.size)?;
        let transitions = TransitionTensor::build(&grid);
        let mut env = Self {
            grid,
            state: Coord::ORIGIN,
            transitions,
            count_steps: 0,
            max_steps: config.max_steps,
        };
        env.reset_state();
        info!(
            "Initialize GridWorld, size = {}, goal = {}, hazard = {}",
            grid.size(),
            grid.goal(),
            grid.hazard()
        );
        Ok(env)
    }

    fn reset_state(&mut self) {
        self.state = Coord::ORIGIN;
        self.count_steps = 0;
    }

    /// Geometry of the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Number of states, `size^2`.
    pub fn n_states(&self) -> usize {
        self.grid.n_states()
    }

    /// The goal cell.
    pub fn goal(&self) -> Coord {
        self.grid.goal()
    }

    /// The hazard cell.
    pub fn hazard(&self) -> Coord {
        self.grid.hazard()
    }

    /// The current state.
    pub fn state(&self) -> Coord {
        self.state
    }

    /// Legal actions at `coord`, see [`Grid::legal_actions`].
    pub fn legal_actions(&self, coord: &Coord) -> Vec<GridAct> {
        self.grid.legal_actions(coord)
    }

    /// Linear index of a cell.
    pub fn state_index(&self, coord: &Coord) -> Result<usize, GridMdpError> {
        self.grid.state_index(coord)
    }

    /// Cell of a linear index.
    pub fn coord_of(&self, ix: usize) -> Result<Coord, GridMdpError> {
        self.grid.coord_of(ix)
    }

    /// The transition tensor.
    pub fn transitions(&self) -> &TransitionTensor {
        &self.transitions
    }

    /// The transition tensor as an array indexed by
    /// `[action][state_index][next_state_index]`.
    pub fn transition_tensor(&self) -> ArrayView3<'_, f32> {
        self.transitions.view()
    }

    /// Reward and termination for entering `coord` with a legal move.
    fn outcome(&self, coord: &Coord) -> (f32, bool) {
        if !self.grid.is_terminal(coord) {
            (STEP_REWARD, false)
        } else if *coord == self.grid.goal() {
            (GOAL_REWARD, true)
        } else {
            (HAZARD_REWARD, true)
        }
    }
}

impl Env for GridWorld {
    type Config = GridWorldConfig;
    type Obs = Coord;
    type Act = GridAct;
    type Info = GridInfo;

    /// Constructs [`GridWorld`].
    ///
    /// The dynamics are deterministic, so `seed` is not used.
    fn build(config: &Self::Config, _seed: i64) -> Result<Self> {
        Ok(Self::from_config(config)?)
    }

    fn observation_space(&self) -> Space {
        Space::MultiDiscrete(vec![self.size(), self.size()])
    }

    fn action_space(&self) -> Space {
        Space::Discrete(GridAct::N)
    }

    /// Moves the agent.
    ///
    /// An action that would leave the grid is ignored: the state is kept,
    /// the reward is [`ILLEGAL_REWARD`] and the episode does not end.
    fn step(&mut self, a: &GridAct) -> (Step<Self>, Record) {
        trace!("GridWorld::step({:?}) at {}", a, self.state);

        let (reward, is_terminated, legal) = match self.grid.next_coord(&self.state, *a) {
            Some(next) => {
                self.state = next;
                self.count_steps += 1;
                let (reward, is_terminated) = self.outcome(&next);
                (reward, is_terminated, true)
            }
            None => {
                trace!("Ignored illegal action {:?} at {}", a, self.state);
                (ILLEGAL_REWARD, false, false)
            }
        };
        let is_truncated = legal
            && !is_terminated
            && self.max_steps.map_or(false, |max| self.count_steps >= max);

        let mut record = Record::empty();
        record.insert("legal", RecordValue::Scalar(legal as i32 as _));
        if let Ok(ix) = self.grid.state_index(&self.state) {
            record.insert("state_index", RecordValue::Scalar(ix as _));
        }

        let step = Step::new(
            self.state,
            *a,
            reward,
            is_terminated,
            is_truncated,
            GridInfo {},
        );
        (step, record)
    }

    /// Puts the agent back to `(0, 0)`.
    fn reset(&mut self) -> Result<Coord> {
        trace!("GridWorld::reset()");
        self.reset_state();
        Ok(self.state)
    }
}

impl MaskedEnv for GridWorld {
    type Mask = Grid;

    fn action_mask(&self) -> Grid {
        self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_at(size: usize, coord: Coord) -> GridWorld {
        let mut env = GridWorld::new(size).unwrap();
        env.state = coord;
        env
    }

    #[test]
    fn test_build() {
        let env = GridWorld::new(5).unwrap();
        assert_eq!(env.state(), Coord::ORIGIN);
        assert_eq!(env.goal(), Coord::new(4, 4));
        assert_eq!(env.hazard(), Coord::new(3, 3));
        assert_eq!(env.observation_space(), Space::MultiDiscrete(vec![5, 5]));
        assert_eq!(env.action_space(), Space::Discrete(4));
        assert_eq!(env.transition_tensor().shape(), &[4, 25, 25]);
    }

    #[test]
    fn test_build_invalid_size() {
        for size in 0..3 {
            assert!(matches!(
                GridWorld::new(size),
                Err(GridMdpError::InvalidConfiguration(_))
            ));
        }
        let config = GridWorldConfig::default().size(2);
        let err = GridWorld::build(&config, 0).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GridMdpError>(),
            Some(GridMdpError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_reach_goal() {
        let mut env = env_at(5, Coord::new(3, 4));
        let (step, _) = env.step(&GridAct::Down);
        assert_eq!(step.obs, Coord::new(4, 4));
        assert_eq!(step.reward, 10.0);
        assert!(step.is_terminated);
        assert!(!step.is_truncated);
    }

    #[test]
    fn test_reach_goal_from_left() {
        let mut env = env_at(5, Coord::new(4, 3));
        let (step, _) = env.step(&GridAct::Right);
        assert_eq!(step.obs, Coord::new(4, 4));
        assert_eq!(step.reward, 10.0);
        assert!(step.is_terminated);
    }

    #[test]
    fn test_reach_hazard() {
        let mut env = env_at(5, Coord::new(3, 4));
        let (step, _) = env.step(&GridAct::Left);
        assert_eq!(step.obs, Coord::new(3, 3));
        assert_eq!(step.reward, -10.0);
        assert!(step.is_terminated);
    }

    #[test]
    fn test_terminated_iff_terminal_cell() {
        for size in 3..7 {
            let env = GridWorld::new(size).unwrap();
            for ix in 0..env.n_states() {
                let coord = env.coord_of(ix).unwrap();
                for act in env.legal_actions(&coord) {
                    let mut probe = env_at(size, coord);
                    let (step, _) = probe.step(&act);
                    assert_eq!(step.is_terminated, env.grid().is_terminal(&step.obs));
                }
            }
        }
    }

    #[test]
    fn test_plain_move() {
        let mut env = GridWorld::new(5).unwrap();
        let (step, record) = env.step(&GridAct::Down);
        assert_eq!(step.obs, Coord::new(1, 0));
        assert_eq!(step.reward, -1.0);
        assert!(!step.is_done());
        assert_eq!(record.get_scalar("legal").unwrap(), 1.0);
        assert_eq!(record.get_scalar("state_index").unwrap(), 5.0);
    }

    #[test]
    fn test_illegal_action_is_noop() {
        let mut env = GridWorld::new(5).unwrap();
        for act in [GridAct::Up, GridAct::Left, GridAct::Up] {
            let (step, record) = env.step(&act);
            assert_eq!(step.obs, Coord::ORIGIN);
            assert_eq!(step.reward, 0.0);
            assert!(!step.is_terminated);
            assert!(!step.is_truncated);
            assert_eq!(record.get_scalar("legal").unwrap(), 0.0);
            assert_eq!(env.state(), Coord::ORIGIN);
        }
    }

    #[test]
    fn test_no_auto_reset() {
        let mut env = env_at(5, Coord::new(4, 3));
        let (step, _) = env.step(&GridAct::Right);
        assert!(step.is_terminated);
        assert_eq!(env.state(), Coord::new(4, 4));

        // Stepping out of a terminal cell is still possible until reset.
        let (step, _) = env.step(&GridAct::Up);
        assert_eq!(step.obs, Coord::new(3, 4));
        assert!(!step.is_terminated);
    }

    #[test]
    fn test_reset() {
        let mut env = GridWorld::new(5).unwrap();
        let path = [GridAct::Down, GridAct::Right, GridAct::Right, GridAct::Down];
        for act in path.iter() {
            env.step(act);
        }
        assert_eq!(env.state(), Coord::new(2, 2));
        assert_eq!(env.reset().unwrap(), Coord::ORIGIN);
        assert_eq!(env.state(), Coord::ORIGIN);

        let mut env = env_at(5, Coord::new(3, 4));
        env.step(&GridAct::Left);
        assert_eq!(env.reset().unwrap(), Coord::ORIGIN);
    }

    #[test]
    fn test_step_with_reset() {
        let mut env = env_at(5, Coord::new(3, 4));
        let (step, _) = env.step_with_reset(&GridAct::Down).unwrap();
        assert!(step.is_terminated);
        assert_eq!(step.obs, Coord::new(4, 4));
        assert_eq!(step.init_obs, Some(Coord::ORIGIN));
        assert_eq!(env.state(), Coord::ORIGIN);
    }

    #[test]
    fn test_max_steps() {
        let config = GridWorldConfig::default().max_steps(Some(2));
        let mut env = GridWorld::build(&config, 0).unwrap();

        let (step, _) = env.step(&GridAct::Up);
        assert!(!step.is_truncated);
        let (step, _) = env.step(&GridAct::Down);
        assert!(!step.is_truncated);
        let (step, _) = env.step(&GridAct::Down);
        assert!(step.is_truncated);
        assert!(!step.is_terminated);

        env.reset().unwrap();
        let (step, _) = env.step(&GridAct::Right);
        assert!(!step.is_truncated);

        assert!(GridWorld::from_config(&config.max_steps(Some(0))).is_err());
    }

    #[test]
    fn test_tensor_matches_step() {
        let size = 4;
        let env = GridWorld::new(size).unwrap();
        for act in GridAct::ALL {
            for ix in 0..env.n_states() {
                let coord = env.coord_of(ix).unwrap();
                let mut probe = env_at(size, coord);
                let (step, record) = probe.step(&act);
                let legal = record.get_scalar("legal").unwrap() == 1.0;
                match env.transitions().successor(act, ix) {
                    Some(ix_next) => {
                        assert!(legal);
                        assert_eq!(env.coord_of(ix_next).unwrap(), step.obs);
                    }
                    None => assert!(!legal),
                }
            }
        }
    }

    #[test]
    fn test_legal_actions_via_mask() {
        use grid_mdp_core::ActionMask;

        let env = GridWorld::new(5).unwrap();
        let mask = env.action_mask();
        assert_eq!(
            ActionMask::legal_actions(&mask, &Coord::ORIGIN),
            vec![GridAct::Down, GridAct::Right]
        );
        assert_eq!(env.legal_actions(&Coord::new(2, 2)).len(), 4);
    }
}
