use anyhow::Result;
use grid_mdp::{
    core::{
        record::{BufferedRecorder, NullRecorder},
        util, Act, Configurable, Env, Policy,
    },
    env::{Coord, GridAct, GridWorld, GridWorldConfig},
    policy::{MaskedPolicy, MaskedPolicyConfig, PolicyInit},
};
use tempdir::TempDir;

fn masked_uniform(env: &GridWorld, seed: u64) -> MaskedPolicy<GridWorld> {
    let config = MaskedPolicyConfig::default().seed(Some(seed));
    MaskedPolicy::build(env, config).unwrap()
}

#[test]
fn test_masked_rollout_never_wastes_a_step() -> Result<()> {
    let mut env = GridWorld::new(5)?;
    let mut policy = masked_uniform(&env, 42);
    let mut recorder = BufferedRecorder::new();

    util::run_steps(&mut env, &mut policy, 500, &mut recorder)?;
    assert_eq!(recorder.len(), 500);
    for record in recorder.iter() {
        assert_eq!(record.get_scalar("legal")?, 1.0);
        assert_ne!(record.get_scalar("reward")?, 0.0);

        let act = GridAct::from_index(record.get_scalar("action")? as usize).unwrap();
        assert_eq!(record.get_string("action_name")?, act.to_string());
    }
    Ok(())
}

#[test]
fn test_episodes_end_at_goal_or_hazard() -> Result<()> {
    let mut env = GridWorld::new(4)?;
    let mut policy = masked_uniform(&env, 7);
    let mut recorder = BufferedRecorder::new();

    let returns = util::eval_with_recorder(&mut env, &mut policy, 10, &mut recorder)?;
    assert_eq!(returns.len(), 10);

    let goal = env.goal();
    let hazard = env.hazard();
    for record in recorder.iter().filter(|r| r.get_scalar("done").unwrap() == 1.0) {
        let obs = record.get_array1("obs")?;
        let coord = Coord::new(obs[0] as usize, obs[1] as usize);
        let reward = record.get_scalar("reward")?;
        if coord == goal {
            assert_eq!(reward, 10.0);
        } else {
            assert_eq!(coord, hazard);
            assert_eq!(reward, -10.0);
        }
    }
    Ok(())
}

#[test]
fn test_truncated_episodes() -> Result<()> {
    let config = GridWorldConfig::default().size(8).max_steps(Some(3));
    let mut env = GridWorld::build(&config, 0)?;
    let mut policy = masked_uniform(&env, 0);

    // The goal is at least 14 moves away, so every episode is cut after 3 steps.
    let returns = util::eval_with_recorder(&mut env, &mut policy, 5, &mut NullRecorder::new())?;
    assert_eq!(returns, vec![-3.0; 5]);
    Ok(())
}

#[test]
fn test_unmasked_policy_wastes_steps_at_corner() -> Result<()> {
    let mut env = GridWorld::new(5)?;
    let config = MaskedPolicyConfig::default().masking(false).seed(Some(1));
    let mut policy = MaskedPolicy::build(&env, config)?;

    let mut n_ignored = 0;
    for _ in 0..200 {
        env.reset()?;
        let act = policy.sample(&env.state())?;
        let (step, _) = env.step(&act);
        if step.obs == Coord::ORIGIN {
            assert_eq!(step.reward, 0.0);
            assert!(!step.is_done());
            n_ignored += 1;
        }
    }
    assert!(n_ignored > 0);
    Ok(())
}

#[test]
fn test_greedy_policy_follows_tensor() -> Result<()> {
    let mut env = GridWorld::new(5)?;
    let config = MaskedPolicyConfig::default()
        .seed(Some(11))
        .policy_init(PolicyInit::Greedy);
    let mut policy = MaskedPolicy::build(&env, config)?;

    for ix in 0..env.n_states() {
        let coord = env.coord_of(ix)?;
        let act = policy.get_action(&coord)?;
        let expected = env.transitions().successor(act, ix);
        assert!(expected.is_some());

        // Walk to `coord` along the top row, then down the column.
        env.reset()?;
        for _ in 0..coord.col {
            env.step(&GridAct::Right);
        }
        for _ in 0..coord.row {
            env.step(&GridAct::Down);
        }
        assert_eq!(env.state(), coord);

        let (step, _) = env.step(&act);
        assert_eq!(Some(env.state_index(&step.obs)?), expected);
    }
    Ok(())
}

#[test]
fn test_configs_from_yaml() -> Result<()> {
    let dir = TempDir::new("grid_mdp")?;
    let env_path = dir.path().join("env.yaml");
    let policy_path = dir.path().join("policy.yaml");

    GridWorldConfig::default().size(6).save(&env_path)?;
    MaskedPolicyConfig::default()
        .seed(Some(5))
        .policy_init(PolicyInit::Greedy)
        .save(&policy_path)?;

    let env = GridWorld::build(&GridWorldConfig::load(&env_path)?, 0)?;
    let policy = MaskedPolicy::build(&env, MaskedPolicyConfig::load(&policy_path)?)?;
    assert_eq!(env.size(), 6);
    assert_eq!(policy.table_shape(), vec![6, 6, GridAct::N]);
    assert_eq!(GridAct::from_index(policy.n_acts()), None);
    Ok(())
}
