#![allow(clippy::float_cmp)]
//! Utilities for interaction of agents and environments.
use crate::{
    record::{Record, RecordValue, Recorder},
    Act, Env, Obs, Policy,
};
use anyhow::Result;
use log::info;

/// Values common to every step, followed by those the environment reported.
fn step_record<E: Env>(
    env_record: Record,
    obs: &E::Obs,
    act: &E::Act,
    reward: f32,
    is_done: bool,
) -> Record {
    let mut record = Record::empty();
    let obs = obs.multi_index().iter().map(|&i| i as f32).collect();
    record.insert("obs", RecordValue::Array1(obs));
    record.insert("action", RecordValue::Scalar(act.index() as _));
    record.insert("action_name", RecordValue::String(format!("{:?}", act)));
    record.insert("reward", RecordValue::Scalar(reward));
    record.insert("done", RecordValue::Scalar(is_done as i32 as _));
    record.merge_inplace(env_record);
    record
}

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Run episodes with a policy and recorder, returning the return of each episode.
///
/// The entities of the library interact as illustrated below:
///
/// ```mermaid
/// graph LR
///     Env --> Obs
///     Obs --> Policy
///     Policy --> Act
///     Act --> Env
/// ```
///
/// An episode lasts until the environment reports termination or truncation,
/// so the environment should be configured with a step limit when the
/// policy is not guaranteed to reach a terminal state.
pub fn eval_with_recorder<E, P, R>(
    env: &mut E,
    policy: &mut P,
    n_episodes: usize,
    recorder: &mut R,
) -> Result<Vec<f32>>
where
    E: Env,
    P: Policy<E>,
    R: Recorder,
{
    let mut rs = Vec::new();

    for episode in 0..n_episodes {
        let mut prev_obs = env.reset()?;
        let mut count_step = 0;
        let mut r_total = 0.0;

        loop {
            let act = policy.sample(&prev_obs)?;
            let (step, record) = env.step(&act);
            r_total += step.reward;

            let mut record = step_record::<E>(record, &step.obs, &act, step.reward, step.is_done());
            record.insert("episode", RecordValue::Scalar(episode as _));
            record.insert("step", RecordValue::Scalar(count_step as _));
            recorder.write(record);

            if step.is_done() {
                break;
            }
            prev_obs = step.obs;
            count_step += 1;
        }
        info!(
            "Episode {:?}, {:?} steps, reward = {:?}",
            episode,
            count_step + 1,
            r_total
        );
        rs.push(r_total);
    }

    Ok(rs)
}

/// Run a fixed number of environment steps, resetting whenever an episode ends.
///
/// Returns the number of finished episodes.
pub fn run_steps<E, P, R>(
    env: &mut E,
    policy: &mut P,
    n_steps: usize,
    recorder: &mut R,
) -> Result<usize>
where
    E: Env,
    P: Policy<E>,
    R: Recorder,
{
    let mut obs = env.reset()?;
    let mut n_episodes = 0;

    for count_step in 0..n_steps {
        let act = policy.sample(&obs)?;
        let (step, record) = env.step_with_reset(&act)?;
        info!(
            "reward is {}, done is {} and action was {:?}",
            step.reward,
            step.is_done(),
            act
        );

        let mut record = step_record::<E>(record, &step.obs, &act, step.reward, step.is_done());
        record.insert("step", RecordValue::Scalar(count_step as _));
        record.insert("episode", RecordValue::Scalar(n_episodes as _));
        recorder.write(record);

        obs = match step.init_obs {
            Some(init_obs) => {
                n_episodes += 1;
                init_obs
            }
            None => step.obs,
        };
    }

    Ok(n_episodes)
}
