use anyhow::Result;
use clap::Parser;
use grid_mdp::{
    core::{
        record::{BufferedRecorder, Record},
        util, Configurable, Env as _,
    },
    env::{GridWorld, GridWorldConfig},
    policy::{MaskedPolicy, MaskedPolicyConfig, PolicyInit},
};
use log::info;
use serde::Serialize;
use std::fs::File;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Side length of the grid
    #[arg(long, default_value_t = 5)]
    size: usize,

    /// Number of environment steps
    #[arg(long, default_value_t = 20)]
    steps: usize,

    /// Seed of the policy
    #[arg(long)]
    seed: Option<u64>,

    /// Initial policy, uniform or greedy
    #[arg(long, default_value_t = PolicyInit::Uniform)]
    policy: PolicyInit,

    /// Sample from the raw policy, including illegal actions
    #[arg(long, default_value_t = false)]
    no_masking: bool,

    /// Maximum number of steps in an episode
    #[arg(long)]
    max_steps: Option<usize>,

    /// Environment configuration in YAML, overrides --size and --max-steps
    #[arg(long)]
    env_config: Option<String>,

    /// Write the trajectory to this CSV file
    #[arg(long)]
    csv: Option<String>,
}

#[derive(Debug, Serialize)]
struct StepRecord {
    episode: usize,
    step: usize,
    row: usize,
    col: usize,
    action: usize,
    action_name: String,
    reward: f32,
    done: bool,
}

impl TryFrom<&Record> for StepRecord {
    type Error = anyhow::Error;

    fn try_from(record: &Record) -> Result<Self> {
        let obs = record.get_array1("obs")?;
        Ok(Self {
            episode: record.get_scalar("episode")? as _,
            step: record.get_scalar("step")? as _,
            row: obs[0] as _,
            col: obs[1] as _,
            action: record.get_scalar("action")? as _,
            action_name: record.get_string("action_name")?,
            reward: record.get_scalar("reward")?,
            done: record.get_scalar("done")? == 1.0,
        })
    }
}

fn env_config(args: &Args) -> Result<GridWorldConfig> {
    match &args.env_config {
        Some(path) => GridWorldConfig::load(path),
        None => Ok(GridWorldConfig::default()
            .size(args.size)
            .max_steps(args.max_steps)),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut env = GridWorld::build(&env_config(&args)?, 0)?;
    let policy_config = MaskedPolicyConfig::default()
        .masking(!args.no_masking)
        .seed(args.seed)
        .policy_init(args.policy);
    let mut policy = MaskedPolicy::build(&env, policy_config)?;
    let mut recorder = BufferedRecorder::new();

    let n_episodes = util::run_steps(&mut env, &mut policy, args.steps, &mut recorder)?;
    info!("Finished {} episodes in {} steps", n_episodes, args.steps);

    if let Some(path) = args.csv {
        let mut wtr = csv::WriterBuilder::new().from_writer(File::create(&path)?);
        for record in recorder.iter() {
            wtr.serialize(StepRecord::try_from(record)?)?;
        }
        wtr.flush()?;
        info!("Wrote the trajectory to {}", path);
    }

    Ok(())
}
