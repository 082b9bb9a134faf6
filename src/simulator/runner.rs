//! Repeated independent trials, aggregated into a labeled run.

use super::config::SimConfig;
use super::entries::EntrySet;
use super::trial::{run_trial, TrialResult};
use crate::error::SimError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Draw counts from every trial of one simulation, under a single label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRun {
    pub label: String,
    pub results: Vec<TrialResult>,
}

impl SimulationRun {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Each result paired with the run label.
    pub fn pairs(&self) -> impl Iterator<Item = (TrialResult, &str)> + '_ {
        self.results.iter().map(|&r| (r, self.label.as_str()))
    }

    pub fn mean(&self) -> f64 {
        if self.results.is_empty() {
            return 0.0;
        }
        self.results.iter().map(|&r| r as f64).sum::<f64>() / self.results.len() as f64
    }
}

/// Run `config.num_trials` independent trials against `entries`.
///
/// With `max_draws_per_trial` set, the first exhausted trial fails the whole
/// run with [`SimError::Exhausted`]; results of trials already completed are
/// discarded.
pub fn run_simulation(config: &SimConfig, entries: &EntrySet) -> Result<SimulationRun, SimError> {
    let lottery = config.validate()?;
    entries.check_against(&lottery)?;
    let label = config
        .label
        .clone()
        .unwrap_or_else(|| format!("{} entries", entries.len()));

    info!(
        label = %label,
        trials = config.num_trials,
        universe = lottery.universe_size(),
        draw_size = lottery.draw_size(),
        entries = entries.len(),
        "starting simulation"
    );

    let mut results = Vec::with_capacity(config.num_trials as usize);

    for trial_idx in 0..config.num_trials {
        // Fresh RNG per trial so trials never share state
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(trial_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let draws = run_trial(&lottery, entries, &mut rng, config.max_draws_per_trial)?;
        results.push(draws);

        debug!(
            "Trial {}/{} - won after {} draws",
            trial_idx + 1,
            config.num_trials,
            draws
        );
    }

    let run = SimulationRun { label, results };
    info!(label = %run.label, mean = run.mean(), "simulation complete");

    Ok(run)
}
