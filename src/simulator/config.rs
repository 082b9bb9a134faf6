//! Simulation configuration.

use super::lottery::Lottery;
use crate::constants::{
    DEFAULT_DRAW_SIZE, DEFAULT_NUM_TRIALS, DEFAULT_UNIVERSE_SIZE, QUICK_NUM_TRIALS,
};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Highest number that can be drawn (numbers are 1..=universe_size)
    pub universe_size: u32,

    /// Numbers per combination
    pub draw_size: u32,

    /// Number of independent trials to run
    pub num_trials: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Draw cap per trial (None = unbounded)
    pub max_draws_per_trial: Option<u64>,

    /// Label attached to the results (None = derived from the entry count)
    pub label: Option<String>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            universe_size: DEFAULT_UNIVERSE_SIZE,
            draw_size: DEFAULT_DRAW_SIZE,
            num_trials: DEFAULT_NUM_TRIALS,
            seed: None,
            max_draws_per_trial: None,
            label: None,
        }
    }
}

impl SimConfig {
    /// The 2-digit game: two numbers from 1 to 31
    pub fn ez2(num_trials: u32) -> Self {
        Self {
            universe_size: 31,
            draw_size: 2,
            num_trials,
            ..Default::default()
        }
    }

    /// Small run for a fast sanity check
    pub fn quick_check() -> Self {
        Self {
            num_trials: QUICK_NUM_TRIALS,
            ..Default::default()
        }
    }

    /// Validated game parameters.
    pub fn lottery(&self) -> Result<Lottery, ConfigError> {
        Lottery::new(self.universe_size, self.draw_size)
    }

    /// Check every parameter, including the trial count.
    pub fn validate(&self) -> Result<Lottery, ConfigError> {
        let lottery = self.lottery()?;
        if self.num_trials == 0 {
            return Err(ConfigError::ZeroTrials);
        }
        Ok(lottery)
    }
}
