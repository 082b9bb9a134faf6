//! Monte Carlo simulator for lottery draws.
//!
//! Estimates how many draws it takes until one of a fixed set of bets wins:
//! - `draw` samples one combination without replacement
//! - `entries` validates bets and matches combinations against them
//! - `trial` draws until a match and counts the draws
//! - `runner` repeats independent trials into a labeled run
//!
//! Every trial owns its RNG, seeded from `SimConfig::seed` when reproducible
//! output is needed.

mod config;
mod draw;
mod entries;
mod lottery;
mod report;
mod runner;
mod trial;

pub use config::SimConfig;
pub use draw::draw;
pub use entries::EntrySet;
pub use lottery::{combinations, Combination, Lottery};
pub use report::{HistogramBin, SimReport};
pub use runner::{run_simulation, SimulationRun};
pub use trial::{run_trial, TrialResult};
