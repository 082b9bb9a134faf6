//! drawsim - lottery draw simulation and historical results analysis
//!
//! - `simulator`: Monte Carlo estimate of how many draws it takes for a set
//!   of bets to win
//! - `results`: scrape, clean and store published draw results, then count
//!   number frequencies

pub mod constants;
pub mod error;
pub mod results;
pub mod simulator;

pub use error::{ConfigError, ResultsError, SimError};
