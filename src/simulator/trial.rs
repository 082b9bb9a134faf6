//! A single trial: keep drawing until one of the entries wins.

use super::draw::draw;
use super::entries::EntrySet;
use super::lottery::Lottery;
use crate::error::SimError;
use rand::Rng;

/// Draws consumed by one trial. Always at least 1.
pub type TrialResult = u64;

/// Run one trial and return how many draws it took to match an entry.
///
/// With `max_draws = None` the loop is unbounded and ends only on a match.
/// With `Some(cap)` the trial fails with [`SimError::Exhausted`] once `cap`
/// draws have been made without a match.
pub fn run_trial(
    lottery: &Lottery,
    entries: &EntrySet,
    rng: &mut impl Rng,
    max_draws: Option<u64>,
) -> Result<TrialResult, SimError> {
    let mut draws: u64 = 0;

    loop {
        if max_draws.is_some_and(|cap| draws >= cap) {
            return Err(SimError::Exhausted { draws });
        }

        let combination = draw(lottery, rng);
        draws = draws.checked_add(1).ok_or(SimError::Exhausted { draws })?;
        let matched = entries.matches(&combination);

        if matched {
            return Ok(draws);
        }
    }
}
