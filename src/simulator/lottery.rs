//! Lottery parameters and the combinations drawn from them.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// A validated game: draws of `draw_size` distinct numbers from `1..=universe_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLottery")]
pub struct Lottery {
    universe_size: u32,
    draw_size: u32,
}

/// Unchecked wire form; deserialization goes through `Lottery::new`.
#[derive(Deserialize)]
struct RawLottery {
    universe_size: u32,
    draw_size: u32,
}

impl TryFrom<RawLottery> for Lottery {
    type Error = ConfigError;

    fn try_from(raw: RawLottery) -> Result<Self, Self::Error> {
        Lottery::new(raw.universe_size, raw.draw_size)
    }
}

impl Lottery {
    pub fn new(universe_size: u32, draw_size: u32) -> Result<Self, ConfigError> {
        if universe_size == 0 {
            return Err(ConfigError::EmptyUniverse);
        }
        if draw_size == 0 {
            return Err(ConfigError::EmptyDrawSize);
        }
        if draw_size > universe_size {
            return Err(ConfigError::DrawSizeExceedsUniverse {
                draw_size,
                universe_size,
            });
        }

        Ok(Self {
            universe_size,
            draw_size,
        })
    }

    pub fn universe_size(&self) -> u32 {
        self.universe_size
    }

    pub fn draw_size(&self) -> u32 {
        self.draw_size
    }

    /// Number of distinct combinations, C(U, k).
    pub fn total_combinations(&self) -> u128 {
        // k <= U is guaranteed by construction, so this only fails on u128 overflow
        combinations(self.universe_size as u64, self.draw_size as u64).unwrap_or(u128::MAX)
    }

    pub fn contains(&self, number: u32) -> bool {
        (1..=self.universe_size).contains(&number)
    }
}

/// One drawn combination, in the order the numbers came out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    numbers: Vec<u32>,
}

impl Combination {
    pub fn new(numbers: Vec<u32>) -> Self {
        Self { numbers }
    }

    pub fn numbers(&self) -> &[u32] {
        &self.numbers
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Ascending copy of the numbers, used for set comparison.
    pub fn sorted(&self) -> Vec<u32> {
        let mut sorted = self.numbers.clone();
        sorted.sort_unstable();
        sorted
    }
}

/// Binomial coefficient C(n, k). Returns `None` on overflow or when k > n.
pub fn combinations(n: u64, k: u64) -> Option<u128> {
    if k > n {
        return None;
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        // result * (n - i) is always divisible by (i + 1) at this step
        result = result.checked_mul((n - i) as u128)? / (i as u128 + 1);
    }
    Some(result)
}
