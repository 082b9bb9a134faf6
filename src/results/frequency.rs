//! Number frequency histograms over historical draws.

use super::parse::DrawRecord;
use crate::constants::HISTOGRAM_BAR_WIDTH;
use serde::Serialize;
use std::collections::BTreeMap;

/// How many times each number was drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NumberFrequencies {
    pub game: Option<String>,
    pub total_draws: u64,
    pub counts: BTreeMap<u32, u64>,
}

impl NumberFrequencies {
    pub fn from_records<'a>(
        game: Option<&str>,
        records: impl IntoIterator<Item = &'a DrawRecord>,
    ) -> Self {
        let mut freq = Self {
            game: game.map(str::to_string),
            ..Default::default()
        };

        for record in records {
            if game.is_some_and(|g| g != record.game) {
                continue;
            }
            freq.total_draws += 1;
            for &number in &record.combination {
                *freq.counts.entry(number).or_insert(0) += 1;
            }
        }

        freq
    }

    /// Build from `(number, count)` pairs, e.g. a database query.
    pub fn from_counts(game: Option<&str>, total_draws: u64, counts: &[(u32, u64)]) -> Self {
        Self {
            game: game.map(str::to_string),
            total_draws,
            counts: counts.iter().copied().collect(),
        }
    }

    /// Numbers sorted by count descending, ties by number.
    pub fn most_common(&self, n: usize) -> Vec<(u32, u64)> {
        let mut sorted: Vec<(u32, u64)> = self.counts.iter().map(|(&k, &v)| (k, v)).collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        sorted.truncate(n);
        sorted
    }

    /// Bar chart, one line per number.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let title = self.game.as_deref().unwrap_or("all games");
        out.push_str(&format!(
            "── NUMBER FREQUENCY: {} ({} draws) ──\n",
            title, self.total_draws
        ));

        let peak = self.counts.values().copied().max().unwrap_or(0);
        for (number, &count) in &self.counts {
            let bar_len = if peak > 0 {
                (count as usize * HISTOGRAM_BAR_WIDTH) / peak as usize
            } else {
                0
            };
            out.push_str(&format!(
                "  {:>3} {:>6} {}\n",
                number,
                count,
                "█".repeat(bar_len)
            ));
        }

        out
    }
}
