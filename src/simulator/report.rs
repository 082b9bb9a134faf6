//! Simulation report generation.

use super::entries::EntrySet;
use super::lottery::Lottery;
use super::runner::SimulationRun;
use super::trial::TrialResult;
use crate::constants::{HISTOGRAM_BAR_WIDTH, HISTOGRAM_BINS};
use serde::Serialize;

/// One histogram bucket covering `lower..=upper` draws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistogramBin {
    pub lower: u64,
    pub upper: u64,
    pub count: u32,
}

/// Aggregated results from one simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub label: String,
    pub num_trials: u32,
    pub universe_size: u32,
    pub draw_size: u32,
    pub num_entries: usize,
    pub distinct_entries: usize,

    // Aggregated stats
    pub mean_draws: f64,
    pub median_draws: f64,
    pub min_draws: u64,
    pub max_draws: u64,
    pub std_dev_draws: f64,

    /// Combinations divided by distinct winning entries
    pub expected_draws: f64,
    /// (mean - expected) / expected
    pub relative_error: f64,

    pub histogram: Vec<HistogramBin>,

    pub results: Vec<TrialResult>,
}

impl SimReport {
    /// Summarize a completed run.
    pub fn from_run(run: &SimulationRun, lottery: &Lottery, entries: &EntrySet) -> Self {
        let num_trials = run.results.len() as u32;
        let mean_draws = run.mean();

        let mut sorted = run.results.clone();
        sorted.sort_unstable();
        let median_draws = median(&sorted);
        let min_draws = sorted.first().copied().unwrap_or(0);
        let max_draws = sorted.last().copied().unwrap_or(0);

        let std_dev_draws = if sorted.len() > 1 {
            let variance = sorted
                .iter()
                .map(|&r| (r as f64 - mean_draws).powi(2))
                .sum::<f64>()
                / (sorted.len() - 1) as f64;
            variance.sqrt()
        } else {
            0.0
        };

        let expected_draws =
            lottery.total_combinations() as f64 / entries.distinct_len().max(1) as f64;
        let relative_error = (mean_draws - expected_draws) / expected_draws;

        Self {
            label: run.label.clone(),
            num_trials,
            universe_size: lottery.universe_size(),
            draw_size: lottery.draw_size(),
            num_entries: entries.len(),
            distinct_entries: entries.distinct_len(),
            mean_draws,
            median_draws,
            min_draws,
            max_draws,
            std_dev_draws,
            expected_draws,
            relative_error,
            histogram: histogram(&sorted, HISTOGRAM_BINS),
            results: run.results.clone(),
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                 DRAWS-TO-WIN SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Label: {}\nGame:  {} numbers from 1-{}\nBets:  {} ({} distinct)\nTrials: {}\n\n",
            self.label,
            self.draw_size,
            self.universe_size,
            self.num_entries,
            self.distinct_entries,
            self.num_trials
        ));

        report.push_str("── DRAWS TO WIN ─────────────────────────────────────────────────\n");
        report.push_str(&format!("  Mean:        {:.1}\n", self.mean_draws));
        report.push_str(&format!("  Median:      {:.1}\n", self.median_draws));
        report.push_str(&format!("  Min:         {}\n", self.min_draws));
        report.push_str(&format!("  Max:         {}\n", self.max_draws));
        report.push_str(&format!("  Std Dev:     {:.1}\n", self.std_dev_draws));
        report.push_str(&format!("  Expected:    {:.1}\n", self.expected_draws));
        report.push_str(&format!(
            "  Deviation:   {:+.1}%\n\n",
            self.relative_error * 100.0
        ));

        report.push_str("── DISTRIBUTION ─────────────────────────────────────────────────\n");
        let peak = self.histogram.iter().map(|b| b.count).max().unwrap_or(0);
        for bin in &self.histogram {
            let bar_len = if peak > 0 {
                (bin.count as usize * HISTOGRAM_BAR_WIDTH) / peak as usize
            } else {
                0
            };
            report.push_str(&format!(
                "  {:>8}-{:<8} {:>6} {}\n",
                bin.lower,
                bin.upper,
                bin.count,
                "█".repeat(bar_len)
            ));
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Median of an ascending slice.
fn median(sorted: &[u64]) -> f64 {
    match sorted.len() {
        0 => 0.0,
        n if n % 2 == 1 => sorted[n / 2] as f64,
        n => (sorted[n / 2 - 1] as f64 + sorted[n / 2] as f64) / 2.0,
    }
}

/// Equal-width integer bins from min to max of an ascending slice.
fn histogram(sorted: &[u64], bins: usize) -> Vec<HistogramBin> {
    let (Some(&min), Some(&max)) = (sorted.first(), sorted.last()) else {
        return Vec::new();
    };

    let span = max - min + 1;
    let width = span.div_ceil(bins.max(1) as u64).max(1);
    let num_bins = span.div_ceil(width) as usize;

    let mut out: Vec<HistogramBin> = (0..num_bins as u64)
        .map(|i| HistogramBin {
            lower: min + i * width,
            upper: (min + (i + 1) * width - 1).min(max),
            count: 0,
        })
        .collect();

    for &value in sorted {
        let idx = ((value - min) / width) as usize;
        out[idx].count += 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_for(results: Vec<u64>) -> SimReport {
        let lottery = Lottery::new(4, 2).unwrap();
        let entries = EntrySet::new(&lottery, vec![vec![1, 2]]).unwrap();
        let run = SimulationRun {
            label: "1 entries".to_string(),
            results,
        };
        SimReport::from_run(&run, &lottery, &entries)
    }

    #[test]
    fn test_report_generation() {
        let report = report_for(vec![1, 3, 5, 7, 9, 11]);
        assert_eq!(report.num_trials, 6);
        assert!((report.mean_draws - 6.0).abs() < 1e-9);
        assert!((report.median_draws - 6.0).abs() < 1e-9);
        assert_eq!(report.min_draws, 1);
        assert_eq!(report.max_draws, 11);
        assert!((report.expected_draws - 6.0).abs() < 1e-9);
        assert!(report.relative_error.abs() < 1e-9);
    }

    #[test]
    fn test_expected_draws_uses_distinct_entries() {
        let lottery = Lottery::new(4, 2).unwrap();
        let entries = EntrySet::new(&lottery, vec![vec![1, 2], vec![2, 1], vec![3, 4]]).unwrap();
        let run = SimulationRun {
            label: "dupes".to_string(),
            results: vec![3],
        };
        let report = SimReport::from_run(&run, &lottery, &entries);
        assert!((report.expected_draws - 3.0).abs() < 1e-9);
        assert_eq!(report.num_entries, 3);
        assert_eq!(report.distinct_entries, 2);
    }

    #[test]
    fn test_histogram_counts_every_result() {
        let results: Vec<u64> = (1..=500).collect();
        let report = report_for(results);
        assert_eq!(report.histogram.len(), HISTOGRAM_BINS);
        assert_eq!(report.histogram.iter().map(|b| b.count).sum::<u32>(), 500);
        assert_eq!(report.histogram[0].lower, 1);
        assert_eq!(report.histogram.last().unwrap().upper, 500);
    }

    #[test]
    fn test_histogram_narrow_range_uses_fewer_bins() {
        let report = report_for(vec![1, 1, 1, 2, 3]);
        assert_eq!(report.histogram.len(), 3);
        assert_eq!(report.histogram[0].count, 3);
    }

    #[test]
    fn test_single_trial_has_no_spread() {
        let report = report_for(vec![4]);
        assert_eq!(report.std_dev_draws, 0.0);
        assert_eq!(report.histogram.len(), 1);
    }

    #[test]
    fn test_text_and_json_output() {
        let report = report_for(vec![2, 4, 6]);
        let text = report.to_text();
        assert!(text.contains("DRAWS TO WIN"));
        assert!(text.contains("█"));

        let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(json["num_trials"], 3);
        assert_eq!(json["results"].as_array().unwrap().len(), 3);
    }
}
