//! Cleaning raw results tables into draw records.

use super::html::{extract_tables, Table};
use crate::constants::{
    COLUMN_COMBINATIONS, COLUMN_DRAW_DATE, COLUMN_GAME, DRAW_DATE_FORMATS, UNKNOWN_GAME,
};
use crate::error::ResultsError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

/// One cleaned historical draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRecord {
    pub game: String,
    pub draw_date: NaiveDate,
    /// Numbers in the order they were published
    pub combination: Vec<u32>,
}

impl DrawRecord {
    /// Numbers joined with `-`, e.g. `7-21`.
    pub fn combination_key(&self) -> String {
        self.combination
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join("-")
    }
}

/// Parse the first table of a results page into records.
///
/// Rows whose combination cell holds only separators (draws that did not
/// happen) are dropped. Any other malformed row is an error.
pub fn parse_draw_results(html: &str) -> Result<Vec<DrawRecord>, ResultsError> {
    let table = extract_tables(html)
        .into_iter()
        .next()
        .ok_or(ResultsError::NoTable)?;
    parse_table(&table)
}

/// Clean an already extracted table.
pub fn parse_table(table: &Table) -> Result<Vec<DrawRecord>, ResultsError> {
    let date_col = table
        .column(COLUMN_DRAW_DATE)
        .ok_or_else(|| ResultsError::MissingColumn(COLUMN_DRAW_DATE.to_string()))?;
    let combo_col = table
        .column(COLUMN_COMBINATIONS)
        .ok_or_else(|| ResultsError::MissingColumn(COLUMN_COMBINATIONS.to_string()))?;
    let game_col = table.column(COLUMN_GAME);

    let mut records = Vec::with_capacity(table.body().len());
    let mut skipped = 0;

    for (i, row) in table.body().iter().enumerate() {
        // 1-based, counting the header
        let row_num = i + 2;
        let cell = |col: usize| row.get(col).map(String::as_str).unwrap_or("");

        let Some(combination) = parse_combination(cell(combo_col), row_num)? else {
            debug!(row = row_num, value = cell(combo_col), "skipping row without a draw");
            skipped += 1;
            continue;
        };

        let draw_date = parse_draw_date(cell(date_col), row_num)?;
        let game = match game_col.map(cell) {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => UNKNOWN_GAME.to_string(),
        };

        records.push(DrawRecord {
            game,
            draw_date,
            combination,
        });
    }

    info!(records = records.len(), skipped, "parsed draw results");
    Ok(records)
}

/// Parse a date cell, trying each accepted format in turn.
pub fn parse_draw_date(value: &str, row: usize) -> Result<NaiveDate, ResultsError> {
    let value = value.trim();
    DRAW_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .ok_or_else(|| ResultsError::InvalidDate {
            row,
            value: value.to_string(),
        })
}

/// Split a `07-21` style cell into numbers.
///
/// Returns `Ok(None)` when every part is blank, the marker for a missing draw.
pub fn parse_combination(value: &str, row: usize) -> Result<Option<Vec<u32>>, ResultsError> {
    let parts: Vec<&str> = value.split('-').map(str::trim).collect();

    if parts.iter().all(|p| p.is_empty()) {
        return Ok(None);
    }

    parts
        .iter()
        .map(|p| p.parse::<u32>())
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
        .map_err(|_| ResultsError::InvalidCombination {
            row,
            value: value.to_string(),
        })
}

/// Drop games with fewer than `min_draws` records.
pub fn filter_sparse_games(records: Vec<DrawRecord>, min_draws: usize) -> Vec<DrawRecord> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in &records {
        *counts.entry(record.game.as_str()).or_insert(0) += 1;
    }

    let mut sparse: Vec<String> = counts
        .into_iter()
        .filter(|&(_, count)| count < min_draws)
        .map(|(game, count)| {
            info!(game, count, min_draws, "dropping game with too few draws");
            game.to_string()
        })
        .collect();
    sparse.sort();

    records
        .into_iter()
        .filter(|r| sparse.binary_search(&r.game).is_err())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(rows: &str) -> String {
        format!(
            "<table><tr><th>LOTTO GAME</th><th>COMBINATIONS</th><th>DRAW DATE</th><th>JACKPOT</th></tr>{}</table>",
            rows
        )
    }

    fn record(game: &str, day: u32) -> DrawRecord {
        DrawRecord {
            game: game.to_string(),
            draw_date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            combination: vec![1, 2],
        }
    }

    #[test]
    fn test_parses_rows() {
        let html = page(
            "<tr><td>EZ2 Lotto 2D</td><td>07-21</td><td>1/15/2024</td><td>4,000</td></tr>\
             <tr><td>Lotto 6/42</td><td>01-12-23-34-40-42</td><td>2024-01-14</td><td>5,000,000</td></tr>",
        );
        let records = parse_draw_results(&html).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].game, "EZ2 Lotto 2D");
        assert_eq!(records[0].combination, vec![7, 21]);
        assert_eq!(
            records[0].draw_date,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert_eq!(records[1].combination, vec![1, 12, 23, 34, 40, 42]);
        assert_eq!(records[1].combination_key(), "1-12-23-34-40-42");
    }

    #[test]
    fn test_blank_combinations_are_dropped() {
        let html = page(
            "<tr><td>EZ2 Lotto 2D</td><td>-</td><td>1/15/2024</td><td></td></tr>\
             <tr><td>Swertres 3D</td><td> - - </td><td>1/15/2024</td><td></td></tr>\
             <tr><td>EZ2 Lotto 2D</td><td>00-31</td><td>1/16/2024</td><td></td></tr>",
        );
        let records = parse_draw_results(&html).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].combination, vec![0, 31]);
    }

    #[test]
    fn test_bad_combination_is_error() {
        let html = page("<tr><td>EZ2</td><td>07-x1</td><td>1/15/2024</td><td></td></tr>");
        let err = parse_draw_results(&html).unwrap_err();
        assert!(matches!(err, ResultsError::InvalidCombination { row: 2, .. }));
    }

    #[test]
    fn test_partially_blank_combination_is_error() {
        assert!(parse_combination("07-", 5).is_err());
    }

    #[test]
    fn test_bad_date_is_error() {
        let html = page("<tr><td>EZ2</td><td>07-21</td><td>someday</td><td></td></tr>");
        let err = parse_draw_results(&html).unwrap_err();
        assert!(matches!(err, ResultsError::InvalidDate { row: 2, .. }));
    }

    #[test]
    fn test_long_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert_eq!(parse_draw_date("December 31, 2023", 1).unwrap(), expected);
        assert_eq!(parse_draw_date("Dec 31, 2023", 1).unwrap(), expected);
    }

    #[test]
    fn test_missing_required_column() {
        let html = "<table><tr><th>DRAW DATE</th></tr><tr><td>1/1/2024</td></tr></table>";
        let err = parse_draw_results(html).unwrap_err();
        assert!(matches!(err, ResultsError::MissingColumn(ref c) if c == "COMBINATIONS"));
    }

    #[test]
    fn test_missing_game_column_uses_placeholder() {
        let html = "<table><tr><th>COMBINATIONS</th><th>DRAW DATE</th></tr>\
                    <tr><td>3-4</td><td>1/1/2024</td></tr></table>";
        let records = parse_draw_results(html).unwrap();
        assert_eq!(records[0].game, UNKNOWN_GAME);
    }

    #[test]
    fn test_no_table() {
        assert!(matches!(
            parse_draw_results("<p>maintenance</p>"),
            Err(ResultsError::NoTable)
        ));
    }

    #[test]
    fn test_filter_sparse_games() {
        let records = vec![
            record("EZ2", 1),
            record("EZ2", 2),
            record("EZ2", 3),
            record("6/58", 1),
        ];
        let kept = filter_sparse_games(records, 2);
        assert_eq!(kept.len(), 3);
        assert!(kept.iter().all(|r| r.game == "EZ2"));
    }
}
