//! SQLite storage for historical draws.
//!
//! Schema:
//! - draws: one row per draw (game, date, combination text)
//! - draw_numbers: one row per drawn number, for frequency queries

use super::parse::DrawRecord;
use crate::error::ResultsError;
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use tracing::debug;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Draw results database wrapper
pub struct ResultsDb {
    conn: Connection,
}

impl ResultsDb {
    /// Open or create the database at `path`
    pub fn open(path: &Path) -> Result<Self, ResultsError> {
        Self::init(Connection::open(path)?)
    }

    /// Throwaway database, mainly for tests
    pub fn open_in_memory() -> Result<Self, ResultsError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, ResultsError> {
        conn.execute_batch(
            r#"
            PRAGMA foreign_keys = ON;

            CREATE TABLE IF NOT EXISTS draws (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                game TEXT NOT NULL,
                draw_date TEXT NOT NULL,
                combination TEXT NOT NULL,
                UNIQUE (game, draw_date, combination)
            );

            CREATE TABLE IF NOT EXISTS draw_numbers (
                draw_id INTEGER NOT NULL REFERENCES draws(id) ON DELETE CASCADE,
                position INTEGER NOT NULL,
                number INTEGER NOT NULL,
                PRIMARY KEY (draw_id, position)
            );

            CREATE INDEX IF NOT EXISTS idx_draws_game ON draws(game);
            CREATE INDEX IF NOT EXISTS idx_draw_numbers_number ON draw_numbers(number);
            "#,
        )?;

        Ok(Self { conn })
    }

    /// Insert records in one transaction. Returns how many were new.
    pub fn insert_records(&mut self, records: &[DrawRecord]) -> Result<usize, ResultsError> {
        let tx = self.conn.transaction()?;
        let mut inserted = 0;

        {
            let mut insert_draw = tx.prepare(
                "INSERT OR IGNORE INTO draws (game, draw_date, combination) VALUES (?1, ?2, ?3)",
            )?;
            let mut insert_number = tx.prepare(
                "INSERT INTO draw_numbers (draw_id, position, number) VALUES (?1, ?2, ?3)",
            )?;

            for record in records {
                let date = record.draw_date.format(DATE_FORMAT).to_string();
                let changed =
                    insert_draw.execute(params![record.game, date, record.combination_key()])?;
                if changed == 0 {
                    debug!(game = %record.game, date = %date, "draw already stored");
                    continue;
                }

                let draw_id = tx.last_insert_rowid();
                for (position, number) in record.combination.iter().enumerate() {
                    insert_number.execute(params![draw_id, position as i64, *number as i64])?;
                }
                inserted += 1;
            }
        }

        tx.commit()?;
        Ok(inserted)
    }

    /// Distinct game names, sorted.
    pub fn games(&self) -> Result<Vec<String>, ResultsError> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT game FROM draws ORDER BY game")?;
        let games = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(games)
    }

    /// Number of stored draws for `game`, or for all games when `None`.
    pub fn draw_count(&self, game: Option<&str>) -> Result<u64, ResultsError> {
        let count: i64 = match game {
            Some(game) => self.conn.query_row(
                "SELECT COUNT(*) FROM draws WHERE game = ?1",
                params![game],
                |row| row.get(0),
            )?,
            None => self
                .conn
                .query_row("SELECT COUNT(*) FROM draws", [], |row| row.get(0))?,
        };
        Ok(count as u64)
    }

    /// How often each number was drawn, ascending by number.
    pub fn number_frequencies(&self, game: Option<&str>) -> Result<Vec<(u32, u64)>, ResultsError> {
        let mut stmt = self.conn.prepare(
            "SELECT n.number, COUNT(*) FROM draw_numbers n
             JOIN draws d ON d.id = n.draw_id
             WHERE ?1 IS NULL OR d.game = ?1
             GROUP BY n.number ORDER BY n.number",
        )?;
        let rows = stmt
            .query_map(params![game], |row| {
                let number: i64 = row.get(0)?;
                let count: i64 = row.get(1)?;
                Ok((number as u32, count as u64))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Stored draws for `game`, oldest first.
    pub fn records(&self, game: &str) -> Result<Vec<DrawRecord>, ResultsError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, draw_date FROM draws WHERE game = ?1 ORDER BY draw_date, id",
        )?;
        let draws = stmt
            .query_map(params![game], |row| {
                Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut numbers = self.conn.prepare(
            "SELECT number FROM draw_numbers WHERE draw_id = ?1 ORDER BY position",
        )?;

        let mut records = Vec::with_capacity(draws.len());
        for (id, date) in draws {
            let combination = numbers
                .query_map(params![id], |row| row.get::<_, i64>(0))?
                .map(|n| n.map(|n| n as u32))
                .collect::<Result<Vec<_>, _>>()?;
            let draw_date = NaiveDate::parse_from_str(&date, DATE_FORMAT).map_err(|_| {
                ResultsError::InvalidDate {
                    row: id as usize,
                    value: date.clone(),
                }
            })?;
            records.push(DrawRecord {
                game: game.to_string(),
                draw_date,
                combination,
            });
        }

        Ok(records)
    }

    /// Most recent draw date for `game`, if any.
    pub fn latest_draw_date(&self, game: &str) -> Result<Option<NaiveDate>, ResultsError> {
        let date: Option<String> = self
            .conn
            .query_row(
                "SELECT MAX(draw_date) FROM draws WHERE game = ?1",
                params![game],
                |row| row.get(0),
            )
            .optional()?
            .flatten();

        Ok(date.and_then(|d| NaiveDate::parse_from_str(&d, DATE_FORMAT).ok()))
    }
}
