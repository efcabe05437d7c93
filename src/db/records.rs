//! Completion record persistence.
//!
//! The durable counterpart of [`crate::libs::ledger`]: `toggle` applies the
//! same state transition the pure ledger describes. The unique
//! `(tracker_id, date)` index backs the one-record-per-day invariant, and the
//! day-scoped delete removes every matching row, so a historically corrupted
//! day heals on the next toggle.

use crate::db::db::Db;
use crate::libs::tracker::CompletionRecord;
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection};
use uuid::Uuid;

const SELECT_ALL_RECORDS: &str = "SELECT tracker_id, date FROM records ORDER BY date, id";
const INSERT_RECORD: &str = "INSERT OR IGNORE INTO records (tracker_id, date) VALUES (?1, ?2)";
const DELETE_DAY: &str = "DELETE FROM records WHERE tracker_id = ?1 AND date = ?2";
const COUNT_DAY: &str = "SELECT COUNT(*) FROM records WHERE tracker_id = ?1 AND date = ?2";

pub struct Records {
    conn: Connection,
}

impl Records {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    pub fn fetch_all(&mut self) -> Result<Vec<CompletionRecord>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_RECORDS)?;
        let row_iter = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, NaiveDate>(1)?))
        })?;

        let mut records = Vec::new();
        for row in row_iter {
            let (tracker_id, date) = row?;
            records.push(CompletionRecord {
                tracker_id: Uuid::parse_str(&tracker_id)?,
                date,
            });
        }
        Ok(records)
    }

    /// Durably toggles a tracker's completion on a day.
    ///
    /// Returns `true` when the day ends up completed. Callers gate future
    /// dates and unknown trackers before getting here (see
    /// [`crate::libs::ledger::toggle`] for the pure contract).
    pub fn toggle(&mut self, tracker_id: Uuid, date: NaiveDate) -> Result<bool> {
        let existing: i64 = self
            .conn
            .query_row(COUNT_DAY, params![tracker_id.to_string(), date], |row| row.get(0))?;

        if existing > 0 {
            self.conn.execute(DELETE_DAY, params![tracker_id.to_string(), date])?;
            Ok(false)
        } else {
            self.conn.execute(INSERT_RECORD, params![tracker_id.to_string(), date])?;
            Ok(true)
        }
    }
}
