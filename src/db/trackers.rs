//! Tracker persistence.
//!
//! Trackers are keyed by UUID and carry their schedule as a JSON array of
//! weekday names. Deleting a tracker removes its completion records in the
//! same transaction, so queries never observe orphaned records.

use crate::db::categories;
use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::libs::tracker::{Tracker, TrackerCategory};
use crate::libs::weekday::Weekday;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::BTreeSet;
use uuid::Uuid;

const INSERT_TRACKER: &str = "INSERT INTO trackers (id, name, emoji, color, schedule, created_at, category_id) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const UPDATE_TRACKER: &str = "UPDATE trackers SET name = ?2, emoji = ?3, color = ?4, schedule = ?5 WHERE id = ?1";
const UPDATE_TRACKER_CATEGORY: &str = "UPDATE trackers SET category_id = ?2 WHERE id = ?1";
const DELETE_TRACKER: &str = "DELETE FROM trackers WHERE id = ?1";
const DELETE_TRACKER_RECORDS: &str = "DELETE FROM records WHERE tracker_id = ?1";
const SELECT_CATEGORIES: &str = "SELECT id, name FROM categories ORDER BY id";
const SELECT_BY_CATEGORY: &str = "SELECT id, name, emoji, color, schedule, created_at FROM trackers WHERE category_id = ?1 ORDER BY rowid";
const SELECT_BY_ID: &str = "SELECT id, name, emoji, color, schedule, created_at FROM trackers WHERE id = ?1";

/// Raw row before id and schedule decoding.
struct TrackerRow {
    id: String,
    name: String,
    emoji: String,
    color: String,
    schedule: String,
    created_at: NaiveDate,
}

pub struct Trackers {
    conn: Connection,
}

impl Trackers {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Inserts a tracker into a category, creating the category if needed.
    pub fn insert(&mut self, tracker: &Tracker, category_name: &str) -> Result<()> {
        let tx = self.conn.transaction()?;
        let (category_id, _) = categories::create_in(&tx, category_name)?;
        tx.execute(
            INSERT_TRACKER,
            params![
                tracker.id.to_string(),
                tracker.name,
                tracker.emoji,
                tracker.color,
                serde_json::to_string(&tracker.schedule)?,
                tracker.created_at,
                category_id
            ],
        )?;
        tx.commit()?;
        Ok(())
    }

    /// Replaces a tracker's editable fields; `id` and `created_at` survive.
    /// A category name moves the tracker, creating the category if needed.
    pub fn update(&mut self, tracker: &Tracker, category_name: Option<&str>) -> Result<()> {
        let tx = self.conn.transaction()?;
        let affected = tx.execute(
            UPDATE_TRACKER,
            params![
                tracker.id.to_string(),
                tracker.name,
                tracker.emoji,
                tracker.color,
                serde_json::to_string(&tracker.schedule)?
            ],
        )?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::TrackerNotFound(tracker.id.to_string())));
        }
        if let Some(name) = category_name {
            let (category_id, _) = categories::create_in(&tx, name)?;
            tx.execute(UPDATE_TRACKER_CATEGORY, params![tracker.id.to_string(), category_id])?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Deletes a tracker and all of its completion records.
    pub fn delete(&mut self, id: Uuid) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute(DELETE_TRACKER_RECORDS, params![id.to_string()])?;
        let affected = tx.execute(DELETE_TRACKER, params![id.to_string()])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::TrackerNotFound(id.to_string())));
        }
        tx.commit()?;
        Ok(())
    }

    pub fn fetch_by_id(&mut self, id: Uuid) -> Result<Option<Tracker>> {
        let row = self
            .conn
            .query_row(SELECT_BY_ID, params![id.to_string()], map_tracker_row)
            .optional()?;
        row.map(decode_tracker_row).transpose()
    }

    /// All categories with their member trackers, both in storage order.
    /// Categories without trackers are included; the visibility filter drops
    /// them from display.
    pub fn fetch_all(&mut self) -> Result<Vec<TrackerCategory>> {
        let mut categories = Vec::new();
        let category_rows: Vec<(i64, String)> = {
            let mut stmt = self.conn.prepare(SELECT_CATEGORIES)?;
            let iter = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
            let mut rows = Vec::new();
            for row in iter {
                rows.push(row?);
            }
            rows
        };

        for (category_id, category_name) in category_rows {
            let mut stmt = self.conn.prepare(SELECT_BY_CATEGORY)?;
            let row_iter = stmt.query_map(params![category_id], map_tracker_row)?;
            let mut trackers = Vec::new();
            for row in row_iter {
                trackers.push(decode_tracker_row(row?)?);
            }
            categories.push(TrackerCategory {
                name: category_name,
                trackers,
            });
        }

        Ok(categories)
    }
}

fn map_tracker_row(row: &rusqlite::Row) -> rusqlite::Result<TrackerRow> {
    Ok(TrackerRow {
        id: row.get(0)?,
        name: row.get(1)?,
        emoji: row.get(2)?,
        color: row.get(3)?,
        schedule: row.get(4)?,
        created_at: row.get(5)?,
    })
}

fn decode_tracker_row(row: TrackerRow) -> Result<Tracker> {
    let schedule: BTreeSet<Weekday> = serde_json::from_str(&row.schedule)?;
    Ok(Tracker {
        id: Uuid::parse_str(&row.id)?,
        name: row.name,
        emoji: row.emoji,
        color: row.color,
        schedule,
        created_at: row.created_at,
    })
}
