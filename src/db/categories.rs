//! Category persistence.
//!
//! Category names are unique under case-insensitive comparison (enforced by
//! the `idx_categories_name` index); `create` resolves a duplicate name to
//! the existing row instead of failing.

use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

const INSERT_CATEGORY: &str = "INSERT INTO categories (name) VALUES (?1)";
const SELECT_ID_BY_NAME: &str = "SELECT id FROM categories WHERE name = ?1 COLLATE NOCASE";
const SELECT_ALL_NAMES: &str = "SELECT name FROM categories ORDER BY id";
const DELETE_CATEGORY: &str = "DELETE FROM categories WHERE id = ?1";
const COUNT_TRACKERS: &str = "SELECT COUNT(*) FROM trackers WHERE category_id = ?1";
const REASSIGN_TRACKERS: &str = "UPDATE trackers SET category_id = ?2 WHERE category_id = ?1";

pub struct Categories {
    conn: Connection,
}

impl Categories {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Creates a category, resolving to the existing row when the name is
    /// already taken (case-insensitively). Returns (id, created).
    pub fn create(&mut self, name: &str) -> Result<(i64, bool)> {
        create_in(&self.conn, name)
    }

    /// Looks up a category id by name, case-insensitively.
    pub fn find_id(&mut self, name: &str) -> Result<Option<i64>> {
        find_id_in(&self.conn, name)
    }

    /// Category names in storage order.
    pub fn fetch_names(&mut self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_NAMES)?;
        let name_iter = stmt.query_map([], |row| row.get(0))?;
        let mut names = Vec::new();
        for name in name_iter {
            names.push(name?);
        }
        Ok(names)
    }

    /// Number of trackers in a category.
    pub fn member_count(&mut self, name: &str) -> Result<usize> {
        let id = match self.find_id(name)? {
            Some(id) => id,
            None => return Ok(0),
        };
        let count: i64 = self.conn.query_row(COUNT_TRACKERS, params![id], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Deletes a category, moving its trackers to the default category.
    ///
    /// Deleting the default category is refused while it still has members;
    /// with no members it is deleted like any other. Returns the number of
    /// reassigned trackers.
    pub fn delete(&mut self, name: &str, default_category: &str) -> Result<usize> {
        let id = self
            .find_id(name)?
            .ok_or_else(|| msg_error_anyhow!(Message::CategoryNotFound(name.to_string())))?;

        let members: i64 = self.conn.query_row(COUNT_TRACKERS, params![id], |row| row.get(0))?;

        if name.eq_ignore_ascii_case(default_category) && members > 0 {
            return Err(msg_error_anyhow!(Message::CannotDeleteDefaultCategory(name.to_string())));
        }

        let tx = self.conn.transaction()?;
        let mut reassigned = 0usize;
        if members > 0 {
            let (default_id, _) = create_in(&tx, default_category)?;
            reassigned = tx.execute(REASSIGN_TRACKERS, params![id, default_id])?;
        }
        tx.execute(DELETE_CATEGORY, params![id])?;
        tx.commit()?;

        Ok(reassigned)
    }
}

pub(crate) fn find_id_in(conn: &Connection, name: &str) -> Result<Option<i64>> {
    conn.query_row(SELECT_ID_BY_NAME, params![name], |row| row.get(0))
        .optional()
        .map_err(Into::into)
}

pub(crate) fn create_in(conn: &Connection, name: &str) -> Result<(i64, bool)> {
    if let Some(id) = find_id_in(conn, name)? {
        return Ok((id, false));
    }
    conn.execute(INSERT_CATEGORY, params![name])?;
    Ok((conn.last_insert_rowid(), true))
}
