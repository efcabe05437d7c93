//! Database schema migration management.
//!
//! Migrations are registered in version order and applied inside a single
//! transaction during database initialization; the `migrations` table records
//! what has already run. Forward-only: there is no rollback path.

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_info, msg_success};
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// A single versioned schema change.
#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Registry and runner for all schema migrations.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: base schema. Category names are unique case-insensitively,
        // so creating "sport" next to "Sport" resolves to the existing row.
        self.add_migration(1, "create_tracker_tables", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS categories (
        id INTEGER NOT NULL PRIMARY KEY,
        name TEXT NOT NULL,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )",
                [],
            )?;
            tx.execute(
                "CREATE UNIQUE INDEX IF NOT EXISTS idx_categories_name ON categories(name COLLATE NOCASE)",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS trackers (
        id TEXT NOT NULL PRIMARY KEY,
        name TEXT NOT NULL,
        emoji TEXT NOT NULL,
        color TEXT NOT NULL,
        schedule TEXT NOT NULL,
        created_at DATE NOT NULL,
        category_id INTEGER NOT NULL,
        FOREIGN KEY (category_id) REFERENCES categories(id)
    )",
                [],
            )?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_trackers_category ON trackers(category_id)", [])?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS records (
        id INTEGER NOT NULL PRIMARY KEY,
        tracker_id TEXT NOT NULL,
        date DATE NOT NULL
    )",
                [],
            )?;

            Ok(())
        });

        // Version 2: enforce one record per (tracker, day). Existing duplicates
        // are collapsed to the earliest row before the unique index is created.
        self.add_migration(2, "enforce_record_uniqueness", |tx| {
            tx.execute(
                "DELETE FROM records WHERE id NOT IN (
        SELECT MIN(id) FROM records GROUP BY tracker_id, date
    )",
                [],
            )?;
            tx.execute(
                "CREATE UNIQUE INDEX IF NOT EXISTS idx_records_tracker_date ON records(tracker_id, date)",
                [],
            )?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_records_date ON records(date)", [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies every migration newer than the recorded schema version.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!("Database is up to date");
            return Ok(());
        }

        msg_debug!(format!("{}", Message::MigrationsFound(pending.len())));

        let tx = conn.transaction()?;

        for migration in pending {
            msg_info!(Message::RunningMigration(migration.version, migration.name.to_string()));

            match (migration.up)(&tx) {
                Ok(()) => {
                    tx.execute(
                        "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                        params![migration.version, migration.name],
                    )?;
                    msg_debug!(format!("{}", Message::MigrationCompleted(migration.version)));
                }
                Err(e) => {
                    msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                    return Err(e);
                }
            }
        }

        tx.commit()?;
        msg_success!(Message::AllMigrationsCompleted);

        Ok(())
    }

    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0)).unwrap_or(Some(0));

        Ok(version.unwrap_or(0))
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Initializes the schema on a fresh or existing connection.
pub fn run(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().run_migrations(conn)
}
