//! Database layer for the habt application.
//!
//! SQLite-backed persistence with one store per table and a versioned
//! migration system. Stores map rows to the value types in
//! [`crate::libs::tracker`]; [`load_snapshot`] assembles the immutable
//! snapshot the engine functions consume.

/// Core database connection and initialization.
pub mod db;

/// Versioned schema migrations.
pub mod migrations;

/// Category storage with case-insensitive name uniqueness.
pub mod categories;

/// Tracker storage, including the record cascade on delete.
pub mod trackers;

/// Completion record storage and the durable toggle.
pub mod records;

use crate::libs::tracker::Snapshot;
use anyhow::Result;

/// Reads categories, trackers and records into one consistent [`Snapshot`].
///
/// Re-run after every mutation; engine computations never reach into the
/// database directly.
pub fn load_snapshot() -> Result<Snapshot> {
    let categories = trackers::Trackers::new()?.fetch_all()?;
    let records = records::Records::new()?.fetch_all()?;
    Ok(Snapshot { categories, records })
}
