//! # Habt - Habit Tracking
//!
//! A command-line utility for tracking recurring habits, marking daily
//! completions, and reviewing streak and completion statistics.
//!
//! ## Features
//!
//! - **Trackers**: Habits with a name, emoji, color and weekly schedule
//! - **Categories**: Case-insensitively unique groupings of trackers
//! - **Completion Ledger**: One toggleable completion per tracker per day
//! - **Visibility Filtering**: Date, search and mode filtered tracker lists
//! - **Statistics**: Best streak, ideal days, totals and daily averages
//! - **Data Export**: CSV, JSON and Excel output
//!
//! The engine modules ([`libs::schedule`], [`libs::visibility`],
//! [`libs::ledger`], [`libs::statistics`]) are pure functions over an
//! immutable [`libs::tracker::Snapshot`]; the database layer loads snapshots
//! and durably applies the mutations the engine describes.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use habt::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
