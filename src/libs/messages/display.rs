//! Display implementation for habt application messages.
//!
//! All user-facing text lives in this single `match`, keeping wording
//! consistent across commands and making a future localization pass a
//! one-file change.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TRACKER MESSAGES ===
            Message::TrackerCreated(name) => format!("Tracker '{}' created", name),
            Message::TrackerUpdated(name) => format!("Tracker '{}' updated", name),
            Message::TrackerDeleted(name) => format!("Tracker '{}' and its completion history deleted", name),
            Message::TrackerNotFound(id) => format!("Tracker '{}' not found", id),
            Message::TrackerNameRequired => "Tracker name cannot be empty".to_string(),
            Message::TrackerScheduleRequired => "Select at least one weekday for the schedule".to_string(),
            Message::NoTrackersFound => "No trackers yet. Create one with 'habt tracker new'".to_string(),
            Message::TrackersHeader => "📋 Trackers".to_string(),
            Message::EditingTracker(name) => format!("Editing tracker '{}'", name),
            Message::ConfirmDeleteTracker(name) => {
                format!("Delete tracker '{}' and all of its completion records?", name)
            }
            Message::PromptTrackerName => "Tracker name".to_string(),
            Message::PromptTrackerEmoji => "Emoji".to_string(),
            Message::PromptTrackerColor => "Color".to_string(),
            Message::PromptTrackerSchedule => "Scheduled weekdays".to_string(),
            Message::PromptTrackerCategory => "Category".to_string(),

            // === CATEGORY MESSAGES ===
            Message::CategoryCreated(name) => format!("Category '{}' created", name),
            Message::CategoryAlreadyExists(name) => format!("Category '{}' already exists", name),
            Message::CategoryDeleted(name) => format!("Category '{}' deleted", name),
            Message::CategoryNotFound(name) => format!("Category '{}' not found", name),
            Message::CategoryListHeader => "📂 Categories".to_string(),
            Message::NoCategoriesFound => "No categories yet".to_string(),
            Message::ConfirmDeleteCategory(name, count) => {
                format!("Delete category '{}'? Its {} tracker(s) move to the default category", name, count)
            }
            Message::CannotDeleteDefaultCategory(name) => {
                format!("Cannot delete the default category '{}' while it still has trackers", name)
            }
            Message::TrackersReassigned(count, target) => {
                format!("{} tracker(s) moved to category '{}'", count, target)
            }

            // === COMPLETION MESSAGES ===
            Message::CompletionMarked(name, date) => format!("'{}' completed on {}", name, date),
            Message::CompletionCleared(name, date) => format!("'{}' is no longer completed on {}", name, date),
            Message::FutureDateRejected(date) => format!("{} is in the future, completion not recorded", date),

            // === LIST MESSAGES ===
            Message::TrackerListHeader(date) => format!("📋 Trackers for {}", date),
            Message::NothingScheduled => "Nothing scheduled for this day. What shall we track?".to_string(),
            Message::NothingFound => "Nothing found".to_string(),

            // === STATISTICS MESSAGES ===
            Message::StatisticsHeader => "📈 Statistics".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::ConfigModuleTracker => "Tracker settings".to_string(),
            Message::ConfigModuleDisplay => "Display settings".to_string(),
            Message::PromptDefaultCategory => "Default category name".to_string(),
            Message::PromptShowEmoji => "Show tracker emoji in tables".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Applying {} pending database migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} applied", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "Database schema is up to date".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Data exported to: {}", path),
            Message::ExportNothingToExport => "Nothing to export".to_string(),

            // === GENERIC MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", text)
    }
}
