#[derive(Debug, Clone)]
pub enum Message {
    // === TRACKER MESSAGES ===
    TrackerCreated(String),
    TrackerUpdated(String),
    TrackerDeleted(String),
    TrackerNotFound(String),
    TrackerNameRequired,
    TrackerScheduleRequired,
    NoTrackersFound,
    TrackersHeader,
    EditingTracker(String),
    ConfirmDeleteTracker(String),
    PromptTrackerName,
    PromptTrackerEmoji,
    PromptTrackerColor,
    PromptTrackerSchedule,
    PromptTrackerCategory,

    // === CATEGORY MESSAGES ===
    CategoryCreated(String),
    CategoryAlreadyExists(String),
    CategoryDeleted(String),
    CategoryNotFound(String),
    CategoryListHeader,
    NoCategoriesFound,
    ConfirmDeleteCategory(String, usize),
    CannotDeleteDefaultCategory(String),
    TrackersReassigned(usize, String), // count, target category

    // === COMPLETION MESSAGES ===
    CompletionMarked(String, String),  // tracker name, date
    CompletionCleared(String, String), // tracker name, date
    FutureDateRejected(String),        // date

    // === LIST MESSAGES ===
    TrackerListHeader(String), // date
    NothingScheduled,
    NothingFound,

    // === STATISTICS MESSAGES ===
    StatisticsHeader,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    PromptSelectModules,
    ConfigModuleTracker,
    ConfigModuleDisplay,
    PromptDefaultCategory,
    PromptShowEmoji,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // file path
    ExportNothingToExport,

    // === GENERIC MESSAGES ===
    OperationCancelled,
}
