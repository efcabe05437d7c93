use crate::libs::ledger;
use crate::libs::statistics::Statistics;
use crate::libs::tracker::{CompletionRecord, Tracker, TrackerCategory};
use crate::libs::visibility::Section;
use anyhow::Result;
use chrono::NaiveDate;
use prettytable::{row, Table};

/// Terminal table rendering.
pub struct View {}

impl View {
    /// Prints the visible sections for a date, one table per category.
    pub fn sections(sections: &[Section], records: &[CompletionRecord], date: NaiveDate, show_emoji: bool) -> Result<()> {
        for section in sections {
            println!("\n{}", section.category);
            let mut table = Table::new();
            table.add_row(row!["NAME", "SCHEDULE", "DAYS", "DONE"]);
            for tracker in &section.trackers {
                table.add_row(row![
                    Self::display_name(tracker, show_emoji),
                    Self::schedule_label(tracker),
                    ledger::completion_count(records, tracker.id),
                    if ledger::is_completed(records, tracker.id, date) { "✓" } else { "" }
                ]);
            }
            table.printstd();
        }
        Ok(())
    }

    /// Prints every tracker with its id, for use with edit/delete/complete.
    pub fn trackers(categories: &[TrackerCategory], records: &[CompletionRecord], show_emoji: bool) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["ID", "NAME", "CATEGORY", "SCHEDULE", "COLOR", "DAYS"]);
        for category in categories {
            for tracker in &category.trackers {
                table.add_row(row![
                    tracker.id,
                    Self::display_name(tracker, show_emoji),
                    category.name,
                    Self::schedule_label(tracker),
                    tracker.color,
                    ledger::completion_count(records, tracker.id)
                ]);
            }
        }
        table.printstd();
        Ok(())
    }

    /// Prints category names with member counts.
    pub fn categories(categories: &[TrackerCategory]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["NAME", "TRACKERS"]);
        for category in categories {
            table.add_row(row![category.name, category.trackers.len()]);
        }
        table.printstd();
        Ok(())
    }

    /// Prints the four summary statistics.
    pub fn statistics(statistics: &Statistics) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["Best period", statistics.best_period]);
        table.add_row(row!["Ideal days", statistics.ideal_days]);
        table.add_row(row!["Trackers completed", statistics.completed_trackers]);
        table.add_row(row!["Average per day", statistics.average_per_day]);
        table.printstd();
        Ok(())
    }

    fn display_name(tracker: &Tracker, show_emoji: bool) -> String {
        if show_emoji && !tracker.emoji.is_empty() {
            format!("{} {}", tracker.emoji, tracker.name)
        } else {
            tracker.name.clone()
        }
    }

    fn schedule_label(tracker: &Tracker) -> String {
        tracker.schedule.iter().map(|day| day.short()).collect::<Vec<_>>().join(" ")
    }
}
