use crate::db::{self, records::Records};
use crate::libs::messages::Message;
use crate::{msg_error, msg_success, msg_warning};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use uuid::Uuid;

#[derive(Debug, Args)]
pub struct CompleteArgs {
    /// Tracker id to toggle
    id: String,
    /// Completion date (defaults to today)
    #[arg(long)]
    date: Option<NaiveDate>,
}

/// Toggles a tracker's completion on a date.
///
/// The pure ledger contract applies: a future date or an unknown tracker
/// leaves the store untouched, and toggling an already completed day clears
/// it again.
pub fn cmd(complete_args: CompleteArgs) -> Result<()> {
    let today = Local::now().date_naive();
    let date = complete_args.date.unwrap_or(today);

    if date > today {
        msg_warning!(Message::FutureDateRejected(date.to_string()));
        return Ok(());
    }

    let snapshot = db::load_snapshot()?;
    let tracker = match Uuid::parse_str(complete_args.id.trim()) {
        Ok(id) => snapshot.tracker(id),
        Err(_) => None,
    };
    let tracker = match tracker {
        Some(tracker) => tracker,
        None => {
            msg_error!(Message::TrackerNotFound(complete_args.id));
            return Ok(());
        }
    };

    let completed = Records::new()?.toggle(tracker.id, date)?;
    if completed {
        msg_success!(Message::CompletionMarked(tracker.name.clone(), date.to_string()));
    } else {
        msg_success!(Message::CompletionCleared(tracker.name.clone(), date.to_string()));
    }
    Ok(())
}
