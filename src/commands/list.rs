use crate::db;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::libs::visibility::{self, EmptyReason, FilterMode};
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Date to show (defaults to today)
    #[arg(long)]
    date: Option<NaiveDate>,
    /// Case-insensitive substring match on tracker names
    #[arg(long, default_value = "")]
    search: String,
    /// Filter mode
    #[arg(long, value_enum, default_value_t = FilterMode::All)]
    filter: FilterMode,
}

/// Shows the trackers due on a date, grouped by category.
///
/// The two empty outcomes are reported differently: with nothing scheduled
/// on the date at all the user is invited to create a tracker, while a list
/// emptied by search or filter mode reads "nothing found".
pub fn cmd(list_args: ListArgs) -> Result<()> {
    let config = Config::read()?;
    let today = Local::now().date_naive();
    let selected_date = list_args.date.unwrap_or(today);

    let snapshot = db::load_snapshot()?;
    let sections = visibility::visible_sections(&snapshot, selected_date, today, &list_args.search, list_args.filter);

    let shown_date = match list_args.filter {
        FilterMode::Today => today,
        _ => selected_date,
    };

    if sections.is_empty() {
        match visibility::empty_reason(&snapshot, selected_date, today, &list_args.search, list_args.filter) {
            Some(EmptyReason::NothingScheduled) => msg_info!(Message::NothingScheduled),
            _ => msg_info!(Message::NothingFound),
        }
        return Ok(());
    }

    msg_print!(Message::TrackerListHeader(shown_date.to_string()), true);
    View::sections(&sections, &snapshot.records, shown_date, config.show_emoji())?;
    Ok(())
}
