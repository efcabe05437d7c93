use crate::db::records::Records;
use crate::db::trackers::Trackers;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::tracker::Tracker;
use crate::libs::view::View;
use crate::libs::weekday::Weekday;
use crate::{msg_bail_anyhow, msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::Local;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect};
use std::collections::BTreeSet;
use uuid::Uuid;

#[derive(Debug, Args)]
pub struct TrackerArgs {
    #[command(subcommand)]
    command: Option<TrackerCommand>,
}

#[derive(Debug, Subcommand)]
enum TrackerCommand {
    /// Create a new tracker
    New {
        /// Tracker name
        name: Option<String>,
        /// Emoji shown next to the name
        #[arg(short, long)]
        emoji: Option<String>,
        /// Color identifier
        #[arg(short, long)]
        color: Option<String>,
        /// Scheduled weekdays, e.g. --days mo,we,fr
        #[arg(short, long, value_delimiter = ',')]
        days: Vec<Weekday>,
        /// Category name (default category when omitted)
        #[arg(long)]
        category: Option<String>,
    },
    /// List all trackers
    List,
    /// Edit a tracker
    Edit {
        /// Tracker id to edit
        id: String,
    },
    /// Delete a tracker and its completion history
    Delete {
        /// Tracker id to delete
        id: String,
    },
}

pub fn cmd(args: TrackerArgs) -> Result<()> {
    match args.command {
        Some(TrackerCommand::New {
            name,
            emoji,
            color,
            days,
            category,
        }) => handle_new(name, emoji, color, days, category),
        Some(TrackerCommand::Edit { id }) => handle_edit(id),
        Some(TrackerCommand::Delete { id }) => handle_delete(id),
        Some(TrackerCommand::List) | None => handle_list(),
    }
}

fn handle_new(
    name: Option<String>,
    emoji: Option<String>,
    color: Option<String>,
    days: Vec<Weekday>,
    category: Option<String>,
) -> Result<()> {
    let config = Config::read()?;

    let name: String = match name {
        Some(name) => name,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTrackerName.to_string())
            .interact_text()?,
    };
    let name = name.trim().to_string();
    if name.is_empty() {
        msg_bail_anyhow!(Message::TrackerNameRequired);
    }

    let emoji: String = match emoji {
        Some(emoji) => emoji,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTrackerEmoji.to_string())
            .allow_empty(true)
            .interact_text()?,
    };

    let color: String = match color {
        Some(color) => color,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTrackerColor.to_string())
            .default("#2FD058".to_string())
            .interact_text()?,
    };

    let schedule: BTreeSet<Weekday> = if days.is_empty() {
        prompt_schedule(&BTreeSet::new())?
    } else {
        days.into_iter().collect()
    };
    if schedule.is_empty() {
        msg_bail_anyhow!(Message::TrackerScheduleRequired);
    }

    let category = category.unwrap_or_else(|| config.default_category());

    let tracker = Tracker::new(&name, &emoji, &color, schedule, Local::now().date_naive());
    Trackers::new()?.insert(&tracker, &category)?;

    msg_success!(Message::TrackerCreated(name));
    Ok(())
}

fn handle_list() -> Result<()> {
    let config = Config::read()?;
    let mut trackers_db = Trackers::new()?;
    let categories = trackers_db.fetch_all()?;

    if categories.iter().all(|category| category.trackers.is_empty()) {
        msg_info!(Message::NoTrackersFound);
        return Ok(());
    }

    let records = Records::new()?.fetch_all()?;
    msg_print!(Message::TrackersHeader, true);
    View::trackers(&categories, &records, config.show_emoji())?;
    Ok(())
}

fn handle_edit(id: String) -> Result<()> {
    let mut trackers_db = Trackers::new()?;

    let tracker = match find_tracker(&mut trackers_db, &id)? {
        Some(tracker) => tracker,
        None => {
            msg_error!(Message::TrackerNotFound(id));
            return Ok(());
        }
    };

    msg_print!(Message::EditingTracker(tracker.name.clone()), true);

    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTrackerName.to_string())
        .default(tracker.name.clone())
        .interact_text()?;
    let name = name.trim().to_string();
    if name.is_empty() {
        msg_bail_anyhow!(Message::TrackerNameRequired);
    }

    let emoji: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTrackerEmoji.to_string())
        .default(tracker.emoji.clone())
        .allow_empty(true)
        .interact_text()?;

    let color: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTrackerColor.to_string())
        .default(tracker.color.clone())
        .interact_text()?;

    let schedule = prompt_schedule(&tracker.schedule)?;
    if schedule.is_empty() {
        msg_bail_anyhow!(Message::TrackerScheduleRequired);
    }

    let category: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTrackerCategory.to_string())
        .default(current_category(&mut trackers_db, tracker.id)?)
        .interact_text()?;

    // Same id and creation date, every other field replaced.
    let updated = Tracker {
        id: tracker.id,
        name: name.clone(),
        emoji,
        color,
        schedule,
        created_at: tracker.created_at,
    };
    trackers_db.update(&updated, Some(&category))?;

    msg_success!(Message::TrackerUpdated(name));
    Ok(())
}

fn handle_delete(id: String) -> Result<()> {
    let mut trackers_db = Trackers::new()?;

    let tracker = match find_tracker(&mut trackers_db, &id)? {
        Some(tracker) => tracker,
        None => {
            msg_error!(Message::TrackerNotFound(id));
            return Ok(());
        }
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTracker(tracker.name.clone()).to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    trackers_db.delete(tracker.id)?;
    msg_success!(Message::TrackerDeleted(tracker.name));
    Ok(())
}

fn find_tracker(trackers_db: &mut Trackers, id: &str) -> Result<Option<Tracker>> {
    match Uuid::parse_str(id.trim()) {
        Ok(parsed) => trackers_db.fetch_by_id(parsed),
        Err(_) => Ok(None),
    }
}

fn prompt_schedule(current: &BTreeSet<Weekday>) -> Result<BTreeSet<Weekday>> {
    let titles: Vec<&str> = Weekday::ALL.iter().map(|day| day.title()).collect();
    let defaults: Vec<bool> = Weekday::ALL.iter().map(|day| current.contains(day)).collect();

    let selected = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTrackerSchedule.to_string())
        .items(&titles)
        .defaults(&defaults)
        .interact()?;

    Ok(selected.into_iter().map(|index| Weekday::ALL[index]).collect())
}

fn current_category(trackers_db: &mut Trackers, id: Uuid) -> Result<String> {
    let categories = trackers_db.fetch_all()?;
    Ok(categories
        .into_iter()
        .find(|category| category.trackers.iter().any(|tracker| tracker.id == id))
        .map(|category| category.name)
        .unwrap_or_default())
}
