use crate::db::categories::Categories;
use crate::db::trackers::Trackers;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct CategoryArgs {
    #[command(subcommand)]
    command: Option<CategoryCommand>,
}

#[derive(Debug, Subcommand)]
enum CategoryCommand {
    /// Create a new category
    New {
        /// Category name
        name: String,
    },
    /// List all categories
    List,
    /// Delete a category, moving its trackers to the default category
    Delete {
        /// Category name to delete
        name: String,
    },
}

pub fn cmd(args: CategoryArgs) -> Result<()> {
    match args.command {
        Some(CategoryCommand::New { name }) => handle_new(name),
        Some(CategoryCommand::Delete { name }) => handle_delete(name),
        Some(CategoryCommand::List) | None => handle_list(),
    }
}

fn handle_new(name: String) -> Result<()> {
    let name = name.trim().to_string();
    let (_, created) = Categories::new()?.create(&name)?;

    // Duplicate names resolve to the existing category, case-insensitively.
    if created {
        msg_success!(Message::CategoryCreated(name));
    } else {
        msg_info!(Message::CategoryAlreadyExists(name));
    }
    Ok(())
}

fn handle_list() -> Result<()> {
    let categories = Trackers::new()?.fetch_all()?;

    if categories.is_empty() {
        msg_info!(Message::NoCategoriesFound);
        return Ok(());
    }

    msg_print!(Message::CategoryListHeader, true);
    View::categories(&categories)?;
    Ok(())
}

fn handle_delete(name: String) -> Result<()> {
    let config = Config::read()?;
    let mut categories_db = Categories::new()?;

    let members = categories_db.member_count(&name)?;
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteCategory(name.clone(), members).to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    let reassigned = categories_db.delete(&name, &config.default_category())?;
    if reassigned > 0 {
        msg_warning!(Message::TrackersReassigned(reassigned, config.default_category()));
    }
    msg_success!(Message::CategoryDeleted(name));
    Ok(())
}
