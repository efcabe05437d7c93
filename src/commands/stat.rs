use crate::db;
use crate::libs::messages::Message;
use crate::libs::statistics;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StatArgs {}

/// Shows the four summary metrics computed over the full history.
pub fn cmd(_stat_args: StatArgs) -> Result<()> {
    let snapshot = db::load_snapshot()?;
    let statistics = statistics::calculate(&snapshot);

    msg_print!(Message::StatisticsHeader, true);
    View::statistics(&statistics)?;
    Ok(())
}
