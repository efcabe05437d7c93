pub mod category;
pub mod complete;
pub mod export;
pub mod init;
pub mod list;
pub mod stat;
pub mod tracker;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage trackers")]
    Tracker(tracker::TrackerArgs),
    #[command(about = "Manage categories")]
    Category(category::CategoryArgs),
    #[command(about = "Toggle a tracker's completion for a date")]
    Complete(complete::CompleteArgs),
    #[command(about = "Show trackers due on a date")]
    List(list::ListArgs),
    #[command(about = "Show completion statistics")]
    Stat(stat::StatArgs),
    #[command(about = "Export data to CSV, JSON or Excel")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Tracker(args) => tracker::cmd(args),
            Commands::Category(args) => category::cmd(args),
            Commands::Complete(args) => complete::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Stat(args) => stat::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}
