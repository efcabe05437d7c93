use crate::db;
use crate::libs::export::{ExportData, ExportFormat, Exporter};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Data set to export
    #[arg(value_enum)]
    data: ExportData,
    /// Output format
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    format: ExportFormat,
    /// Output file path (auto-named in the current directory when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub fn cmd(export_args: ExportArgs) -> Result<()> {
    let snapshot = db::load_snapshot()?;
    let exporter = Exporter::new(export_args.format, export_args.output);
    exporter.export(export_args.data, &snapshot)
}
