//! Data export to CSV, JSON and Excel.
//!
//! Exports operate on the same [`Snapshot`] the engine consumes, so exported
//! data always reflects one consistent generation of the store. Output files
//! are named `habt_<data>_<date>.<ext>` unless an explicit path is given.

use crate::libs::ledger;
use crate::libs::statistics::{self, Statistics};
use crate::libs::tracker::Snapshot;
use crate::libs::messages::Message;
use crate::{msg_info, msg_success};
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::PathBuf;

/// Supported output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values.
    Csv,
    /// Pretty-printed JSON.
    Json,
    /// Excel workbook.
    Excel,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let label = match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "excel",
        };
        write!(f, "{}", label)
    }
}

/// Data set to export.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportData {
    /// All trackers with category, schedule and completion counts.
    Trackers,
    /// Every completion record.
    Records,
    /// The four summary statistics.
    Statistics,
    /// Trackers, records and statistics together.
    All,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportTracker {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub color: String,
    pub category: String,
    pub schedule: String,
    pub created_at: String,
    pub completed_days: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportRecord {
    pub tracker_id: String,
    pub tracker_name: String,
    pub date: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportStatistics {
    pub best_period: u32,
    pub ideal_days: u32,
    pub completed_trackers: u32,
    pub average_per_day: u32,
}

pub struct Exporter {
    format: ExportFormat,
    output_path: Option<PathBuf>,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        Self { format, output_path }
    }

    /// Exports the requested data set, printing the resulting file path.
    pub fn export(&self, data: ExportData, snapshot: &Snapshot) -> Result<()> {
        if snapshot.categories.is_empty() && snapshot.records.is_empty() {
            msg_info!(Message::ExportNothingToExport);
            return Ok(());
        }

        let path = match data {
            ExportData::Trackers => self.export_trackers(snapshot)?,
            ExportData::Records => self.export_records(snapshot)?,
            ExportData::Statistics => self.export_statistics(snapshot)?,
            ExportData::All => self.export_all(snapshot)?,
        };

        msg_success!(Message::ExportCompleted(path.display().to_string()));
        Ok(())
    }

    fn export_trackers(&self, snapshot: &Snapshot) -> Result<PathBuf> {
        let rows = tracker_rows(snapshot);
        let path = self.file_path("trackers")?;
        match self.format {
            ExportFormat::Csv => write_csv(&path, &rows)?,
            ExportFormat::Json => write_json(&path, &rows)?,
            ExportFormat::Excel => {
                let mut workbook = Workbook::new();
                write_tracker_sheet(workbook.add_worksheet(), &rows)?;
                workbook.save(&path)?;
            }
        }
        Ok(path)
    }

    fn export_records(&self, snapshot: &Snapshot) -> Result<PathBuf> {
        let rows = record_rows(snapshot);
        let path = self.file_path("records")?;
        match self.format {
            ExportFormat::Csv => write_csv(&path, &rows)?,
            ExportFormat::Json => write_json(&path, &rows)?,
            ExportFormat::Excel => {
                let mut workbook = Workbook::new();
                write_record_sheet(workbook.add_worksheet(), &rows)?;
                workbook.save(&path)?;
            }
        }
        Ok(path)
    }

    fn export_statistics(&self, snapshot: &Snapshot) -> Result<PathBuf> {
        let row = statistics_row(&statistics::calculate(snapshot));
        let path = self.file_path("statistics")?;
        match self.format {
            ExportFormat::Csv => write_csv(&path, std::slice::from_ref(&row))?,
            ExportFormat::Json => write_json(&path, &row)?,
            ExportFormat::Excel => {
                let mut workbook = Workbook::new();
                write_statistics_sheet(workbook.add_worksheet(), &row)?;
                workbook.save(&path)?;
            }
        }
        Ok(path)
    }

    /// Combined export: one workbook with three sheets for Excel, a single
    /// JSON document otherwise a set of CSV files sharing the date suffix.
    fn export_all(&self, snapshot: &Snapshot) -> Result<PathBuf> {
        match self.format {
            ExportFormat::Excel => {
                let path = self.file_path("all")?;
                let mut workbook = Workbook::new();
                write_tracker_sheet(workbook.add_worksheet().set_name("Trackers")?, &tracker_rows(snapshot))?;
                write_record_sheet(workbook.add_worksheet().set_name("Records")?, &record_rows(snapshot))?;
                write_statistics_sheet(
                    workbook.add_worksheet().set_name("Statistics")?,
                    &statistics_row(&statistics::calculate(snapshot)),
                )?;
                workbook.save(&path)?;
                Ok(path)
            }
            ExportFormat::Json => {
                let path = self.file_path("all")?;
                let combined = serde_json::json!({
                    "trackers": tracker_rows(snapshot),
                    "records": record_rows(snapshot),
                    "statistics": statistics_row(&statistics::calculate(snapshot)),
                });
                serde_json::to_writer_pretty(File::create(&path)?, &combined)?;
                Ok(path)
            }
            ExportFormat::Csv => {
                write_csv(&self.file_path("trackers")?, &tracker_rows(snapshot))?;
                write_csv(&self.file_path("records")?, &record_rows(snapshot))?;
                let path = self.file_path("statistics")?;
                write_csv(&path, std::slice::from_ref(&statistics_row(&statistics::calculate(snapshot))))?;
                Ok(path)
            }
        }
    }

    fn file_path(&self, data_name: &str) -> Result<PathBuf> {
        if let Some(path) = &self.output_path {
            return Ok(path.clone());
        }
        let date = Local::now().date_naive().format("%Y-%m-%d");
        Ok(PathBuf::from(format!("habt_{}_{}.{}", data_name, date, self.format.extension())))
    }
}

fn tracker_rows(snapshot: &Snapshot) -> Vec<ExportTracker> {
    snapshot
        .categories
        .iter()
        .flat_map(|category| {
            category.trackers.iter().map(|tracker| ExportTracker {
                id: tracker.id.to_string(),
                name: tracker.name.clone(),
                emoji: tracker.emoji.clone(),
                color: tracker.color.clone(),
                category: category.name.clone(),
                schedule: tracker.schedule.iter().map(|day| day.short()).collect::<Vec<_>>().join(" "),
                created_at: tracker.created_at.format("%Y-%m-%d").to_string(),
                completed_days: ledger::completion_count(&snapshot.records, tracker.id),
            })
        })
        .collect()
}

fn record_rows(snapshot: &Snapshot) -> Vec<ExportRecord> {
    snapshot
        .records
        .iter()
        .map(|record| ExportRecord {
            tracker_id: record.tracker_id.to_string(),
            tracker_name: snapshot
                .tracker(record.tracker_id)
                .map(|tracker| tracker.name.clone())
                .unwrap_or_default(),
            date: record.date.format("%Y-%m-%d").to_string(),
        })
        .collect()
}

fn statistics_row(statistics: &Statistics) -> ExportStatistics {
    ExportStatistics {
        best_period: statistics.best_period,
        ideal_days: statistics.ideal_days,
        completed_trackers: statistics.completed_trackers,
        average_per_day: statistics.average_per_day,
    }
}

fn write_csv<T: Serialize>(path: &PathBuf, rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_json<T: Serialize>(path: &PathBuf, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(File::create(path)?, value)?;
    Ok(())
}

fn write_tracker_sheet(sheet: &mut Worksheet, rows: &[ExportTracker]) -> Result<()> {
    let bold = Format::new().set_bold();
    let headers = ["ID", "Name", "Emoji", "Color", "Category", "Schedule", "Created", "Completed days"];
    for (col, header) in headers.iter().enumerate() {
        sheet.write_with_format(0, col as u16, *header, &bold)?;
    }
    for (index, row) in rows.iter().enumerate() {
        let r = (index + 1) as u32;
        sheet.write(r, 0, row.id.as_str())?;
        sheet.write(r, 1, row.name.as_str())?;
        sheet.write(r, 2, row.emoji.as_str())?;
        sheet.write(r, 3, row.color.as_str())?;
        sheet.write(r, 4, row.category.as_str())?;
        sheet.write(r, 5, row.schedule.as_str())?;
        sheet.write(r, 6, row.created_at.as_str())?;
        sheet.write(r, 7, row.completed_days as u32)?;
    }
    Ok(())
}

fn write_record_sheet(sheet: &mut Worksheet, rows: &[ExportRecord]) -> Result<()> {
    let bold = Format::new().set_bold();
    let headers = ["Tracker ID", "Tracker", "Date"];
    for (col, header) in headers.iter().enumerate() {
        sheet.write_with_format(0, col as u16, *header, &bold)?;
    }
    for (index, row) in rows.iter().enumerate() {
        let r = (index + 1) as u32;
        sheet.write(r, 0, row.tracker_id.as_str())?;
        sheet.write(r, 1, row.tracker_name.as_str())?;
        sheet.write(r, 2, row.date.as_str())?;
    }
    Ok(())
}

fn write_statistics_sheet(sheet: &mut Worksheet, row: &ExportStatistics) -> Result<()> {
    let bold = Format::new().set_bold();
    let rows = [
        ("Best period", row.best_period),
        ("Ideal days", row.ideal_days),
        ("Trackers completed", row.completed_trackers),
        ("Average per day", row.average_per_day),
    ];
    for (index, (label, value)) in rows.iter().enumerate() {
        sheet.write_with_format(index as u32, 0, *label, &bold)?;
        sheet.write(index as u32, 1, *value)?;
    }
    Ok(())
}
