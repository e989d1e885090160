//! Batch command
//!
//! Replays a CSV file of form submissions (`type,amount,description`)
//! through the controller, applies any requested deletes, and prints the
//! resulting summary and rows as tables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{Local, NaiveDate};
use serde::Deserialize;
use tracing::{info, warn};

use crate::config::Settings;
use crate::controller::{Controller, Field, RenderSurface};
use crate::display::{format_row_table, format_summary_table, RowView, SummaryView};
use crate::error::{BudgetError, BudgetResult};
use crate::models::TransactionId;

/// One line of the batch file
#[derive(Debug, Deserialize)]
struct BatchRecord {
    #[serde(rename = "type")]
    kind: String,
    amount: String,
    #[serde(default)]
    description: String,
}

/// Console render surface fed from CSV records
#[derive(Debug, Default)]
pub struct BatchSurface {
    kind: String,
    amount: String,
    description: String,
    /// 1-based file line currently loaded into the form
    line: u64,
    pub title: String,
    pub summary: SummaryView,
    pub rows: Vec<RowView>,
    /// Rejected lines, prefixed with their line number
    pub errors: Vec<String>,
}

impl BatchSurface {
    fn load(&mut self, line: u64, record: BatchRecord) {
        self.line = line;
        self.kind = record.kind;
        self.amount = record.amount;
        self.description = record.description;
    }

    /// Record a line that never reached the controller
    fn skip(&mut self, line: u64, message: &str) {
        warn!(line, error = %message, "malformed batch line");
        self.line = line;
        self.report_error(message);
    }
}

impl RenderSurface for BatchSurface {
    fn read_field(&self, field: Field) -> String {
        match field {
            Field::Kind => self.kind.clone(),
            Field::Amount => self.amount.clone(),
            Field::Description => self.description.clone(),
        }
    }

    fn render_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn render_summary(&mut self, summary: &SummaryView) {
        self.summary = summary.clone();
    }

    fn render_row(&mut self, row: &RowView) {
        match self.rows.iter_mut().find(|r| r.id == row.id) {
            Some(existing) => *existing = row.clone(),
            None => self.rows.push(row.clone()),
        }
    }

    fn remove_row(&mut self, id: TransactionId) {
        self.rows.retain(|r| r.id != id);
    }

    fn clear_inputs(&mut self) {
        self.amount.clear();
        self.description.clear();
    }

    fn focus_field(&mut self, _field: Field) {}

    fn report_error(&mut self, message: &str) {
        self.errors.push(format!("line {}: {}", self.line, message));
    }
}

/// Run a batch from any CSV reader
pub fn run_batch<R: Read>(
    reader: R,
    settings: &Settings,
    deletes: &[TransactionId],
    today: NaiveDate,
) -> BudgetResult<BatchSurface> {
    let mut controller = Controller::from_settings(settings);
    let mut surface = BatchSurface::default();
    controller.init(&mut surface, today);

    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    for result in csv_reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                let line = e.position().map_or(0, |p| p.line());
                surface.skip(line, &e.to_string());
                continue;
            }
        };

        // line the record starts on; quoted fields may span several
        let line = record.position().map_or(0, |p| p.line());
        match record.deserialize::<BatchRecord>(Some(&headers)) {
            Ok(fields) => {
                surface.load(line, fields);
                controller.submit(&mut surface);
            }
            Err(e) => surface.skip(line, &e.to_string()),
        }
    }

    for id in deletes {
        controller.delete(&mut surface, *id);
    }

    info!(
        transactions = controller.service().all_transactions().len(),
        rejected = surface.errors.len(),
        "batch finished"
    );
    Ok(surface)
}

/// Format the final state of a batch run for the console
pub fn format_batch_report(surface: &BatchSurface, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Budget for {}\n", surface.title));
    output.push_str(&format_summary_table(&surface.summary, symbol));
    output.push_str("\n\n");
    output.push_str(&format_row_table(&surface.rows, symbol));
    output.push('\n');

    if !surface.errors.is_empty() {
        output.push_str(&format!("\nSkipped {} line(s):\n", surface.errors.len()));
        for error in &surface.errors {
            output.push_str(&format!("  {}\n", error));
        }
    }

    output
}

/// Handle the batch command
pub fn handle_batch_command(
    settings: &Settings,
    file: &Path,
    deletes: &[TransactionId],
) -> BudgetResult<()> {
    let input = File::open(file)
        .map_err(|e| BudgetError::Io(format!("Failed to open {}: {}", file.display(), e)))?;

    let surface = run_batch(input, settings, deletes, Local::now().date_naive())?;
    print!("{}", format_batch_report(&surface, &settings.currency_symbol));
    Ok(())
}
