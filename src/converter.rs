//! Workbook → calendar conversion
//!
//! Every column of every sheet is one event series:
//!
//! | Row | Content                          |
//! |-----|----------------------------------|
//! | 1   | Event name (text, required)      |
//! | 2   | Description (optional)           |
//! | 3.. | One date per occurrence          |
//!
//! Each date becomes a whole-day `VEVENT`. Cells that break this layout abort
//! the workbook with the cell's location so the sheet can be fixed.

use crate::calendar::{event_uid, render_event, CALENDAR_BEGIN, CALENDAR_END};
use crate::config::Config;
use crate::discovery::{eligible_workbooks, output_path};
use crate::error::{CalendarError, CalendarResult};
use crate::excel::{WorkbookSource, XlsxWorkbook};
use crate::types::{CellRef, CellValue, Column};
use chrono::Datelike;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Row holding the event name
const TITLE_ROW: usize = 0;
/// Row holding the optional description
const DESCRIPTION_ROW: usize = 1;
/// First row holding a date
const FIRST_DATE_ROW: usize = 2;

/// Counts gathered while converting one workbook
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    pub sheets: usize,
    pub columns: usize,
    pub events: usize,
}

/// Converts workbooks into iCalendar text
pub struct WorkbookConverter<'a> {
    domain: &'a str,
}

impl<'a> WorkbookConverter<'a> {
    /// Create a converter stamping UIDs with `domain`
    pub fn new(domain: &'a str) -> Self {
        Self { domain }
    }

    /// Write the calendar for `source` to `out`.
    ///
    /// On a validation error the output written so far is flushed and left
    /// as is, without the closing `END:VCALENDAR` line.
    pub fn convert<S, W>(&self, source: &mut S, out: &mut W) -> CalendarResult<ConversionStats>
    where
        S: WorkbookSource + ?Sized,
        W: Write,
    {
        out.write_all(CALENDAR_BEGIN.as_bytes())?;

        match self.write_events(source, out) {
            Ok(stats) => {
                out.write_all(CALENDAR_END.as_bytes())?;
                out.flush()?;
                Ok(stats)
            }
            Err(e) => {
                if let Err(flush_err) = out.flush() {
                    warn!(error = %flush_err, "failed to flush partial calendar");
                }
                Err(e)
            }
        }
    }

    fn write_events<S, W>(&self, source: &mut S, out: &mut W) -> CalendarResult<ConversionStats>
    where
        S: WorkbookSource + ?Sized,
        W: Write,
    {
        let mut stats = ConversionStats::default();

        for sheet_name in source.sheet_names() {
            let sheet = source.sheet(&sheet_name)?;
            debug!(sheet = %sheet.name, columns = sheet.columns.len(), "walking sheet");
            stats.sheets += 1;

            for column in &sheet.columns {
                stats.events += self.write_column(&sheet.name, column, out)?;
                stats.columns += 1;
            }
        }

        Ok(stats)
    }

    /// Validate one column and write an event per date; returns the event count
    fn write_column<W: Write>(
        &self,
        sheet: &str,
        column: &Column,
        out: &mut W,
    ) -> CalendarResult<usize> {
        let title = match column.cell(TITLE_ROW) {
            CellValue::Text(s) if !s.trim().is_empty() => s,
            other => {
                let cell = CellRef::new(sheet, column.index, TITLE_ROW as u32);
                debug!(%cell, kind = other.kind(), "invalid title cell");
                return Err(CalendarError::InvalidTitleCell { cell });
            }
        };
        let description = column.cell(DESCRIPTION_ROW).as_text();

        let mut events = 0;
        for (row, cell) in column.cells.iter().enumerate().skip(FIRST_DATE_ROW) {
            let CellValue::Date(start) = cell else {
                let cell_ref = CellRef::new(sheet, column.index, row as u32);
                debug!(cell = %cell_ref, kind = cell.kind(), "invalid date cell");
                return Err(CalendarError::InvalidDateCell { cell: cell_ref });
            };

            let uid = event_uid(title, start.year(), self.domain);
            let event = render_event(&uid, *start, title, description.as_deref());
            out.write_all(event.as_bytes())?;
            out.write_all(b"\n")?;
            events += 1;
        }

        debug!(sheet, title = %title, events, "column converted");
        Ok(events)
    }
}

/// Convert one workbook into `<output_folder>/<stem>.ics`.
///
/// The output folder must exist. Returns the path written.
pub fn convert_file(
    input: &Path,
    output_folder: &Path,
    domain: &str,
) -> CalendarResult<(PathBuf, ConversionStats)> {
    let output = output_path(input, output_folder);
    // Truncate first so an unreadable workbook never leaves a stale calendar behind
    let mut writer = BufWriter::new(File::create(&output)?);
    let mut workbook = XlsxWorkbook::open(input)?;

    let stats = WorkbookConverter::new(domain).convert(&mut workbook, &mut writer)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        events = stats.events,
        "workbook converted"
    );

    Ok((output, stats))
}

/// A workbook that was converted
#[derive(Debug)]
pub struct ConvertedFile {
    pub input: PathBuf,
    pub output: PathBuf,
    pub stats: ConversionStats,
}

/// A workbook that could not be converted
#[derive(Debug)]
pub struct FailedFile {
    pub input: PathBuf,
    pub error: CalendarError,
}

/// Outcome of converting a folder of workbooks
#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<ConvertedFile>,
    pub failed: Vec<FailedFile>,
    /// Workbooks not attempted because the batch stopped early
    pub skipped: Vec<PathBuf>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// True if any failure came from invalid sheet contents
    pub fn has_validation_errors(&self) -> bool {
        self.failed.iter().any(|f| f.error.is_validation())
    }

    pub fn total_events(&self) -> usize {
        self.converted.iter().map(|c| c.stats.events).sum()
    }
}

/// Convert every eligible workbook of `config.input_folder`.
///
/// `on_file` is called before each workbook is opened. A failing workbook is
/// recorded and the batch moves on, unless `config.fail_fast` is set.
/// Errors creating the output folder end the batch.
pub fn convert_folder<F>(config: &Config, mut on_file: F) -> CalendarResult<BatchReport>
where
    F: FnMut(&Path),
{
    let workbooks = eligible_workbooks(&config.input_folder)?;
    let mut report = BatchReport::default();
    if workbooks.is_empty() {
        return Ok(report);
    }

    fs::create_dir_all(&config.output_folder)?;

    let mut pending = workbooks.into_iter();
    while let Some(input) = pending.next() {
        on_file(&input);
        match convert_file(&input, &config.output_folder, &config.domain) {
            Ok((output, stats)) => report.converted.push(ConvertedFile {
                input,
                output,
                stats,
            }),
            Err(error) => {
                warn!(input = %input.display(), %error, "workbook failed");
                report.failed.push(FailedFile { input, error });
                if config.fail_fast {
                    report.skipped.extend(pending.by_ref());
                    break;
                }
            }
        }
    }

    Ok(report)
}
