//! excel-to-ical - calendar files from Excel event sheets
//!
//! Reads `.xlsx` workbooks where every column is an event series (name,
//! optional description, then dates) and writes one iCalendar file per
//! workbook with a whole-day event per date.
//!
//! # Example
//!
//! ```no_run
//! use excel_to_ical::config::Config;
//! use excel_to_ical::converter::convert_folder;
//!
//! let config = Config::new("in", "out");
//! let report = convert_folder(&config, |path| println!("Processing {}", path.display()))?;
//!
//! println!("Events: {}", report.total_events());
//! # Ok::<(), excel_to_ical::error::CalendarError>(())
//! ```

pub mod calendar;
pub mod cli;
pub mod config;
pub mod converter;
pub mod discovery;
pub mod error;
pub mod excel;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{CalendarError, CalendarResult};
pub use types::{CellRef, CellValue, Column, Sheet};
