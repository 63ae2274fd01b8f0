//! Workbook data model shared by the reader and the converter
//!
//! Cells are tagged at the reading boundary so the converter validates them
//! with a pattern match instead of inspecting raw spreadsheet values.

use chrono::NaiveDateTime;
use std::fmt;

/// Value of a single worksheet cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Text cell
    Text(String),
    /// Date or date-time cell
    Date(NaiveDateTime),
    /// Blank cell, or a position outside the used range
    Empty,
    /// Any other value (number, boolean, duration, error), kept as display text
    Other(String),
}

impl CellValue {
    /// Short name of the value kind, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            CellValue::Text(_) => "text",
            CellValue::Date(_) => "date",
            CellValue::Empty => "empty",
            CellValue::Other(_) => "other",
        }
    }

    /// Display text of the cell, `None` for blank cells and empty strings
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Text(s) | CellValue::Other(s) if !s.is_empty() => Some(s.clone()),
            CellValue::Date(dt) => Some(dt.to_string()),
            _ => None,
        }
    }
}

/// One column of a sheet: title, description, then dates
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Zero-based position of the column in the sheet (0 = A)
    pub index: u32,
    pub cells: Vec<CellValue>,
}

impl Column {
    pub fn new(index: u32, cells: Vec<CellValue>) -> Self {
        Self { index, cells }
    }

    /// Cell at `row` (zero-based); rows past the end read as empty
    pub fn cell(&self, row: usize) -> &CellValue {
        self.cells.get(row).unwrap_or(&CellValue::Empty)
    }
}

/// A named worksheet as a list of columns in left-to-right order
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub columns: Vec<Column>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    /// Append a column at the next free position
    pub fn with_column(mut self, cells: Vec<CellValue>) -> Self {
        let index = self.columns.len() as u32;
        self.columns.push(Column::new(index, cells));
        self
    }
}

/// Location of a cell, rendered as `Sheet!B3`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellRef {
    pub sheet: String,
    /// Zero-based column index
    pub column: u32,
    /// Zero-based row index
    pub row: u32,
}

impl CellRef {
    pub fn new(sheet: impl Into<String>, column: u32, row: u32) -> Self {
        Self {
            sheet: sheet.into(),
            column,
            row,
        }
    }

    /// Spreadsheet coordinate without the sheet name (e.g. `B3`)
    pub fn coordinate(&self) -> String {
        format!("{}{}", column_letter(self.column), self.row + 1)
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}!{}", self.sheet, self.coordinate())
    }
}

/// Convert column index to Excel column letter (0→A, 1→B, 25→Z, 26→AA, etc.)
pub fn column_letter(n: u32) -> String {
    let mut result = String::new();
    let mut num = n;

    loop {
        let remainder = num % 26;
        result.insert(0, (b'A' + remainder as u8) as char);
        if num < 26 {
            break;
        }
        num = num / 26 - 1;
    }

    result
}
