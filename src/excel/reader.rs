//! Excel reader implementation - .xlsx → sheets of tagged cells

use crate::error::{CalendarError, CalendarResult};
use crate::excel::WorkbookSource;
use crate::types::{CellValue, Column, Sheet};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

/// An open `.xlsx` workbook. The file handle is released on drop.
pub struct XlsxWorkbook {
    path: PathBuf,
    workbook: Xlsx<BufReader<File>>,
}

impl XlsxWorkbook {
    /// Open an Excel workbook for reading
    pub fn open<P: AsRef<Path>>(path: P) -> CalendarResult<Self> {
        let path = path.as_ref().to_path_buf();
        let workbook: Xlsx<_> = open_workbook(&path).map_err(|e| CalendarError::Workbook {
            path: path.clone(),
            message: format!("Failed to open Excel file: {e}"),
        })?;

        Ok(Self { path, workbook })
    }
}

impl WorkbookSource for XlsxWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names().to_vec()
    }

    fn sheet(&mut self, name: &str) -> CalendarResult<Sheet> {
        let range = self
            .workbook
            .worksheet_range(name)
            .map_err(|e| CalendarError::Workbook {
                path: self.path.clone(),
                message: format!("Failed to read sheet \"{name}\": {e}"),
            })?;

        let sheet = sheet_from_range(name, &range);
        debug!(
            sheet = name,
            columns = sheet.columns.len(),
            "read worksheet"
        );
        Ok(sheet)
    }
}

/// Split a worksheet range into columns.
///
/// Positions are absolute: columns start at A and rows at 1 even when the
/// used range begins further in, so leading blanks read as empty cells.
fn sheet_from_range(name: &str, range: &Range<Data>) -> Sheet {
    let mut sheet = Sheet::new(name);
    let Some((last_row, last_col)) = range.end() else {
        return sheet;
    };

    for col in 0..=last_col {
        let cells = (0..=last_row)
            .map(|row| {
                range
                    .get_value((row, col))
                    .map(convert_cell)
                    .unwrap_or(CellValue::Empty)
            })
            .collect();
        sheet.columns.push(Column::new(col, cells));
    }

    sheet
}

/// Tag a raw calamine value
fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::DateTime(dt) if !dt.is_duration() => match dt.as_datetime() {
            Some(value) => CellValue::Date(value),
            None => CellValue::Other(cell.to_string()),
        },
        Data::DateTimeIso(s) => match parse_iso_datetime(s) {
            Some(value) => CellValue::Date(value),
            None => CellValue::Other(s.clone()),
        },
        _ => CellValue::Other(cell.to_string()),
    }
}

/// Parse `2024-03-04T10:00:00` or a bare `2024-03-04`
fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    s.parse::<NaiveDateTime>()
        .ok()
        .or_else(|| s.parse::<NaiveDate>().ok().map(|d| d.and_time(NaiveTime::MIN)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{ExcelDateTime, ExcelDateTimeType};

    fn date(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_time(NaiveTime::MIN)
    }

    #[test]
    fn test_convert_text_and_empty() {
        assert_eq!(
            convert_cell(&Data::String("Party".to_string())),
            CellValue::Text("Party".to_string())
        );
        assert_eq!(convert_cell(&Data::Empty), CellValue::Empty);
    }

    #[test]
    fn test_convert_numbers_and_bools_are_other() {
        assert_eq!(convert_cell(&Data::Int(7)), CellValue::Other("7".to_string()));
        assert_eq!(
            convert_cell(&Data::Float(1.5)),
            CellValue::Other("1.5".to_string())
        );
        assert_eq!(
            convert_cell(&Data::Bool(true)),
            CellValue::Other("true".to_string())
        );
    }

    #[test]
    fn test_convert_excel_date() {
        // Serial 45355 = 2024-03-04
        let cell = Data::DateTime(ExcelDateTime::new(
            45355.0,
            ExcelDateTimeType::DateTime,
            false,
        ));
        assert_eq!(convert_cell(&cell), CellValue::Date(date(2024, 3, 4)));
    }

    #[test]
    fn test_convert_duration_is_other() {
        let cell = Data::DateTime(ExcelDateTime::new(
            1.5,
            ExcelDateTimeType::TimeDelta,
            false,
        ));
        assert!(matches!(convert_cell(&cell), CellValue::Other(_)));
    }

    #[test]
    fn test_convert_iso_dates() {
        assert_eq!(
            convert_cell(&Data::DateTimeIso("2024-03-04T10:15:00".to_string())),
            CellValue::Date(
                NaiveDate::from_ymd_opt(2024, 3, 4)
                    .unwrap()
                    .and_hms_opt(10, 15, 0)
                    .unwrap()
            )
        );
        assert_eq!(
            convert_cell(&Data::DateTimeIso("2024-03-04".to_string())),
            CellValue::Date(date(2024, 3, 4))
        );
        assert_eq!(
            convert_cell(&Data::DateTimeIso("soon".to_string())),
            CellValue::Other("soon".to_string())
        );
    }

    #[test]
    fn test_sheet_from_range_uses_absolute_positions() {
        // Used range starts at B2; A and row 1 must still be present
        let mut range = Range::new((1, 1), (2, 1));
        range.set_value((1, 1), Data::String("Title".to_string()));
        range.set_value((2, 1), Data::Int(3));

        let sheet = sheet_from_range("S", &range);
        assert_eq!(sheet.columns.len(), 2);
        assert_eq!(sheet.columns[0].cells, vec![CellValue::Empty; 3]);
        assert_eq!(
            sheet.columns[1].cells,
            vec![
                CellValue::Empty,
                CellValue::Text("Title".to_string()),
                CellValue::Other("3".to_string()),
            ]
        );
        assert_eq!(sheet.columns[1].index, 1);
    }

    #[test]
    fn test_sheet_from_empty_range_has_no_columns() {
        let range: Range<Data> = Range::empty();
        assert!(sheet_from_range("Empty", &range).columns.is_empty());
    }

    #[test]
    fn test_open_missing_file_fails() {
        let result = XlsxWorkbook::open("does/not/exist.xlsx");
        assert!(matches!(result, Err(CalendarError::Workbook { .. })));
    }
}
