//! Workbook reading
//!
//! Turns spreadsheet files into [`Sheet`]s of tagged [`CellValue`]s. The
//! converter only depends on the [`WorkbookSource`] trait, so it can be fed
//! from memory as well as from `.xlsx` files.
//!
//! [`Sheet`]: crate::types::Sheet
//! [`CellValue`]: crate::types::CellValue

mod reader;

pub use reader::XlsxWorkbook;

use crate::error::{CalendarError, CalendarResult};
use crate::types::Sheet;

/// Source of worksheets, in workbook order
pub trait WorkbookSource {
    /// Sheet names in the order the workbook lists them
    fn sheet_names(&self) -> Vec<String>;

    /// Read one sheet by name
    fn sheet(&mut self, name: &str) -> CalendarResult<Sheet>;
}

impl WorkbookSource for Vec<Sheet> {
    fn sheet_names(&self) -> Vec<String> {
        self.iter().map(|sheet| sheet.name.clone()).collect()
    }

    fn sheet(&mut self, name: &str) -> CalendarResult<Sheet> {
        self.iter()
            .find(|sheet| sheet.name == name)
            .cloned()
            .ok_or_else(|| CalendarError::Workbook {
                path: "<memory>".into(),
                message: format!("no sheet named \"{name}\""),
            })
    }
}
