use crate::types::CellRef;
use std::path::PathBuf;
use thiserror::Error;

pub type CalendarResult<T> = Result<T, CalendarError>;

#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read workbook {}: {message}", path.display())]
    Workbook { path: PathBuf, message: String },

    #[error("Error in cell \"{cell}\": the cell must contain an event name")]
    InvalidTitleCell { cell: CellRef },

    #[error("Error in cell \"{cell}\": the cell must contain a date")]
    InvalidDateCell { cell: CellRef },
}

impl CalendarError {
    /// True for errors caused by the spreadsheet contents rather than the environment
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CalendarError::InvalidTitleCell { .. } | CalendarError::InvalidDateCell { .. }
        )
    }

    /// Offending cell for validation errors
    pub fn cell(&self) -> Option<&CellRef> {
        match self {
            CalendarError::InvalidTitleCell { cell } | CalendarError::InvalidDateCell { cell } => {
                Some(cell)
            }
            _ => None,
        }
    }
}
