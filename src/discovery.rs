//! Input discovery and output naming

use crate::error::CalendarResult;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extension of the workbooks that get converted
pub const WORKBOOK_EXTENSION: &str = "xlsx";

/// Extension of the generated calendar files
pub const CALENDAR_EXTENSION: &str = "ics";

/// Prefix spreadsheet editors use for lock files of open workbooks
pub const LOCK_FILE_PREFIX: char = '~';

/// Whether a file name looks like a workbook we should convert
pub fn is_workbook_name(name: &str) -> bool {
    name.ends_with(&format!(".{WORKBOOK_EXTENSION}")) && !name.starts_with(LOCK_FILE_PREFIX)
}

/// Whether `path` is a regular file with a convertible workbook name
pub fn is_eligible(path: &Path) -> bool {
    path.is_file()
        && path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(is_workbook_name)
}

/// List the workbooks in `folder`, sorted by file name.
///
/// A missing folder is not an error and yields no files; callers report it.
pub fn eligible_workbooks(folder: &Path) -> CalendarResult<Vec<PathBuf>> {
    let entries = match fs::read_dir(folder) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(folder = %folder.display(), "input folder missing");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut workbooks = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if is_eligible(&path) {
            workbooks.push(path);
        }
    }
    workbooks.sort();

    Ok(workbooks)
}

/// Calendar file for `input`: same stem, `.ics` extension, inside `output_folder`
pub fn output_path(input: &Path, output_folder: &Path) -> PathBuf {
    let mut name = input.file_stem().unwrap_or(input.as_os_str()).to_os_string();
    name.push(".");
    name.push(CALENDAR_EXTENSION);
    output_folder.join(name)
}
