//! Conversion settings

use std::path::PathBuf;

/// Folder scanned for workbooks when none is given
pub const DEFAULT_INPUT_FOLDER: &str = "in";

/// Folder receiving the calendar files when none is given
pub const DEFAULT_OUTPUT_FOLDER: &str = "out";

/// Domain part of generated event UIDs. It only needs to be stable, not resolvable.
pub const DEFAULT_DOMAIN: &str = "lurid_bogey_ical_generator.dummy.local";

/// Settings for one conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input_folder: PathBuf,
    pub output_folder: PathBuf,
    pub domain: String,
    /// Stop the batch at the first workbook that fails
    pub fail_fast: bool,
}

impl Config {
    pub fn new(input_folder: impl Into<PathBuf>, output_folder: impl Into<PathBuf>) -> Self {
        Self {
            input_folder: input_folder.into(),
            output_folder: output_folder.into(),
            ..Self::default()
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_folder: PathBuf::from(DEFAULT_INPUT_FOLDER),
            output_folder: PathBuf::from(DEFAULT_OUTPUT_FOLDER),
            domain: DEFAULT_DOMAIN.to_string(),
            fail_fast: false,
        }
    }
}
