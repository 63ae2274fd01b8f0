use crate::config::Config;
use crate::converter::{convert_folder, BatchReport};
use crate::error::CalendarResult;
use colored::Colorize;

/// Exit code when every workbook was converted
pub const EXIT_SUCCESS: u8 = 0;

/// Exit code for I/O or unreadable workbooks
pub const EXIT_FAILURE: u8 = 1;

/// Exit code when a workbook has cells that break the sheet layout
pub const EXIT_INVALID_DATA: u8 = 2;

/// Description and version, as shown by `--version`
pub fn version_line() -> String {
    format!(
        "{} {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION")
    )
}

/// Process exit code for a finished batch
pub fn exit_code(report: &BatchReport) -> u8 {
    if report.is_success() {
        EXIT_SUCCESS
    } else if report.has_validation_errors() {
        EXIT_INVALID_DATA
    } else {
        EXIT_FAILURE
    }
}

/// Execute the conversion of a whole input folder
pub fn convert(config: &Config, verbose: bool) -> CalendarResult<BatchReport> {
    if verbose {
        println!("{}", "📅 Excel → iCal".bold().green());
        println!("   Input:  {}", config.input_folder.display());
        println!("   Output: {}", config.output_folder.display());
        println!("   Domain: {}\n", config.domain);
    }

    if !config.input_folder.is_dir() {
        eprintln!(
            "{} Folder \"{}\" not found.",
            "*** Error:".red().bold(),
            config.input_folder.display()
        );
    }

    let report = convert_folder(config, |input| {
        println!("Processing \"{}\"...", input.display());
    })?;

    if verbose {
        for converted in &report.converted {
            println!(
                "   {} {} ({} sheets, {} columns, {} events)",
                "✅".green(),
                converted.output.display(),
                converted.stats.sheets,
                converted.stats.columns,
                converted.stats.events
            );
        }
    }

    for failed in &report.failed {
        eprintln!(
            "{} {}: {}",
            "*** Error:".red().bold(),
            failed.input.display(),
            failed.error
        );
        if failed.error.is_validation() {
            eprintln!("    Fix the cell and run again. The calendar file is incomplete.");
        }
    }

    if !report.skipped.is_empty() {
        eprintln!(
            "{} Skipped {} workbook(s) after the first failure:",
            "***".yellow(),
            report.skipped.len()
        );
        for skipped in &report.skipped {
            eprintln!("    {}", skipped.display());
        }
    }

    if report.is_success() {
        println!("Done");
    } else {
        println!(
            "{} {} converted, {} failed",
            "Finished with errors:".red().bold(),
            report.converted.len(),
            report.failed.len()
        );
    }

    Ok(report)
}
