use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use excel_to_ical::cli;
use excel_to_ical::config::{Config, DEFAULT_DOMAIN, DEFAULT_INPUT_FOLDER, DEFAULT_OUTPUT_FOLDER};
use excel_to_ical::logging;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "excel-to-ical")]
#[command(about = "Generate iCal files from Excel event sheets")]
#[command(long_about = "Generate iCal files from Excel event sheets.

Every .xlsx file in the input folder becomes one .ics file in the output
folder. Lock files starting with '~' are ignored.

SHEET LAYOUT:
  Each column of each sheet is one event series:
    row 1   event name (text)
    row 2   description (optional, may be empty)
    row 3+  one date per occurrence

  Every date becomes a whole-day event. The event UID is built from the
  year and the event name, so re-importing a calendar updates events
  instead of duplicating them.

EXIT CODES:
  0  all workbooks converted (also when the input folder is missing)
  1  a workbook or output file could not be read or written
  2  a workbook has a cell that breaks the layout above

EXAMPLES:
  excel-to-ical                          # in/ → out/
  excel-to-ical -i events -o calendars
  excel-to-ical --fail-fast --verbose")]
#[command(disable_version_flag = true)]
struct Cli {
    /// Folder with Excel files
    #[arg(short = 'i', long = "in", value_name = "DIR", default_value = DEFAULT_INPUT_FOLDER)]
    input_folder: PathBuf,

    /// Destination folder for iCal files (created if missing)
    #[arg(short = 'o', long = "out", value_name = "DIR", default_value = DEFAULT_OUTPUT_FOLDER)]
    output_folder: PathBuf,

    /// Domain used in event UIDs
    #[arg(short, long, env = "EXCEL_TO_ICAL_DOMAIN", default_value = DEFAULT_DOMAIN)]
    domain: String,

    /// Stop at the first workbook that fails instead of converting the rest
    #[arg(long)]
    fail_fast: bool,

    /// Show per-file details and debug logs
    #[arg(long)]
    verbose: bool,

    /// Shows version and exits
    #[arg(short = 'v', long)]
    version: bool,
}

fn main() -> ExitCode {
    let args = Cli::parse();

    if args.version {
        println!("{}", cli::version_line());
        return ExitCode::SUCCESS;
    }

    logging::init(args.verbose);

    match run(args) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("{} {:#}", "*** Error:".red().bold(), e);
            ExitCode::from(cli::commands::EXIT_FAILURE)
        }
    }
}

fn run(args: Cli) -> anyhow::Result<u8> {
    let config = Config::new(args.input_folder, args.output_folder)
        .with_domain(args.domain)
        .with_fail_fast(args.fail_fast);

    let report = cli::convert(&config, args.verbose).with_context(|| {
        format!(
            "Failed to convert workbooks from \"{}\"",
            config.input_folder.display()
        )
    })?;

    Ok(cli::exit_code(&report))
}
