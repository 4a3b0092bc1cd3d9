//! Command-line interface layer.
//!
//! Thin orchestration: load configuration, read the sheet, run the
//! interpreter against the file writer, print the summary.

use std::path::Path;

use anyhow::{Result, ensure};

mod args;
mod exit_status;

pub use args::Arguments;
pub use exit_status::ExitStatus;

use crate::config::{self, ConfigLoadResult};
use crate::interpreter::Interpreter;
use crate::reporter;
use crate::sheet;
use crate::writer::LocaleWriter;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    ensure!(
        args.path.exists(),
        "source file \"{}\" was not found",
        args.path.display()
    );

    let start_dir = args.path.parent().unwrap_or(Path::new("."));
    let ConfigLoadResult { config, .. } = config::load_config(start_dir)?;

    // CLI flags win over the config file.
    let sheet_name = args.sheet.as_deref().or(config.sheet.as_deref());

    let rows = sheet::read_rows(&args.path, sheet_name)?;
    let mut writer = LocaleWriter::new(&args.path, &config.placeholder);
    let report = Interpreter::new(&mut writer).process(rows)?;

    reporter::print_summary(&report);
    reporter::print_duplicates(&report);
    if args.verbose {
        reporter::print_written(writer.written());
    }

    Ok(ExitStatus::Success)
}
