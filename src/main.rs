use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use colored::Colorize;
use sheetloc::cli::{Arguments, ExitStatus, run_cli};

fn main() -> ExitCode {
    // clap exits with 2 on usage errors by default; this tool's contract is
    // 0 on success and 1 on any failure.
    let args = match Arguments::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitStatus::Success.into(),
                _ => ExitStatus::Error.into(),
            };
        }
    };

    match run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("{} {:#}", "error:".bold().red(), err);
            ExitStatus::Error.into()
        }
    }
}
