//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Path to the source workbook (xlsx, xls, xlsb, ods) or CSV file
    pub path: PathBuf,

    /// Worksheet to read (overrides config file; default: first sheet)
    #[arg(long)]
    pub sheet: Option<String>,

    /// Also list every written file
    #[arg(short, long)]
    pub verbose: bool,
}
