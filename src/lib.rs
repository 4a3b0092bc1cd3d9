//! Sheetloc - translation workbook to JSON converter
//!
//! Sheetloc is a CLI tool and library for turning a single-sheet translation
//! workbook into one JSON dictionary per language per output file. The sheet
//! embeds a small row-based mini-language: `C` rows declare the ordered
//! language set, `F` rows select the current output file, `#` rows are
//! comments, and every other row defines a string entry.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, exit status)
//! - `config`: Configuration file loading and parsing
//! - `interpreter`: Row interpretation state machine (the core)
//! - `reporter`: Colored summary table and warning output
//! - `sheet`: Workbook/CSV row reading
//! - `writer`: Per-language JSON file output

pub mod cli;
pub mod config;
pub mod interpreter;
pub mod reporter;
pub mod sheet;
pub mod writer;
