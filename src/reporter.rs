//! Summary output.
//!
//! Renders the conversion result as a per-language table (translated counts
//! and percentages, color-coded by completeness) plus a warning block for
//! duplicated string ids. Print functions have `*_to` variants taking a
//! writer so tests can capture output.

use std::io::{self, Write};
use std::path::PathBuf;

use colored::{ColoredString, Colorize};
use unicode_width::UnicodeWidthStr;

use crate::interpreter::ConversionReport;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Completeness thresholds for the percentage colors.
const GREEN_THRESHOLD: f64 = 98.0;
const YELLOW_THRESHOLD: f64 = 80.0;

/// Print the success line and per-language summary table to stdout.
pub fn print_summary(report: &ConversionReport) {
    print_summary_to(report, &mut io::stdout().lock());
}

pub fn print_summary_to<W: Write>(report: &ConversionReport, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        "Language files created".green()
    );

    if report.missing.is_empty() {
        return;
    }

    let rows: Vec<(String, String, String, f64)> = report
        .missing
        .iter()
        .map(|(language, &missing)| {
            let pct = percentage(report.entries, missing);
            (
                language.clone(),
                format_count(report.entries, missing),
                format!("{:.2}%", pct),
                pct,
            )
        })
        .collect();

    let lang_width = column_width("Language", rows.iter().map(|r| r.0.as_str()));
    let count_width = column_width("Count", rows.iter().map(|r| r.1.as_str()));

    let _ = writeln!(
        writer,
        "{}  {}  {}",
        pad("Language", lang_width).bold().blue(),
        pad("Count", count_width).bold().blue(),
        "Percentage".bold().blue()
    );
    for (language, count, pct_text, pct) in &rows {
        let _ = writeln!(
            writer,
            "{}  {}  {}",
            colorize(&pad(language, lang_width), *pct),
            colorize(&pad(count, count_width), *pct),
            colorize(pct_text, *pct)
        );
    }
}

/// Print the duplicate-id warning block to stdout, if there is anything to
/// warn about.
pub fn print_duplicates(report: &ConversionReport) {
    print_duplicates_to(report, &mut io::stdout().lock());
}

pub fn print_duplicates_to<W: Write>(report: &ConversionReport, writer: &mut W) {
    if report.duplicates.is_empty() {
        return;
    }

    let _ = writeln!(
        writer,
        "{} {} duplicate string {} overwritten:",
        "warning:".bold().yellow(),
        report.duplicates.len(),
        if report.duplicates.len() == 1 {
            "id was"
        } else {
            "ids were"
        }
    );
    for id in &report.duplicates {
        let _ = writeln!(writer, "{}", format!("- {id}").yellow());
    }
}

/// List every written file, shown with `--verbose`.
pub fn print_written(paths: &[PathBuf]) {
    print_written_to(paths, &mut io::stdout().lock());
}

pub fn print_written_to<W: Write>(paths: &[PathBuf], writer: &mut W) {
    for path in paths {
        let _ = writeln!(writer, "{} {}", "wrote".dimmed(), path.display());
    }
}

/// Translated share of all assigned entries. A run with zero entries is
/// trivially complete.
fn percentage(entries: u64, missing: u64) -> f64 {
    if entries == 0 {
        return 100.0;
    }
    entries.saturating_sub(missing) as f64 / entries as f64 * 100.0
}

fn format_count(entries: u64, missing: u64) -> String {
    let translated = entries.saturating_sub(missing);
    if missing == 0 {
        format!("{translated}/{entries}")
    } else {
        format!("{translated}/{entries} (-{missing})")
    }
}

fn colorize(text: &str, pct: f64) -> ColoredString {
    if pct >= GREEN_THRESHOLD {
        text.green()
    } else if pct >= YELLOW_THRESHOLD {
        text.yellow()
    } else {
        text.red()
    }
}

fn column_width<'a>(header: &'a str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells
        .chain(std::iter::once(header))
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0)
}

fn pad(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{text}{}", " ".repeat(padding))
}
