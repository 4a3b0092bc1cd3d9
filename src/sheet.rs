//! Sheet reading.
//!
//! Produces the rows the interpreter consumes: a rectangular grid of string
//! cells in top-to-bottom order. Workbooks (xlsx, xls, xlsb, ods) are read
//! through calamine, `.csv` files through the csv crate. Only the used range
//! of a worksheet is read; cells with no value become empty strings.

use std::path::Path;

use anyhow::{Context, Result, bail};
use calamine::{Data, Reader, open_workbook_auto};

/// Read all rows from the source file.
///
/// For workbooks, `sheet` selects a worksheet by name; `None` means the
/// first sheet. CSV files always have exactly one "sheet" and ignore the
/// selection.
pub fn read_rows(path: &Path, sheet: Option<&str>) -> Result<Vec<Vec<String>>> {
    if !path.exists() {
        bail!("source file \"{}\" was not found", path.display());
    }

    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => read_csv_rows(path),
        _ => read_workbook_rows(path, sheet),
    }
}

fn read_csv_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to open \"{}\"", path.display()))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record =
            record.with_context(|| format!("failed to read \"{}\"", path.display()))?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

fn read_workbook_rows(path: &Path, sheet: Option<&str>) -> Result<Vec<Vec<String>>> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("failed to open workbook \"{}\"", path.display()))?;

    let sheet_name = match sheet {
        Some(name) => {
            if !workbook.sheet_names().iter().any(|n| n.as_str() == name) {
                bail!(
                    "workbook \"{}\" has no sheet named \"{name}\"",
                    path.display()
                );
            }
            name.to_string()
        }
        None => match workbook.sheet_names().first() {
            Some(name) => name.clone(),
            None => bail!("workbook \"{}\" contains no sheets", path.display()),
        },
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("failed to read sheet \"{sheet_name}\""))?;

    Ok(range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect())
}

/// All cell values are coerced to strings before interpretation.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}
