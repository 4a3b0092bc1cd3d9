//! Row classification for the sheet mini-language.
//!
//! The first cell of a row selects what the row means:
//! - `#` - comment, ignored
//! - `C` - language declaration (one placeholder cell, then language codes)
//! - `F` - destination declaration (next cell is the file-path template)
//! - anything else - string entry (first cell is the id, rest are values)

/// A classified sheet row, parsed once before dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// A `#` row. Carries nothing.
    Comment,
    /// A `C` row: the ordered language codes, trimmed but not yet validated.
    Languages(Vec<String>),
    /// An `F` row: the destination file-path template, trimmed.
    Destination(String),
    /// A string entry: trimmed id plus the raw value cells, one per language
    /// position. Values keep their original whitespace.
    Entry { id: String, values: Vec<String> },
}

impl Row {
    /// Classify a raw row of cells.
    ///
    /// Trailing blank cells are stripped first. Returns `None` for rows that
    /// carry nothing: fully blank rows and rows left with fewer than two
    /// cells.
    pub fn parse(cells: &[String]) -> Option<Row> {
        let end = cells.iter().rposition(|cell| !cell.trim().is_empty())? + 1;
        let cells = &cells[..end];
        if cells.len() < 2 {
            return None;
        }

        match cells[0].trim() {
            "#" => Some(Row::Comment),
            // The cell right after "C" is a placeholder and is skipped.
            "C" => Some(Row::Languages(
                cells[2..].iter().map(|c| c.trim().to_string()).collect(),
            )),
            "F" => Some(Row::Destination(cells[1].trim().to_string())),
            id => Some(Row::Entry {
                id: id.to_string(),
                values: cells[1..].to_vec(),
            }),
        }
    }
}
