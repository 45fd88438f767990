//! Reading uploaded spreadsheets into roster grids.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};

use crate::server::{error::roster::RosterError, model::roster::RosterSheet};

/// Reads one worksheet of an xlsx, xlsb, xls or ods file.
///
/// The worksheet named `preferred` is used when present, otherwise the first one.
///
/// # Arguments
/// - `bytes` - Raw file contents
/// - `preferred` - Name of the worksheet to read
///
/// # Returns
/// - `Ok(RosterSheet)` - Cells rendered as text, aligned so row 0 and column 0 are A1
/// - `Err(RosterError::Spreadsheet)` - The file is not a readable spreadsheet
/// - `Err(RosterError::NoWorksheet)` - The workbook has no worksheets
pub fn read_roster_sheet(bytes: Vec<u8>, preferred: &str) -> Result<RosterSheet, RosterError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;

    let names = workbook.sheet_names();
    let name = if names.iter().any(|n| n == preferred) {
        preferred.to_string()
    } else {
        let first = names.first().cloned().ok_or(RosterError::NoWorksheet)?;
        tracing::debug!(preferred = %preferred, using = %first, "Roster worksheet not found, using first sheet");
        first
    };

    let range = workbook.worksheet_range(&name)?;

    Ok(sheet_from_range(&range))
}

/// Renders a cell range as a text grid anchored at A1.
///
/// calamine trims leading empty rows and columns; they are padded back so the
/// header stays in row 0 and teachers stay in column 0.
pub fn sheet_from_range(range: &Range<Data>) -> RosterSheet {
    let Some((start_row, start_col)) = range.start() else {
        return RosterSheet::default();
    };

    let mut rows: Vec<Vec<String>> = vec![Vec::new(); start_row as usize];
    for row in range.rows() {
        let mut cells = vec![String::new(); start_col as usize];
        cells.extend(row.iter().map(|cell| cell.to_string()));
        rows.push(cells);
    }

    RosterSheet::new(rows)
}
