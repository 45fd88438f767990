//! Roster matrix parsing.
//!
//! Header cells after the corner hold `Last First Middle Group Email`, first-column
//! cells of data rows hold `Last First Middle Email`. Tokens are separated by runs of
//! whitespace and tokens past the expected count are ignored. Cells that do not
//! describe a person are skipped along with everything that depends on them.

use crate::server::{
    error::roster::RosterError,
    model::roster::{DebtCandidate, ParsedRoster, RosterSheet, StudentCandidate, TeacherCandidate},
};

const STUDENT_TOKENS: usize = 5;
const TEACHER_TOKENS: usize = 4;

/// Parses a roster grid into candidates.
///
/// # Arguments
/// - `sheet` - Grid whose row 0 is the header
///
/// # Returns
/// - `Ok(ParsedRoster)` - Students, teachers and debts found in the grid
/// - `Err(RosterError::Malformed)` - The grid has fewer than two rows
pub fn parse_roster(sheet: &RosterSheet) -> Result<ParsedRoster, RosterError> {
    let rows = sheet.rows();
    if rows.len() < 2 {
        return Err(RosterError::Malformed(format!(
            "expected a header row and at least one data row, found {} row(s)",
            rows.len()
        )));
    }

    let mut parsed = ParsedRoster::default();

    let header = &rows[0];
    let mut columns: Vec<Option<String>> = vec![None; header.len()];
    for (col, cell) in header.iter().enumerate().skip(1) {
        match parse_student(cell) {
            Some(student) => columns[col] = Some(parsed.insert_student(student)),
            None => tracing::debug!(column = col, cell = %cell, "Skipping roster header column"),
        }
    }

    for (row_idx, row) in rows.iter().enumerate().skip(1) {
        let raw = row.first().map(|c| c.trim()).unwrap_or_default();
        if raw.is_empty() {
            tracing::debug!(row = row_idx, "Skipping roster row without teacher");
            continue;
        }

        let Some(teacher) = parse_teacher(raw) else {
            tracing::debug!(row = row_idx, cell = %raw, "Skipping roster row with malformed teacher");
            continue;
        };
        let teacher_key = parsed.insert_teacher(raw.to_string(), teacher);

        for (col, cell) in row.iter().enumerate().skip(1) {
            let Some(Some(student_key)) = columns.get(col) else {
                continue;
            };

            let exam_name = cell.trim();
            if exam_name.is_empty() {
                continue;
            }

            parsed.push_debt(DebtCandidate {
                exam_name: exam_name.to_string(),
                student_key: student_key.clone(),
                teacher_key: teacher_key.clone(),
            });
        }
    }

    Ok(parsed)
}

fn parse_student(cell: &str) -> Option<StudentCandidate> {
    let tokens: Vec<&str> = cell.split_whitespace().collect();
    if tokens.len() < STUDENT_TOKENS {
        return None;
    }

    Some(StudentCandidate {
        last_name: tokens[0].to_string(),
        first_name: tokens[1].to_string(),
        middle_name: tokens[2].to_string(),
        group_name: tokens[3].to_string(),
        email: tokens[4].to_string(),
    })
}

fn parse_teacher(cell: &str) -> Option<TeacherCandidate> {
    let tokens: Vec<&str> = cell.split_whitespace().collect();
    if tokens.len() < TEACHER_TOKENS {
        return None;
    }

    Some(TeacherCandidate {
        last_name: tokens[0].to_string(),
        first_name: tokens[1].to_string(),
        middle_name: tokens[2].to_string(),
        email: tokens[3].to_string(),
    })
}
