//! Bulk roster reconciliation.
//!
//! A roster upload flows through these stages:
//!
//! 1. `workbook` reads the uploaded spreadsheet into a `RosterSheet` grid
//! 2. `parser` turns the grid into a `ParsedRoster` arena of candidates
//! 3. `reconcile` walks every debt candidate, using `resolver` to find or create its
//!    exam, group, student and teacher, and `credential` to issue passwords for new people
//! 4. queued passwords are delivered after each candidate's transaction commits

pub mod credential;
pub mod parser;
pub mod reconcile;
pub mod resolver;
pub mod workbook;

#[cfg(test)]
mod test;
