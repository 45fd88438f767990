//! Roster import models.
//!
//! A roster is a matrix: the header row lists students, the first column lists
//! teachers and every non-empty inner cell names an exam the column's student owes
//! to the row's teacher. Parsing turns the grid into a `ParsedRoster` arena of
//! candidates keyed by natural keys; reconciliation turns those candidates into
//! rows and reports what happened as a `RosterReport`.

use std::collections::HashMap;

use crate::model::roster::{
    DebtOutcomeDto, DebtReportDto, PersonKindDto, PersonReportDto, ProvisionOutcomeDto,
    RosterReportDto,
};

/// Grid of text cells read from a worksheet, row 0 being the header.
///
/// Rows may have different lengths; missing cells read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterSheet {
    rows: Vec<Vec<String>>,
}

impl RosterSheet {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

/// Student described by a header cell: `Last First Middle Group Email`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentCandidate {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub group_name: String,
    pub email: String,
}

/// Teacher described by a first-column cell: `Last First Middle Email`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherCandidate {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub email: String,
}

/// Exam owed by a student to a teacher, referencing both by arena key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebtCandidate {
    pub exam_name: String,
    /// Key of the student in `ParsedRoster`: the student's email.
    pub student_key: String,
    /// Key of the teacher in `ParsedRoster`: the trimmed raw first-column text.
    pub teacher_key: String,
}

/// Arena of candidates produced by the parser.
///
/// Students and teachers keep first-seen order; a repeated key resolves to the
/// candidate inserted first. Debts keep input order (row by row, left to right).
#[derive(Debug, Clone, Default)]
pub struct ParsedRoster {
    students: Vec<StudentCandidate>,
    student_index: HashMap<String, usize>,
    teachers: Vec<TeacherCandidate>,
    teacher_index: HashMap<String, usize>,
    debts: Vec<DebtCandidate>,
}

impl ParsedRoster {
    /// Adds a student unless one with the same email exists, returning its key.
    ///
    /// A repeated email keeps the first candidate; differing fields of the later one
    /// are dropped and logged.
    pub fn insert_student(&mut self, candidate: StudentCandidate) -> String {
        let key = candidate.email.clone();
        match self.student_index.get(&key) {
            Some(&i) => {
                let first = &self.students[i];
                if *first != candidate {
                    tracing::debug!(
                        email = %key,
                        kept_group = %first.group_name,
                        dropped_group = %candidate.group_name,
                        "Repeated roster student with different fields, keeping first"
                    );
                }
            }
            None => {
                self.student_index.insert(key.clone(), self.students.len());
                self.students.push(candidate);
            }
        }
        key
    }

    /// Adds a teacher under `key` unless the key is taken, returning the key.
    pub fn insert_teacher(&mut self, key: String, candidate: TeacherCandidate) -> String {
        if !self.teacher_index.contains_key(&key) {
            self.teacher_index.insert(key.clone(), self.teachers.len());
            self.teachers.push(candidate);
        }
        key
    }

    pub fn push_debt(&mut self, candidate: DebtCandidate) {
        self.debts.push(candidate);
    }

    pub fn student(&self, key: &str) -> Option<&StudentCandidate> {
        self.student_index.get(key).map(|&i| &self.students[i])
    }

    pub fn teacher(&self, key: &str) -> Option<&TeacherCandidate> {
        self.teacher_index.get(key).map(|&i| &self.teachers[i])
    }

    pub fn students(&self) -> &[StudentCandidate] {
        &self.students
    }

    pub fn teachers(&self) -> &[TeacherCandidate] {
        &self.teachers
    }

    pub fn debts(&self) -> &[DebtCandidate] {
        &self.debts
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonKind {
    Student,
    Teacher,
}

/// What happened to the credentials of a person created by an import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionOutcome {
    /// Account created and its password delivered.
    Created,
    /// Account created but the password could not be delivered.
    CreatedNotificationFailed,
    /// Bootstrap account created with its configured password; nothing was sent.
    Bootstrapped,
}

/// Provisioning result for one newly created person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonOutcome {
    pub email: String,
    pub kind: PersonKind,
    pub outcome: ProvisionOutcome,
}

/// Whether reconciliation inserted the debt or found it already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebtOutcome {
    Created(i32),
    AlreadyExisted(i32),
}

impl DebtOutcome {
    pub fn id(&self) -> i32 {
        match self {
            Self::Created(id) | Self::AlreadyExisted(id) => *id,
        }
    }
}

/// Result for one debt candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebtReport {
    pub exam_name: String,
    pub student_email: String,
    pub teacher_email: String,
    pub outcome: DebtOutcome,
}

/// Summary of a completed roster import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterReport {
    pub students_parsed: usize,
    pub teachers_parsed: usize,
    pub debts_parsed: usize,
    pub exams_created: usize,
    pub groups_created: usize,
    /// One entry per debt candidate, in input order.
    pub debts: Vec<DebtReport>,
    /// One entry per person created during the run.
    pub people: Vec<PersonOutcome>,
    /// The run stopped at its deadline before reaching every candidate.
    pub timed_out: bool,
}

impl RosterReport {
    /// Starts an empty report carrying the candidate counts of `parsed`.
    pub fn for_roster(parsed: &ParsedRoster) -> Self {
        Self {
            students_parsed: parsed.students().len(),
            teachers_parsed: parsed.teachers().len(),
            debts_parsed: parsed.debts().len(),
            ..Default::default()
        }
    }

    pub fn debts_created(&self) -> usize {
        self.debts
            .iter()
            .filter(|d| matches!(d.outcome, DebtOutcome::Created(_)))
            .count()
    }

    pub fn into_dto(self) -> RosterReportDto {
        RosterReportDto {
            students_parsed: self.students_parsed,
            teachers_parsed: self.teachers_parsed,
            debts_parsed: self.debts_parsed,
            exams_created: self.exams_created,
            groups_created: self.groups_created,
            timed_out: self.timed_out,
            debts: self
                .debts
                .into_iter()
                .map(|d| {
                    let (debt_id, outcome) = match d.outcome {
                        DebtOutcome::Created(id) => (id, DebtOutcomeDto::Created),
                        DebtOutcome::AlreadyExisted(id) => (id, DebtOutcomeDto::AlreadyExisted),
                    };
                    DebtReportDto {
                        debt_id,
                        exam: d.exam_name,
                        student_email: d.student_email,
                        teacher_email: d.teacher_email,
                        outcome,
                    }
                })
                .collect(),
            people: self
                .people
                .into_iter()
                .map(|p| PersonReportDto {
                    email: p.email,
                    kind: match p.kind {
                        PersonKind::Student => PersonKindDto::Student,
                        PersonKind::Teacher => PersonKindDto::Teacher,
                    },
                    outcome: match p.outcome {
                        ProvisionOutcome::Created => ProvisionOutcomeDto::Created,
                        ProvisionOutcome::CreatedNotificationFailed => {
                            ProvisionOutcomeDto::CreatedNotificationFailed
                        }
                        ProvisionOutcome::Bootstrapped => ProvisionOutcomeDto::Bootstrapped,
                    },
                })
                .collect(),
        }
    }
}
