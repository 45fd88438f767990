//! Roster reconciliation.

use chrono::Utc;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use tokio::time::Instant;

use crate::server::{
    config::BootstrapAccount,
    error::AppError,
    mail::CredentialNotifier,
    model::{
        debt::CreateDebtParams,
        roster::{
            DebtCandidate, DebtOutcome, DebtReport, PersonKind, RosterReport, RosterSheet,
            StudentCandidate, TeacherCandidate,
        },
        student::CreateStudentParams,
        teacher::CreateTeacherParams,
    },
    service::roster::{
        credential::{CredentialProvisioner, PendingCredential},
        parser::parse_roster,
        resolver::{DebtKey, NaturalKeyResolver, Resolved},
    },
    util::hasher::PasswordHasher,
};

/// Progress of one debt candidate through its cascade, reported when it fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CandidateStage {
    Parsed,
    ExamResolved,
    GroupResolved,
    StudentResolved,
    TeacherResolved,
}

/// Rows touched by one committed candidate.
struct ReconciledCandidate {
    outcome: DebtOutcome,
    exam_created: bool,
    group_created: bool,
    credentials: Vec<PendingCredential>,
}

pub struct ReconcileService<'a> {
    db: &'a DatabaseConnection,
    provisioner: CredentialProvisioner<'a>,
    deadline: Option<Instant>,
}

impl<'a> ReconcileService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        hasher: &'a dyn PasswordHasher,
        notifier: &'a dyn CredentialNotifier,
        bootstrap: Option<&'a BootstrapAccount>,
    ) -> Self {
        Self {
            db,
            provisioner: CredentialProvisioner::new(hasher, notifier, bootstrap),
            deadline: None,
        }
    }

    /// Stops starting new candidates once `deadline` has passed.
    ///
    /// A candidate already started is committed and its credentials delivered
    /// before the check, so no created account is left without a report entry.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Imports a roster, creating every missing exam, group, person and debt.
    ///
    /// Candidates are processed in input order, each in its own transaction. New
    /// people receive their passwords after their candidate commits. The first
    /// database or hashing failure stops the run; candidates committed before it
    /// stay in place. When a deadline is set and passes, the remaining candidates
    /// are skipped and the partial report is returned with `timed_out` set.
    ///
    /// # Arguments
    /// - `sheet` - Grid read from the uploaded workbook
    ///
    /// # Returns
    /// - `Ok(RosterReport)` - What was parsed, created and delivered
    /// - `Err(AppError::RosterErr)` - The grid is malformed, nothing was written
    /// - `Err(AppError::DbErr)` - Database failure, the failing candidate was rolled back
    /// - `Err(AppError::CredentialErr)` - A password could not be hashed
    pub async fn reconcile_roster(&self, sheet: &RosterSheet) -> Result<RosterReport, AppError> {
        let parsed = parse_roster(sheet)?;
        let mut report = RosterReport::for_roster(&parsed);

        tracing::info!(
            students = report.students_parsed,
            teachers = report.teachers_parsed,
            debts = report.debts_parsed,
            "Reconciling roster"
        );

        for (index, candidate) in parsed.debts().iter().enumerate() {
            if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                tracing::warn!(
                    reconciled = index,
                    remaining = report.debts_parsed - index,
                    "Roster import deadline passed, skipping remaining candidates"
                );
                report.timed_out = true;
                break;
            }

            let student = parsed.student(&candidate.student_key).ok_or_else(|| {
                AppError::InternalError(format!(
                    "Debt candidate references unknown student '{}'",
                    candidate.student_key
                ))
            })?;
            let teacher = parsed.teacher(&candidate.teacher_key).ok_or_else(|| {
                AppError::InternalError(format!(
                    "Debt candidate references unknown teacher '{}'",
                    candidate.teacher_key
                ))
            })?;

            let txn = self.db.begin().await?;
            let reconciled = self
                .reconcile_candidate(&txn, candidate, student, teacher)
                .await?;
            txn.commit().await?;

            if reconciled.exam_created {
                report.exams_created += 1;
            }
            if reconciled.group_created {
                report.groups_created += 1;
            }
            report.debts.push(DebtReport {
                exam_name: candidate.exam_name.clone(),
                student_email: student.email.clone(),
                teacher_email: teacher.email.clone(),
                outcome: reconciled.outcome,
            });

            for pending in reconciled.credentials {
                report.people.push(self.provisioner.deliver(pending).await);
            }
        }

        tracing::info!(
            debts_created = report.debts_created(),
            exams_created = report.exams_created,
            groups_created = report.groups_created,
            people_created = report.people.len(),
            timed_out = report.timed_out,
            "Roster reconciled"
        );

        Ok(report)
    }

    async fn reconcile_candidate(
        &self,
        txn: &DatabaseTransaction,
        candidate: &DebtCandidate,
        student: &StudentCandidate,
        teacher: &TeacherCandidate,
    ) -> Result<ReconciledCandidate, AppError> {
        let mut stage = CandidateStage::Parsed;

        let result = self
            .cascade(txn, &mut stage, candidate, student, teacher)
            .await;

        if let Err(err) = &result {
            tracing::error!(
                stage = ?stage,
                exam = %candidate.exam_name,
                student = %student.email,
                teacher = %teacher.email,
                error = %err,
                "Roster candidate failed, rolling back"
            );
        }

        result
    }

    async fn cascade(
        &self,
        txn: &DatabaseTransaction,
        stage: &mut CandidateStage,
        candidate: &DebtCandidate,
        student: &StudentCandidate,
        teacher: &TeacherCandidate,
    ) -> Result<ReconciledCandidate, AppError> {
        let resolver = NaturalKeyResolver::new(txn);
        let mut credentials = Vec::new();

        let exam = match resolver.find_exam(&candidate.exam_name).await? {
            Some(exam) => Resolved::Existing(exam),
            None => resolver.create_exam(&candidate.exam_name).await?,
        };
        let exam_created = exam.is_created();
        let exam = exam.into_inner();
        *stage = CandidateStage::ExamResolved;

        let group = match resolver.find_group(&student.group_name).await? {
            Some(group) => Resolved::Existing(group),
            None => resolver.create_group(&student.group_name).await?,
        };
        let group_created = group.is_created();
        let group = group.into_inner();
        *stage = CandidateStage::GroupResolved;

        let student_row = match resolver.find_student(&student.email).await? {
            Some(existing) => existing,
            None => {
                let pending = self.provisioner.prepare(&student.email, PersonKind::Student)?;
                let created = resolver
                    .create_student(CreateStudentParams {
                        first_name: student.first_name.clone(),
                        last_name: student.last_name.clone(),
                        middle_name: student.middle_name.clone(),
                        email: student.email.clone(),
                        group_id: group.id,
                        password_hash: pending.password_hash.clone(),
                    })
                    .await?;
                if created.is_created() {
                    credentials.push(pending);
                }
                created.into_inner()
            }
        };
        *stage = CandidateStage::StudentResolved;

        let teacher_row = match resolver.find_teacher(&teacher.email).await? {
            Some(existing) => existing,
            None => {
                let pending = self.provisioner.prepare(&teacher.email, PersonKind::Teacher)?;
                let created = resolver
                    .create_teacher(CreateTeacherParams {
                        first_name: teacher.first_name.clone(),
                        last_name: teacher.last_name.clone(),
                        middle_name: teacher.middle_name.clone(),
                        email: teacher.email.clone(),
                        password_hash: pending.password_hash.clone(),
                        admin: false,
                    })
                    .await?;
                if created.is_created() {
                    credentials.push(pending);
                }
                created.into_inner()
            }
        };
        *stage = CandidateStage::TeacherResolved;

        let key = DebtKey {
            exam_name: &exam.name,
            student_email: &student_row.email,
            teacher_email: &teacher_row.email,
        };
        let debt = match resolver.find_debt(key).await? {
            Some(debt) => Resolved::Existing(debt),
            None => {
                resolver
                    .create_debt(
                        key,
                        CreateDebtParams {
                            exam_id: exam.id,
                            student_uuid: student_row.uuid.clone(),
                            teacher_uuid: teacher_row.uuid.clone(),
                            date: Some(Utc::now()),
                        },
                    )
                    .await?
            }
        };

        let outcome = match debt {
            Resolved::Created(debt) => DebtOutcome::Created(debt.id),
            Resolved::Existing(debt) => DebtOutcome::AlreadyExisted(debt.id),
        };

        Ok(ReconciledCandidate {
            outcome,
            exam_created,
            group_created,
            credentials,
        })
    }
}
