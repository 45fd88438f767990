//! Debt listing, scheduling and notices to teachers.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::debt::DebtRepository,
    error::{auth::AuthError, AppError},
    mail::{DebtNotice, DebtNotifier},
    model::{
        account::{Account, Role},
        debt::{DebtFilter, DebtView, PaginatedDebts, ScheduleDebtParams},
        total_pages,
    },
};

pub struct DebtService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DebtService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of the debts visible to `account`.
    ///
    /// Admins see every debt, teachers the debts owed to them and students the
    /// debts they owe.
    pub async fn get_paginated(
        &self,
        account: &Account,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedDebts, AppError> {
        let filter = match account.role {
            Role::Admin => DebtFilter::All,
            Role::Teacher => DebtFilter::Teacher(account.uuid.clone()),
            Role::Student => DebtFilter::Student(account.uuid.clone()),
        };

        let (debts, total) = DebtRepository::new(self.db)
            .get_paginated(&filter, page, per_page)
            .await?;

        Ok(PaginatedDebts {
            debts: debts.into_iter().map(DebtView::from_with_relations).collect(),
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Sets when and where a debt is settled.
    ///
    /// # Arguments
    /// - `account` - Caller; must be the debt's teacher or an admin
    /// - `params` - Debt ID, date and address
    ///
    /// # Returns
    /// - `Ok(DebtView)` - The updated debt
    /// - `Err(AppError::BadRequest)` - Address is blank
    /// - `Err(AppError::NotFound)` - No debt with that ID
    /// - `Err(AuthError::AccessDenied)` - Caller does not own the debt
    pub async fn schedule(
        &self,
        account: &Account,
        params: ScheduleDebtParams,
    ) -> Result<DebtView, AppError> {
        let address = params.address.trim();
        if address.is_empty() {
            return Err(AppError::BadRequest("Address must not be empty".to_string()));
        }

        let repo = DebtRepository::new(self.db);

        let Some(debt) = repo.get_by_id(params.id).await? else {
            return Err(AppError::NotFound(format!("Debt {} not found", params.id)));
        };

        if account.role != Role::Admin && debt.teacher_uuid != account.uuid {
            return Err(AuthError::AccessDenied(
                account.uuid.clone(),
                format!("Attempted to schedule debt {} owned by another teacher", debt.id),
            )
            .into());
        }

        repo.schedule(ScheduleDebtParams {
            id: params.id,
            date: params.date,
            address: address.to_string(),
        })
        .await?;

        let updated = repo
            .get_with_relations(params.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Debt {} not found", params.id)))?;

        tracing::info!(debt_id = params.id, account = %account.uuid, "Debt scheduled");

        Ok(DebtView::from_with_relations(updated))
    }

    /// Mails the teacher of a debt that its student wants to settle it.
    ///
    /// # Arguments
    /// - `account` - Caller; must be the student owing the debt
    /// - `id` - Debt ID
    /// - `notifier` - Mail transport for the notice
    ///
    /// # Returns
    /// - `Ok(())` - Notice accepted by the transport
    /// - `Err(AppError::NotFound)` - No debt with that ID
    /// - `Err(AuthError::AccessDenied)` - Caller is not the debt's student
    /// - `Err(AppError::NotifyErr)` - Notice could not be delivered
    pub async fn notify_teacher(
        &self,
        account: &Account,
        id: i32,
        notifier: &dyn DebtNotifier,
    ) -> Result<(), AppError> {
        let Some(data) = DebtRepository::new(self.db).get_with_relations(id).await? else {
            return Err(AppError::NotFound(format!("Debt {} not found", id)));
        };

        if account.role != Role::Student || data.debt.student_uuid != account.uuid {
            return Err(AuthError::AccessDenied(
                account.uuid.clone(),
                format!("Attempted to send a notice for debt {} owed by another student", id),
            )
            .into());
        }

        let view = DebtView::from_with_relations(data);
        if view.teacher.email.is_empty() {
            return Err(AppError::InternalError(format!(
                "Debt {} references missing teacher {}",
                id, view.teacher.uuid
            )));
        }

        let notice = DebtNotice {
            student_name: view.student.name,
            student_email: view.student.email,
            group: view.group,
            exam: view.exam,
        };
        notifier
            .send_debt_notice(&view.teacher.email, &notice)
            .await?;

        tracing::info!(debt_id = id, account = %account.uuid, "Debt notice sent");

        Ok(())
    }
}
