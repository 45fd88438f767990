use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        debt::{DebtDto, PaginatedDebtsDto, ScheduleDebtDto},
    },
    server::{
        controller::catalog::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::debt::ScheduleDebtParams,
        service::debt::DebtService,
        state::AppState,
    },
};

/// Tag for grouping debt endpoints in OpenAPI documentation
pub static DEBT_TAG: &str = "debt";

/// Get paginated debts visible to the logged-in account.
///
/// Admins see every debt, teachers the debts owed to them and students the debts
/// they owe.
///
/// # Returns
/// - `200 OK` - Page of debts
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/debts",
    tag = DEBT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved debts", body = PaginatedDebtsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_debts(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let account = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let debts = DebtService::new(&state.db)
        .get_paginated(&account, params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(debts.into_dto())))
}

/// Schedule when and where a debt is settled.
///
/// # Access Control
/// - `Teacher` - The teacher the debt is owed to, or an admin
///
/// # Returns
/// - `200 OK` - Updated debt
/// - `400 Bad Request` - Blank address
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Student, or teacher not owning the debt
/// - `404 Not Found` - No debt with that ID
#[utoipa::path(
    put,
    path = "/api/debts/{id}/schedule",
    tag = DEBT_TAG,
    params(
        ("id" = i32, Path, description = "Debt ID")
    ),
    request_body = ScheduleDebtDto,
    responses(
        (status = 200, description = "Debt scheduled", body = DebtDto),
        (status = 400, description = "Invalid schedule", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to schedule this debt", body = ErrorDto),
        (status = 404, description = "Debt not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn schedule_debt(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<ScheduleDebtDto>,
) -> Result<impl IntoResponse, AppError> {
    let account = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let debt = DebtService::new(&state.db)
        .schedule(
            &account,
            ScheduleDebtParams {
                id,
                date: payload.date,
                address: payload.address,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(debt.into_dto())))
}

/// Ask the teacher of a debt to schedule it.
///
/// Mails the teacher the student's name, group and the exam owed.
///
/// # Access Control
/// - The student owing the debt
///
/// # Returns
/// - `204 No Content` - Notice sent
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller does not owe the debt
/// - `404 Not Found` - No debt with that ID
/// - `502 Bad Gateway` - Mail could not be delivered
#[utoipa::path(
    post,
    path = "/api/debts/{id}/notify",
    tag = DEBT_TAG,
    params(
        ("id" = i32, Path, description = "Debt ID")
    ),
    responses(
        (status = 204, description = "Notice sent to the teacher"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the student owing this debt", body = ErrorDto),
        (status = 404, description = "Debt not found", body = ErrorDto),
        (status = 502, description = "Notice could not be delivered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn notify_teacher(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let account = AuthGuard::new(&state.db, &session).require(&[]).await?;

    DebtService::new(&state.db)
        .notify_teacher(&account, id, state.debt_notifier.as_ref())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
