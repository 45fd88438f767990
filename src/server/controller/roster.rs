use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tokio::time::Instant;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        roster::{RosterReportDto, RosterUploadDto},
    },
    server::{
        error::{roster::RosterError, AppError},
        middleware::auth::{AuthGuard, Permission},
        service::roster::{reconcile::ReconcileService, workbook::read_roster_sheet},
        state::AppState,
    },
};

/// Tag for grouping roster endpoints in OpenAPI documentation
pub static ROSTER_TAG: &str = "roster";

const FILE_FIELD: &str = "file";

/// Import a roster workbook.
///
/// Reads the configured worksheet of the uploaded workbook and creates every
/// missing exam, group, student, teacher and debt it describes. New accounts are
/// mailed a generated password. Only accessible by admins.
///
/// The import stops starting new rows once the configured time limit passes; the
/// rows already reconciled, and the credentials they created, are in the report.
///
/// # Returns
/// - `200 OK` - Import report
/// - `400 Bad Request` - No file, unreadable workbook or malformed roster
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `504 Gateway Timeout` - Time limit reached; partial import report
/// - `500 Internal Server Error` - Database or hashing error; earlier rows are kept
#[utoipa::path(
    post,
    path = "/api/roster",
    tag = ROSTER_TAG,
    request_body(content = RosterUploadDto, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Roster imported", body = RosterReportDto),
        (status = 400, description = "Invalid roster upload", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 504, description = "Import timed out, partial report", body = RosterReportDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn import_roster(
    State(state): State<AppState>,
    session: Session,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let bytes = read_file_field(&mut multipart).await?;
    let sheet = read_roster_sheet(bytes, &state.roster.sheet)?;

    let deadline = Instant::now() + state.roster.import_timeout;
    let service = ReconcileService::new(
        &state.db,
        state.hasher.as_ref(),
        state.notifier.as_ref(),
        state.bootstrap.as_ref(),
    )
    .with_deadline(deadline);

    let report = service.reconcile_roster(&sheet).await?;

    tracing::info!(
        admin = %admin.uuid,
        debts_created = report.debts_created(),
        people_created = report.people.len(),
        timed_out = report.timed_out,
        "Roster imported"
    );

    let status = if report.timed_out {
        StatusCode::GATEWAY_TIMEOUT
    } else {
        StatusCode::OK
    };

    Ok((status, Json(report.into_dto())))
}

async fn read_file_field(multipart: &mut Multipart) -> Result<Vec<u8>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
    {
        if field.name() == Some(FILE_FIELD) {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            return Ok(bytes.to_vec());
        }
    }

    Err(RosterError::MissingFile.into())
}
