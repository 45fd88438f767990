use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        catalog::{PaginatedExamsDto, PaginatedGroupsDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::catalog::CatalogService,
        state::AppState,
    },
};

/// Tag for grouping group and exam endpoints in OpenAPI documentation
pub static CATALOG_TAG: &str = "catalog";

const MAX_ENTRIES: u64 = 100;

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

impl PaginationParams {
    /// Entries per page, kept between 1 and 100.
    pub fn per_page(&self) -> u64 {
        self.entries.clamp(1, MAX_ENTRIES)
    }
}

fn default_entries() -> u64 {
    10
}

/// Get paginated groups.
///
/// # Access Control
/// - Any logged-in account
#[utoipa::path(
    get,
    path = "/api/groups",
    tag = CATALOG_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved groups", body = PaginatedGroupsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_groups(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let groups = CatalogService::new(&state.db)
        .get_groups(params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(groups.into_dto())))
}

/// Get paginated exams.
///
/// # Access Control
/// - Any logged-in account
#[utoipa::path(
    get,
    path = "/api/exams",
    tag = CATALOG_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved exams", body = PaginatedExamsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_exams(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let exams = CatalogService::new(&state.db)
        .get_exams(params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(exams.into_dto())))
}
