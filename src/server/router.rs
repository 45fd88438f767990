use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, catalog, debt, roster},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "debtboard",
        description = "Exam debt tracking: roster imports, debt listings, scheduling and notices"
    ),
    tags(
        (name = "auth", description = "Login, session and password changes"),
        (name = "roster", description = "Roster workbook imports"),
        (name = "debt", description = "Debt listings, scheduling and notices"),
        (name = "catalog", description = "Groups and exams")
    )
)]
struct ApiDoc;

/// Builds the API router with its OpenAPI document served under `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(auth::change_password))
        .routes(routes!(roster::import_roster))
        .routes(routes!(debt::get_debts))
        .routes(routes!(debt::schedule_debt))
        .routes(routes!(debt::notify_teacher))
        .routes(routes!(catalog::get_groups))
        .routes(routes!(catalog::get_exams))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
