use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors raised before any roster row is written.
#[derive(Error, Debug)]
pub enum RosterError {
    /// The sheet lacks the structure a roster needs, e.g. it has no data rows.
    #[error("Malformed roster: {0}")]
    Malformed(String),

    /// The uploaded file could not be read as a spreadsheet.
    #[error(transparent)]
    Spreadsheet(#[from] calamine::Error),

    /// The multipart upload carried no `file` field.
    #[error("Roster upload is missing the `file` field")]
    MissingFile,

    /// The workbook has no worksheets at all.
    #[error("Workbook contains no worksheets")]
    NoWorksheet,
}

/// Converts roster errors into 400 Bad Request responses.
///
/// The message is returned to the client as-is since it describes a problem with
/// the uploaded file rather than with the server.
impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
