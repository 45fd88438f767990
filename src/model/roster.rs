use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DebtOutcomeDto {
    Created,
    AlreadyExisted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DebtReportDto {
    pub debt_id: i32,
    pub exam: String,
    pub student_email: String,
    pub teacher_email: String,
    pub outcome: DebtOutcomeDto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PersonKindDto {
    Student,
    Teacher,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProvisionOutcomeDto {
    Created,
    CreatedNotificationFailed,
    Bootstrapped,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PersonReportDto {
    pub email: String,
    pub kind: PersonKindDto,
    pub outcome: ProvisionOutcomeDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RosterReportDto {
    pub students_parsed: usize,
    pub teachers_parsed: usize,
    pub debts_parsed: usize,
    pub exams_created: usize,
    pub groups_created: usize,
    /// Set when the import stopped at its time limit; the report covers only the
    /// candidates reached before it.
    pub timed_out: bool,
    pub debts: Vec<DebtReportDto>,
    pub people: Vec<PersonReportDto>,
}

/// Multipart body of a roster upload, documented for OpenAPI only.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct RosterUploadDto {
    /// xlsx, xls or ods workbook.
    #[schema(content_media_type = "application/octet-stream")]
    pub file: Vec<u8>,
}
