use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DebtPersonDto {
    pub uuid: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DebtDto {
    pub id: i32,
    pub exam: String,
    pub group: String,
    pub student: DebtPersonDto,
    pub teacher: DebtPersonDto,
    pub date: Option<DateTime<Utc>>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedDebtsDto {
    pub debts: Vec<DebtDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ScheduleDebtDto {
    pub date: DateTime<Utc>,
    pub address: String,
}
