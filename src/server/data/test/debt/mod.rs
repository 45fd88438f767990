use crate::server::{
    data::debt::DebtRepository,
    model::debt::{CreateDebtParams, DebtFilter, ScheduleDebtParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod schedule;
mod search;
