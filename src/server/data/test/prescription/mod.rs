use crate::server::{
    data::prescription::PrescriptionRepository,
    model::prescription::{CreateMedicineParams, CreatePrescriptionParams},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_for_user;
