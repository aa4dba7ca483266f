use crate::server::{
    data::medication::MedicationRepository,
    model::medication::{CreateMedicationParams, UpdateMedicationParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_for_user;
mod update;
