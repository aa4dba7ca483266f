use crate::server::{data::record_file::RecordFileRepository, model::record::NewFileParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id_for_record;
