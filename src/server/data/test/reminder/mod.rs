use crate::server::{
    data::reminder::ReminderRepository,
    model::record::{CreateReminderParams, ReminderKind},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod set_completion;
mod upcoming;
