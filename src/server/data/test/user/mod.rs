use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParams, UpdateDetailsParams, MAX_LOGIN_ATTEMPTS},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_email;
mod login_tracking;
mod reset_token;
mod update_details;
mod verify_email;
