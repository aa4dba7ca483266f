use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string(User::Name))
                    .col(string_uniq(User::Email))
                    .col(string(User::PasswordHash))
                    .col(string_null(User::Phone))
                    .col(date_null(User::DateOfBirth))
                    .col(string_null(User::Gender))
                    .col(string_null(User::Address))
                    .col(string_null(User::EmergencyContact))
                    .col(boolean(User::EmailVerified).default(false))
                    .col(string_null(User::EmailVerificationToken))
                    .col(integer(User::LoginAttempts).default(0))
                    .col(timestamp_with_time_zone_null(User::LockUntil))
                    .col(string_null(User::ResetPasswordToken))
                    .col(timestamp_with_time_zone_null(User::ResetPasswordExpires))
                    .col(timestamp_with_time_zone_null(User::LastLogin))
                    .col(
                        timestamp_with_time_zone(User::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(User::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Phone,
    DateOfBirth,
    Gender,
    Address,
    EmergencyContact,
    EmailVerified,
    EmailVerificationToken,
    LoginAttempts,
    LockUntil,
    ResetPasswordToken,
    ResetPasswordExpires,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}
