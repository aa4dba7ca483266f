use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Prescription::Table)
                    .if_not_exists()
                    .col(pk_auto(Prescription::Id))
                    .col(integer(Prescription::UserId))
                    .col(string(Prescription::DoctorName))
                    .col(string_null(Prescription::Clinic))
                    .col(
                        timestamp_with_time_zone(Prescription::DateIssued)
                            .default(Expr::current_timestamp()),
                    )
                    .col(text_null(Prescription::Notes))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_prescription_user_id")
                            .from(Prescription::Table, Prescription::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Prescription::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Prescription {
    Table,
    Id,
    UserId,
    DoctorName,
    Clinic,
    DateIssued,
    Notes,
}
