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
                    .table(Medication::Table)
                    .if_not_exists()
                    .col(pk_auto(Medication::Id))
                    .col(integer(Medication::UserId))
                    .col(string(Medication::Name))
                    .col(string_null(Medication::Dosage))
                    .col(string_null(Medication::Frequency))
                    .col(date_null(Medication::StartDate))
                    .col(date_null(Medication::EndDate))
                    .col(text_null(Medication::Notes))
                    .col(boolean(Medication::Active).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_medication_user_id")
                            .from(Medication::Table, Medication::UserId)
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
            .drop_table(Table::drop().table(Medication::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Medication {
    Table,
    Id,
    UserId,
    Name,
    Dosage,
    Frequency,
    StartDate,
    EndDate,
    Notes,
    Active,
}
