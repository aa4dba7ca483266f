use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000002_create_medical_record_table::MedicalRecord;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reminder::Table)
                    .if_not_exists()
                    .col(pk_auto(Reminder::Id))
                    .col(integer(Reminder::RecordId))
                    .col(string(Reminder::Kind))
                    .col(string(Reminder::Title))
                    .col(text_null(Reminder::Description))
                    .col(timestamp_with_time_zone(Reminder::DueAt))
                    .col(boolean(Reminder::IsCompleted).default(false))
                    .col(timestamp_with_time_zone_null(Reminder::CompletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reminder_record_id")
                            .from(Reminder::Table, Reminder::RecordId)
                            .to(MedicalRecord::Table, MedicalRecord::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reminder::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reminder {
    Table,
    Id,
    RecordId,
    Kind,
    Title,
    Description,
    DueAt,
    IsCompleted,
    CompletedAt,
}
