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
                    .table(RecordFile::Table)
                    .if_not_exists()
                    .col(pk_auto(RecordFile::Id))
                    .col(integer(RecordFile::RecordId))
                    .col(string_uniq(RecordFile::FileName))
                    .col(string(RecordFile::OriginalName))
                    .col(string(RecordFile::MimeType))
                    .col(big_integer(RecordFile::Size))
                    .col(
                        timestamp_with_time_zone(RecordFile::UploadedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_record_file_record_id")
                            .from(RecordFile::Table, RecordFile::RecordId)
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
            .drop_table(Table::drop().table(RecordFile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RecordFile {
    Table,
    Id,
    RecordId,
    FileName,
    OriginalName,
    MimeType,
    Size,
    UploadedAt,
}
