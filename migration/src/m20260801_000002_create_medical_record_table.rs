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
                    .table(MedicalRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(MedicalRecord::Id))
                    .col(integer(MedicalRecord::UserId))
                    .col(string(MedicalRecord::Title))
                    .col(string(MedicalRecord::RecordType))
                    .col(text(MedicalRecord::Description))
                    .col(string(MedicalRecord::DoctorName))
                    .col(string_null(MedicalRecord::DoctorSpecialization))
                    .col(string_null(MedicalRecord::DoctorHospital))
                    .col(timestamp_with_time_zone(MedicalRecord::DateOfRecord))
                    .col(timestamp_with_time_zone_null(MedicalRecord::DateOfNextVisit))
                    .col(string(MedicalRecord::Status).default("active"))
                    .col(string_null(MedicalRecord::DiagnosisPrimary))
                    .col(text_null(MedicalRecord::DiagnosisNotes))
                    .col(integer_null(MedicalRecord::Systolic))
                    .col(integer_null(MedicalRecord::Diastolic))
                    .col(integer_null(MedicalRecord::HeartRate))
                    .col(double_null(MedicalRecord::Temperature))
                    .col(double_null(MedicalRecord::Weight))
                    .col(double_null(MedicalRecord::Height))
                    .col(double_null(MedicalRecord::Bmi))
                    .col(
                        timestamp_with_time_zone(MedicalRecord::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(MedicalRecord::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_medical_record_user_id")
                            .from(MedicalRecord::Table, MedicalRecord::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing and filtering always scope by owner and sort by record date
        manager
            .create_index(
                Index::create()
                    .name("idx_medical_record_user_date")
                    .table(MedicalRecord::Table)
                    .col(MedicalRecord::UserId)
                    .col(MedicalRecord::DateOfRecord)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MedicalRecord::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MedicalRecord {
    Table,
    Id,
    UserId,
    Title,
    RecordType,
    Description,
    DoctorName,
    DoctorSpecialization,
    DoctorHospital,
    DateOfRecord,
    DateOfNextVisit,
    Status,
    DiagnosisPrimary,
    DiagnosisNotes,
    Systolic,
    Diastolic,
    HeartRate,
    Temperature,
    Weight,
    Height,
    Bmi,
    CreatedAt,
    UpdatedAt,
}
