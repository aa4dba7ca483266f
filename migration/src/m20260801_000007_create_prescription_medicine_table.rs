use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000006_create_prescription_table::Prescription;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PrescriptionMedicine::Table)
                    .if_not_exists()
                    .col(pk_auto(PrescriptionMedicine::Id))
                    .col(integer(PrescriptionMedicine::PrescriptionId))
                    .col(string(PrescriptionMedicine::Name))
                    .col(string_null(PrescriptionMedicine::Dosage))
                    .col(string_null(PrescriptionMedicine::Frequency))
                    .col(string_null(PrescriptionMedicine::Duration))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_prescription_medicine_prescription_id")
                            .from(
                                PrescriptionMedicine::Table,
                                PrescriptionMedicine::PrescriptionId,
                            )
                            .to(Prescription::Table, Prescription::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PrescriptionMedicine::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PrescriptionMedicine {
    Table,
    Id,
    PrescriptionId,
    Name,
    Dosage,
    Frequency,
    Duration,
}
