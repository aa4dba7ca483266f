pub use sea_orm_migration::prelude::*;

mod m20260801_000001_create_user_table;
mod m20260801_000002_create_medical_record_table;
mod m20260801_000003_create_record_file_table;
mod m20260801_000004_create_reminder_table;
mod m20260801_000005_create_medication_table;
mod m20260801_000006_create_prescription_table;
mod m20260801_000007_create_prescription_medicine_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_user_table::Migration),
            Box::new(m20260801_000002_create_medical_record_table::Migration),
            Box::new(m20260801_000003_create_record_file_table::Migration),
            Box::new(m20260801_000004_create_reminder_table::Migration),
            Box::new(m20260801_000005_create_medication_table::Migration),
            Box::new(m20260801_000006_create_prescription_table::Migration),
            Box::new(m20260801_000007_create_prescription_medicine_table::Migration),
        ]
    }
}
