//! Prescription data repository for database operations.
//!
//! Prescriptions carry their medicine line items in a child table; creation
//! inserts the prescription row and its medicines, and reads load both.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder,
};

use crate::server::model::prescription::{CreatePrescriptionParams, Prescription};

/// Repository providing database operations for prescriptions.
pub struct PrescriptionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PrescriptionRepository<'a> {
    /// Creates a new PrescriptionRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a prescription with its medicine line items.
    ///
    /// # Returns
    /// - `Ok(Prescription)` - The created prescription with medicines
    /// - `Err(DbErr)` - Database error during either insert
    pub async fn create(
        &self,
        user_id: i32,
        params: CreatePrescriptionParams,
    ) -> Result<Prescription, DbErr> {
        let entity = entity::prescription::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            doctor_name: ActiveValue::Set(params.doctor_name),
            clinic: ActiveValue::Set(params.clinic),
            date_issued: ActiveValue::Set(params.date_issued),
            notes: ActiveValue::Set(params.notes),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        if !params.medicines.is_empty() {
            let rows = params.medicines.into_iter().map(|medicine| {
                entity::prescription_medicine::ActiveModel {
                    prescription_id: ActiveValue::Set(entity.id),
                    name: ActiveValue::Set(medicine.name),
                    dosage: ActiveValue::Set(medicine.dosage),
                    frequency: ActiveValue::Set(medicine.frequency),
                    duration: ActiveValue::Set(medicine.duration),
                    ..Default::default()
                }
            });

            entity::prelude::PrescriptionMedicine::insert_many(rows)
                .exec(self.db)
                .await?;
        }

        let medicines = entity
            .find_related(entity::prelude::PrescriptionMedicine)
            .order_by_asc(entity::prescription_medicine::Column::Id)
            .all(self.db)
            .await?;

        Ok(Prescription::from_entity(entity, medicines))
    }

    /// Gets all of a user's prescriptions with medicines, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Prescription>)` - Prescriptions (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<Prescription>, DbErr> {
        let rows = entity::prelude::Prescription::find()
            .find_with_related(entity::prelude::PrescriptionMedicine)
            .filter(entity::prescription::Column::UserId.eq(user_id))
            .order_by_desc(entity::prescription::Column::DateIssued)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(prescription, medicines)| Prescription::from_entity(prescription, medicines))
            .collect())
    }

    /// Finds a prescription by id, scoped to its owner, with medicines.
    ///
    /// # Returns
    /// - `Ok(Some(Prescription))` - Prescription found for this user
    /// - `Ok(None)` - No such prescription for this user
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id_for_user(
        &self,
        prescription_id: i32,
        user_id: i32,
    ) -> Result<Option<Prescription>, DbErr> {
        let Some(entity) = entity::prelude::Prescription::find_by_id(prescription_id)
            .filter(entity::prescription::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let medicines = entity
            .find_related(entity::prelude::PrescriptionMedicine)
            .order_by_asc(entity::prescription_medicine::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(Prescription::from_entity(entity, medicines)))
    }

    /// Deletes a prescription, scoped to its owner.
    ///
    /// Medicine rows go with it via the cascading foreign key.
    ///
    /// # Returns
    /// - `Ok(true)` - Prescription deleted
    /// - `Ok(false)` - No such prescription for this user
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, prescription_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Prescription::delete_many()
            .filter(entity::prescription::Column::Id.eq(prescription_id))
            .filter(entity::prescription::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
