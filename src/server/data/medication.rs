//! Medication data repository for database operations.
//!
//! Medications belong directly to users; all queries scope by the owning
//! user id.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::medication::{
    CreateMedicationParams, Medication, UpdateMedicationParams,
};

/// Repository providing database operations for medications.
pub struct MedicationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MedicationRepository<'a> {
    /// Creates a new MedicationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a medication for a user.
    ///
    /// # Returns
    /// - `Ok(Medication)` - The created medication
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        user_id: i32,
        params: CreateMedicationParams,
    ) -> Result<Medication, DbErr> {
        let entity = entity::medication::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            name: ActiveValue::Set(params.name),
            dosage: ActiveValue::Set(params.dosage),
            frequency: ActiveValue::Set(params.frequency),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            notes: ActiveValue::Set(params.notes),
            active: ActiveValue::Set(params.active),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Medication::from_entity(entity))
    }

    /// Gets a user's medications, active first then by name.
    ///
    /// # Arguments
    /// - `user_id` - Owning user
    /// - `active` - When set, only medications in that active state
    ///
    /// # Returns
    /// - `Ok(Vec<Medication>)` - Medications (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_for_user(
        &self,
        user_id: i32,
        active: Option<bool>,
    ) -> Result<Vec<Medication>, DbErr> {
        let mut query = entity::prelude::Medication::find()
            .filter(entity::medication::Column::UserId.eq(user_id));

        if let Some(active) = active {
            query = query.filter(entity::medication::Column::Active.eq(active));
        }

        let entities = query
            .order_by_desc(entity::medication::Column::Active)
            .order_by_asc(entity::medication::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Medication::from_entity).collect())
    }

    /// Applies a partial update to a medication, scoped to its owner.
    ///
    /// # Returns
    /// - `Ok(Some(Medication))` - Updated medication
    /// - `Ok(None)` - No such medication for this user
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        medication_id: i32,
        user_id: i32,
        params: UpdateMedicationParams,
    ) -> Result<Option<Medication>, DbErr> {
        let Some(entity) = entity::prelude::Medication::find_by_id(medication_id)
            .filter(entity::medication::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::medication::ActiveModel = entity.into();

        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(dosage) = params.dosage {
            active.dosage = ActiveValue::Set(Some(dosage));
        }
        if let Some(frequency) = params.frequency {
            active.frequency = ActiveValue::Set(Some(frequency));
        }
        if let Some(start_date) = params.start_date {
            active.start_date = ActiveValue::Set(Some(start_date));
        }
        if let Some(end_date) = params.end_date {
            active.end_date = ActiveValue::Set(Some(end_date));
        }
        if let Some(notes) = params.notes {
            active.notes = ActiveValue::Set(Some(notes));
        }
        if let Some(is_active) = params.active {
            active.active = ActiveValue::Set(is_active);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Medication::from_entity(entity)))
    }

    /// Deletes a medication, scoped to its owner.
    ///
    /// # Returns
    /// - `Ok(true)` - Medication deleted
    /// - `Ok(false)` - No such medication for this user
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, medication_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Medication::delete_many()
            .filter(entity::medication::Column::Id.eq(medication_id))
            .filter(entity::medication::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
