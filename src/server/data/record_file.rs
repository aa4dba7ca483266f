//! Record file data repository for database operations.
//!
//! Stores metadata rows for files attached to medical records. The bytes
//! themselves live in the upload directory under the generated `file_name`.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::record::{NewFileParams, RecordFile};

/// Repository providing database operations for record file metadata.
pub struct RecordFileRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecordFileRepository<'a> {
    /// Creates a new RecordFileRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists metadata for an uploaded file.
    ///
    /// # Returns
    /// - `Ok(RecordFile)` - The created file row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: NewFileParams) -> Result<RecordFile, DbErr> {
        let entity = entity::record_file::ActiveModel {
            record_id: ActiveValue::Set(params.record_id),
            file_name: ActiveValue::Set(params.file_name),
            original_name: ActiveValue::Set(params.original_name),
            mime_type: ActiveValue::Set(params.mime_type),
            size: ActiveValue::Set(params.size),
            uploaded_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(RecordFile::from_entity(entity))
    }

    /// Finds a file by id, scoped to its record.
    ///
    /// # Returns
    /// - `Ok(Some(RecordFile))` - File belongs to the record
    /// - `Ok(None)` - No such file on this record
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id_for_record(
        &self,
        file_id: i32,
        record_id: i32,
    ) -> Result<Option<RecordFile>, DbErr> {
        let entity = entity::prelude::RecordFile::find_by_id(file_id)
            .filter(entity::record_file::Column::RecordId.eq(record_id))
            .one(self.db)
            .await?;

        Ok(entity.map(RecordFile::from_entity))
    }

    /// Gets all file rows for a record.
    ///
    /// # Returns
    /// - `Ok(Vec<RecordFile>)` - Files in insertion order (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_record(&self, record_id: i32) -> Result<Vec<RecordFile>, DbErr> {
        let entities = entity::prelude::RecordFile::find()
            .filter(entity::record_file::Column::RecordId.eq(record_id))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(RecordFile::from_entity).collect())
    }

    /// Deletes a file row by id.
    ///
    /// # Returns
    /// - `Ok(true)` - Row deleted
    /// - `Ok(false)` - No row with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, file_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::RecordFile::delete_by_id(file_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
