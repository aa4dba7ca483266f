//! Record file factory for creating test file metadata entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test record file rows with customizable fields.
pub struct RecordFileFactory<'a> {
    db: &'a DatabaseConnection,
    record_id: i32,
    file_name: String,
    original_name: String,
    mime_type: String,
    size: i64,
}

impl<'a> RecordFileFactory<'a> {
    /// Creates a new RecordFileFactory with default values.
    ///
    /// Defaults:
    /// - file_name: `"files-{id}.pdf"` where id is auto-incremented
    /// - original_name: `"report{id}.pdf"`
    /// - mime_type: `"application/pdf"`, size: 1024 bytes
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `record_id` - Owning record id
    pub fn new(db: &'a DatabaseConnection, record_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            record_id,
            file_name: format!("files-{}.pdf", id),
            original_name: format!("report{}.pdf", id),
            mime_type: "application/pdf".to_string(),
            size: 1024,
        }
    }

    /// Sets the generated on-disk file name.
    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Sets the original upload name.
    pub fn original_name(mut self, original_name: impl Into<String>) -> Self {
        self.original_name = original_name.into();
        self
    }

    /// Sets the content type.
    pub fn mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    /// Sets the file size in bytes.
    pub fn size(mut self, size: i64) -> Self {
        self.size = size;
        self
    }

    /// Builds and inserts the record file entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::record_file::Model)` - Created file entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::record_file::Model, DbErr> {
        entity::record_file::ActiveModel {
            record_id: ActiveValue::Set(self.record_id),
            file_name: ActiveValue::Set(self.file_name),
            original_name: ActiveValue::Set(self.original_name),
            mime_type: ActiveValue::Set(self.mime_type),
            size: ActiveValue::Set(self.size),
            uploaded_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a record file with default values for a record.
///
/// Shorthand for `RecordFileFactory::new(db, record_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `record_id` - Owning record id
///
/// # Returns
/// - `Ok(entity::record_file::Model)` - Created file entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_record_file(
    db: &DatabaseConnection,
    record_id: i32,
) -> Result<entity::record_file::Model, DbErr> {
    RecordFileFactory::new(db, record_id).build().await
}
