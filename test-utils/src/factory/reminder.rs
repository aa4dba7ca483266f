//! Reminder factory for creating test reminder entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reminders with customizable fields.
pub struct ReminderFactory<'a> {
    db: &'a DatabaseConnection,
    record_id: i32,
    kind: String,
    title: String,
    due_at: DateTime<Utc>,
    is_completed: bool,
    completed_at: Option<DateTime<Utc>>,
}

impl<'a> ReminderFactory<'a> {
    /// Creates a new ReminderFactory with default values.
    ///
    /// Defaults:
    /// - kind: `"appointment"`
    /// - title: `"Reminder {id}"` where id is auto-incremented
    /// - due_at: two days from now, not completed
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `record_id` - Owning record id
    pub fn new(db: &'a DatabaseConnection, record_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            record_id,
            kind: "appointment".to_string(),
            title: format!("Reminder {}", id),
            due_at: Utc::now() + Duration::days(2),
            is_completed: false,
            completed_at: None,
        }
    }

    /// Sets the reminder kind string.
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Sets the reminder title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the due timestamp.
    pub fn due_at(mut self, due_at: DateTime<Utc>) -> Self {
        self.due_at = due_at;
        self
    }

    /// Marks the reminder completed as of now.
    pub fn completed(mut self) -> Self {
        self.is_completed = true;
        self.completed_at = Some(Utc::now());
        self
    }

    /// Builds and inserts the reminder entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::reminder::Model)` - Created reminder entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::reminder::Model, DbErr> {
        entity::reminder::ActiveModel {
            record_id: ActiveValue::Set(self.record_id),
            kind: ActiveValue::Set(self.kind),
            title: ActiveValue::Set(self.title),
            due_at: ActiveValue::Set(self.due_at),
            is_completed: ActiveValue::Set(self.is_completed),
            completed_at: ActiveValue::Set(self.completed_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reminder with default values for a record.
///
/// Shorthand for `ReminderFactory::new(db, record_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `record_id` - Owning record id
///
/// # Returns
/// - `Ok(entity::reminder::Model)` - Created reminder entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_reminder(
    db: &DatabaseConnection,
    record_id: i32,
) -> Result<entity::reminder::Model, DbErr> {
    ReminderFactory::new(db, record_id).build().await
}
