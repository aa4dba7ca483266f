//! Reminder data repository for database operations.
//!
//! Reminders hang off medical records; the upcoming-reminders query joins
//! back through the record table so it can scope by owning user and carry the
//! record title along with each hit.

use chrono::{Duration, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::record::{CreateReminderParams, Reminder, UpcomingReminder};

/// Repository providing database operations for record reminders.
pub struct ReminderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReminderRepository<'a> {
    /// Creates a new ReminderRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a reminder to a record.
    ///
    /// # Returns
    /// - `Ok(Reminder)` - The created reminder, not yet completed
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateReminderParams) -> Result<Reminder, DbErr> {
        let entity = entity::reminder::ActiveModel {
            record_id: ActiveValue::Set(params.record_id),
            kind: ActiveValue::Set(params.kind.as_str().to_string()),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            due_at: ActiveValue::Set(params.due_at),
            is_completed: ActiveValue::Set(false),
            completed_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Reminder::from_entity(entity))
    }

    /// Sets a reminder's completion state, scoped to its record.
    ///
    /// Completing stamps `completed_at`; un-completing clears it.
    ///
    /// # Returns
    /// - `Ok(Some(Reminder))` - Updated reminder
    /// - `Ok(None)` - No such reminder on this record
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_completion(
        &self,
        reminder_id: i32,
        record_id: i32,
        is_completed: bool,
    ) -> Result<Option<Reminder>, DbErr> {
        let Some(entity) = entity::prelude::Reminder::find_by_id(reminder_id)
            .filter(entity::reminder::Column::RecordId.eq(record_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::reminder::ActiveModel = entity.into();
        active.is_completed = ActiveValue::Set(is_completed);
        active.completed_at = ActiveValue::Set(is_completed.then(Utc::now));

        let entity = active.update(self.db).await?;

        Ok(Some(Reminder::from_entity(entity)))
    }

    /// Gets a user's pending reminders due within the next `days` days.
    ///
    /// Joins through the record table to scope by owner and to carry the
    /// record title. Completed reminders and reminders already past due are
    /// excluded; results are ordered soonest first and capped at `limit`.
    ///
    /// # Arguments
    /// - `user_id` - Owning user
    /// - `days` - Size of the look-ahead window
    /// - `limit` - Maximum number of reminders to return
    ///
    /// # Returns
    /// - `Ok(Vec<UpcomingReminder>)` - Pending reminders with record titles
    /// - `Err(DbErr)` - Database error during query
    pub async fn upcoming(
        &self,
        user_id: i32,
        days: i64,
        limit: u64,
    ) -> Result<Vec<UpcomingReminder>, DbErr> {
        let now = Utc::now();
        let window_end = now + Duration::days(days);

        let rows = entity::prelude::Reminder::find()
            .find_also_related(entity::prelude::MedicalRecord)
            .filter(entity::medical_record::Column::UserId.eq(user_id))
            .filter(entity::reminder::Column::IsCompleted.eq(false))
            .filter(entity::reminder::Column::DueAt.gte(now))
            .filter(entity::reminder::Column::DueAt.lte(window_end))
            .order_by_asc(entity::reminder::Column::DueAt)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(reminder, record)| {
                record.map(|record| UpcomingReminder {
                    reminder: Reminder::from_entity(reminder),
                    record_title: record.title,
                })
            })
            .collect())
    }
}
