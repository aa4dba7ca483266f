//! Medical record data repository for database operations.
//!
//! This module provides the `MedicalRecordRepository` for managing medical
//! records in the database. Every query is scoped to an owning user id, so a
//! record id belonging to another user behaves exactly like a missing record.
//! List queries support combined filtering, substring search, and pagination;
//! aggregate queries back the dashboard statistics endpoint.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::record::{
    CreateRecordParams, MedicalRecord, PaginatedRecords, RecordFilters, RecordStats,
    UpdateRecordParams,
};

/// Repository providing database operations for medical records.
pub struct MedicalRecordRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MedicalRecordRepository<'a> {
    /// Creates a new MedicalRecordRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a medical record for a user.
    ///
    /// Enum fields arrive pre-validated in the params and are stored as their
    /// string representation.
    ///
    /// # Arguments
    /// - `user_id` - Owning user
    /// - `params` - Validated record fields, including the derived BMI
    ///
    /// # Returns
    /// - `Ok(MedicalRecord)` - The created record with empty children
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        user_id: i32,
        params: CreateRecordParams,
    ) -> Result<MedicalRecord, DbErr> {
        let now = Utc::now();

        let entity = entity::medical_record::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            title: ActiveValue::Set(params.title),
            record_type: ActiveValue::Set(params.record_type.as_str().to_string()),
            description: ActiveValue::Set(params.description),
            doctor_name: ActiveValue::Set(params.doctor_name),
            doctor_specialization: ActiveValue::Set(params.doctor_specialization),
            doctor_hospital: ActiveValue::Set(params.doctor_hospital),
            date_of_record: ActiveValue::Set(params.date_of_record),
            date_of_next_visit: ActiveValue::Set(params.date_of_next_visit),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            diagnosis_primary: ActiveValue::Set(params.diagnosis_primary),
            diagnosis_notes: ActiveValue::Set(params.diagnosis_notes),
            systolic: ActiveValue::Set(params.systolic),
            diastolic: ActiveValue::Set(params.diastolic),
            heart_rate: ActiveValue::Set(params.heart_rate),
            temperature: ActiveValue::Set(params.temperature),
            weight: ActiveValue::Set(params.weight),
            height: ActiveValue::Set(params.height),
            bmi: ActiveValue::Set(params.bmi),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(MedicalRecord::from_entity(entity, vec![], vec![]))
    }

    /// Finds a record by id, scoped to its owner, with files and reminders.
    ///
    /// # Returns
    /// - `Ok(Some(MedicalRecord))` - Record found and owned by `user_id`
    /// - `Ok(None)` - No such record for this user
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id_for_user(
        &self,
        record_id: i32,
        user_id: i32,
    ) -> Result<Option<MedicalRecord>, DbErr> {
        let Some(entity) = entity::prelude::MedicalRecord::find_by_id(record_id)
            .filter(entity::medical_record::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let files = entity
            .find_related(entity::prelude::RecordFile)
            .order_by_asc(entity::record_file::Column::Id)
            .all(self.db)
            .await?;
        let reminders = entity
            .find_related(entity::prelude::Reminder)
            .order_by_asc(entity::reminder::Column::DueAt)
            .all(self.db)
            .await?;

        Ok(Some(MedicalRecord::from_entity(entity, files, reminders)))
    }

    /// Gets a user's records with filters and pagination.
    ///
    /// Filters combine with AND; the search term matches as a substring of
    /// title, description, doctor name, or primary diagnosis. Records are
    /// ordered newest first
    /// by `date_of_record`. Children are batch-loaded for the page.
    ///
    /// # Arguments
    /// - `user_id` - Owning user
    /// - `filters` - Optional type/status/date/search filters
    /// - `page` - One-indexed page number
    /// - `limit` - Records per page
    ///
    /// # Returns
    /// - `Ok(PaginatedRecords)` - Page of records with pagination metadata
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_filtered(
        &self,
        user_id: i32,
        filters: &RecordFilters,
        page: u64,
        limit: u64,
    ) -> Result<PaginatedRecords, DbErr> {
        let mut query = entity::prelude::MedicalRecord::find()
            .filter(entity::medical_record::Column::UserId.eq(user_id));

        if let Some(record_type) = filters.record_type {
            query = query
                .filter(entity::medical_record::Column::RecordType.eq(record_type.as_str()));
        }
        if let Some(status) = filters.status {
            query = query.filter(entity::medical_record::Column::Status.eq(status.as_str()));
        }
        if let Some(date_from) = filters.date_from {
            query = query.filter(entity::medical_record::Column::DateOfRecord.gte(date_from));
        }
        if let Some(date_to) = filters.date_to {
            query = query.filter(entity::medical_record::Column::DateOfRecord.lte(date_to));
        }
        if let Some(ref search) = filters.search {
            query = query.filter(
                Condition::any()
                    .add(entity::medical_record::Column::Title.contains(search))
                    .add(entity::medical_record::Column::Description.contains(search))
                    .add(entity::medical_record::Column::DoctorName.contains(search))
                    .add(entity::medical_record::Column::DiagnosisPrimary.contains(search)),
            );
        }

        let paginator = query
            .order_by_desc(entity::medical_record::Column::DateOfRecord)
            .paginate(self.db, limit);

        let total = paginator.num_items().await?;
        let total_pages = paginator.num_pages().await?;
        // Page numbers are one-indexed at the API boundary
        let entities = paginator.fetch_page(page.saturating_sub(1)).await?;

        let record_ids: Vec<i32> = entities.iter().map(|e| e.id).collect();
        let mut files_by_record = batch_files(self.db, &record_ids).await?;
        let mut reminders_by_record = batch_reminders(self.db, &record_ids).await?;

        let records = entities
            .into_iter()
            .map(|entity| {
                let files = files_by_record.remove(&entity.id).unwrap_or_default();
                let reminders = reminders_by_record.remove(&entity.id).unwrap_or_default();
                MedicalRecord::from_entity(entity, files, reminders)
            })
            .collect();

        Ok(PaginatedRecords {
            records,
            total,
            page,
            limit,
            total_pages,
        })
    }

    /// Applies a partial update to a record, scoped to its owner.
    ///
    /// Grouped fields (doctor, diagnosis, vitals) replace their whole group
    /// when present; see `UpdateRecordParams`.
    ///
    /// # Returns
    /// - `Ok(Some(MedicalRecord))` - Updated record with children
    /// - `Ok(None)` - No such record for this user
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        record_id: i32,
        user_id: i32,
        params: UpdateRecordParams,
    ) -> Result<Option<MedicalRecord>, DbErr> {
        let Some(entity) = entity::prelude::MedicalRecord::find_by_id(record_id)
            .filter(entity::medical_record::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::medical_record::ActiveModel = entity.into();

        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(record_type) = params.record_type {
            active.record_type = ActiveValue::Set(record_type.as_str().to_string());
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(doctor) = params.doctor {
            active.doctor_name = ActiveValue::Set(doctor.name);
            active.doctor_specialization = ActiveValue::Set(doctor.specialization);
            active.doctor_hospital = ActiveValue::Set(doctor.hospital);
        }
        if let Some(date_of_record) = params.date_of_record {
            active.date_of_record = ActiveValue::Set(date_of_record);
        }
        if let Some(date_of_next_visit) = params.date_of_next_visit {
            active.date_of_next_visit = ActiveValue::Set(Some(date_of_next_visit));
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(diagnosis) = params.diagnosis {
            active.diagnosis_primary = ActiveValue::Set(diagnosis.primary);
            active.diagnosis_notes = ActiveValue::Set(diagnosis.notes);
        }
        if let Some(vitals) = params.vitals {
            active.systolic = ActiveValue::Set(vitals.systolic);
            active.diastolic = ActiveValue::Set(vitals.diastolic);
            active.heart_rate = ActiveValue::Set(vitals.heart_rate);
            active.temperature = ActiveValue::Set(vitals.temperature);
            active.weight = ActiveValue::Set(vitals.weight);
            active.height = ActiveValue::Set(vitals.height);
            active.bmi = ActiveValue::Set(vitals.bmi);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        let files = entity
            .find_related(entity::prelude::RecordFile)
            .order_by_asc(entity::record_file::Column::Id)
            .all(self.db)
            .await?;
        let reminders = entity
            .find_related(entity::prelude::Reminder)
            .order_by_asc(entity::reminder::Column::DueAt)
            .all(self.db)
            .await?;

        Ok(Some(MedicalRecord::from_entity(entity, files, reminders)))
    }

    /// Deletes a record, scoped to its owner.
    ///
    /// File and reminder rows go with it via the cascading foreign keys; the
    /// caller is responsible for removing file bytes from disk first.
    ///
    /// # Returns
    /// - `Ok(true)` - Record deleted
    /// - `Ok(false)` - No such record for this user
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, record_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::MedicalRecord::delete_many()
            .filter(entity::medical_record::Column::Id.eq(record_id))
            .filter(entity::medical_record::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Computes dashboard statistics over all of a user's records.
    ///
    /// Per-type counts come back sorted by count, largest first.
    ///
    /// # Returns
    /// - `Ok(RecordStats)` - Totals, per-status counts, per-type counts, and
    ///   the newest record date
    /// - `Err(DbErr)` - Database error during any aggregate query
    pub async fn stats(&self, user_id: i32) -> Result<RecordStats, DbErr> {
        let base = entity::prelude::MedicalRecord::find()
            .filter(entity::medical_record::Column::UserId.eq(user_id));

        let total_records = base.clone().count(self.db).await?;
        let active_records = base
            .clone()
            .filter(entity::medical_record::Column::Status.eq("active"))
            .count(self.db)
            .await?;
        let resolved_records = base
            .clone()
            .filter(entity::medical_record::Column::Status.eq("resolved"))
            .count(self.db)
            .await?;

        let mut type_counts: Vec<(String, i64)> = base
            .clone()
            .select_only()
            .column(entity::medical_record::Column::RecordType)
            .column_as(entity::medical_record::Column::Id.count(), "count")
            .group_by(entity::medical_record::Column::RecordType)
            .into_tuple()
            .all(self.db)
            .await?;
        type_counts.sort_by(|a, b| b.1.cmp(&a.1));

        let latest_record: Option<DateTime<Utc>> = base
            .select_only()
            .column_as(entity::medical_record::Column::DateOfRecord.max(), "latest")
            .into_tuple()
            .one(self.db)
            .await?
            .flatten();

        Ok(RecordStats {
            total_records,
            active_records,
            resolved_records,
            type_counts: type_counts
                .into_iter()
                .map(|(record_type, count)| (record_type, count as u64))
                .collect(),
            latest_record,
        })
    }
}

/// Batch-loads file rows for a set of record ids, grouped by record.
async fn batch_files(
    db: &DatabaseConnection,
    record_ids: &[i32],
) -> Result<HashMap<i32, Vec<entity::record_file::Model>>, DbErr> {
    if record_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = entity::prelude::RecordFile::find()
        .filter(entity::record_file::Column::RecordId.is_in(record_ids.to_vec()))
        .order_by_asc(entity::record_file::Column::Id)
        .all(db)
        .await?;

    let mut grouped: HashMap<i32, Vec<entity::record_file::Model>> = HashMap::new();
    for row in rows {
        grouped.entry(row.record_id).or_default().push(row);
    }

    Ok(grouped)
}

/// Batch-loads reminder rows for a set of record ids, grouped by record.
async fn batch_reminders(
    db: &DatabaseConnection,
    record_ids: &[i32],
) -> Result<HashMap<i32, Vec<entity::reminder::Model>>, DbErr> {
    if record_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = entity::prelude::Reminder::find()
        .filter(entity::reminder::Column::RecordId.is_in(record_ids.to_vec()))
        .order_by_asc(entity::reminder::Column::DueAt)
        .all(db)
        .await?;

    let mut grouped: HashMap<i32, Vec<entity::reminder::Model>> = HashMap::new();
    for row in rows {
        grouped.entry(row.record_id).or_default().push(row);
    }

    Ok(grouped)
}
