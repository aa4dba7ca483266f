//! Medical record service for business logic and validation.
//!
//! Orchestrates the record, file, and reminder repositories plus the on-disk
//! file store. Every operation takes the authenticated user's id and relies
//! on the repositories' ownership scoping, so a record id belonging to another
//! user surfaces as `NotFound`.

use sea_orm::DatabaseConnection;

use crate::{
    model::record::{
        CreateMedicalRecordDto, CreateReminderDto, UpdateMedicalRecordDto, VitalSignsInputDto,
    },
    server::{
        data::{
            medical_record::MedicalRecordRepository, record_file::RecordFileRepository,
            reminder::ReminderRepository,
        },
        error::AppError,
        model::record::{
            compute_bmi, CreateRecordParams, CreateReminderParams, MedicalRecord, NewFileParams,
            PaginatedRecords, RecordFile, RecordFilters, RecordStats, RecordStatus, RecordType,
            Reminder, ReminderKind, UpcomingReminder, UpdateDiagnosisParams, UpdateDoctorParams,
            UpdateRecordParams, UpdateVitalsParams,
        },
        service::upload::{FileStore, MAX_FILES_PER_UPLOAD},
        util::validate,
    },
};

/// Default page size for the record list.
const DEFAULT_PAGE_LIMIT: u64 = 10;

/// Default look-ahead window for upcoming reminders, in days.
const DEFAULT_REMINDER_DAYS: i64 = 7;

/// Hard cap on the number of upcoming reminders returned.
const UPCOMING_REMINDER_CAP: u64 = 10;

/// An uploaded file part after multipart parsing.
///
/// Controllers flatten axum's multipart stream into these so the service
/// stays free of extractor types.
pub struct UploadPart {
    pub original_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

pub struct RecordService<'a> {
    db: &'a DatabaseConnection,
    files: &'a FileStore,
}

impl<'a> RecordService<'a> {
    pub fn new(db: &'a DatabaseConnection, files: &'a FileStore) -> Self {
        Self { db, files }
    }

    /// Creates a medical record for a user.
    ///
    /// Validates field lengths, enum values, vital sign ranges, and the date
    /// rules (record date not in the future, next visit not before it), then
    /// derives the BMI from weight and height before persisting.
    ///
    /// # Returns
    /// - `Ok(MedicalRecord)` - The created record
    /// - `Err(AppError::Validation)` - A field failed validation
    pub async fn create(
        &self,
        user_id: i32,
        dto: CreateMedicalRecordDto,
    ) -> Result<MedicalRecord, AppError> {
        validate::title(&dto.title)?;
        validate::description(&dto.description)?;
        validate::name(&dto.doctor.name)?;

        let record_type = RecordType::parse(&dto.record_type)?;
        let status = match dto.status {
            Some(ref value) => RecordStatus::parse(value)?,
            None => RecordStatus::Active,
        };

        validate::record_date(dto.date_of_record)?;
        if let Some(next_visit) = dto.date_of_next_visit {
            validate::visit_after_record(dto.date_of_record, next_visit)?;
        }

        let vitals = dto.vital_signs.unwrap_or_default();
        validate_vitals(&vitals)?;
        let bmi = compute_bmi(vitals.weight, vitals.height);

        let diagnosis = dto.diagnosis.unwrap_or_default();

        let record = MedicalRecordRepository::new(self.db)
            .create(
                user_id,
                CreateRecordParams {
                    title: dto.title,
                    record_type,
                    description: dto.description,
                    doctor_name: dto.doctor.name,
                    doctor_specialization: dto.doctor.specialization,
                    doctor_hospital: dto.doctor.hospital,
                    date_of_record: dto.date_of_record,
                    date_of_next_visit: dto.date_of_next_visit,
                    status,
                    diagnosis_primary: diagnosis.primary,
                    diagnosis_notes: diagnosis.notes,
                    systolic: vitals.systolic,
                    diastolic: vitals.diastolic,
                    heart_rate: vitals.heart_rate,
                    temperature: vitals.temperature,
                    weight: vitals.weight,
                    height: vitals.height,
                    bmi,
                },
            )
            .await?;

        Ok(record)
    }

    /// Gets a user's records with filters and pagination.
    ///
    /// Page numbers are one-indexed; `page` and `limit` default to 1 and 10.
    ///
    /// # Returns
    /// - `Ok(PaginatedRecords)` - Page of records with pagination metadata
    /// - `Err(AppError::Validation)` - A filter value failed to parse
    pub async fn list(
        &self,
        user_id: i32,
        filters: RecordFilters,
        page: Option<u64>,
        limit: Option<u64>,
    ) -> Result<PaginatedRecords, AppError> {
        let page = page.unwrap_or(1).max(1);
        let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).max(1);

        let records = MedicalRecordRepository::new(self.db)
            .get_filtered(user_id, &filters, page, limit)
            .await?;

        Ok(records)
    }

    /// Gets one record with its files and reminders.
    ///
    /// # Returns
    /// - `Ok(MedicalRecord)` - The record
    /// - `Err(AppError::NotFound)` - No such record for this user
    pub async fn get(&self, record_id: i32, user_id: i32) -> Result<MedicalRecord, AppError> {
        MedicalRecordRepository::new(self.db)
            .find_by_id_for_user(record_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Medical record".to_string()))
    }

    /// Applies a partial update to a record.
    ///
    /// The doctor, diagnosis, and vital sign groups replace their whole group
    /// when present; vitals get a freshly derived BMI. Date ordering is
    /// checked against the merged result, so moving the record date past an
    /// existing next-visit date is rejected too.
    ///
    /// # Returns
    /// - `Ok(MedicalRecord)` - Updated record
    /// - `Err(AppError::Validation)` - A provided field failed validation
    /// - `Err(AppError::NotFound)` - No such record for this user
    pub async fn update(
        &self,
        record_id: i32,
        user_id: i32,
        dto: UpdateMedicalRecordDto,
    ) -> Result<MedicalRecord, AppError> {
        if let Some(ref title) = dto.title {
            validate::title(title)?;
        }
        if let Some(ref description) = dto.description {
            validate::description(description)?;
        }

        let record_type = dto.record_type.as_deref().map(RecordType::parse).transpose()?;
        let status = dto.status.as_deref().map(RecordStatus::parse).transpose()?;

        let doctor = match dto.doctor {
            Some(doctor) => {
                validate::name(&doctor.name)?;
                Some(UpdateDoctorParams {
                    name: doctor.name,
                    specialization: doctor.specialization,
                    hospital: doctor.hospital,
                })
            }
            None => None,
        };

        let diagnosis = dto.diagnosis.map(|diagnosis| UpdateDiagnosisParams {
            primary: diagnosis.primary,
            notes: diagnosis.notes,
        });

        let vitals = match dto.vital_signs {
            Some(vitals) => {
                validate_vitals(&vitals)?;
                Some(UpdateVitalsParams {
                    systolic: vitals.systolic,
                    diastolic: vitals.diastolic,
                    heart_rate: vitals.heart_rate,
                    temperature: vitals.temperature,
                    bmi: compute_bmi(vitals.weight, vitals.height),
                    weight: vitals.weight,
                    height: vitals.height,
                })
            }
            None => None,
        };

        if let Some(date_of_record) = dto.date_of_record {
            validate::record_date(date_of_record)?;
        }

        let repo = MedicalRecordRepository::new(self.db);

        if dto.date_of_record.is_some() || dto.date_of_next_visit.is_some() {
            let current = repo
                .find_by_id_for_user(record_id, user_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Medical record".to_string()))?;

            let date_of_record = dto.date_of_record.unwrap_or(current.date_of_record);
            let next_visit = dto.date_of_next_visit.or(current.date_of_next_visit);
            if let Some(next_visit) = next_visit {
                validate::visit_after_record(date_of_record, next_visit)?;
            }
        }

        repo
            .update(
                record_id,
                user_id,
                UpdateRecordParams {
                    title: dto.title,
                    record_type,
                    description: dto.description,
                    doctor,
                    date_of_record: dto.date_of_record,
                    date_of_next_visit: dto.date_of_next_visit,
                    status,
                    diagnosis,
                    vitals,
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Medical record".to_string()))
    }

    /// Deletes a record along with its attachments.
    ///
    /// Stored file bytes are removed from disk before the row delete cascades
    /// away the metadata. A file already missing on disk is not an error.
    ///
    /// # Returns
    /// - `Ok(())` - Record and its files removed
    /// - `Err(AppError::NotFound)` - No such record for this user
    pub async fn delete(&self, record_id: i32, user_id: i32) -> Result<(), AppError> {
        let repo = MedicalRecordRepository::new(self.db);

        if repo.find_by_id_for_user(record_id, user_id).await?.is_none() {
            return Err(AppError::NotFound("Medical record".to_string()));
        }

        let files = RecordFileRepository::new(self.db)
            .get_by_record(record_id)
            .await?;
        for file in &files {
            self.files.remove(&file.file_name).await?;
        }

        repo.delete(record_id, user_id).await?;

        Ok(())
    }

    /// Computes dashboard statistics over a user's records.
    pub async fn stats(&self, user_id: i32) -> Result<RecordStats, AppError> {
        let stats = MedicalRecordRepository::new(self.db).stats(user_id).await?;

        Ok(stats)
    }

    /// Gets a user's pending reminders due within the next `days` days.
    ///
    /// Defaults to a 7 day window; results are capped at 10.
    pub async fn upcoming_reminders(
        &self,
        user_id: i32,
        days: Option<i64>,
    ) -> Result<Vec<UpcomingReminder>, AppError> {
        let days = days.unwrap_or(DEFAULT_REMINDER_DAYS).max(1);

        let reminders = ReminderRepository::new(self.db)
            .upcoming(user_id, days, UPCOMING_REMINDER_CAP)
            .await?;

        Ok(reminders)
    }

    /// Attaches uploaded files to a record.
    ///
    /// Each part is validated against the attachment whitelist, written to
    /// disk under a generated name, and recorded in the database. Validation
    /// happens for all parts before any bytes hit the disk, and when a later
    /// part fails to store, rows and bytes written for the earlier parts are
    /// removed before the error is returned.
    ///
    /// # Returns
    /// - `Ok(Vec<RecordFile>)` - Metadata for the stored files
    /// - `Err(AppError::Validation)` - Too many parts or a disallowed type
    /// - `Err(AppError::NotFound)` - No such record for this user
    pub async fn attach_files(
        &self,
        record_id: i32,
        user_id: i32,
        parts: Vec<UploadPart>,
    ) -> Result<Vec<RecordFile>, AppError> {
        if parts.is_empty() {
            return Err(AppError::Validation("No files were uploaded".to_string()));
        }
        if parts.len() > MAX_FILES_PER_UPLOAD {
            return Err(AppError::Validation(format!(
                "At most {MAX_FILES_PER_UPLOAD} files can be uploaded at once"
            )));
        }
        for part in &parts {
            FileStore::validate_part(&part.original_name, &part.content_type)?;
        }

        self.get(record_id, user_id).await?;

        let repo = RecordFileRepository::new(self.db);
        let mut stored = Vec::with_capacity(parts.len());

        for part in parts {
            let file_name = FileStore::generate_name(&part.original_name);
            if let Err(err) = self.files.save(&file_name, &part.bytes).await {
                self.discard_stored(&repo, &stored).await;
                return Err(err);
            }

            let created = repo
                .create(NewFileParams {
                    record_id,
                    file_name: file_name.clone(),
                    original_name: part.original_name,
                    mime_type: part.content_type,
                    size: part.bytes.len() as i64,
                })
                .await;

            match created {
                Ok(file) => stored.push(file),
                Err(err) => {
                    self.files.remove(&file_name).await.ok();
                    self.discard_stored(&repo, &stored).await;
                    return Err(err.into());
                }
            }
        }

        Ok(stored)
    }

    /// Best-effort removal of the rows and bytes a failed upload left behind.
    async fn discard_stored(&self, repo: &RecordFileRepository<'_>, stored: &[RecordFile]) {
        for file in stored {
            repo.delete(file.id).await.ok();
            self.files.remove(&file.file_name).await.ok();
        }
    }

    /// Reads an attached file back for download.
    ///
    /// # Returns
    /// - `Ok((RecordFile, Vec<u8>))` - Metadata and file contents
    /// - `Err(AppError::NotFound)` - Record, file row, or bytes missing
    pub async fn get_file(
        &self,
        record_id: i32,
        file_id: i32,
        user_id: i32,
    ) -> Result<(RecordFile, Vec<u8>), AppError> {
        self.get(record_id, user_id).await?;

        let file = RecordFileRepository::new(self.db)
            .find_by_id_for_record(file_id, record_id)
            .await?
            .ok_or_else(|| AppError::NotFound("File".to_string()))?;

        let bytes = self.files.read(&file.file_name).await?;

        Ok((file, bytes))
    }

    /// Deletes an attached file, row first and then bytes.
    ///
    /// # Returns
    /// - `Ok(())` - File removed
    /// - `Err(AppError::NotFound)` - Record or file row missing
    pub async fn delete_file(
        &self,
        record_id: i32,
        file_id: i32,
        user_id: i32,
    ) -> Result<(), AppError> {
        self.get(record_id, user_id).await?;

        let repo = RecordFileRepository::new(self.db);
        let file = repo
            .find_by_id_for_record(file_id, record_id)
            .await?
            .ok_or_else(|| AppError::NotFound("File".to_string()))?;

        repo.delete(file.id).await?;
        self.files.remove(&file.file_name).await?;

        Ok(())
    }

    /// Adds a reminder to a record.
    ///
    /// # Returns
    /// - `Ok(Reminder)` - The created reminder
    /// - `Err(AppError::Validation)` - Bad kind or title
    /// - `Err(AppError::NotFound)` - No such record for this user
    pub async fn add_reminder(
        &self,
        record_id: i32,
        user_id: i32,
        dto: CreateReminderDto,
    ) -> Result<Reminder, AppError> {
        validate::title(&dto.title)?;
        let kind = ReminderKind::parse(&dto.kind)?;

        self.get(record_id, user_id).await?;

        let reminder = ReminderRepository::new(self.db)
            .create(CreateReminderParams {
                record_id,
                kind,
                title: dto.title,
                description: dto.description,
                due_at: dto.due_at,
            })
            .await?;

        Ok(reminder)
    }

    /// Sets a reminder's completion state.
    ///
    /// # Returns
    /// - `Ok(Reminder)` - Updated reminder
    /// - `Err(AppError::NotFound)` - Record or reminder missing for this user
    pub async fn set_reminder_completion(
        &self,
        record_id: i32,
        reminder_id: i32,
        user_id: i32,
        is_completed: bool,
    ) -> Result<Reminder, AppError> {
        self.get(record_id, user_id).await?;

        ReminderRepository::new(self.db)
            .set_completion(reminder_id, record_id, is_completed)
            .await?
            .ok_or_else(|| AppError::NotFound("Reminder".to_string()))
    }
}

fn validate_vitals(vitals: &VitalSignsInputDto) -> Result<(), AppError> {
    validate::vitals(
        vitals.systolic,
        vitals.diastolic,
        vitals.heart_rate,
        vitals.temperature,
        vitals.weight,
        vitals.height,
    )
}
