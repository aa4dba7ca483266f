use super::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

/// Tests deleting a record along with its child rows.
///
/// Expected: Ok(true) with file and reminder rows cascaded away
#[tokio::test]
async fn deletes_record_and_children() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let record = factory::medical_record::create_record(db, user.id).await?;
    factory::record_file::create_record_file(db, record.id).await?;
    factory::reminder::create_reminder(db, record.id).await?;

    let repo = MedicalRecordRepository::new(db);
    let deleted = repo.delete(record.id, user.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id_for_user(record.id, user.id).await?.is_none());

    let orphan_files = entity::prelude::RecordFile::find()
        .filter(entity::record_file::Column::RecordId.eq(record.id))
        .all(db)
        .await?;
    let orphan_reminders = entity::prelude::Reminder::find()
        .filter(entity::reminder::Column::RecordId.eq(record.id))
        .all(db)
        .await?;

    assert!(orphan_files.is_empty());
    assert!(orphan_reminders.is_empty());

    Ok(())
}

/// Tests that deletes cannot reach another user's record.
///
/// Expected: Ok(false) with the record still present
#[tokio::test]
async fn ignores_foreign_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let intruder = factory::user::create_user(db).await?;
    let record = factory::medical_record::create_record(db, owner.id).await?;

    let repo = MedicalRecordRepository::new(db);
    let deleted = repo.delete(record.id, intruder.id).await?;

    assert!(!deleted);
    assert!(repo.find_by_id_for_user(record.id, owner.id).await?.is_some());

    Ok(())
}
