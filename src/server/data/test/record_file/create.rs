use super::*;

/// Tests persisting metadata for an uploaded file.
///
/// Expected: Ok with the row stored and uploaded_at stamped
#[tokio::test]
async fn creates_file_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let record = factory::medical_record::create_record(db, user.id).await?;

    let repo = RecordFileRepository::new(db);
    let file = repo
        .create(NewFileParams {
            record_id: record.id,
            file_name: "files-1700000000000-42.pdf".to_string(),
            original_name: "lab-report.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            size: 2048,
        })
        .await?;

    assert_eq!(file.record_id, record.id);
    assert_eq!(file.original_name, "lab-report.pdf");
    assert_eq!(file.size, 2048);

    Ok(())
}

/// Tests the unique constraint on the generated file name.
///
/// Expected: Err(DbErr) due to unique constraint violation
#[tokio::test]
async fn rejects_duplicate_file_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let record = factory::medical_record::create_record(db, user.id).await?;
    factory::record_file::RecordFileFactory::new(db, record.id)
        .file_name("files-dup.pdf")
        .build()
        .await?;

    let repo = RecordFileRepository::new(db);
    let result = repo
        .create(NewFileParams {
            record_id: record.id,
            file_name: "files-dup.pdf".to_string(),
            original_name: "other.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            size: 1,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
