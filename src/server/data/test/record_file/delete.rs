use super::*;

/// Tests deleting a file row.
///
/// Expected: Ok(true) then Ok(false) on repeat
#[tokio::test]
async fn deletes_row_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let record = factory::medical_record::create_record(db, user.id).await?;
    let file = factory::record_file::create_record_file(db, record.id).await?;

    let repo = RecordFileRepository::new(db);

    assert!(repo.delete(file.id).await?);
    assert!(!repo.delete(file.id).await?);
    assert!(repo.get_by_record(record.id).await?.is_empty());

    Ok(())
}
