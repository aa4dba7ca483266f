use super::*;

/// Tests finding a file scoped to its record.
///
/// Expected: Ok(Some) for the right record, Ok(None) for another record
#[tokio::test]
async fn scopes_to_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let record = factory::medical_record::create_record(db, user.id).await?;
    let other_record = factory::medical_record::create_record(db, user.id).await?;
    let file = factory::record_file::create_record_file(db, record.id).await?;

    let repo = RecordFileRepository::new(db);

    let found = repo.find_by_id_for_record(file.id, record.id).await?;
    assert_eq!(found.map(|f| f.id), Some(file.id));

    let foreign = repo.find_by_id_for_record(file.id, other_record.id).await?;
    assert!(foreign.is_none());

    Ok(())
}
