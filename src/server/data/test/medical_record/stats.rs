use super::*;

/// Tests the aggregate statistics over a mixed set of records.
///
/// Expected: Ok with totals, status counts, type counts, and latest date
#[tokio::test]
async fn aggregates_counts_and_latest_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let now = Utc::now();
    factory::medical_record::MedicalRecordFactory::new(db, user.id)
        .record_type("lab-result")
        .status("active")
        .date_of_record(now - Duration::days(10))
        .build()
        .await?;
    factory::medical_record::MedicalRecordFactory::new(db, user.id)
        .record_type("lab-result")
        .status("resolved")
        .date_of_record(now - Duration::days(5))
        .build()
        .await?;
    factory::medical_record::MedicalRecordFactory::new(db, user.id)
        .record_type("surgery")
        .status("ongoing")
        .date_of_record(now - Duration::days(1))
        .build()
        .await?;

    let repo = MedicalRecordRepository::new(db);
    let stats = repo.stats(user.id).await?;

    assert_eq!(stats.total_records, 3);
    assert_eq!(stats.active_records, 1);
    assert_eq!(stats.resolved_records, 1);

    let lab_count = stats
        .type_counts
        .iter()
        .find(|(t, _)| t == "lab-result")
        .map(|(_, c)| *c);
    assert_eq!(lab_count, Some(2));

    let latest = stats.latest_record.unwrap();
    assert!((latest - (now - Duration::days(1))).num_seconds().abs() < 2);

    Ok(())
}

/// Tests statistics for a user with no records at all.
///
/// Expected: Ok with zero counts and no latest date
#[tokio::test]
async fn empty_stats_for_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = MedicalRecordRepository::new(db);
    let stats = repo.stats(user.id).await?;

    assert_eq!(stats.total_records, 0);
    assert!(stats.type_counts.is_empty());
    assert!(stats.latest_record.is_none());

    Ok(())
}

/// Tests that another user's records do not leak into the statistics.
///
/// Expected: Ok counting only the requesting user's records
#[tokio::test]
async fn scopes_to_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    factory::medical_record::create_record(db, user.id).await?;
    factory::medical_record::create_record(db, other.id).await?;
    factory::medical_record::create_record(db, other.id).await?;

    let repo = MedicalRecordRepository::new(db);
    let stats = repo.stats(user.id).await?;

    assert_eq!(stats.total_records, 1);

    Ok(())
}
