use super::*;

/// Tests finding a record by a text field.
///
/// Expected: Ok(Some(Record)) for the record with that patient
#[tokio::test]
async fn finds_record_by_text_field() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::document::DocumentFactory::new(db, "device")
        .field("patient_id", "p-1")
        .build()
        .await?;
    let target = factory::document::DocumentFactory::new(db, "device")
        .field("patient_id", "p-2")
        .build()
        .await?;

    let repo = DocumentRepository::new(db, "device");
    let record = repo.find_one_by_field("patient_id", "p-2").await?;

    assert_eq!(record.map(|r| r.id), Some(RecordId(target.id)));

    Ok(())
}

/// Tests that the oldest match wins when several records share the value.
///
/// Expected: Ok(Some(Record)) for the first inserted match
#[tokio::test]
async fn returns_first_match() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::document::DocumentFactory::new(db, "device")
        .field("name", "Monitor")
        .build()
        .await?;
    factory::document::DocumentFactory::new(db, "device")
        .field("name", "Monitor")
        .build()
        .await?;

    let repo = DocumentRepository::new(db, "device");
    let record = repo.find_one_by_field("name", "Monitor").await?;

    assert_eq!(record.map(|r| r.id), Some(RecordId(first.id)));

    Ok(())
}

/// Tests that a numeric patient id stored as a number still matches.
///
/// Expected: Ok(Some(Record))
#[tokio::test]
async fn matches_numeric_field_from_text() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::document::DocumentFactory::new(db, "device")
        .field("patient_id", 42)
        .build()
        .await?;

    let repo = DocumentRepository::new(db, "device");
    let record = repo.find_one_by_field("patient_id", "42").await?;

    assert_eq!(record.map(|r| r.id), Some(RecordId(target.id)));

    Ok(())
}

/// Tests looking up a value nobody has.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_match() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_device(db).await?;

    let repo = DocumentRepository::new(db, "device");
    let record = repo.find_one_by_field("name", "nobody").await?;

    assert!(record.is_none());

    Ok(())
}
