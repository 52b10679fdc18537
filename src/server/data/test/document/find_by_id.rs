use super::*;

/// Tests finding an existing record.
///
/// Expected: Ok(Some(Record)) with the stored body
#[tokio::test]
async fn finds_existing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let device = factory::document::DocumentFactory::new(db, "device")
        .field("name", "Infusion pump")
        .build()
        .await?;

    let repo = DocumentRepository::new(db, "device");
    let record = repo.find_by_id(RecordId(device.id)).await?;

    let record = record.expect("record should exist");
    assert_eq!(record.id, RecordId(device.id));
    assert_eq!(record.fields["name"], "Infusion pump");
    assert_eq!(record.created_at, device.created_at);

    Ok(())
}

/// Tests finding a missing record.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DocumentRepository::new(db, "device");
    let record = repo.find_by_id(RecordId(999)).await?;

    assert!(record.is_none());

    Ok(())
}

/// Tests that a record of another collection is not visible.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_records_of_other_collections() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;

    let repo = DocumentRepository::new(db, "device");
    let record = repo.find_by_id(RecordId(account.id)).await?;

    assert!(record.is_none());

    Ok(())
}

/// Tests that a stored body which is not an object is reported as an error.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn rejects_non_object_body() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    use sea_orm::{ActiveModelTrait, ActiveValue};
    let broken = entity::document::ActiveModel {
        collection: ActiveValue::Set("device".to_string()),
        body: ActiveValue::Set(json!([1, 2, 3])),
        created_at: ActiveValue::Set(Utc::now()),
        updated_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let repo = DocumentRepository::new(db, "device");
    let result = repo.find_by_id(RecordId(broken.id)).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
