use super::*;

/// Tests getting an existing record.
///
/// Expected: 200 envelope with the record
#[tokio::test]
async fn returns_existing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::document::DocumentFactory::new(db, "account")
        .field("username", "alice")
        .build()
        .await?;

    let service = AccountService::new(db);
    let envelope = service.get_by_id(&account.id.to_string()).await;

    assert!(!envelope.error);
    assert_eq!(envelope.status_code, 200);
    let record = envelope.data.unwrap();
    assert_eq!(record.id.0, account.id);
    assert_eq!(record.fields["username"], "alice");

    Ok(())
}

/// Tests getting a missing record.
///
/// Expected: soft not-found with error=true, status 200 and the read message
#[tokio::test]
async fn missing_record_is_soft_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AccountService::new(db);
    let envelope = service.get_by_id("404").await;

    assert!(envelope.error);
    assert_eq!(envelope.status_code, 200);
    assert_eq!(envelope.message.as_deref(), Some("Can't find account"));
    assert!(envelope.data.is_none());

    Ok(())
}

/// Tests that an account id never resolves a device.
///
/// Expected: soft not-found naming the device
#[tokio::test]
async fn does_not_cross_collections() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;

    let service = DeviceService::new(db);
    let envelope = service.get_by_id(&account.id.to_string()).await;

    assert!(envelope.error);
    assert_eq!(envelope.message.as_deref(), Some("Can't find device"));

    Ok(())
}

/// Tests a malformed identifier.
///
/// Expected: 500 envelope carrying the parse failure
#[tokio::test]
async fn malformed_id_is_500_envelope() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AccountService::new(db);
    let envelope = service.get_by_id("not-an-id").await;

    assert!(envelope.error);
    assert_eq!(envelope.status_code, 500);
    assert!(envelope.errors.unwrap().contains("not-an-id"));

    Ok(())
}

/// Tests a store failure while reading.
///
/// Expected: 500 envelope
#[tokio::test]
async fn store_failure_is_500_envelope() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AccountService::new(db);
    let envelope = service.get_by_id("1").await;

    assert!(envelope.error);
    assert_eq!(envelope.status_code, 500);
    assert!(envelope.errors.is_some());

    Ok(())
}
