use super::*;

/// Tests updating account fields.
///
/// Expected: 202 envelope with the merged body and the success message
#[tokio::test]
async fn updates_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::document::DocumentFactory::new(db, "account")
        .body(body(json!({ "username": "alice", "role": "nurse" })))
        .build()
        .await?;

    let service = AccountService::new(db);
    let envelope = service
        .update(&account.id.to_string(), body(json!({ "role": "admin" })))
        .await;

    assert!(!envelope.error);
    assert_eq!(envelope.status_code, 202);
    assert_eq!(envelope.message.as_deref(), Some("Update successfully"));
    let record = envelope.data.unwrap();
    assert_eq!(
        record.fields,
        body(json!({ "username": "alice", "role": "admin" }))
    );

    Ok(())
}

/// Tests that a device update pushes the history value as a single entry.
///
/// Expected: history grows by exactly one element holding the submitted value
#[tokio::test]
async fn device_update_appends_one_history_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let device = factory::create_device(db).await?;

    let service = DeviceService::new(db);
    let envelope = service
        .update(
            &device.id.to_string(),
            body(json!({
                "status": "in-use",
                "deviceUsingHistory": { "patient_id": "p-1" }
            })),
        )
        .await;

    let record = envelope.data.unwrap();
    assert_eq!(record.fields["status"], "in-use");
    assert_eq!(
        record.fields["deviceUsingHistory"],
        json!([{ "patient_id": "p-1" }])
    );

    Ok(())
}

/// Tests a device update without any history value.
///
/// Expected: an empty array is appended as the new entry
#[tokio::test]
async fn device_update_without_history_appends_empty_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let device = factory::create_device(db).await?;

    let service = DeviceService::new(db);
    let envelope = service
        .update(&device.id.to_string(), body(json!({ "status": "idle" })))
        .await;

    let record = envelope.data.unwrap();
    assert_eq!(record.fields["deviceUsingHistory"], json!([[]]));

    Ok(())
}

/// Tests updating a missing record.
///
/// Expected: 500 envelope with the update failure message and no errors detail
#[tokio::test]
async fn missing_record_is_update_failed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AccountService::new(db);
    let envelope = service.update("999", body(json!({ "role": "admin" }))).await;

    assert!(envelope.error);
    assert_eq!(envelope.status_code, 500);
    assert_eq!(envelope.message.as_deref(), Some("Update failed"));
    assert!(envelope.errors.is_none());

    Ok(())
}

/// Tests a malformed identifier.
///
/// Expected: 500 envelope with errors set
#[tokio::test]
async fn malformed_id_is_500_envelope() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AccountService::new(db);
    let envelope = service.update("abc", Map::new()).await;

    assert_eq!(envelope.status_code, 500);
    assert!(envelope.errors.is_some());

    Ok(())
}
