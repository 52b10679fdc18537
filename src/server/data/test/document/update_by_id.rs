use super::*;

async fn seed_device(db: &DatabaseConnection) -> Result<entity::document::Model, DbErr> {
    factory::document::DocumentFactory::new(db, "device")
        .field("name", "Ventilator")
        .field("status", "idle")
        .field("deviceUsingHistory", json!([{ "patient": "p-0" }]))
        .build()
        .await
}

/// Tests overwriting fields while keeping the rest of the body.
///
/// Expected: Ok(Some(Record)) with the new status and the original name
#[tokio::test]
async fn overwrites_named_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let device = seed_device(db).await?;

    let repo = DocumentRepository::new(db, "device");
    let updated = repo
        .update_by_id(UpdateRecordParams {
            id: RecordId(device.id),
            set: body(json!({ "status": "in-use" })),
            append: None,
        })
        .await?
        .expect("record should exist");

    assert_eq!(updated.fields["status"], "in-use");
    assert_eq!(updated.fields["name"], "Ventilator");
    assert_eq!(
        updated.fields["deviceUsingHistory"],
        json!([{ "patient": "p-0" }])
    );
    assert!(updated.updated_at >= device.updated_at);
    assert_eq!(updated.created_at, device.created_at);

    Ok(())
}

/// Tests pushing an array value as a single history element.
///
/// Expected: Ok(Some(Record)) whose history gained exactly one element, the array itself
#[tokio::test]
async fn appends_entry_as_single_element() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let device = seed_device(db).await?;

    let repo = DocumentRepository::new(db, "device");
    let updated = repo
        .update_by_id(UpdateRecordParams {
            id: RecordId(device.id),
            set: Map::new(),
            append: Some(HistoryAppend {
                field: "deviceUsingHistory",
                entry: json!([{ "patient": "p-1" }, { "patient": "p-2" }]),
            }),
        })
        .await?
        .expect("record should exist");

    assert_eq!(
        updated.fields["deviceUsingHistory"],
        json!([
            { "patient": "p-0" },
            [{ "patient": "p-1" }, { "patient": "p-2" }]
        ])
    );

    Ok(())
}

/// Tests that pushing onto a body without the array creates it.
///
/// Expected: Ok(Some(Record)) with a one-element history
#[tokio::test]
async fn creates_missing_history_array() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let device = factory::document::DocumentFactory::new(db, "device")
        .build()
        .await?;

    let repo = DocumentRepository::new(db, "device");
    let updated = repo
        .update_by_id(UpdateRecordParams {
            id: RecordId(device.id),
            set: Map::new(),
            append: Some(HistoryAppend {
                field: "deviceUsingHistory",
                entry: json!([]),
            }),
        })
        .await?
        .expect("record should exist");

    assert_eq!(updated.fields["deviceUsingHistory"], json!([[]]));

    Ok(())
}

/// Tests pushing onto a field that holds a non-array value.
///
/// Expected: Err(DbErr::Custom) and the stored record unchanged
#[tokio::test]
async fn rejects_push_onto_non_array() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let device = factory::document::DocumentFactory::new(db, "device")
        .field("deviceUsingHistory", "corrupt")
        .build()
        .await?;

    let repo = DocumentRepository::new(db, "device");
    let result = repo
        .update_by_id(UpdateRecordParams {
            id: RecordId(device.id),
            set: body(json!({ "status": "changed" })),
            append: Some(HistoryAppend {
                field: "deviceUsingHistory",
                entry: json!([]),
            }),
        })
        .await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    let stored = repo.find_by_id(RecordId(device.id)).await?.unwrap();
    assert!(stored.fields.get("status").is_none());

    Ok(())
}

/// Tests updating a missing record.
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
    let result = repo
        .update_by_id(UpdateRecordParams {
            id: RecordId(404),
            set: body(json!({ "status": "x" })),
            append: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
