use super::*;

/// Tests creating a bird from a complete payload.
///
/// Verifies that the repository assigns a 24 character id and identical
/// creation and update timestamps.
///
/// Expected: Ok(Bird)
#[tokio::test]
async fn creates_bird_with_generated_id_and_timestamps() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db();

    let repo = BirdRepository::new(db);
    let bird = repo
        .create(&json!({ "name": "Robin", "breed": "Passerine", "age": 1 }))
        .await?;

    assert_eq!(bird.id.len(), 24);
    assert_eq!(bird.name, "Robin");
    assert_eq!(bird.breed, "Passerine");
    assert_eq!(bird.age, 1.0);
    assert_eq!(bird.created_at, bird.updated_at);

    Ok(())
}

/// Tests that a created bird reads back unchanged.
///
/// Expected: get_by_id returns a record equal to the creation result
#[tokio::test]
async fn created_bird_reads_back_equal() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db();

    let repo = BirdRepository::new(db);
    let created = repo
        .create(&json!({ "name": "Kestrel", "breed": "Falcon", "age": 4.5 }))
        .await?;

    let fetched = repo.get_by_id(&created.id).await?;

    assert_eq!(fetched, Some(created));

    Ok(())
}

/// Tests that client-supplied ids and timestamps are ignored.
///
/// Expected: Ok(Bird) with server-assigned values
#[tokio::test]
async fn ignores_client_supplied_server_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db();

    let repo = BirdRepository::new(db);
    let bird = repo
        .create(&json!({
            "id": "000000000000000000000001",
            "name": "Robin",
            "breed": "Passerine",
            "age": 1,
            "createdAt": "1999-01-01T00:00:00.000Z"
        }))
        .await?;

    assert_ne!(bird.id, "000000000000000000000001");
    assert!(bird.created_at.timestamp() > 946_684_800);

    Ok(())
}

/// Tests creating a bird with missing fields.
///
/// Verifies that nothing is stored when validation fails.
///
/// Expected: Err(AppError::Validation)
#[tokio::test]
async fn fails_validation_without_storing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db();

    let repo = BirdRepository::new(db);
    let result = repo.create(&json!({ "name": "Robin" })).await;

    match result {
        Err(AppError::Validation(err)) => assert_eq!(
            err.violations,
            vec![
                FieldViolation::Missing { field: "breed" },
                FieldViolation::Missing { field: "age" },
            ]
        ),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}

/// Tests creating a bird when the table does not exist.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn fails_when_store_is_unavailable() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db();

    let repo = BirdRepository::new(db);
    let result = repo
        .create(&json!({ "name": "Robin", "breed": "Passerine", "age": 1 }))
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
