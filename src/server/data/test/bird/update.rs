use super::*;

/// Tests updating a bird with a complete payload.
///
/// Verifies that all client fields are replaced, the id and creation time are
/// kept, and `updated_at` moves strictly past `created_at`.
///
/// Expected: Ok(Some(Bird))
#[tokio::test]
async fn replaces_fields_and_refreshes_updated_at() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db();

    let repo = BirdRepository::new(db);
    let created = repo
        .create(&json!({ "name": "Robin", "breed": "Passerine", "age": 1 }))
        .await?;

    let updated = repo
        .update(
            &created.id,
            &json!({ "name": "Robin2", "breed": "Thrush", "age": 2 }),
        )
        .await?
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Robin2");
    assert_eq!(updated.breed, "Thrush");
    assert_eq!(updated.age, 2.0);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > updated.created_at);

    Ok(())
}

/// Tests that an update is visible to subsequent reads.
///
/// Expected: get_by_id returns the updated record
#[tokio::test]
async fn update_is_visible_to_reads() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db();

    let seeded = factory::create_bird(db).await?;

    let repo = BirdRepository::new(db);
    let updated = repo
        .update(
            &seeded.id,
            &json!({ "name": "Wren", "breed": "Passerine", "age": 3 }),
        )
        .await?;
    let fetched = repo.get_by_id(&seeded.id).await?;

    assert!(updated.is_some());
    assert_eq!(fetched, updated);

    Ok(())
}

/// Tests that repeated updates keep moving `updated_at` forward.
///
/// Expected: each update's timestamp is strictly greater than the previous one
#[tokio::test]
async fn consecutive_updates_strictly_increase_updated_at() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db();

    let seeded = factory::create_bird(db).await?;
    let payload = json!({ "name": "Wren", "breed": "Passerine", "age": 3 });

    let repo = BirdRepository::new(db);
    let first = repo.update(&seeded.id, &payload).await?.unwrap();
    let second = repo.update(&seeded.id, &payload).await?.unwrap();

    assert!(first.updated_at > seeded.updated_at);
    assert!(second.updated_at > first.updated_at);

    Ok(())
}

/// Tests updating a bird that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db();

    let repo = BirdRepository::new(db);
    let result = repo
        .update(
            UNKNOWN_ID,
            &json!({ "name": "Robin", "breed": "Passerine", "age": 1 }),
        )
        .await?;

    assert_eq!(result, None);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}

/// Tests updating an existing bird with an invalid payload.
///
/// Verifies that the stored record is left untouched.
///
/// Expected: Err(AppError::Validation)
#[tokio::test]
async fn fails_validation_and_keeps_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db();

    let seeded = factory::create_bird(db).await?;

    let repo = BirdRepository::new(db);
    let result = repo
        .update(&seeded.id, &json!({ "name": "", "breed": "Passerine", "age": 1 }))
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(
        repo.get_by_id(&seeded.id).await?,
        Some(Bird::from_entity(seeded))
    );

    Ok(())
}
