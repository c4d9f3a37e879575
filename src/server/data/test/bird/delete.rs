use super::*;

/// Tests deleting an existing bird.
///
/// Verifies that the deleted record is returned and no longer found.
///
/// Expected: Ok(Some(Bird)), then get_by_id returns Ok(None)
#[tokio::test]
async fn deletes_and_returns_last_value() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db();

    let seeded = factory::create_bird(db).await?;

    let repo = BirdRepository::new(db);
    let deleted = repo.delete(&seeded.id).await?;

    assert_eq!(deleted, Some(Bird::from_entity(seeded.clone())));
    assert_eq!(repo.get_by_id(&seeded.id).await?, None);

    Ok(())
}

/// Tests that deleting only removes the targeted bird.
///
/// Expected: remaining birds are untouched
#[tokio::test]
async fn leaves_other_birds_in_place() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db();

    let seeded = factory::create_birds(db, 3).await?;

    let repo = BirdRepository::new(db);
    repo.delete(&seeded[0].id).await?;

    assert_eq!(repo.get_all().await?.len(), 2);

    Ok(())
}

/// Tests deleting the same bird twice.
///
/// Expected: second delete returns Ok(None)
#[tokio::test]
async fn second_delete_returns_none() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db();

    let seeded = factory::create_bird(db).await?;

    let repo = BirdRepository::new(db);
    assert!(repo.delete(&seeded.id).await?.is_some());
    assert_eq!(repo.delete(&seeded.id).await?, None);

    Ok(())
}

/// Tests deleting with malformed and unknown IDs.
///
/// Expected: Ok(None) for both
#[tokio::test]
async fn returns_none_for_missing_bird() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db();

    let repo = BirdRepository::new(db);

    assert_eq!(repo.delete(UNKNOWN_ID).await?, None);
    assert_eq!(repo.delete("12345").await?, None);

    Ok(())
}
