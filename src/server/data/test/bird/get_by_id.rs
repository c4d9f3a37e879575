use super::*;

/// Tests getting a seeded bird by ID.
///
/// Expected: Ok(Some(Bird)) matching the stored row
#[tokio::test]
async fn gets_existing_bird() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db();

    let seeded = factory::bird::BirdFactory::new(db)
        .name("Heron")
        .breed("Wader")
        .age(7.0)
        .build()
        .await?;

    let repo = BirdRepository::new(db);
    let bird = repo.get_by_id(&seeded.id).await?;

    assert_eq!(bird, Some(Bird::from_entity(seeded)));

    Ok(())
}

/// Tests getting a bird with a well-formed but unknown ID.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db();

    factory::create_bird(db).await?;

    let repo = BirdRepository::new(db);

    assert_eq!(repo.get_by_id(UNKNOWN_ID).await?, None);

    Ok(())
}

/// Tests getting a bird with a malformed ID.
///
/// Verifies that malformed ids never reach the database, so even a missing
/// table does not produce an error.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_malformed_id() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db();

    let repo = BirdRepository::new(db);

    assert_eq!(repo.get_by_id("not-an-id").await?, None);

    Ok(())
}

/// Tests that uppercase hex ids resolve to the stored lowercase id.
///
/// Expected: Ok(Some(Bird))
#[tokio::test]
async fn matches_ids_case_insensitively() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db();

    let seeded = factory::bird::BirdFactory::new(db)
        .id("00000000000000000000abcd")
        .build()
        .await?;

    let repo = BirdRepository::new(db);
    let bird = repo.get_by_id("00000000000000000000ABCD").await?;

    assert_eq!(bird.map(|b| b.id), Some(seeded.id));

    Ok(())
}
