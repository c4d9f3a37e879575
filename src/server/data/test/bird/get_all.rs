use super::*;

/// Tests listing birds on an empty store.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_list_for_empty_store() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db();

    let repo = BirdRepository::new(db);
    let birds = repo.get_all().await?;

    assert!(birds.is_empty());

    Ok(())
}

/// Tests listing birds after several creations.
///
/// Verifies that exactly the created birds are returned, in any order.
///
/// Expected: Ok(Vec) with N birds
#[tokio::test]
async fn returns_every_created_bird() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db();

    let seeded = factory::create_birds(db, 5).await?;

    let repo = BirdRepository::new(db);
    let mut ids: Vec<String> = repo.get_all().await?.into_iter().map(|b| b.id).collect();
    let mut expected: Vec<String> = seeded.into_iter().map(|b| b.id).collect();
    ids.sort();
    expected.sort();

    assert_eq!(ids, expected);

    Ok(())
}

/// Tests listing birds seeded by the test builder.
///
/// Expected: Ok with exactly the seeded count
#[tokio::test]
async fn returns_builder_seeded_birds() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bird_tables()
        .with_birds(4)
        .build()
        .await
        .unwrap();

    let birds = BirdRepository::new(test.db()).get_all().await?;

    assert_eq!(birds.len(), 4);

    Ok(())
}
