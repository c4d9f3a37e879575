//! Bird factory for creating test bird entities.

use crate::factory::helpers::{next_id, next_object_id};
use chrono::{SubsecRound, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test birds with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::bird::BirdFactory;
///
/// let bird = BirdFactory::new(&db)
///     .name("Robin")
///     .age(2.0)
///     .build()
///     .await?;
/// ```
pub struct BirdFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    breed: String,
    age: f64,
}

impl<'a> BirdFactory<'a> {
    /// Creates a new BirdFactory with default values.
    ///
    /// Defaults:
    /// - id: counter-derived 24 character hex object id
    /// - name: `"Bird {n}"`
    /// - breed: `"Test breed"`
    /// - age: `1.0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: next_object_id(),
            name: format!("Bird {}", n),
            breed: "Test breed".to_string(),
            age: 1.0,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = breed.into();
        self
    }

    pub fn age(mut self, age: f64) -> Self {
        self.age = age;
        self
    }

    /// Inserts the bird with identical millisecond-precision `created_at` and
    /// `updated_at` stamps.
    ///
    /// # Returns
    /// - `Ok(entity::bird::Model)` - The inserted row
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::bird::Model, DbErr> {
        let now = Utc::now().trunc_subsecs(3);

        entity::bird::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            breed: ActiveValue::Set(self.breed),
            age: ActiveValue::Set(self.age),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a bird with default values.
pub async fn create_bird(db: &DatabaseConnection) -> Result<entity::bird::Model, DbErr> {
    BirdFactory::new(db).build().await
}

/// Creates `count` birds with default values.
pub async fn create_birds(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<entity::bird::Model>, DbErr> {
    let mut birds = Vec::with_capacity(count);
    for _ in 0..count {
        birds.push(create_bird(db).await?);
    }
    Ok(birds)
}
