//! Bird data repository for database operations.
//!
//! This module provides the `BirdRepository` for managing bird records. It validates
//! write payloads, assigns object ids and timestamps, and converts entity models to
//! domain models at the infrastructure boundary.

use chrono::{DateTime, SubsecRound, TimeDelta, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};
use serde_json::Value;

use crate::server::{
    error::AppError,
    model::{
        bird::{Bird, BirdParams},
        object_id::ObjectId,
    },
};

/// Repository providing database operations for bird records.
///
/// Lookups by id never fail on a malformed id: anything that is not a 24
/// character hex object id simply matches nothing.
pub struct BirdRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BirdRepository<'a> {
    /// Creates a new BirdRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every bird in the store.
    ///
    /// No ordering is guaranteed.
    ///
    /// # Returns
    /// - `Ok(Vec<Bird>)` - All birds, empty when the store is empty
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Bird>, AppError> {
        let entities = entity::prelude::Bird::find().all(self.db).await?;

        Ok(entities.into_iter().map(Bird::from_entity).collect())
    }

    /// Validates the payload and inserts a new bird.
    ///
    /// Assigns a fresh object id and sets `created_at` and `updated_at` to the
    /// same millisecond-precision instant.
    ///
    /// # Arguments
    /// - `input` - Raw JSON payload with `name`, `breed` and `age`
    ///
    /// # Returns
    /// - `Ok(Bird)` - The stored bird including id and timestamps
    /// - `Err(AppError::Validation)` - Payload failed field validation
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, input: &Value) -> Result<Bird, AppError> {
        let params = BirdParams::from_json(input)?;
        let now = Utc::now().trunc_subsecs(3);

        let entity = entity::bird::ActiveModel {
            id: ActiveValue::Set(ObjectId::new().to_string()),
            name: ActiveValue::Set(params.name),
            breed: ActiveValue::Set(params.breed),
            age: ActiveValue::Set(params.age),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Bird::from_entity(entity))
    }

    /// Finds a bird by its object id.
    ///
    /// # Returns
    /// - `Ok(Some(Bird))` - Bird found
    /// - `Ok(None)` - Malformed id or no bird with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Bird>, AppError> {
        Ok(self.find_entity(id).await?.map(Bird::from_entity))
    }

    /// Replaces a bird's client fields and refreshes `updated_at`.
    ///
    /// The lookup happens before validation, so an unknown id reports not found
    /// even when the payload is also invalid.
    ///
    /// # Returns
    /// - `Ok(Some(Bird))` - The bird after the update
    /// - `Ok(None)` - Malformed id or no bird with that id
    /// - `Err(AppError::Validation)` - Payload failed field validation
    /// - `Err(AppError::DbErr)` - Database error during query or update
    pub async fn update(&self, id: &str, input: &Value) -> Result<Option<Bird>, AppError> {
        let Some(existing) = self.find_entity(id).await? else {
            return Ok(None);
        };

        let params = BirdParams::from_json(input)?;
        let updated_at = next_updated_at(existing.updated_at);

        let mut active: entity::bird::ActiveModel = existing.into();
        active.name = ActiveValue::Set(params.name);
        active.breed = ActiveValue::Set(params.breed);
        active.age = ActiveValue::Set(params.age);
        active.updated_at = ActiveValue::Set(updated_at);

        match active.update(self.db).await {
            Ok(entity) => Ok(Some(Bird::from_entity(entity))),
            // Deleted between the lookup and the update
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Deletes a bird and returns its last stored value.
    ///
    /// # Returns
    /// - `Ok(Some(Bird))` - The deleted bird
    /// - `Ok(None)` - Malformed id or no bird with that id
    /// - `Err(AppError::DbErr)` - Database error during query or delete
    pub async fn delete(&self, id: &str) -> Result<Option<Bird>, AppError> {
        let Some(existing) = self.find_entity(id).await? else {
            return Ok(None);
        };

        let result = entity::prelude::Bird::delete_by_id(existing.id.clone())
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(Bird::from_entity(existing)))
    }

    async fn find_entity(&self, id: &str) -> Result<Option<entity::bird::Model>, DbErr> {
        let Some(object_id) = ObjectId::parse(id) else {
            return Ok(None);
        };

        entity::prelude::Bird::find_by_id(object_id.to_string())
            .one(self.db)
            .await
    }
}

/// Current time, forced at least one millisecond past `previous` so that
/// `updated_at` strictly increases even within the same millisecond.
fn next_updated_at(previous: DateTime<Utc>) -> DateTime<Utc> {
    let floor = previous.trunc_subsecs(3) + TimeDelta::milliseconds(1);
    Utc::now().trunc_subsecs(3).max(floor)
}
