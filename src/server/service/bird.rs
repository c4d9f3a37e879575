use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::server::{
    data::bird::BirdRepository, error::AppError, model::bird::Bird, observability::segment,
};

/// Wraps every repository call in a `BirdService.<operation>` segment with
/// log events before and after the call.
///
/// Errors are logged here and returned unchanged for the controller to map.
pub struct BirdService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BirdService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Bird>, AppError> {
        segment("BirdService.get_all", async {
            tracing::info!("Fetching all birds");

            let result = BirdRepository::new(self.db).get_all().await;

            match &result {
                Ok(birds) => tracing::info!(count = birds.len(), "Fetched all birds"),
                Err(e) => tracing::error!(error = %e, details = ?e, "Failed to fetch birds"),
            }

            result
        })
        .await
    }

    pub async fn create(&self, input: &Value) -> Result<Bird, AppError> {
        segment("BirdService.create", async {
            tracing::info!(bird_data = %input, "Creating bird");

            let result = BirdRepository::new(self.db).create(input).await;

            match &result {
                Ok(bird) => tracing::info!(bird_id = %bird.id, "Bird created"),
                Err(e) => tracing::error!(
                    bird_data = %input,
                    error = %e,
                    details = ?e,
                    "Failed to create bird"
                ),
            }

            result
        })
        .await
    }

    /// Gets a bird by id; a malformed id is treated as unknown.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Bird>, AppError> {
        segment("BirdService.get_by_id", async {
            tracing::info!(bird_id = %id, "Fetching bird");

            let result = BirdRepository::new(self.db).get_by_id(id).await;

            match &result {
                Ok(Some(_)) => tracing::info!(bird_id = %id, "Bird fetched"),
                Ok(None) => tracing::warn!(bird_id = %id, "Bird not found"),
                Err(e) => tracing::error!(
                    bird_id = %id,
                    error = %e,
                    details = ?e,
                    "Failed to fetch bird"
                ),
            }

            result
        })
        .await
    }

    pub async fn update(&self, id: &str, input: &Value) -> Result<Option<Bird>, AppError> {
        segment("BirdService.update", async {
            tracing::info!(bird_id = %id, bird_data = %input, "Updating bird");

            let result = BirdRepository::new(self.db).update(id, input).await;

            match &result {
                Ok(Some(_)) => tracing::info!(bird_id = %id, "Bird updated"),
                Ok(None) => tracing::warn!(bird_id = %id, "Bird not found for update"),
                Err(e) => tracing::error!(
                    bird_id = %id,
                    bird_data = %input,
                    error = %e,
                    details = ?e,
                    "Failed to update bird"
                ),
            }

            result
        })
        .await
    }

    /// Deletes a bird and returns the removed record.
    pub async fn delete(&self, id: &str) -> Result<Option<Bird>, AppError> {
        segment("BirdService.delete", async {
            tracing::info!(bird_id = %id, "Deleting bird");

            let result = BirdRepository::new(self.db).delete(id).await;

            match &result {
                Ok(Some(_)) => tracing::info!(bird_id = %id, "Bird deleted"),
                Ok(None) => tracing::warn!(bird_id = %id, "Bird not found for deletion"),
                Err(e) => tracing::error!(
                    bird_id = %id,
                    error = %e,
                    details = ?e,
                    "Failed to delete bird"
                ),
            }

            result
        })
        .await
    }
}
