use std::path::Path;

use sea_orm::DatabaseConnection;
use utoipa::OpenApi as _;

use crate::server::{config::Config, doc::ApiDoc, error::AppError};

/// Opens a lazy connection pool and runs pending migrations.
///
/// The pool connects on first use, so an unreachable database does not stop
/// startup. A failed migration is logged and the server starts anyway; requests
/// then fail with 500 until the database is reachable.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Pool handle, migrated if the database was reachable
/// - `Err(AppError::DbErr)` - The database URL could not be parsed
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false).connect_lazy(true);

    let db = Database::connect(opt).await?;

    match Migrator::up(&db, None).await {
        Ok(()) => tracing::info!("Database migrations applied"),
        Err(e) => tracing::error!(error = %e, details = ?e, "Database migration failed"),
    }

    Ok(db)
}

/// Loads the static OpenAPI document served by Swagger UI.
///
/// Falls back to the document generated from the handler annotations when the
/// file cannot be read or parsed.
pub fn load_api_doc(path: &Path) -> utoipa::openapi::OpenApi {
    match read_api_doc(path) {
        Ok(doc) => {
            tracing::info!(path = %path.display(), "Loaded API document");
            doc
        }
        Err(e) => {
            tracing::error!(
                path = %path.display(),
                error = %e,
                "Failed to load API document, serving generated document"
            );
            ApiDoc::openapi()
        }
    }
}

fn read_api_doc(path: &Path) -> Result<utoipa::openapi::OpenApi, AppError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
