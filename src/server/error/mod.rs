//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum serves as the single
//! error type crossing the repository, service and controller layers, and implements
//! `IntoResponse` so controllers can return it directly.

pub mod config;
pub mod validation;

use axum::{http::StatusCode, response::IntoResponse, Json};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, validation::ValidationError},
};

/// Top-level application error type.
///
/// Every variant except `NotFound` maps to 500 Internal Server Error. Unlike a
/// typical public API the error message is returned to the client verbatim, so
/// a failed insert reads the same over HTTP as it does in the logs.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Covers an unreachable database as well as any driver failure.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Bird payload failed field validation on create or update.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Filesystem or socket error, raised during startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Static API document could not be parsed.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// Global tracing subscriber was already installed.
    #[error(transparent)]
    LoggingErr(#[from] tracing_subscriber::util::TryInitError),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For all other variants, with the error message as body
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
