//! Server-side API backend.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Observability envelope around each store operation
//! - **Data Layer** (`data/`) - Database operations, payload validation and entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models, write parameters and object ids
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Observability** (`observability/`) - Log sinks, APM sender and segment spans
//! - **State** (`state`) - Shared application state (DB, APM client)
//! - **Startup** (`startup`) - Database connection, migrations and API document loading
//! - **Router** (`router`) - Route table, Swagger UI and middleware
//! - **Doc** (`doc`) - OpenAPI document generated from handler annotations
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to the controller
//! 2. **Controller** logs the attempt and calls the service
//! 3. **Service** opens a segment, logs the input, calls the repository
//! 4. **Data** validates the payload, queries the database, converts entities to domain models
//! 5. **Service** logs the outcome and returns the result unchanged
//! 6. **Controller** maps `None` to 404, errors to their status, success to the data envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod doc;
pub mod error;
pub mod model;
pub mod observability;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
