//! Test support for the bird service.
//!
//! - `builder::TestBuilder` sets up an in-memory SQLite database with tables
//!   and optional seed birds
//! - `context::TestContext` owns that database for the length of a test
//! - `factory` inserts birds directly, bypassing the repository under test
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn lists_seeded_birds() -> Result<(), AppError> {
//!     let test = TestBuilder::new().with_bird_tables().with_birds(2).build().await.unwrap();
//!
//!     let birds = BirdRepository::new(test.db()).get_all().await?;
//!     assert_eq!(birds.len(), 2);
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
