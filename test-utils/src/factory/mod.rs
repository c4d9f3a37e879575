//! Direct inserts for seeding test state.
//!
//! ```rust,ignore
//! let seeded = factory::create_bird(test.db()).await?;
//!
//! let heron = factory::bird::BirdFactory::new(test.db())
//!     .name("Heron")
//!     .breed("Wader")
//!     .age(7.0)
//!     .build()
//!     .await?;
//! ```

pub mod bird;
pub mod helpers;

pub use bird::{create_bird, create_birds};
