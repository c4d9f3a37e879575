//! SeaORM entity definitions for the bird store.

pub mod prelude;

pub mod bird;
