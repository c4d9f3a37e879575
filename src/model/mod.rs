//! Wire-level DTOs shared by the HTTP layer and its tests.

pub mod api;
pub mod bird;
