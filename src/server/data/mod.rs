//! Database repository layer.
//!
//! Repositories handle database operations (CRUD) for each domain. They use SeaORM
//! entity models internally and return domain models so the service layer never
//! sees database types.

pub mod bird;

#[cfg(test)]
mod test;
