//! Service layer between the controllers and the repositories.
//!
//! Services own the observability envelope of each operation: a named segment,
//! a log event with the operation input, and a log event with its outcome.
//! They hold no business rules of their own.

pub mod bird;
