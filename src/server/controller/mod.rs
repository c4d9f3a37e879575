//! HTTP request handlers.
//!
//! Controllers call the service layer and own the mapping to HTTP: a `None`
//! result becomes 404, any error becomes its `AppError` response, and success
//! is wrapped in the `{"data": ..., "status": "success"}` envelope.

pub mod bird;
pub mod diagnostics;

#[cfg(test)]
mod test;
