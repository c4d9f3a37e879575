use thiserror::Error;

/// A single rule broken by a bird payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldViolation {
    /// The request body is valid JSON but not an object.
    #[error("body: must be a JSON object")]
    NotAnObject,

    /// Field is absent or `null`.
    #[error("{field}: is required")]
    Missing { field: &'static str },

    /// Field is present with the wrong JSON type.
    #[error("{field}: must be a {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    /// Text field is present but empty.
    #[error("{field}: must not be empty")]
    Empty { field: &'static str },
}

/// Rejected bird payload, carrying every violation found in one pass.
///
/// Surfaces to clients as a 500 Internal Server Error with the display
/// message as the error body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Bird validation failed: {}", join_violations(.violations))]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
