//! Bird domain model and write parameters.
//!
//! `Bird` is converted from the entity at the repository boundary and into a
//! `BirdDto` at the controller boundary. `BirdParams` is the validated form of
//! a create or update payload.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::{
    model::bird::BirdDto,
    server::error::validation::{FieldViolation, ValidationError},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub id: String,
    pub name: String,
    pub breed: String,
    pub age: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bird {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::bird::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            breed: entity.breed,
            age: entity.age,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> BirdDto {
        BirdDto {
            id: self.id,
            name: self.name,
            breed: self.breed,
            age: self.age,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Client-settable bird fields.
///
/// Updates replace all three fields wholesale, so create and update share
/// this type and its validation.
#[derive(Debug, Clone, PartialEq)]
pub struct BirdParams {
    pub name: String,
    pub breed: String,
    pub age: f64,
}

impl BirdParams {
    /// Validates a raw JSON payload.
    ///
    /// Unknown fields, including `id` and the timestamps, are ignored. Every
    /// violation is collected so the error names all offending fields at once.
    ///
    /// # Returns
    /// - `Ok(BirdParams)` - `name` and `breed` are non-empty strings and `age` is a number
    /// - `Err(ValidationError)` - One or more fields missing or of the wrong type
    pub fn from_json(input: &Value) -> Result<Self, ValidationError> {
        let Some(object) = input.as_object() else {
            return Err(ValidationError {
                violations: vec![FieldViolation::NotAnObject],
            });
        };

        let mut violations = Vec::new();
        let name = required_text(object, "name", &mut violations);
        let breed = required_text(object, "breed", &mut violations);
        let age = required_number(object, "age", &mut violations);

        match (name, breed, age) {
            (Some(name), Some(breed), Some(age)) if violations.is_empty() => {
                Ok(Self { name, breed, age })
            }
            _ => Err(ValidationError { violations }),
        }
    }
}

fn required_text(
    object: &Map<String, Value>,
    field: &'static str,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    match object.get(field) {
        None | Some(Value::Null) => {
            violations.push(FieldViolation::Missing { field });
            None
        }
        Some(Value::String(text)) if text.is_empty() => {
            violations.push(FieldViolation::Empty { field });
            None
        }
        Some(Value::String(text)) => Some(text.clone()),
        Some(_) => {
            violations.push(FieldViolation::InvalidType {
                field,
                expected: "string",
            });
            None
        }
    }
}

fn required_number(
    object: &Map<String, Value>,
    field: &'static str,
    violations: &mut Vec<FieldViolation>,
) -> Option<f64> {
    match object.get(field) {
        None | Some(Value::Null) => {
            violations.push(FieldViolation::Missing { field });
            None
        }
        Some(Value::Number(number)) => number.as_f64(),
        Some(_) => {
            violations.push(FieldViolation::InvalidType {
                field,
                expected: "number",
            });
            None
        }
    }
}
