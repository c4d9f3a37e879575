use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

/// Largest integer an `f64` represents exactly (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Bird as exposed over the HTTP API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BirdDto {
    /// 24 character hex object id.
    #[schema(example = "652f1c2e9b1d4a0001a1b2c3")]
    pub id: String,
    #[schema(example = "Robin")]
    pub name: String,
    #[schema(example = "Passerine")]
    pub breed: String,
    #[serde(serialize_with = "serialize_age")]
    #[schema(example = 1)]
    pub age: f64,
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "serialize_timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// Request body accepted by the create and update endpoints.
///
/// Only used for API documentation; the controllers take raw JSON so that
/// field validation happens in the repository.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BirdInputDto {
    #[schema(example = "Robin")]
    pub name: String,
    #[schema(example = "Passerine")]
    pub breed: String,
    #[schema(example = 1)]
    pub age: f64,
}

/// Whole-number ages are written as JSON integers (`1`, not `1.0`).
fn serialize_age<S>(age: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if age.fract() == 0.0 && age.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*age as i64)
    } else {
        serializer.serialize_f64(*age)
    }
}

/// ISO 8601 with millisecond precision and a `Z` suffix.
fn serialize_timestamp<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
}
