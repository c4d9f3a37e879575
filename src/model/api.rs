use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every failed response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
}

/// Envelope of every successful response: `{"data": ..., "status": "success"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DataDto<T> {
    pub data: T,
    pub status: ResponseStatus,
}

impl<T> DataDto<T> {
    pub fn success(data: T) -> Self {
        Self {
            data,
            status: ResponseStatus::Success,
        }
    }
}

/// Response of the logging diagnostics endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LogTestDto {
    pub message: String,
    pub timestamp: String,
}
