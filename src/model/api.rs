use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON error body returned by every API route.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// Stable machine-readable error code, e.g. `forbidden`.
    pub code: String,
    /// Human-readable message safe to show to the user.
    pub error: String,
}

impl ErrorDto {
    pub fn new(code: &str, error: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            error: error.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SuccessDto {
    pub success: bool,
}
