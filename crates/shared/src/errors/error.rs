use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Failure envelope shared by every boolean-status route. `error` carries
/// the underlying store failure when one exists and is omitted otherwise.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub status: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
