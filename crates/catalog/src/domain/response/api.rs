use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ApiResponse<T> {
    pub status: bool,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            status: true,
            message: message.into(),
            data,
        }
    }
}

/// Collection reads carry the element count alongside the data.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ApiResponseList<T> {
    pub status: bool,
    pub message: String,
    pub total: i64,
    pub data: T,
}

impl<T> ApiResponseList<T> {
    pub fn ok(message: impl Into<String>, total: i64, data: T) -> Self {
        Self {
            status: true,
            message: message.into(),
            total,
            data,
        }
    }
}

/// Success without a payload, used by product deletion.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct MessageResponse {
    pub status: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: true,
            message: message.into(),
        }
    }
}
