use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response envelope wrapping every successful API payload.
///
/// Serializes as `{"status": "success", "message": ..., "data": ...}`; `data`
/// is omitted for message-only responses such as logout.
#[derive(Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Wraps a payload in a success envelope.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "success",
            message: message.into(),
            data: Some(data),
        }
    }

    /// Builds a success envelope with no payload.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: message.into(),
            data: None,
        }
    }
}

/// Error body returned for every failed request.
///
/// `status` is `"fail"` for 4xx responses and `"error"` for 5xx responses,
/// mirroring the success envelope shape minus the payload.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub status: String,
    pub message: String,
}

impl ErrorDto {
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: "fail".to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}
