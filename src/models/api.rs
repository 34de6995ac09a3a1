use serde::{Deserialize, Serialize};
use validator::Validate;

/// 邀请请求体
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct InviteRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "channel_id is required"))]
    pub channel_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InviteResponse {
    pub success: bool,
    pub message: String,
}

impl InviteResponse {
    pub fn invited(email: &str, channel_id: &str) -> Self {
        Self {
            success: true,
            message: format!("Successfully invited {} to channel {}", email, channel_id),
        }
    }
}

// 统一错误响应结构
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}
