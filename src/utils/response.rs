use serde::Serialize;
use utoipa::ToSchema;

/// Success envelope shared by every endpoint:
/// `{ "success": true, "message": ..., "data": ... }`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn data_envelope() {
        let body = serde_json::to_value(ApiResponse::data(json!({"a": 1}))).unwrap();
        assert_eq!(body, json!({"success": true, "data": {"a": 1}}));
    }

    #[test]
    fn message_only_envelope() {
        let body = serde_json::to_value(ApiResponse::message("Done")).unwrap();
        assert_eq!(body, json!({"success": true, "message": "Done"}));
    }
}
