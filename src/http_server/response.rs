//! Success envelope shared by several routes

use serde::Serialize;

/// `{success: true, message}`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_response_shape() {
        let value = serde_json::to_value(MessageResponse::ok("done")).unwrap();
        assert_eq!(value, serde_json::json!({"success": true, "message": "done"}));
    }
}
