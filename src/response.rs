//! Standard response envelope helpers.

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

/// `{ success, message, data? }` wrapper used by every API response.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn failure(message: impl Into<String>) -> Self {
        Envelope {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

pub type EnvelopeResponse<T> = (StatusCode, Json<Envelope<T>>);

pub fn success_one<T: Serialize>(message: impl Into<String>, data: T) -> EnvelopeResponse<T> {
    (
        StatusCode::OK,
        Json(Envelope {
            success: true,
            message: message.into(),
            data: Some(data),
        }),
    )
}

pub fn success_created<T: Serialize>(message: impl Into<String>, data: T) -> EnvelopeResponse<T> {
    let (_, body) = success_one(message, data);
    (StatusCode::CREATED, body)
}

/// List response. An empty list is still a success, only the message changes.
pub fn success_many<T: Serialize>(message: impl Into<String>, data: Vec<T>) -> EnvelopeResponse<Vec<T>> {
    let message = if data.is_empty() {
        "List is empty".to_string()
    } else {
        message.into()
    };
    success_one(message, data)
}

pub fn success_message(message: impl Into<String>) -> EnvelopeResponse<()> {
    (
        StatusCode::OK,
        Json(Envelope {
            success: true,
            message: message.into(),
            data: None,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_is_success() {
        let (status, Json(body)) = success_many::<u8>("List all table", Vec::new());
        assert_eq!(status, StatusCode::OK);
        assert!(body.success);
        assert_eq!(body.message, "List is empty");
        assert_eq!(body.data, Some(Vec::new()));
    }

    #[test]
    fn failure_omits_data() {
        let body: Envelope<()> = Envelope::failure("No content");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "success": false, "message": "No content" }));
    }
}
