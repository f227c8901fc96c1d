use crate::app::message_service::MessageService;
use crate::domain::{Message, MessageId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<MessageService>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(service: Arc<MessageService>) -> Self {
        Self {
            service,
            started_at: Utc::now(),
        }
    }
}

/// Envelope used for health output and for every error response.
#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct CreateMessageRequest {
    /// Message text. Any string, including the empty string.
    pub text: String,
}

/// Same shape as `CreateMessageRequest`; the whole text is replaced.
#[derive(Deserialize, Debug, ToSchema)]
pub struct UpdateMessageRequest {
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct CreateMessageResponse {
    pub id: MessageId,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct MessageView {
    pub id: MessageId,
    pub text: String,
    /// `null` while the classification for the current text is pending.
    pub is_palindrome: Option<bool>,
}

impl From<Message> for MessageView {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            text: message.text,
            is_palindrome: message.classification.as_verdict(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct MessageListResponse {
    /// Sorted by ascending id. Always an array, possibly empty.
    pub messages: Vec<MessageView>,
}
