use serde::{Deserialize, Serialize};

use super::User;

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub user_id: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// What a responder gets to see for one message.
#[derive(Debug, Clone)]
pub struct ChatContext {
    pub user: User,
    pub message: String,
}
