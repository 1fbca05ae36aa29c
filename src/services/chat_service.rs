use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use super::UserService;
use crate::error::{ApiResult, Entity};
use crate::models::{ChatContext, ChatRequest, ChatResponse};

/// Produces a coaching reply for one message. A real model backend would
/// implement this; the service only depends on the trait.
#[async_trait]
pub trait CoachResponder: Send + Sync {
    async fn respond(&self, context: &ChatContext) -> String;
}

pub const FALLBACK_RESPONSE: &str = "How can I help you with your face yoga practice today?";

/// Canned replies, checked in this order.
const KEYWORD_RESPONSES: &[(&str, &str)] = &[
    (
        "exercise",
        "To perform this exercise, start by relaxing your facial muscles...",
    ),
    (
        "progress",
        "Based on your progress, I recommend focusing on...",
    ),
    (
        "routine",
        "Here's a personalized routine for your goals...",
    ),
];

/// Returns the reply of the first keyword found in the lower-cased message.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordResponder;

impl KeywordResponder {
    pub fn reply_for(message: &str) -> &'static str {
        let message = message.to_lowercase();

        KEYWORD_RESPONSES
            .iter()
            .find(|(keyword, _)| message.contains(keyword))
            .map(|(_, response)| *response)
            .unwrap_or(FALLBACK_RESPONSE)
    }
}

#[async_trait]
impl CoachResponder for KeywordResponder {
    async fn respond(&self, context: &ChatContext) -> String {
        Self::reply_for(&context.message).to_string()
    }
}

#[derive(Clone)]
pub struct ChatService {
    users: UserService,
    responder: Arc<dyn CoachResponder>,
}

impl ChatService {
    pub fn new(users: UserService, responder: Arc<dyn CoachResponder>) -> Self {
        Self { users, responder }
    }

    #[instrument(skip(self, request), fields(user_id = %request.user_id))]
    pub async fn chat(&self, request: ChatRequest) -> ApiResult<ChatResponse> {
        let user_id = super::parse_id(&request.user_id, Entity::User)?;
        let user = self.users.find(user_id).await?;

        let context = ChatContext {
            user,
            message: request.message,
        };
        let response = self.responder.respond(&context).await;
        debug!(chars = response.len(), "Generated coach reply");

        Ok(ChatResponse { response })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::CreateUser;
    use crate::repository::InMemoryStore;
    use assert_matches::assert_matches;
    use uuid::Uuid;

    #[test]
    fn test_keyword_matching_is_case_insensitive() {
        assert_eq!(
            KeywordResponder::reply_for("Can you explain my EXERCISE plan?"),
            KEYWORD_RESPONSES[0].1
        );
        assert_eq!(KeywordResponder::reply_for("How is my Progress?"), KEYWORD_RESPONSES[1].1);
        assert_eq!(KeywordResponder::reply_for("new routine please"), KEYWORD_RESPONSES[2].1);
    }

    #[test]
    fn test_first_key_in_table_order_wins() {
        assert_eq!(
            KeywordResponder::reply_for("my routine and my progress"),
            KEYWORD_RESPONSES[1].1
        );
        assert_eq!(
            KeywordResponder::reply_for("routine exercise"),
            KEYWORD_RESPONSES[0].1
        );
    }

    #[test]
    fn test_no_keyword_falls_back() {
        assert_eq!(KeywordResponder::reply_for("hello"), FALLBACK_RESPONSE);
        assert_eq!(KeywordResponder::reply_for(""), FALLBACK_RESPONSE);
    }

    struct EchoResponder;

    #[async_trait]
    impl CoachResponder for EchoResponder {
        async fn respond(&self, context: &ChatContext) -> String {
            format!("{}: {}", context.user.name, context.message)
        }
    }

    #[tokio::test]
    async fn test_chat_passes_user_context_to_responder() {
        let users = UserService::new(Arc::new(InMemoryStore::new()));
        let user = users
            .create_user(CreateUser { email: "a@b.com".to_string(), name: "Ana".to_string() })
            .await
            .unwrap();
        let service = ChatService::new(users, Arc::new(EchoResponder));

        let reply = service
            .chat(ChatRequest { user_id: user.id.to_string(), message: "hi".to_string() })
            .await
            .unwrap();

        assert_eq!(reply.response, "Ana: hi");
    }

    #[tokio::test]
    async fn test_chat_for_unknown_user_is_not_found() {
        let users = UserService::new(Arc::new(InMemoryStore::new()));
        let service = ChatService::new(users, Arc::new(KeywordResponder));

        let result = service
            .chat(ChatRequest { user_id: Uuid::new_v4().to_string(), message: "exercise".to_string() })
            .await;

        assert_matches!(result, Err(ApiError::NotFound { entity: Entity::User }));
    }
}
