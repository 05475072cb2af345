use super::client::{ApiClient, ApiError};
use crate::models::{ConversationList, StoredMessage};

impl ApiClient {
    /// Conversations owned by the user, most recently active first
    pub async fn list_conversations(&self, user_id: i64) -> Result<ConversationList, ApiError> {
        self.get(&format!("/api/conversations/{}", user_id)).await
    }

    /// Every message of a conversation in the order it was written
    pub async fn conversation_messages(
        &self,
        conversation_id: i64,
    ) -> Result<Vec<StoredMessage>, ApiError> {
        self.get(&format!("/api/conversations/{}/messages", conversation_id))
            .await
    }

    pub async fn delete_conversation(&self, conversation_id: i64) -> Result<(), ApiError> {
        log::info!("Deleting conversation {}", conversation_id);
        self.delete(&format!("/api/conversations/{}", conversation_id))
            .await
    }
}
