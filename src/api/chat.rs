use super::client::{ApiClient, ApiError};
use crate::models::{ChatRequest, ChatResponse};

impl ApiClient {
    /// Send a chat message and wait for the assistant's reply
    pub async fn send_chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        self.post("/api/chat", request).await
    }
}
