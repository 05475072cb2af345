use serde::{Deserialize, Serialize};

use super::conversation::{format_timestamp, StoredMessage};

/// Chat request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub user_id: i64,
    pub message: String,
    pub smart_mode: bool,
    pub conversation_id: Option<i64>,
}

/// Assistant reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
    pub conversation_id: Option<i64>,
    #[serde(default)]
    pub raw_response: Option<String>,
}

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
    Error,
}

impl ChatRole {
    /// CSS modifier class for the message bubble
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
            ChatRole::Error => "error",
        }
    }

    /// Role as stored by the backend; anything but "user" was written by the assistant
    pub fn from_backend(role: &str) -> Self {
        match role {
            "user" => ChatRole::User,
            _ => ChatRole::Assistant,
        }
    }
}

/// A message shown in the chat transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: usize,
    pub role: ChatRole,
    pub content: String,
    /// Local time the message was added, "HH:MM"
    pub sent_at: String,
}

impl ChatMessage {
    pub fn new(id: usize, role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id,
            role,
            content: content.into(),
            sent_at: chrono::Local::now().format("%H:%M").to_string(),
        }
    }
}

/// The conversation shown in the chat page.
///
/// Every reset or load starts a new generation. Replies carry the generation
/// they were requested in and are dropped once it is no longer current.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    conversation_id: Option<i64>,
    generation: u64,
    next_id: usize,
}

impl Transcript {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn conversation_id(&self) -> Option<i64> {
        self.conversation_id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn push(&mut self, role: ChatRole, content: impl Into<String>) {
        let message = ChatMessage::new(self.next_id, role, content);
        self.append(message);
    }

    /// Apply a reply requested in `generation`; returns false if it was dropped
    pub fn reply(&mut self, generation: u64, reply: Result<ChatResponse, String>) -> bool {
        if generation != self.generation {
            log::debug!(
                "Dropping reply from generation {} (now {})",
                generation,
                self.generation
            );
            return false;
        }

        match reply {
            Ok(response) => {
                if response.conversation_id.is_some() {
                    self.conversation_id = response.conversation_id;
                }
                self.push(ChatRole::Assistant, response.message);
            }
            Err(message) => self.push(ChatRole::Error, message),
        }
        true
    }

    /// Start an empty conversation
    pub fn reset(&mut self) {
        self.messages.clear();
        self.conversation_id = None;
        self.generation += 1;
    }

    /// Replace the transcript with a stored conversation
    pub fn load(&mut self, conversation_id: i64, stored: &[StoredMessage]) {
        self.reset();
        self.conversation_id = Some(conversation_id);
        for message in stored {
            let message = ChatMessage {
                id: self.next_id,
                role: ChatRole::from_backend(&message.role),
                content: message.content.clone(),
                sent_at: format_timestamp(&message.created_at),
            };
            self.append(message);
        }
    }

    fn append(&mut self, message: ChatMessage) {
        self.next_id += 1;
        self.messages.push(message);
    }
}
