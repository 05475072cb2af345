use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A stored conversation, newest activity first when listed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: i64,
    pub title: String,
    pub owner_id: i64,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Conversation {
    /// Timestamp of the last activity, "HH:MM"
    pub fn last_active(&self) -> String {
        format_timestamp(self.updated_at.as_deref().unwrap_or(&self.created_at))
    }
}

/// Response from `GET /api/conversations/{user_id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationList {
    pub conversations: Vec<Conversation>,
    pub total: usize,
}

/// A message as the backend stores it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredMessage {
    pub id: i64,
    pub conversation_id: i64,
    pub role: String,
    pub content: String,
    pub created_at: String,
}

/// Format a backend timestamp as "HH:MM".
///
/// The backend sends naive ISO timestamps (`2026-01-01T09:30:00.123456`);
/// RFC 3339 with an offset is accepted too. Anything else is returned as is.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format("%H:%M").to_string();
    }
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.format("%H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}
