pub mod chat;
pub mod conversation;
pub mod user;

pub use chat::{ChatMessage, ChatRequest, ChatResponse, ChatRole, Transcript};
pub use conversation::{format_timestamp, Conversation, ConversationList, StoredMessage};
pub use user::{FormError, LoginRequest, SignupRequest, User, UserUpdate};
