pub mod auth;
pub mod chat;
pub mod client;
pub mod conversations;

pub use client::{ApiClient, ApiError};
