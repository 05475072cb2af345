use super::client::{ApiClient, ApiError};
use crate::models::{LoginRequest, SignupRequest, User, UserUpdate};

impl ApiClient {
    /// Authenticate with email and password
    pub async fn login(&self, request: &LoginRequest) -> Result<User, ApiError> {
        self.post("/auth/login", request).await
    }

    /// Create an account; the response carries a session token
    pub async fn signup(&self, request: &SignupRequest) -> Result<User, ApiError> {
        self.post("/auth/signup", request).await
    }

    /// Update the profile of the given user
    pub async fn update_user(&self, user_id: i64, update: &UserUpdate) -> Result<User, ApiError> {
        self.put(&format!("/auth/user/{}", user_id), update).await
    }
}
