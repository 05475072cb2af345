use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::config::ApiConfig;

/// API error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },
    #[error("Deserialization error: {0}")]
    Deserialization(String),
    #[error("{0}")]
    Unauthorized(String),
}

impl ApiError {
    /// Message suitable for showing next to a form
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http { message, .. } => message.clone(),
            ApiError::Unauthorized(message) => message.clone(),
            ApiError::Network(_) => "Could not reach the server, please try again".to_string(),
            ApiError::Deserialization(_) => "Unexpected response from the server".to_string(),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Error body returned by the backend
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// API client for making HTTP requests
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client for the configured API base URL
    pub fn new(api: &ApiConfig) -> Self {
        Self {
            base_url: api.base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Same client, sending the given bearer token with every request
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join the base URL and an absolute API path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.authorize(Request::get(&self.url(path))).send().await?;

        handle_response(response).await
    }

    /// Make a POST request with a JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await?;

        handle_response(response).await
    }

    /// Make a PUT request with a JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .authorize(Request::put(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await?;

        handle_response(response).await
    }

    /// Make a DELETE request; the backend answers with an empty body
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .authorize(Request::delete(&self.url(path)))
            .send()
            .await?;

        check_status(response).await.map(|_| ())
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.token {
            Some(ref token) => request.header("Authorization", &format!("Bearer {}", token)),
            None => request,
        }
    }
}

/// Handle the HTTP response
async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    check_status(response)
        .await?
        .json()
        .await
        .map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Turn a non-2xx response into an error
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body, status);
        log::warn!("API request to {} failed with {}: {}", response.url(), status, message);

        if status == 401 {
            return Err(ApiError::Unauthorized(message));
        }
        return Err(ApiError::Http { status, message });
    }

    Ok(response)
}

/// Pull the `detail` message out of an error body, falling back to the raw text
fn error_message(body: &str, status: u16) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.detail;
    }
    let body = body.trim();
    if body.is_empty() {
        format!("Request failed with status {}", status)
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: base_url.to_string(),
        })
    }

    #[test]
    fn test_url_joins_path() {
        let api = client("https://api.example.com");
        assert_eq!(api.url("/auth/login"), "https://api.example.com/auth/login");
    }

    #[test]
    fn test_trailing_slash_is_dropped() {
        let api = client("http://localhost:8000/");
        assert_eq!(api.base_url(), "http://localhost:8000");
        assert_eq!(api.url("/api/chat"), "http://localhost:8000/api/chat");
    }

    #[test]
    fn test_error_message_prefers_detail() {
        assert_eq!(
            error_message(r#"{"detail": "Invalid credentials"}"#, 401),
            "Invalid credentials"
        );
    }

    #[test]
    fn test_error_message_falls_back_to_body() {
        assert_eq!(error_message("Bad gateway", 502), "Bad gateway");
        assert_eq!(error_message("  ", 500), "Request failed with status 500");
    }

    #[test]
    fn test_user_message_hides_transport_details() {
        let err = ApiError::Network("TypeError: Failed to fetch".to_string());
        assert!(!err.user_message().contains("TypeError"));

        let err = ApiError::Http {
            status: 400,
            message: "Email already exists".to_string(),
        };
        assert_eq!(err.user_message(), "Email already exists");
    }
}
