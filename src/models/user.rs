use serde::{Deserialize, Serialize};
use thiserror::Error;

const MIN_PASSWORD_LEN: usize = 8;

/// Signed-in user as returned by the auth endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl User {
    /// Name to show in the UI, falling back to the email address
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.email)
    }
}

/// Login form payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), FormError> {
        validate_email(&self.email)?;
        if self.password.is_empty() {
            return Err(FormError::MissingPassword);
        }
        Ok(())
    }
}

/// Signup form payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl SignupRequest {
    /// Validate the form, including the password confirmation field
    pub fn validate(&self, confirm_password: &str) -> Result<(), FormError> {
        validate_email(&self.email)?;
        validate_password(&self.password)?;
        if self.password != confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        Ok(())
    }
}

/// Profile update; only the fields that are set get sent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl UserUpdate {
    /// Build an update from raw form input, keeping only what differs from
    /// the current user. Blank inputs mean "leave unchanged".
    pub fn from_form(current: &User, name: &str, email: &str, password: &str) -> Self {
        let name = name.trim();
        let email = email.trim();

        Self {
            name: (!name.is_empty() && current.name.as_deref() != Some(name))
                .then(|| name.to_string()),
            email: (!email.is_empty() && email != current.email).then(|| email.to_string()),
            password: (!password.is_empty()).then(|| password.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none() && self.name.is_none()
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.is_empty() {
            return Err(FormError::NothingToUpdate);
        }
        if let Some(ref email) = self.email {
            validate_email(email)?;
        }
        if let Some(ref password) = self.password {
            validate_password(password)?;
        }
        Ok(())
    }
}

/// Client-side form validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please enter your email address")]
    MissingEmail,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter your password")]
    MissingPassword,
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Nothing to update")]
    NothingToUpdate,
}

fn validate_email(email: &str) -> Result<(), FormError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(FormError::MissingEmail);
    }

    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return Err(FormError::InvalidEmail),
    };

    let domain_ok = domain
        .split_once('.')
        .map(|(host, tld)| !host.is_empty() && !tld.is_empty())
        .unwrap_or(false);

    if local.is_empty() || !domain_ok || email.contains(char::is_whitespace) {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), FormError> {
    if password.is_empty() {
        return Err(FormError::MissingPassword);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(FormError::PasswordTooShort);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 7,
            email: "ada@example.com".to_string(),
            name: Some("Ada".to_string()),
            token: Some("jwt".to_string()),
            created_at: None,
        }
    }

    #[test]
    fn test_user_from_backend_json() {
        let json = r#"{
            "id": 1,
            "email": "ada@example.com",
            "name": null,
            "token": "eyJhbGciOiJIUzI1NiJ9.e30.sig",
            "created_at": "2026-01-02T03:04:05.123456"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.name, None);
        assert_eq!(user.display_name(), "ada@example.com");
        assert!(user.token.is_some());
    }

    #[test]
    fn test_user_without_token_field() {
        let json = r#"{"id": 2, "email": "b@example.com", "name": "Bo"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.token, None);
        assert_eq!(user.display_name(), "Bo");
    }

    #[test]
    fn test_login_validation() {
        let mut request = LoginRequest {
            email: "ada@example.com".to_string(),
            password: "x".to_string(),
            remember_me: false,
        };
        assert_eq!(request.validate(), Ok(()));

        request.password.clear();
        assert_eq!(request.validate(), Err(FormError::MissingPassword));

        request.email = "ada".to_string();
        assert_eq!(request.validate(), Err(FormError::InvalidEmail));
    }

    #[test]
    fn test_email_rules() {
        assert_eq!(validate_email(""), Err(FormError::MissingEmail));
        assert_eq!(validate_email("a@b"), Err(FormError::InvalidEmail));
        assert_eq!(validate_email("@b.com"), Err(FormError::InvalidEmail));
        assert_eq!(validate_email("a@@b.com"), Err(FormError::InvalidEmail));
        assert_eq!(validate_email("a b@c.com"), Err(FormError::InvalidEmail));
        assert_eq!(validate_email("a@.com"), Err(FormError::InvalidEmail));
        assert_eq!(validate_email(" a@b.co "), Ok(()));
    }

    #[test]
    fn test_signup_validation() {
        let request = SignupRequest {
            email: "ada@example.com".to_string(),
            password: "longenough".to_string(),
            name: None,
        };
        assert_eq!(request.validate("longenough"), Ok(()));
        assert_eq!(request.validate("different"), Err(FormError::PasswordMismatch));

        let short = SignupRequest {
            password: "short".to_string(),
            ..request
        };
        assert_eq!(short.validate("short"), Err(FormError::PasswordTooShort));
    }

    #[test]
    fn test_signup_omits_missing_name() {
        let request = SignupRequest {
            email: "ada@example.com".to_string(),
            password: "longenough".to_string(),
            name: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("name").is_none());
    }

    #[test]
    fn test_update_keeps_only_changes() {
        let update = UserUpdate::from_form(&user(), "Ada", " ada@example.com ", "");
        assert!(update.is_empty());
        assert_eq!(update.validate(), Err(FormError::NothingToUpdate));

        let update = UserUpdate::from_form(&user(), "Ada L.", "", "newpassword");
        assert_eq!(update.name.as_deref(), Some("Ada L."));
        assert_eq!(update.email, None);
        assert_eq!(update.password.as_deref(), Some("newpassword"));
        assert_eq!(update.validate(), Ok(()));

        let json = serde_json::to_value(&update).unwrap();
        assert!(json.get("email").is_none());
    }

    #[test]
    fn test_update_validates_new_values() {
        let update = UserUpdate::from_form(&user(), "", "not-an-email", "");
        assert_eq!(update.validate(), Err(FormError::InvalidEmail));

        let update = UserUpdate::from_form(&user(), "", "", "short");
        assert_eq!(update.validate(), Err(FormError::PasswordTooShort));
    }
}
