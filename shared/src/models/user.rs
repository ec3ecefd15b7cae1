//! User Model

use crate::error::ApiError;
use serde::{Deserialize, Serialize};

/// User response (without password)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub full_name: String,
    pub username: String,
    pub email: String,
    /// Role name, backend-owned vocabulary ("Student", "Instructor", ...)
    pub role: String,
    #[serde(default)]
    pub department_group: Option<String>,
    /// "active" or "suspended"
    #[serde(default = "default_enrollment_status")]
    pub enrollment_status: String,
}

fn default_enrollment_status() -> String {
    "active".to_string()
}

/// Create user payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_group: Option<String>,
}

impl UserCreate {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.username.trim().is_empty() {
            return Err(ApiError::validation("username must not be empty"));
        }
        if !self.email.contains('@') {
            return Err(ApiError::validation("email address is not valid"));
        }
        if self.password.is_empty() {
            return Err(ApiError::validation("password must not be empty"));
        }
        Ok(())
    }
}

/// Update user payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_group: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_payload() -> UserCreate {
        UserCreate {
            full_name: "Ada Lovelace".to_string(),
            username: "ada".to_string(),
            email: "ada@example.edu".to_string(),
            password: "s3cret".to_string(),
            role: "Instructor".to_string(),
            department_group: None,
        }
    }

    #[test]
    fn test_create_validates() {
        assert!(create_payload().validate().is_ok());
    }

    #[test]
    fn test_create_rejects_bad_email() {
        let mut payload = create_payload();
        payload.email = "not-an-email".to_string();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_user_defaults_enrollment_status() {
        let user: User = serde_json::from_str(
            r#"{"id":1,"full_name":"Ada Lovelace","username":"ada","email":"ada@example.edu","role":"Student"}"#,
        )
        .unwrap();
        assert_eq!(user.enrollment_status, "active");
    }
}
