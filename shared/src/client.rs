//! Client-related types shared between the API client and consumers
//!
//! Request/response DTOs matching the backend wire format. List
//! endpoints return their payload under a named field
//! (`{"categories": [...]}`), not a generic envelope.

use serde::{Deserialize, Serialize};

use crate::models::{Category, Course, CourseContent, User};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Username or email address
    pub identifier: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Current user response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub user: User,
}

/// A single navigation entry for the admin menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub label: String,
    pub path: String,
}

/// Menu response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuResponse {
    pub menu: Vec<MenuItem>,
}

// =============================================================================
// List / detail envelopes
// =============================================================================

/// Category list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryListResponse {
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Single category response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub category: Category,
}

/// User list response (server-side pagination)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub total: u64,
}

/// Single user response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: User,
}

/// Course list response (server-side pagination)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseListResponse {
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub total: u64,
}

/// Course detail response: the course plus its categories and contents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseDetailResponse {
    pub course: Course,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub contents: Vec<CourseContent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_list_tolerates_missing_field() {
        let resp: CategoryListResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.categories.is_empty());
    }

    #[test]
    fn test_login_request_wire_format() {
        let req = LoginRequest {
            identifier: "admin".to_string(),
            password: "pw".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["identifier"], "admin");
    }
}
