//! Category Model

use crate::error::ApiError;
use serde::{Deserialize, Serialize};

/// Course category entity
///
/// Categories form a hierarchy through `parent_id`. The backend does
/// not guarantee the relation is well-formed; see
/// [`crate::category_tree`] for how orphans and cycles are handled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    /// Parent category reference; `None` means top-level
    #[serde(default)]
    pub parent_id: Option<i64>,
    /// Ordering hint among siblings (not necessarily contiguous)
    #[serde(default)]
    pub position: i32,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>, parent_id: Option<i64>, position: i32) -> Self {
        Self {
            id,
            name: name.into(),
            parent_id,
            position,
        }
    }

    /// Whether this category declares no parent at all
    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    pub position: i32,
}

impl CategoryCreate {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::validation("category name must not be empty"));
        }
        Ok(())
    }
}

/// Update category payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `Some(None)` clears the parent (moves to top level)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
}

impl CategoryUpdate {
    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            return Err(ApiError::validation("category name must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_rejects_empty_name() {
        let payload = CategoryCreate {
            name: "  ".to_string(),
            parent_id: None,
            position: 0,
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_update_allows_position_only() {
        let payload = CategoryUpdate {
            position: Some(3),
            ..Default::default()
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_category_deserialize_missing_optionals() {
        let cat: Category = serde_json::from_str(r#"{"id":1,"name":"Science"}"#).unwrap();
        assert!(cat.is_top_level());
        assert_eq!(cat.position, 0);
    }
}
