//! API response helpers
//!
//! Pagination metadata and the error body shape returned by the
//! backend on failed requests.

use serde::{Deserialize, Serialize};

/// Pagination metadata
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Pagination {
    /// Current page number (1-based)
    pub page: u32,
    /// Items per page
    pub per_page: u32,
    /// Total number of items
    pub total: u64,
    /// Total number of pages
    pub total_pages: u32,
}

impl Pagination {
    /// Create a new pagination
    pub fn new(page: u32, per_page: u32, total: u64) -> Self {
        let total_pages = if per_page == 0 {
            0
        } else {
            ((total as f64) / (per_page as f64)).ceil() as u32
        };
        Self {
            page,
            per_page,
            total,
            total_pages,
        }
    }

    /// Whether there is a page after the current one
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Error body returned by the backend on failed requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message
    #[serde(alias = "error")]
    pub message: String,
    /// Stable error code, when the backend provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_rounds_up() {
        let p = Pagination::new(1, 10, 101);
        assert_eq!(p.total_pages, 11);
        assert!(p.has_next());

        let last = Pagination::new(11, 10, 101);
        assert!(!last.has_next());
    }

    #[test]
    fn test_pagination_zero_per_page() {
        let p = Pagination::new(1, 0, 50);
        assert_eq!(p.total_pages, 0);
    }

    #[test]
    fn test_error_body_alias() {
        let body: ErrorBody = serde_json::from_str(r#"{"error":"nope"}"#).unwrap();
        assert_eq!(body.message, "nope");
        assert!(body.code.is_none());
    }
}
