//! Shared types for the LMS admin client
//!
//! Common types used across crates: data models mirrored from the
//! backend, error types, API request/response DTOs, and the category
//! hierarchy reconstruction logic.

pub mod category_tree;
pub mod client;
pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use category_tree::{CategoryIndex, CategoryNode, build_forest, rows};
pub use error::{ApiError, ApiErrorCode};
pub use response::Pagination;
