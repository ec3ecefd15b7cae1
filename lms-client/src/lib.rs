//! LMS Client - HTTP client for the LMS admin REST API
//!
//! Provides authenticated access to the user, category, and course
//! endpoints, plus session handling with on-disk token persistence.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod session;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use session::{Session, StoredToken, TokenStorage};

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, LoginResponse, MeResponse, MenuItem, MenuResponse};
pub use shared::models::{Category, Course, CourseContent, User};
