//! Data models
//!
//! Read models mirrored from the backend API plus create/update
//! payloads. All IDs are `i64` (backend INTEGER PRIMARY KEY).

pub mod category;
pub mod course;
pub mod user;

// Re-exports
pub use category::*;
pub use course::*;
pub use user::*;
