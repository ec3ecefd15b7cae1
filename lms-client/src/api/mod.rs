//! Typed wrappers over the admin REST endpoints
//!
//! One wrapper per resource, mirroring the backend route layout.
//! Mutations return `()` on success: the UI re-fetches the affected
//! list and rebuilds its view instead of patching local state.

mod categories;
mod courses;
mod users;

pub use categories::{CategoryApi, CategorySource};
pub use courses::CourseApi;
pub use users::UserApi;
