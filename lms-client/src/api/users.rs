//! User endpoints

use serde::Serialize;
use serde_json::Value;

use shared::client::{UserListResponse, UserResponse};
use shared::models::{User, UserCreate, UserUpdate};
use shared::response::Pagination;

use crate::{ClientResult, HttpClient};

/// Client for `/api/users`
#[derive(Debug, Clone)]
pub struct UserApi {
    http: HttpClient,
}

impl UserApi {
    pub fn new(http: &HttpClient) -> Self {
        Self { http: http.clone() }
    }

    /// List users, paginated server-side (1-based page)
    pub async fn list(&self, page: u32, limit: u32) -> ClientResult<(Vec<User>, Pagination)> {
        let response: UserListResponse = self
            .http
            .get(&format!("/api/users?page={page}&limit={limit}"))
            .await?;
        let pagination = Pagination::new(page, limit, response.total);
        Ok((response.users, pagination))
    }

    /// Get a single user
    pub async fn get(&self, id: i64) -> ClientResult<User> {
        let response: UserResponse = self.http.get(&format!("/api/users/{id}")).await?;
        Ok(response.user)
    }

    /// Create a user
    pub async fn create(&self, payload: &UserCreate) -> ClientResult<()> {
        payload.validate()?;
        let _: Value = self.http.post("/api/users", payload).await?;
        Ok(())
    }

    /// Update a user
    pub async fn update(&self, id: i64, payload: &UserUpdate) -> ClientResult<()> {
        let _: Value = self.http.put(&format!("/api/users/{id}"), payload).await?;
        Ok(())
    }

    /// Suspend or reactivate a user
    pub async fn set_enrollment_status(&self, id: i64, status: &str) -> ClientResult<()> {
        #[derive(Serialize)]
        struct StatusRequest<'a> {
            enrollment_status: &'a str,
        }

        let _: Value = self
            .http
            .patch(
                &format!("/api/users/{id}/suspend"),
                &StatusRequest {
                    enrollment_status: status,
                },
            )
            .await?;
        Ok(())
    }

    /// Delete a user
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        let _: Value = self.http.delete(&format!("/api/users/{id}")).await?;
        Ok(())
    }
}
