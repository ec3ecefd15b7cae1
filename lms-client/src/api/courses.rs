//! Course and course content endpoints

use serde::Serialize;
use serde_json::Value;

use shared::client::{CourseDetailResponse, CourseListResponse};
use shared::models::{Course, CourseContentCreate, CourseCreate, CourseUpdate};
use shared::response::Pagination;

use crate::{ClientResult, HttpClient};

/// Client for `/api/courses`
#[derive(Debug, Clone)]
pub struct CourseApi {
    http: HttpClient,
}

impl CourseApi {
    pub fn new(http: &HttpClient) -> Self {
        Self { http: http.clone() }
    }

    /// List courses, paginated server-side (1-based page)
    pub async fn list(&self, page: u32, limit: u32) -> ClientResult<(Vec<Course>, Pagination)> {
        let response: CourseListResponse = self
            .http
            .get(&format!("/api/courses?page={page}&limit={limit}"))
            .await?;
        let pagination = Pagination::new(page, limit, response.total);
        Ok((response.courses, pagination))
    }

    /// Get a course with its categories and contents
    pub async fn get(&self, id: i64) -> ClientResult<CourseDetailResponse> {
        self.http.get(&format!("/api/courses/{id}")).await
    }

    /// Create a course
    pub async fn create(&self, payload: &CourseCreate) -> ClientResult<()> {
        payload.validate()?;
        let _: Value = self.http.post("/api/courses", payload).await?;
        Ok(())
    }

    /// Update a course
    pub async fn update(&self, id: i64, payload: &CourseUpdate) -> ClientResult<()> {
        let _: Value = self.http.put(&format!("/api/courses/{id}"), payload).await?;
        Ok(())
    }

    /// Delete a course
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        let _: Value = self.http.delete(&format!("/api/courses/{id}")).await?;
        Ok(())
    }

    // ========== Course contents ==========

    /// Attach new material to a course
    pub async fn add_content(
        &self,
        course_id: i64,
        payload: &CourseContentCreate,
    ) -> ClientResult<()> {
        payload.validate()?;
        let _: Value = self
            .http
            .post(&format!("/api/courses/{course_id}/contents"), payload)
            .await?;
        Ok(())
    }

    /// Update existing course material
    pub async fn update_content(
        &self,
        course_id: i64,
        content_id: i64,
        payload: &CourseContentCreate,
    ) -> ClientResult<()> {
        payload.validate()?;
        let _: Value = self
            .http
            .put(
                &format!("/api/courses/{course_id}/contents/{content_id}"),
                payload,
            )
            .await?;
        Ok(())
    }

    /// Move material to a new position within the course
    pub async fn reorder_content(
        &self,
        course_id: i64,
        content_id: i64,
        position: i32,
    ) -> ClientResult<()> {
        #[derive(Serialize)]
        struct ReorderRequest {
            position: i32,
        }

        let _: Value = self
            .http
            .patch(
                &format!("/api/courses/{course_id}/contents/{content_id}/reorder"),
                &ReorderRequest { position },
            )
            .await?;
        Ok(())
    }

    /// Remove material from a course
    pub async fn delete_content(&self, course_id: i64, content_id: i64) -> ClientResult<()> {
        let _: Value = self
            .http
            .delete(&format!("/api/courses/{course_id}/contents/{content_id}"))
            .await?;
        Ok(())
    }
}
