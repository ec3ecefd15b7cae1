//! Category endpoints

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use shared::client::{CategoryListResponse, CategoryResponse};
use shared::models::{Category, CategoryCreate, CategoryUpdate};

use crate::{ClientResult, HttpClient};

/// Source of category snapshots for the tree builder
///
/// The hierarchy logic in `shared::category_tree` only needs a flat
/// list; this is the seam that supplies it, so tree consumers can be
/// tested without a backend.
#[async_trait]
pub trait CategorySource: Send + Sync {
    /// Fetch the complete flat category list
    async fn fetch_all(&self) -> ClientResult<Vec<Category>>;
}

/// Client for `/api/categories`
#[derive(Debug, Clone)]
pub struct CategoryApi {
    http: HttpClient,
}

impl CategoryApi {
    pub fn new(http: &HttpClient) -> Self {
        Self { http: http.clone() }
    }

    /// List all categories as a flat snapshot
    pub async fn list(&self) -> ClientResult<Vec<Category>> {
        let response: CategoryListResponse = self.http.get("/api/categories").await?;
        Ok(response.categories)
    }

    /// Get a single category
    pub async fn get(&self, id: i64) -> ClientResult<Category> {
        let response: CategoryResponse = self.http.get(&format!("/api/categories/{id}")).await?;
        Ok(response.category)
    }

    /// Create a category
    pub async fn create(&self, payload: &CategoryCreate) -> ClientResult<()> {
        payload.validate()?;
        let _: Value = self.http.post("/api/categories", payload).await?;
        Ok(())
    }

    /// Update a category
    pub async fn update(&self, id: i64, payload: &CategoryUpdate) -> ClientResult<()> {
        payload.validate()?;
        let _: Value = self
            .http
            .put(&format!("/api/categories/{id}"), payload)
            .await?;
        Ok(())
    }

    /// Rename a category
    pub async fn rename(&self, id: i64, name: &str) -> ClientResult<()> {
        #[derive(Serialize)]
        struct RenameRequest<'a> {
            name: &'a str,
        }

        let _: Value = self
            .http
            .patch(&format!("/api/categories/{id}/rename"), &RenameRequest { name })
            .await?;
        Ok(())
    }

    /// Move a category to a new position among its siblings
    pub async fn reorder(&self, id: i64, position: i32) -> ClientResult<()> {
        #[derive(Serialize)]
        struct ReorderRequest {
            position: i32,
        }

        let _: Value = self
            .http
            .patch(
                &format!("/api/categories/{id}/reorder"),
                &ReorderRequest { position },
            )
            .await?;
        Ok(())
    }

    /// Delete a category (the backend also removes its subtree)
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        let _: Value = self.http.delete(&format!("/api/categories/{id}")).await?;
        Ok(())
    }
}

#[async_trait]
impl CategorySource for CategoryApi {
    async fn fetch_all(&self) -> ClientResult<Vec<Category>> {
        self.list().await
    }
}
