//! Course and course content models

use crate::error::ApiError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Course entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub duration_minutes: i32,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub instructor_id: Option<i64>,
    /// Categories this course is filed under
    #[serde(default)]
    pub category_ids: Vec<i64>,
}

/// Create course payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseCreate {
    pub name: String,
    pub description: String,
    pub duration_minutes: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor_id: Option<i64>,
    pub category_ids: Vec<i64>,
}

impl CourseCreate {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::validation("course name must not be empty"));
        }
        if self.description.trim().is_empty() {
            return Err(ApiError::validation("course description must not be empty"));
        }
        if self.duration_minutes <= 0 {
            return Err(ApiError::validation("duration must be positive"));
        }
        if self.end_date < self.start_date {
            return Err(ApiError::validation("end date must not precede start date"));
        }
        if self.category_ids.is_empty() {
            return Err(ApiError::validation("course needs at least one category"));
        }
        Ok(())
    }
}

/// Update course payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_ids: Option<Vec<i64>>,
}

/// Kind of material attached to a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Text,
    Pdf,
    Ppt,
    Video,
}

impl ContentType {
    /// Whether this content kind is backed by an uploaded/linked file
    pub fn is_file_backed(&self) -> bool {
        matches!(self, Self::Pdf | Self::Ppt | Self::Video)
    }
}

/// A single piece of course material
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseContent {
    pub id: i64,
    pub content_type: ContentType,
    pub title: String,
    #[serde(default)]
    pub content_text: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    pub position: i32,
}

/// Create course content payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseContentCreate {
    pub content_type: ContentType,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    pub position: i32,
}

impl CourseContentCreate {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.title.trim().is_empty() {
            return Err(ApiError::validation("content title must not be empty"));
        }
        match self.content_type {
            ContentType::Text => {
                if self.content_text.as_deref().unwrap_or("").trim().is_empty() {
                    return Err(ApiError::validation("text content requires content_text"));
                }
            }
            _ => {
                if self.file_url.as_deref().unwrap_or("").trim().is_empty() {
                    return Err(ApiError::validation("file-backed content requires file_url"));
                }
            }
        }
        Ok(())
    }
}
