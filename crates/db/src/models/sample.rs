//! Research sample metadata model and DTOs.

use labtrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A sample row from the `research_samples` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ResearchSample {
    pub id: DbId,
    pub project_id: DbId,
    pub sample_name: String,
    pub file_path: String,
    pub duration_seconds: Option<f64>,
    pub format: Option<String>,
    pub sampling_rate: Option<i32>,
    pub channel_count: Option<i32>,
    pub notes: Option<String>,
    pub uploaded_by: DbId,
    pub upload_date: Timestamp,
}

/// Sample row joined with the uploader's username, for listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SampleWithUploader {
    pub id: DbId,
    pub project_id: DbId,
    pub sample_name: String,
    pub file_path: String,
    pub duration_seconds: Option<f64>,
    pub format: Option<String>,
    pub sampling_rate: Option<i32>,
    pub channel_count: Option<i32>,
    pub notes: Option<String>,
    pub uploaded_by: DbId,
    pub uploaded_by_username: String,
    pub upload_date: Timestamp,
}

/// DTO for inserting sample metadata (no upload endpoint exists; used by
/// seed tooling and tests).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSample {
    pub project_id: DbId,
    pub sample_name: String,
    pub file_path: String,
    pub duration_seconds: Option<f64>,
    pub format: Option<String>,
    pub sampling_rate: Option<i32>,
    pub channel_count: Option<i32>,
    pub notes: Option<String>,
    pub uploaded_by: DbId,
}
