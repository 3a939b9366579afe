//! Repository for the `research_samples` table.

use labtrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::sample::{CreateSample, ResearchSample, SampleWithUploader};

const COLUMNS: &str = "\
    id, project_id, sample_name, file_path, duration_seconds, format, \
    sampling_rate, channel_count, notes, uploaded_by, upload_date";

/// Provides sample metadata operations scoped to a project.
pub struct SampleRepo;

impl SampleRepo {
    /// List all samples for a project with the uploader's username, newest
    /// first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<SampleWithUploader>, sqlx::Error> {
        sqlx::query_as::<_, SampleWithUploader>(
            "SELECT s.id, s.project_id, s.sample_name, s.file_path, \
                    s.duration_seconds, s.format, s.sampling_rate, \
                    s.channel_count, s.notes, s.uploaded_by, \
                    u.username AS uploaded_by_username, s.upload_date \
             FROM research_samples s \
             JOIN users u ON u.id = s.uploaded_by \
             WHERE s.project_id = $1 \
             ORDER BY s.upload_date DESC, s.id DESC",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }

    /// Insert sample metadata (seed and test tooling; there is no upload
    /// endpoint).
    pub async fn create(
        pool: &PgPool,
        input: &CreateSample,
    ) -> Result<ResearchSample, sqlx::Error> {
        let query = format!(
            "INSERT INTO research_samples \
                (project_id, sample_name, file_path, duration_seconds, format, \
                 sampling_rate, channel_count, notes, uploaded_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ResearchSample>(&query)
            .bind(input.project_id)
            .bind(&input.sample_name)
            .bind(&input.file_path)
            .bind(input.duration_seconds)
            .bind(&input.format)
            .bind(input.sampling_rate)
            .bind(input.channel_count)
            .bind(&input.notes)
            .bind(input.uploaded_by)
            .fetch_one(pool)
            .await
    }

    /// Delete a sample, scoped to its project so a sample ID from another
    /// project is treated as missing.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(
        pool: &PgPool,
        project_id: DbId,
        sample_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM research_samples WHERE id = $1 AND project_id = $2",
        )
        .bind(sample_id)
        .bind(project_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
