use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Project, ProjectStatus};
use crate::store::ProjectOrder;

/// Field set for a full project write. The editor always submits the whole
/// draft, so create and update share one shape; the store fills in id and
/// the timestamps.
#[derive(Debug, Clone)]
pub struct ProjectPayload {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub features: Vec<String>,
    pub team_members: Vec<String>,
    pub status: ProjectStatus,
    pub repo_url: Option<String>,
    pub demo_url: Option<String>,
    pub client: Option<String>,
    pub duration: Option<String>,
    pub challenges: Option<String>,
    pub solution: Option<String>,
}

pub async fn list(pool: &PgPool, order: ProjectOrder) -> Result<Vec<Project>, sqlx::Error> {
    let sql = match order {
        ProjectOrder::CreatedAt => "SELECT * FROM projects ORDER BY created_at DESC",
        ProjectOrder::UpdatedAt => {
            "SELECT * FROM projects ORDER BY updated_at DESC NULLS LAST, created_at DESC"
        }
        ProjectOrder::Title => "SELECT * FROM projects ORDER BY title ASC",
    };
    sqlx::query_as::<_, Project>(sql).fetch_all(pool).await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &PgPool, payload: &ProjectPayload) -> Result<Project, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "INSERT INTO projects
            (title, description, image_url, images, tags, features, team_members,
             status, repo_url, demo_url, client, duration, challenges, solution)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
         RETURNING *",
    )
    .bind(&payload.title)
    .bind(&payload.description)
    .bind(&payload.image_url)
    .bind(&payload.images)
    .bind(&payload.tags)
    .bind(&payload.features)
    .bind(&payload.team_members)
    .bind(payload.status)
    .bind(&payload.repo_url)
    .bind(&payload.demo_url)
    .bind(&payload.client)
    .bind(&payload.duration)
    .bind(&payload.challenges)
    .bind(&payload.solution)
    .fetch_one(pool)
    .await
}

/// Overwrites every mutable field and stamps `updated_at`. `id` and
/// `created_at` are never touched. Fails with `RowNotFound` for unknown ids.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    payload: &ProjectPayload,
) -> Result<Project, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "UPDATE projects SET
            title = $2, description = $3, image_url = $4, images = $5, tags = $6,
            features = $7, team_members = $8, status = $9, repo_url = $10,
            demo_url = $11, client = $12, duration = $13, challenges = $14,
            solution = $15, updated_at = now()
         WHERE id = $1
         RETURNING *",
    )
    .bind(id)
    .bind(&payload.title)
    .bind(&payload.description)
    .bind(&payload.image_url)
    .bind(&payload.images)
    .bind(&payload.tags)
    .bind(&payload.features)
    .bind(&payload.team_members)
    .bind(payload.status)
    .bind(&payload.repo_url)
    .bind(&payload.demo_url)
    .bind(&payload.client)
    .bind(&payload.duration)
    .bind(&payload.challenges)
    .bind(&payload.solution)
    .fetch_one(pool)
    .await
}

/// Hard delete. Reports `RowNotFound` for unknown ids so callers can surface
/// a write failure instead of silently succeeding.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    let result = sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(sqlx::Error::RowNotFound);
    }
    Ok(())
}
