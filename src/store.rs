use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::db;
use crate::db::projects::ProjectPayload;
use crate::error::AppError;
use crate::models::Project;

/// Sort order for project listings. The cache only holds the default
/// ordering; anything else goes straight to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectOrder {
    #[default]
    CreatedAt,
    UpdatedAt,
    Title,
}

/// Sole reader/writer boundary for the `projects` collection.
///
/// Keeps the full project list in memory so display components can render
/// without a round trip. Mutations do not refresh the cache themselves;
/// callers invoke [`ProjectStore::refresh`] after a successful write, which
/// keeps read-after-write consistency an explicit contract rather than a
/// hidden side effect. A failed fetch never clobbers the previously cached
/// list.
pub struct ProjectStore {
    pool: PgPool,
    cache: RwLock<Option<Vec<Project>>>,
}

impl ProjectStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            cache: RwLock::new(None),
        }
    }

    /// Full ordered listing, served from cache unless it is empty or
    /// `force_refresh` is set.
    pub async fn list(
        &self,
        order: ProjectOrder,
        force_refresh: bool,
    ) -> Result<Vec<Project>, AppError> {
        if order != ProjectOrder::CreatedAt {
            return db::projects::list(&self.pool, order)
                .await
                .map_err(AppError::Fetch);
        }

        if !force_refresh {
            if let Some(cached) = self.cache.read().await.as_ref() {
                return Ok(cached.clone());
            }
        }

        self.refresh().await
    }

    /// Re-fetch the listing and replace the cache. On failure the cache is
    /// left as it was and the error propagates.
    pub async fn refresh(&self) -> Result<Vec<Project>, AppError> {
        let projects = db::projects::list(&self.pool, ProjectOrder::CreatedAt)
            .await
            .map_err(AppError::Fetch)?;
        *self.cache.write().await = Some(projects.clone());
        Ok(projects)
    }

    pub async fn get(&self, id: Uuid) -> Result<Project, AppError> {
        db::projects::find_by_id(&self.pool, id)
            .await
            .map_err(AppError::Fetch)?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))
    }

    /// Atomic single-row insert. The store assigns the id and `created_at`.
    pub async fn create(&self, payload: &ProjectPayload) -> Result<Project, AppError> {
        db::projects::create(&self.pool, payload)
            .await
            .map_err(AppError::Write)
    }

    /// Overwrites all mutable fields and stamps `updated_at`. An unknown id
    /// is a write failure, not a silent no-op.
    pub async fn update(&self, id: Uuid, payload: &ProjectPayload) -> Result<Project, AppError> {
        db::projects::update(&self.pool, id, payload)
            .await
            .map_err(AppError::Write)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        db::projects::delete(&self.pool, id)
            .await
            .map_err(AppError::Write)
    }
}
