use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::draft::ProjectDraft;
use crate::error::AppError;
use crate::middleware::audit;
use crate::models::Project;
use crate::state::SharedState;
use crate::store::ProjectOrder;

#[derive(Deserialize, Default)]
pub struct ListQuery {
    /// Bypass the in-memory cache and hit the store.
    #[serde(default)]
    pub refresh: bool,
    pub order: Option<String>,
}

fn parse_order(order: Option<&str>) -> Result<ProjectOrder, AppError> {
    match order {
        None | Some("createdAt") => Ok(ProjectOrder::CreatedAt),
        Some("updatedAt") => Ok(ProjectOrder::UpdatedAt),
        Some("title") => Ok(ProjectOrder::Title),
        Some(other) => Err(AppError::BadRequest(format!(
            "Unknown order field: {other}"
        ))),
    }
}

pub async fn list(
    State(state): State<SharedState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Project>>, AppError> {
    let order = parse_order(query.order.as_deref())?;
    let projects = state.projects.list(order, query.refresh).await?;
    Ok(Json(projects))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Project>, AppError> {
    let project = state.projects.get(id).await?;
    Ok(Json(project))
}

pub async fn create(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(draft): Json<ProjectDraft>,
) -> Result<Json<Project>, AppError> {
    auth.require_admin()?;

    let payload = draft.into_payload().map_err(AppError::Validation)?;
    let project = state.projects.create(&payload).await?;

    // Read-after-write: the cached listing must show the new entity. The
    // write already succeeded, so a failed refresh only means a stale list
    // until the next fetch.
    if let Err(e) = state.projects.refresh().await {
        tracing::warn!("Post-create list refresh failed: {e}");
    }

    audit::log_event(
        &state.pool,
        Some(auth.user_id),
        "project.created",
        "project",
        Some(project.id),
        None,
    )
    .await;

    Ok(Json(project))
}

pub async fn update(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(draft): Json<ProjectDraft>,
) -> Result<Json<Project>, AppError> {
    auth.require_admin()?;

    let payload = draft.into_payload().map_err(AppError::Validation)?;
    let project = state.projects.update(id, &payload).await?;

    if let Err(e) = state.projects.refresh().await {
        tracing::warn!("Post-update list refresh failed: {e}");
    }

    audit::log_event(
        &state.pool,
        Some(auth.user_id),
        "project.updated",
        "project",
        Some(project.id),
        None,
    )
    .await;

    Ok(Json(project))
}

pub async fn delete(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    auth.require_admin()?;

    state.projects.delete(id).await?;

    if let Err(e) = state.projects.refresh().await {
        tracing::warn!("Post-delete list refresh failed: {e}");
    }

    audit::log_event(
        &state.pool,
        Some(auth.user_id),
        "project.deleted",
        "project",
        Some(id),
        None,
    )
    .await;

    Ok(Json(serde_json::json!({ "message": "Deleted" })))
}
