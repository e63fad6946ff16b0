use askama::Template;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::Project;
use crate::state::SharedState;
use crate::store::ProjectOrder;

#[derive(Template)]
#[template(path = "projects/index.html")]
struct ProjectIndexTemplate {
    projects: Vec<Project>,
}

#[derive(Template)]
#[template(path = "projects/show.html")]
struct ProjectShowTemplate {
    project: Project,
}

pub async fn index(State(state): State<SharedState>) -> Result<impl IntoResponse, AppError> {
    let projects = state.projects.list(ProjectOrder::CreatedAt, false).await?;
    let template = ProjectIndexTemplate { projects };
    Ok(Html(template.render().unwrap_or_default()))
}

pub async fn show(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let project = state.projects.get(id).await?;
    let template = ProjectShowTemplate { project };
    Ok(Html(template.render().unwrap_or_default()))
}
