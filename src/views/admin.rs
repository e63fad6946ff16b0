use askama::Template;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse};
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::error::AppError;
use crate::models::Project;
use crate::state::SharedState;
use crate::store::ProjectOrder;

#[derive(Template)]
#[template(path = "admin/dashboard.html")]
struct DashboardTemplate {
    email: String,
    projects: Vec<Project>,
}

#[derive(Template)]
#[template(path = "admin/form.html")]
struct ProjectFormTemplate {
    email: String,
    /// None for the create form, the bound identity for edit sessions.
    project_id: Option<String>,
}

pub async fn dashboard(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, AppError> {
    auth.require_admin()?;

    let projects = state.projects.list(ProjectOrder::CreatedAt, false).await?;
    let template = DashboardTemplate {
        email: auth.email,
        projects,
    };
    Ok(Html(template.render().unwrap_or_default()))
}

pub async fn new_project(auth: AuthUser) -> Result<impl IntoResponse, AppError> {
    auth.require_admin()?;

    let template = ProjectFormTemplate {
        email: auth.email,
        project_id: None,
    };
    Ok(Html(template.render().unwrap_or_default()))
}

pub async fn edit_project(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    auth.require_admin()?;

    // 404 before rendering so a stale link does not open an empty editor.
    let project = state.projects.get(id).await?;

    let template = ProjectFormTemplate {
        email: auth.email,
        project_id: Some(project.id.to_string()),
    };
    Ok(Html(template.render().unwrap_or_default()))
}
