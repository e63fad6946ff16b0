use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};

use crate::error::AppError;
use crate::models::Project;
use crate::state::SharedState;
use crate::store::ProjectOrder;

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    recent: Vec<Project>,
}

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate {}

pub async fn home(State(state): State<SharedState>) -> Result<impl IntoResponse, AppError> {
    let mut recent = state.projects.list(ProjectOrder::CreatedAt, false).await?;
    recent.truncate(3);

    let template = HomeTemplate { recent };
    Ok(Html(template.render().unwrap_or_default()))
}

/// Catch-all for unknown paths.
pub async fn not_found() -> impl IntoResponse {
    let template = NotFoundTemplate {};
    (
        StatusCode::NOT_FOUND,
        Html(template.render().unwrap_or_default()),
    )
}
