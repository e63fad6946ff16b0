pub mod admin;
pub mod auth;
pub mod pages;
pub mod projects;

use axum::routing::get;
use axum::Router;

use crate::state::SharedState;

/// Public pages. No auth requirement.
pub fn view_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/projects", get(projects::index))
        .route("/projects/{id}", get(projects::show))
        .route("/login", get(auth::login_page))
}

/// Admin pages, wrapped by the auth-redirect guard in `build_app`.
pub fn admin_view_routes() -> Router<SharedState> {
    Router::new()
        .route("/admin", get(admin::dashboard))
        .route("/admin/projects/new", get(admin::new_project))
        .route("/admin/projects/{id}/edit", get(admin::edit_project))
}
