use askama::Template;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::auth::jwt;
use crate::state::SharedState;

#[derive(Template)]
#[template(path = "auth/login.html")]
struct LoginTemplate {
    next: String,
}

#[derive(Deserialize)]
pub struct LoginQuery {
    /// Path to return to after a successful sign-in.
    pub next: Option<String>,
}

pub async fn login_page(
    State(state): State<SharedState>,
    Query(q): Query<LoginQuery>,
    jar: CookieJar,
) -> Response {
    let next = sanitize_next(q.next.as_deref());

    // Already signed in: skip the form.
    if let Some(cookie) = jar.get("access_token") {
        if jwt::decode_token(cookie.value(), &state.config.jwt_secret).is_ok() {
            return Redirect::to(&next).into_response();
        }
    }

    let template = LoginTemplate { next };
    Html(template.render().unwrap_or_default()).into_response()
}

/// Only same-site paths are honored, so the login page can never bounce a
/// user to a foreign origin.
fn sanitize_next(next: Option<&str>) -> String {
    match next {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_string(),
        _ => "/admin".to_string(),
    }
}
