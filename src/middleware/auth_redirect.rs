use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

/// Route guard for browser navigation.
///
/// An unauthenticated request to a protected view (401) is redirected to the
/// login page, carrying the originally requested path so a successful login
/// can return there. An authenticated principal without the admin role (403)
/// is sent back to the home page. A denied navigation is terminal; the user
/// has to navigate again.
pub async fn redirect_unauthorized(req: Request, next: Next) -> Response {
    let path = req.uri().path().to_string();
    let response = next.run(req).await;
    match response.status() {
        StatusCode::UNAUTHORIZED => Redirect::to(&format!("/login?next={path}")).into_response(),
        StatusCode::FORBIDDEN => Redirect::to("/").into_response(),
        _ => response,
    }
}
