use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::rate_limit::LoginRateLimiter;
use crate::store::ProjectStore;

pub type SharedState = Arc<AppState>;

/// Application context built once at startup and injected into every
/// handler; there is no ambient global lookup.
pub struct AppState {
    pub pool: PgPool,
    pub config: Config,
    pub projects: ProjectStore,
    pub login_limiter: LoginRateLimiter,
}
