pub mod project;
pub mod refresh_token;
pub mod user;

pub use project::{Project, ProjectStatus};
pub use refresh_token::RefreshToken;
pub use user::User;
