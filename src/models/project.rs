use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a showcased project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "project_status", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Completed,
    InProgress,
    Archived,
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ProjectStatus::Completed => "completed",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Archived => "archived",
        };
        f.write_str(s)
    }
}

/// A portfolio project as stored in the `projects` collection.
///
/// `image_url` always mirrors `images[0]`; it is derived at submission time
/// so display components can read a single cover field. `updated_at` stays
/// NULL until the first update.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub features: Vec<String>,
    pub team_members: Vec<String>,
    pub status: ProjectStatus,
    pub repo_url: Option<String>,
    pub demo_url: Option<String>,
    pub client: Option<String>,
    pub duration: Option<String>,
    pub challenges: Option<String>,
    pub solution: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
