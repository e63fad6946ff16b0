use serde::Deserialize;

use crate::db::projects::ProjectPayload;
use crate::error::FieldErrors;
use crate::models::{Project, ProjectStatus};

/// In-progress state of the admin project editor.
///
/// Multi-value fields (tags, features, team members, images) are built up
/// through the `add_*`/`remove_*` operations, which trim input and suppress
/// duplicates. Optional text fields stay as raw buffers here; empty ones are
/// dropped when the draft is turned into a write payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub features: Vec<String>,
    pub team_members: Vec<String>,
    pub status: ProjectStatus,
    pub repo_url: String,
    pub demo_url: String,
    pub client: String,
    pub duration: String,
    pub challenges: String,
    pub solution: String,
}

impl ProjectDraft {
    /// Seed the editor from an existing project for an edit session.
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            images: project.images.clone(),
            tags: project.tags.clone(),
            features: project.features.clone(),
            team_members: project.team_members.clone(),
            status: project.status,
            repo_url: project.repo_url.clone().unwrap_or_default(),
            demo_url: project.demo_url.clone().unwrap_or_default(),
            client: project.client.clone().unwrap_or_default(),
            duration: project.duration.clone().unwrap_or_default(),
            challenges: project.challenges.clone().unwrap_or_default(),
            solution: project.solution.clone().unwrap_or_default(),
        }
    }

    /// Tags have set semantics: trimmed, no empties, no duplicates.
    pub fn add_tag(&mut self, value: &str) {
        push_unique(&mut self.tags, value);
    }

    pub fn remove_tag(&mut self, value: &str) {
        self.tags.retain(|t| t != value);
    }

    pub fn add_feature(&mut self, value: &str) {
        push_unique(&mut self.features, value);
    }

    pub fn remove_feature(&mut self, value: &str) {
        self.features.retain(|f| f != value);
    }

    pub fn add_team_member(&mut self, value: &str) {
        push_unique(&mut self.team_members, value);
    }

    pub fn remove_team_member(&mut self, value: &str) {
        self.team_members.retain(|m| m != value);
    }

    /// Images are an ordered list; exact-duplicate URLs are suppressed at
    /// add time but removal is positional.
    pub fn add_image(&mut self, url: &str) {
        push_unique(&mut self.images, url);
    }

    pub fn remove_image(&mut self, index: usize) {
        if index < self.images.len() {
            self.images.remove(index);
        }
    }

    /// Checks the form invariants without mutating the draft. Returns an
    /// error map keyed by field name; empty means the draft is submittable.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.title.trim().is_empty() {
            errors.insert("title", "Title is required".to_string());
        }
        if self.description.trim().is_empty() {
            errors.insert("description", "Description is required".to_string());
        }
        if self.images.is_empty() {
            errors.insert("images", "At least one image is required".to_string());
        }
        if self.tags.is_empty() {
            errors.insert("tags", "At least one tag is required".to_string());
        }

        errors
    }

    /// Validates and converts into a store write payload. The first image
    /// becomes the cover (`image_url`); empty optional buffers are dropped.
    pub fn into_payload(self) -> Result<ProjectPayload, FieldErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        let image_url = self.images[0].clone();
        Ok(ProjectPayload {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            image_url,
            images: self.images,
            tags: self.tags,
            features: self.features,
            team_members: self.team_members,
            status: self.status,
            repo_url: none_if_empty(self.repo_url),
            demo_url: none_if_empty(self.demo_url),
            client: none_if_empty(self.client),
            duration: none_if_empty(self.duration),
            challenges: none_if_empty(self.challenges),
            solution: none_if_empty(self.solution),
        })
    }
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    let value = value.trim();
    if value.is_empty() || list.iter().any(|v| v == value) {
        return;
    }
    list.push(value.to_string());
}

fn none_if_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ProjectDraft {
        let mut draft = ProjectDraft {
            title: "Demo".to_string(),
            description: "A demo".to_string(),
            ..Default::default()
        };
        draft.add_image("http://x/1.png");
        draft.add_tag("React");
        draft
    }

    #[test]
    fn empty_draft_fails_validation_on_all_required_fields() {
        let errors = ProjectDraft::default().validate();
        assert!(errors.contains_key("title"));
        assert!(errors.contains_key("description"));
        assert!(errors.contains_key("images"));
        assert!(errors.contains_key("tags"));
    }

    #[test]
    fn missing_title_blocks_submission() {
        let mut draft = valid_draft();
        draft.title = "   ".to_string();
        let errors = draft.clone().into_payload().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key("title"));
    }

    #[test]
    fn missing_images_blocks_submission() {
        let mut draft = valid_draft();
        draft.remove_image(0);
        let errors = draft.into_payload().unwrap_err();
        assert!(errors.contains_key("images"));
    }

    #[test]
    fn validate_does_not_mutate() {
        let draft = valid_draft();
        let before = format!("{draft:?}");
        let _ = draft.validate();
        assert_eq!(before, format!("{draft:?}"));
    }

    #[test]
    fn duplicate_tag_is_added_once() {
        let mut draft = valid_draft();
        draft.add_tag("Rust");
        draft.add_tag("Rust");
        draft.add_tag("  Rust  ");
        assert_eq!(draft.tags, vec!["React", "Rust"]);
    }

    #[test]
    fn blank_tag_is_ignored() {
        let mut draft = valid_draft();
        draft.add_tag("   ");
        assert_eq!(draft.tags, vec!["React"]);
    }

    #[test]
    fn remove_then_add_tag_matches_single_fresh_add() {
        let mut a = valid_draft();
        a.add_tag("Rust");
        a.add_tag("Axum");
        a.remove_tag("Rust");
        a.add_tag("Rust");

        let mut b = valid_draft();
        b.add_tag("Axum");
        b.add_tag("Rust");

        assert_eq!(a.tags, b.tags);
    }

    #[test]
    fn duplicate_image_url_is_suppressed() {
        let mut draft = valid_draft();
        draft.add_image("http://x/1.png");
        draft.add_image("http://x/2.png");
        assert_eq!(draft.images, vec!["http://x/1.png", "http://x/2.png"]);
    }

    #[test]
    fn remove_image_is_positional() {
        let mut draft = valid_draft();
        draft.add_image("http://x/2.png");
        draft.add_image("http://x/3.png");
        draft.remove_image(1);
        assert_eq!(draft.images, vec!["http://x/1.png", "http://x/3.png"]);
        // Out-of-range removal is a no-op.
        draft.remove_image(10);
        assert_eq!(draft.images.len(), 2);
    }

    #[test]
    fn payload_cover_image_is_first_image() {
        let mut draft = valid_draft();
        draft.add_image("http://x/2.png");
        let payload = draft.into_payload().unwrap();
        assert_eq!(payload.image_url, "http://x/1.png");
        assert_eq!(payload.images, vec!["http://x/1.png", "http://x/2.png"]);
    }

    #[test]
    fn payload_drops_empty_optional_fields() {
        let mut draft = valid_draft();
        draft.repo_url = "  ".to_string();
        draft.demo_url = "https://demo.example".to_string();
        let payload = draft.into_payload().unwrap();
        assert_eq!(payload.repo_url, None);
        assert_eq!(payload.demo_url.as_deref(), Some("https://demo.example"));
        assert_eq!(payload.client, None);
    }

    #[test]
    fn edit_session_seeds_from_existing_project() {
        let payload = valid_draft().into_payload().unwrap();
        let project = Project {
            id: uuid::Uuid::now_v7(),
            title: payload.title,
            description: payload.description,
            image_url: payload.image_url,
            images: payload.images,
            tags: payload.tags,
            features: vec!["Search".to_string()],
            team_members: vec![],
            status: ProjectStatus::InProgress,
            repo_url: Some("https://git.example/demo".to_string()),
            demo_url: None,
            client: None,
            duration: None,
            challenges: None,
            solution: None,
            created_at: chrono::Utc::now(),
            updated_at: None,
        };

        let draft = ProjectDraft::from_project(&project);
        assert_eq!(draft.title, "Demo");
        assert_eq!(draft.status, ProjectStatus::InProgress);
        assert_eq!(draft.repo_url, "https://git.example/demo");
        assert_eq!(draft.demo_url, "");
        assert_eq!(draft.features, vec!["Search"]);
    }
}
