use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{common::entities::app_errors::CoreError, user::entities::UserSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Planned,
    Active,
    OnHold,
    Completed,
    Archived,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planned => "planned",
            ProjectStatus::Active => "active",
            ProjectStatus::OnHold => "on_hold",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planned" => Ok(ProjectStatus::Planned),
            "active" => Ok(ProjectStatus::Active),
            "on_hold" => Ok(ProjectStatus::OnHold),
            "completed" => Ok(ProjectStatus::Completed),
            "archived" => Ok(ProjectStatus::Archived),
            _ => Err(CoreError::Validation(format!("unknown project status `{s}`"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub code: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub original_status: Option<ProjectStatus>,
    pub owner_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Project {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Archives the project, remembering the status it had.
    pub fn soft_delete(&mut self) {
        let now = Utc::now();
        self.original_status = Some(self.status);
        self.status = ProjectStatus::Archived;
        self.deleted_at = Some(now);
        self.updated_at = now;
    }

    pub fn restore(&mut self) -> Result<(), CoreError> {
        if self.deleted_at.is_none() {
            return Err(CoreError::NotDeleted);
        }
        self.status = self.original_status.take().unwrap_or(ProjectStatus::Active);
        self.deleted_at = None;
        self.updated_at = Utc::now();
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub id: i32,
    pub title: String,
    pub code: String,
}

impl From<&Project> for ProjectSummary {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            title: project.title.clone(),
            code: project.code.clone(),
        }
    }
}

/// A project with its owner eager-loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetails {
    #[serde(flatten)]
    pub project: Project,
    pub owner: Option<UserSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(status: ProjectStatus) -> Project {
        let now = Utc::now();
        Project {
            id: 3,
            title: "Apollo".into(),
            code: "APL".into(),
            description: None,
            status,
            original_status: None,
            owner_id: 1,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    #[test]
    fn delete_then_restore_keeps_status() {
        let mut project = project(ProjectStatus::OnHold);

        project.soft_delete();
        assert_eq!(project.status, ProjectStatus::Archived);
        assert_eq!(project.original_status, Some(ProjectStatus::OnHold));
        assert!(project.is_deleted());

        project.restore().unwrap();
        assert_eq!(project.status, ProjectStatus::OnHold);
        assert_eq!(project.original_status, None);
        assert!(!project.is_deleted());
    }

    #[test]
    fn restoring_active_project_fails_untouched() {
        let mut project = project(ProjectStatus::Active);
        let before = project.clone();
        assert_eq!(project.restore(), Err(CoreError::NotDeleted));
        assert_eq!(project, before);
    }

    #[test]
    fn details_flatten_project_fields() {
        let details = ProjectDetails {
            project: project(ProjectStatus::Active),
            owner: None,
        };
        let json = serde_json::to_value(details).unwrap();
        assert_eq!(json["code"], "APL");
        assert_eq!(json["ownerId"], 1);
        assert!(json["owner"].is_null());
    }
}
