use super::entities::ProjectStatus;

#[derive(Debug, Clone)]
pub struct CreateProjectInput {
    pub title: String,
    pub code: String,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub owner_id: i32,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProjectInput {
    pub project_id: i32,
    pub title: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub owner_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub code: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub owner_id: i32,
}
