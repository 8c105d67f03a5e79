use crate::{
    domain::project::entities::{Project, ProjectStatus, ProjectSummary},
    entity::{projects, sea_orm_active_enums::ProjectStatus as DbProjectStatus},
};

impl From<DbProjectStatus> for ProjectStatus {
    fn from(status: DbProjectStatus) -> Self {
        match status {
            DbProjectStatus::Planned => ProjectStatus::Planned,
            DbProjectStatus::Active => ProjectStatus::Active,
            DbProjectStatus::OnHold => ProjectStatus::OnHold,
            DbProjectStatus::Completed => ProjectStatus::Completed,
            DbProjectStatus::Archived => ProjectStatus::Archived,
        }
    }
}

impl From<ProjectStatus> for DbProjectStatus {
    fn from(status: ProjectStatus) -> Self {
        match status {
            ProjectStatus::Planned => DbProjectStatus::Planned,
            ProjectStatus::Active => DbProjectStatus::Active,
            ProjectStatus::OnHold => DbProjectStatus::OnHold,
            ProjectStatus::Completed => DbProjectStatus::Completed,
            ProjectStatus::Archived => DbProjectStatus::Archived,
        }
    }
}

impl From<projects::Model> for Project {
    fn from(model: projects::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            code: model.code,
            description: model.description,
            status: model.status.into(),
            original_status: model.original_status.map(ProjectStatus::from),
            owner_id: model.owner_id,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
            deleted_at: model.deleted_at.map(|dt| dt.to_utc()),
        }
    }
}

impl From<&projects::Model> for ProjectSummary {
    fn from(model: &projects::Model) -> Self {
        Self {
            id: model.id,
            title: model.title.clone(),
            code: model.code.clone(),
        }
    }
}
