use chrono::Utc;
use tracing::{info, instrument};

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        query::{ListQuery, Paginated},
        services::Service,
    },
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    project::{
        entities::{ProjectDetails, ProjectStatus},
        ports::{ProjectRepository, ProjectService},
        schema::PROJECT_SCHEMA,
        value_objects::{CreateProjectInput, NewProject, UpdateProjectInput},
    },
    task::ports::TaskRepository,
    user::ports::UserRepository,
};

impl<U, P, T, H, HC> Service<U, P, T, H, HC>
where
    U: UserRepository,
    P: ProjectRepository,
    T: TaskRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
{
    async fn ensure_project_unique(
        &self,
        title: Option<&str>,
        code: Option<&str>,
        except_id: Option<i32>,
    ) -> Result<(), CoreError> {
        if let Some(title) = title
            && let Some(existing) = self
                .project_repository
                .find_by_title(title.to_string())
                .await?
            && Some(existing.id) != except_id
        {
            return Err(CoreError::ProjectTitleExists);
        }

        if let Some(code) = code
            && let Some(existing) = self
                .project_repository
                .find_by_code(code.to_string())
                .await?
            && Some(existing.id) != except_id
        {
            return Err(CoreError::ProjectCodeExists);
        }

        Ok(())
    }

    pub(crate) async fn ensure_project_exists(&self, project_id: i32) -> Result<(), CoreError> {
        self.project_repository
            .get_by_id(project_id, false)
            .await?
            .map(|_| ())
            .ok_or(CoreError::ProjectNotFound)
    }

    async fn project_details(&self, project_id: i32) -> Result<ProjectDetails, CoreError> {
        self.project_repository
            .get_details(project_id)
            .await?
            .ok_or(CoreError::ProjectNotFound)
    }
}

impl<U, P, T, H, HC> ProjectService for Service<U, P, T, H, HC>
where
    U: UserRepository,
    P: ProjectRepository,
    T: TaskRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self))]
    async fn get_projects(&self, query: ListQuery) -> Result<Paginated<ProjectDetails>, CoreError> {
        let criteria = query.into_criteria(&PROJECT_SCHEMA)?;
        self.project_repository.list(criteria).await
    }

    #[instrument(skip(self))]
    async fn get_project(&self, project_id: i32) -> Result<ProjectDetails, CoreError> {
        self.project_details(project_id).await
    }

    #[instrument(skip(self, input), fields(code = %input.code))]
    async fn create_project(&self, input: CreateProjectInput) -> Result<ProjectDetails, CoreError> {
        self.ensure_project_unique(Some(&input.title), Some(&input.code), None)
            .await?;
        self.ensure_user_exists(input.owner_id).await?;

        let project = self
            .project_repository
            .create_project(NewProject {
                title: input.title,
                code: input.code,
                description: input.description,
                status: input.status.unwrap_or(ProjectStatus::Planned),
                owner_id: input.owner_id,
            })
            .await?;

        info!(project_id = project.id, "project created");
        self.project_details(project.id).await
    }

    #[instrument(skip(self, input), fields(project_id = input.project_id))]
    async fn update_project(&self, input: UpdateProjectInput) -> Result<ProjectDetails, CoreError> {
        let mut project = self
            .project_repository
            .get_by_id(input.project_id, false)
            .await?
            .ok_or(CoreError::ProjectNotFound)?;

        let title = input.title.filter(|title| *title != project.title);
        let code = input.code.filter(|code| *code != project.code);
        self.ensure_project_unique(title.as_deref(), code.as_deref(), Some(project.id))
            .await?;

        if let Some(owner_id) = input.owner_id {
            self.ensure_user_exists(owner_id).await?;
            project.owner_id = owner_id;
        }
        if let Some(title) = title {
            project.title = title;
        }
        if let Some(code) = code {
            project.code = code;
        }
        if let Some(description) = input.description {
            project.description = Some(description);
        }
        if let Some(status) = input.status {
            project.status = status;
        }
        project.updated_at = Utc::now();

        let project = self.project_repository.update_project(project).await?;
        self.project_details(project.id).await
    }

    #[instrument(skip(self))]
    async fn delete_project(&self, project_id: i32) -> Result<(), CoreError> {
        let mut project = self
            .project_repository
            .get_by_id(project_id, false)
            .await?
            .ok_or(CoreError::ProjectNotFound)?;

        project.soft_delete();
        self.project_repository.update_project(project).await?;

        info!(project_id, "project archived");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn restore_project(&self, project_id: i32) -> Result<ProjectDetails, CoreError> {
        let mut project = self
            .project_repository
            .get_by_id(project_id, true)
            .await?
            .ok_or(CoreError::ProjectNotFound)?;

        project.restore()?;
        let project = self.project_repository.update_project(project).await?;

        info!(project_id, status = %project.status, "project restored");
        self.project_details(project.id).await
    }
}
