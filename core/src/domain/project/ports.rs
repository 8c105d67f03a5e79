use std::future::Future;

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        query::{ListCriteria, ListQuery, Paginated},
    },
    project::{
        entities::{Project, ProjectDetails},
        value_objects::{CreateProjectInput, NewProject, UpdateProjectInput},
    },
};

pub trait ProjectService: Send + Sync {
    fn get_projects(
        &self,
        query: ListQuery,
    ) -> impl Future<Output = Result<Paginated<ProjectDetails>, CoreError>> + Send;

    fn get_project(
        &self,
        project_id: i32,
    ) -> impl Future<Output = Result<ProjectDetails, CoreError>> + Send;

    fn create_project(
        &self,
        input: CreateProjectInput,
    ) -> impl Future<Output = Result<ProjectDetails, CoreError>> + Send;

    fn update_project(
        &self,
        input: UpdateProjectInput,
    ) -> impl Future<Output = Result<ProjectDetails, CoreError>> + Send;

    fn delete_project(&self, project_id: i32)
    -> impl Future<Output = Result<(), CoreError>> + Send;

    fn restore_project(
        &self,
        project_id: i32,
    ) -> impl Future<Output = Result<ProjectDetails, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ProjectRepository: Send + Sync {
    fn list(
        &self,
        criteria: ListCriteria,
    ) -> impl Future<Output = Result<Paginated<ProjectDetails>, CoreError>> + Send;

    fn get_by_id(
        &self,
        project_id: i32,
        include_deleted: bool,
    ) -> impl Future<Output = Result<Option<Project>, CoreError>> + Send;

    /// Active project with its owner.
    fn get_details(
        &self,
        project_id: i32,
    ) -> impl Future<Output = Result<Option<ProjectDetails>, CoreError>> + Send;

    fn find_by_title(
        &self,
        title: String,
    ) -> impl Future<Output = Result<Option<Project>, CoreError>> + Send;

    fn find_by_code(
        &self,
        code: String,
    ) -> impl Future<Output = Result<Option<Project>, CoreError>> + Send;

    fn create_project(
        &self,
        project: NewProject,
    ) -> impl Future<Output = Result<Project, CoreError>> + Send;

    fn update_project(
        &self,
        project: Project,
    ) -> impl Future<Output = Result<Project, CoreError>> + Send;
}
