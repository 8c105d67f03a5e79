use std::future::Future;

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        query::{ListCriteria, ListQuery, Paginated},
    },
    task::{
        entities::{Task, TaskDetails},
        value_objects::{CreateTaskInput, NewTask, UpdateTaskInput},
    },
};

pub trait TaskService: Send + Sync {
    fn get_tasks(
        &self,
        query: ListQuery,
    ) -> impl Future<Output = Result<Paginated<TaskDetails>, CoreError>> + Send;

    fn get_task(&self, task_id: i32) -> impl Future<Output = Result<TaskDetails, CoreError>> + Send;

    fn create_task(
        &self,
        input: CreateTaskInput,
    ) -> impl Future<Output = Result<TaskDetails, CoreError>> + Send;

    fn update_task(
        &self,
        input: UpdateTaskInput,
    ) -> impl Future<Output = Result<TaskDetails, CoreError>> + Send;

    fn delete_task(&self, task_id: i32) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn restore_task(
        &self,
        task_id: i32,
    ) -> impl Future<Output = Result<TaskDetails, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait TaskRepository: Send + Sync {
    fn list(
        &self,
        criteria: ListCriteria,
    ) -> impl Future<Output = Result<Paginated<TaskDetails>, CoreError>> + Send;

    fn get_by_id(
        &self,
        task_id: i32,
        include_deleted: bool,
    ) -> impl Future<Output = Result<Option<Task>, CoreError>> + Send;

    /// Active task with its associations.
    fn get_details(
        &self,
        task_id: i32,
    ) -> impl Future<Output = Result<Option<TaskDetails>, CoreError>> + Send;

    fn create_task(&self, task: NewTask) -> impl Future<Output = Result<Task, CoreError>> + Send;

    fn update_task(&self, task: Task) -> impl Future<Output = Result<Task, CoreError>> + Send;
}
