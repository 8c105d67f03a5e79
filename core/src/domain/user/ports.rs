use std::future::Future;

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        query::{ListCriteria, ListQuery, Paginated},
    },
    user::{
        entities::User,
        value_objects::{CreateUserInput, NewUser, UpdateUserInput},
    },
};

pub trait UserService: Send + Sync {
    fn get_users(
        &self,
        query: ListQuery,
    ) -> impl Future<Output = Result<Paginated<User>, CoreError>> + Send;

    fn get_user(&self, user_id: i32) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn create_user(
        &self,
        input: CreateUserInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn update_user(
        &self,
        input: UpdateUserInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn delete_user(&self, user_id: i32) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn restore_user(&self, user_id: i32) -> impl Future<Output = Result<User, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn list(
        &self,
        criteria: ListCriteria,
    ) -> impl Future<Output = Result<Paginated<User>, CoreError>> + Send;

    /// Soft-deleted rows are only returned when `include_deleted` is set.
    fn get_by_id(
        &self,
        user_id: i32,
        include_deleted: bool,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    /// Looks across active and soft-deleted rows.
    fn find_by_email(
        &self,
        email: String,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    /// Looks across active and soft-deleted rows.
    fn find_by_username(
        &self,
        username: String,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn create_user(&self, user: NewUser) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn update_user(&self, user: User) -> impl Future<Output = Result<User, CoreError>> + Send;
}
