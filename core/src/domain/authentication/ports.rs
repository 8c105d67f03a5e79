use std::future::Future;

use crate::domain::{
    authentication::value_objects::LoginInput, common::entities::app_errors::CoreError,
    user::entities::User,
};

pub trait AuthService: Send + Sync {
    /// Checks credentials of an active user.
    fn login(&self, input: LoginInput) -> impl Future<Output = Result<User, CoreError>> + Send;
}
