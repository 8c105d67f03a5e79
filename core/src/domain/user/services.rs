use tracing::{info, instrument};

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        query::{ListQuery, Paginated},
        services::Service,
    },
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    project::ports::ProjectRepository,
    task::ports::TaskRepository,
    user::{
        entities::{User, UserRole},
        ports::{UserRepository, UserService},
        schema::USER_SCHEMA,
        value_objects::{CreateUserInput, NewUser, UpdateUserInput},
    },
};

impl<U, P, T, H, HC> Service<U, P, T, H, HC>
where
    U: UserRepository,
    P: ProjectRepository,
    T: TaskRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
{
    /// Uniqueness is checked against every row, soft-deleted ones included,
    /// because the unique indexes cover them too.
    async fn ensure_user_unique(
        &self,
        email: Option<&str>,
        username: Option<&str>,
        except_id: Option<i32>,
    ) -> Result<(), CoreError> {
        if let Some(email) = email
            && let Some(existing) = self
                .user_repository
                .find_by_email(email.to_string())
                .await?
            && Some(existing.id) != except_id
        {
            return Err(CoreError::EmailExists);
        }

        if let Some(username) = username
            && let Some(existing) = self
                .user_repository
                .find_by_username(username.to_string())
                .await?
            && Some(existing.id) != except_id
        {
            return Err(CoreError::UsernameExists);
        }

        Ok(())
    }

    pub(crate) async fn ensure_user_exists(&self, user_id: i32) -> Result<(), CoreError> {
        self.user_repository
            .get_by_id(user_id, false)
            .await?
            .map(|_| ())
            .ok_or(CoreError::UserNotFound)
    }
}

impl<U, P, T, H, HC> UserService for Service<U, P, T, H, HC>
where
    U: UserRepository,
    P: ProjectRepository,
    T: TaskRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self))]
    async fn get_users(&self, query: ListQuery) -> Result<Paginated<User>, CoreError> {
        let criteria = query.into_criteria(&USER_SCHEMA)?;
        self.user_repository.list(criteria).await
    }

    #[instrument(skip(self))]
    async fn get_user(&self, user_id: i32) -> Result<User, CoreError> {
        self.user_repository
            .get_by_id(user_id, false)
            .await?
            .ok_or(CoreError::UserNotFound)
    }

    #[instrument(skip(self, input), fields(email = %input.email, username = %input.username))]
    async fn create_user(&self, input: CreateUserInput) -> Result<User, CoreError> {
        self.ensure_user_unique(Some(&input.email), Some(&input.username), None)
            .await?;

        let password_hash = self.hasher_repository.hash_password(input.password).await?;

        let user = self
            .user_repository
            .create_user(NewUser {
                first_name: input.first_name,
                last_name: input.last_name,
                email: input.email,
                username: input.username,
                password_hash,
                role: input.role.unwrap_or(UserRole::Member),
            })
            .await?;

        info!(user_id = user.id, "user created");
        Ok(user)
    }

    #[instrument(skip(self, input), fields(user_id = input.user_id))]
    async fn update_user(&self, input: UpdateUserInput) -> Result<User, CoreError> {
        let mut user = self
            .user_repository
            .get_by_id(input.user_id, false)
            .await?
            .ok_or(CoreError::UserNotFound)?;

        let email = input.email.filter(|email| *email != user.email);
        let username = input.username.filter(|username| *username != user.username);
        self.ensure_user_unique(email.as_deref(), username.as_deref(), Some(user.id))
            .await?;

        if let Some(first_name) = input.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = input.last_name {
            user.last_name = last_name;
        }
        if let Some(email) = email {
            user.email = email;
        }
        if let Some(username) = username {
            user.username = username;
        }
        if let Some(role) = input.role {
            user.role = role;
        }
        if let Some(password) = input.password {
            user.password_hash = self.hasher_repository.hash_password(password).await?;
        }
        user.updated_at = chrono::Utc::now();

        self.user_repository.update_user(user).await
    }

    #[instrument(skip(self))]
    async fn delete_user(&self, user_id: i32) -> Result<(), CoreError> {
        let mut user = self
            .user_repository
            .get_by_id(user_id, false)
            .await?
            .ok_or(CoreError::UserNotFound)?;

        user.soft_delete();
        self.user_repository.update_user(user).await?;

        info!(user_id, "user soft-deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn restore_user(&self, user_id: i32) -> Result<User, CoreError> {
        let mut user = self
            .user_repository
            .get_by_id(user_id, true)
            .await?
            .ok_or(CoreError::UserNotFound)?;

        user.restore()?;
        let user = self.user_repository.update_user(user).await?;

        info!(user_id, "user restored");
        Ok(user)
    }
}
