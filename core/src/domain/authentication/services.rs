use tracing::{instrument, warn};

use crate::domain::{
    authentication::{ports::AuthService, value_objects::LoginInput},
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    project::ports::ProjectRepository,
    task::ports::TaskRepository,
    user::{entities::User, ports::UserRepository},
};

impl<U, P, T, H, HC> AuthService for Service<U, P, T, H, HC>
where
    U: UserRepository,
    P: ProjectRepository,
    T: TaskRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self, input), fields(identifier = %input.identifier))]
    async fn login(&self, input: LoginInput) -> Result<User, CoreError> {
        let identifier = input.identifier.trim().to_string();

        let user = if identifier.contains('@') {
            self.user_repository.find_by_email(identifier).await?
        } else {
            self.user_repository.find_by_username(identifier).await?
        };

        let Some(user) = user.filter(|u| !u.is_deleted()) else {
            warn!("login attempt for unknown or deleted user");
            return Err(CoreError::InvalidCredentials);
        };

        let valid = self
            .hasher_repository
            .verify_password(input.password, user.password_hash.clone())
            .await?;

        if !valid {
            warn!(user_id = user.id, "login attempt with wrong password");
            return Err(CoreError::InvalidCredentials);
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::test_support::{TestService, service},
        user::{ports::UserService, value_objects::CreateUserInput},
    };

    async fn seed(service: &TestService) -> User {
        service
            .create_user(CreateUserInput {
                first_name: "Barbara".into(),
                last_name: "Liskov".into(),
                email: "barbara@mit.edu".into(),
                username: "liskov".into(),
                password: "substitution".into(),
                role: None,
            })
            .await
            .unwrap()
    }

    fn login(identifier: &str, password: &str) -> LoginInput {
        LoginInput {
            identifier: identifier.into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn login_accepts_email_or_username() {
        let (service, _) = service();
        let user = seed(&service).await;

        let by_email = service
            .login(login("barbara@mit.edu", "substitution"))
            .await
            .unwrap();
        let by_username = service
            .login(login(" liskov ", "substitution"))
            .await
            .unwrap();

        assert_eq!(by_email.id, user.id);
        assert_eq!(by_username.id, user.id);
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_user_look_the_same() {
        let (service, _) = service();
        seed(&service).await;

        assert_eq!(
            service.login(login("liskov", "nope")).await,
            Err(CoreError::InvalidCredentials)
        );
        assert_eq!(
            service.login(login("nobody", "substitution")).await,
            Err(CoreError::InvalidCredentials)
        );
    }

    #[tokio::test]
    async fn deleted_user_cannot_login() {
        let (service, _) = service();
        let user = seed(&service).await;
        service.delete_user(user.id).await.unwrap();

        assert_eq!(
            service.login(login("liskov", "substitution")).await,
            Err(CoreError::InvalidCredentials)
        );
    }
}
