use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    project::ports::ProjectRepository,
    task::ports::TaskRepository,
    user::ports::UserRepository,
};

impl<U, P, T, H, HC> HealthCheckService for Service<U, P, T, H, HC>
where
    U: UserRepository,
    P: ProjectRepository,
    T: TaskRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
{
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
