use crate::domain::{
    crypto::ports::HasherRepository, health::ports::HealthCheckRepository,
    project::ports::ProjectRepository, task::ports::TaskRepository,
    user::ports::UserRepository,
};

/// Holds every outbound port; the domain service traits are implemented on it.
#[derive(Clone)]
pub struct Service<U, P, T, H, HC>
where
    U: UserRepository,
    P: ProjectRepository,
    T: TaskRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
{
    pub(crate) user_repository: U,
    pub(crate) project_repository: P,
    pub(crate) task_repository: T,
    pub(crate) hasher_repository: H,
    pub(crate) health_check_repository: HC,
}

impl<U, P, T, H, HC> Service<U, P, T, H, HC>
where
    U: UserRepository,
    P: ProjectRepository,
    T: TaskRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
{
    pub fn new(
        user_repository: U,
        project_repository: P,
        task_repository: T,
        hasher_repository: H,
        health_check_repository: HC,
    ) -> Self {
        Self {
            user_repository,
            project_repository,
            task_repository,
            hasher_repository,
            health_check_repository,
        }
    }
}
