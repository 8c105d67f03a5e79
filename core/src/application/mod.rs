use crate::{
    domain::common::{TaskTrackConfig, services::Service},
    infrastructure::{
        crypto::Argon2HasherRepository,
        db::postgres::{Postgres, PostgresConfig},
        health::PostgresHealthCheckRepository,
        project::PostgresProjectRepository,
        task::PostgresTaskRepository,
        user::PostgresUserRepository,
    },
};

pub type TaskTrackService = Service<
    PostgresUserRepository,
    PostgresProjectRepository,
    PostgresTaskRepository,
    Argon2HasherRepository,
    PostgresHealthCheckRepository,
>;

pub async fn create_service(config: TaskTrackConfig) -> Result<TaskTrackService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;

    Ok(Service::new(
        PostgresUserRepository::new(postgres.get_db()),
        PostgresProjectRepository::new(postgres.get_db()),
        PostgresTaskRepository::new(postgres.get_db()),
        Argon2HasherRepository::new(),
        PostgresHealthCheckRepository::new(postgres.get_db()),
    ))
}
