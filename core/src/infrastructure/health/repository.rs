use std::time::Instant;

use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, Statement};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
};

#[derive(Debug, Clone)]
pub struct PostgresHealthCheckRepository {
    pub db: DatabaseConnection,
}

impl PostgresHealthCheckRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn ping(&self) -> Result<u64, CoreError> {
        let start = Instant::now();
        self.db
            .execute(Statement::from_string(DbBackend::Postgres, "SELECT 1"))
            .await
            .map_err(|e| {
                error!("Database health check failed: {}", e);
                CoreError::InternalServerError
            })?;
        Ok(start.elapsed().as_millis() as u64)
    }
}

impl HealthCheckRepository for PostgresHealthCheckRepository {
    async fn health(&self) -> Result<u64, CoreError> {
        self.ping().await
    }

    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        Ok(match self.ping().await {
            Ok(latency_ms) => DatabaseHealthStatus {
                online: true,
                latency_ms,
            },
            Err(_) => DatabaseHealthStatus {
                online: false,
                latency_ms: 0,
            },
        })
    }
}
