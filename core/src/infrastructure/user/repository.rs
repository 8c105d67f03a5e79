use std::collections::HashMap;

use sea_orm::{
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};
use tracing::error;

use crate::{
    domain::{
        common::{
            entities::app_errors::CoreError,
            query::{ListCriteria, Paginated},
        },
        user::{
            entities::{User, UserSummary},
            ports::UserRepository,
            schema::USER_SCHEMA,
            value_objects::NewUser,
        },
    },
    entity::users::{ActiveModel, Column, Entity},
    infrastructure::common::{
        condition::{apply_filters, apply_order, apply_pagination},
        unique_constraint_error, unique_violation,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Summaries for eager loading, soft-deleted users included.
pub(crate) async fn load_user_summaries(
    db: &DatabaseConnection,
    mut user_ids: Vec<i32>,
) -> Result<HashMap<i32, UserSummary>, CoreError> {
    user_ids.sort_unstable();
    user_ids.dedup();
    if user_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let users = Entity::find()
        .filter(Column::Id.is_in(user_ids))
        .all(db)
        .await
        .map_err(|e| {
            error!("Failed to load user summaries: {}", e);
            CoreError::InternalServerError
        })?;

    Ok(users
        .iter()
        .map(|model| (model.id, UserSummary::from(model)))
        .collect())
}

fn map_write_error(e: DbErr, action: &str) -> CoreError {
    if let Some(conflict) = unique_violation(&e).and_then(|m| unique_constraint_error(&m)) {
        return conflict;
    }
    error!("Failed to {} user: {}", action, e);
    CoreError::InternalServerError
}

impl UserRepository for PostgresUserRepository {
    async fn list(&self, criteria: ListCriteria) -> Result<Paginated<User>, CoreError> {
        let query = apply_filters(Entity::find(), &USER_SCHEMA, &criteria);

        let total = query.clone().count(&self.db).await.map_err(|e| {
            error!("Failed to count users: {}", e);
            CoreError::InternalServerError
        })?;

        let query = apply_order(query, &USER_SCHEMA, &criteria.order);
        let users = apply_pagination(query, &criteria)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list users: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(User::from)
            .collect::<Vec<User>>();

        Ok(Paginated::new(users, criteria.pagination, total))
    }

    async fn get_by_id(
        &self,
        user_id: i32,
        include_deleted: bool,
    ) -> Result<Option<User>, CoreError> {
        let mut query = Entity::find().filter(Column::Id.eq(user_id));
        if !include_deleted {
            query = query.filter(Column::DeletedAt.is_null());
        }

        let user = query
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(User::from);

        Ok(user)
    }

    async fn find_by_email(&self, email: String) -> Result<Option<User>, CoreError> {
        let user = Entity::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to find user by email: {}", e);
                CoreError::InternalServerError
            })?
            .map(User::from);

        Ok(user)
    }

    async fn find_by_username(&self, username: String) -> Result<Option<User>, CoreError> {
        let user = Entity::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to find user by username: {}", e);
                CoreError::InternalServerError
            })?
            .map(User::from);

        Ok(user)
    }

    async fn create_user(&self, user: NewUser) -> Result<User, CoreError> {
        let now = chrono::Utc::now().fixed_offset();

        let created = Entity::insert(ActiveModel {
            id: NotSet,
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            email: Set(user.email),
            username: Set(user.username),
            password_hash: Set(user.password_hash),
            role: Set(user.role.into()),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
        })
        .exec_with_returning(&self.db)
        .await
        .map_err(|e| map_write_error(e, "create"))?;

        Ok(User::from(created))
    }

    async fn update_user(&self, user: User) -> Result<User, CoreError> {
        let updated = Entity::update(ActiveModel {
            id: Set(user.id),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            email: Set(user.email),
            username: Set(user.username),
            password_hash: Set(user.password_hash),
            role: Set(user.role.into()),
            created_at: Set(user.created_at.fixed_offset()),
            updated_at: Set(user.updated_at.fixed_offset()),
            deleted_at: Set(user.deleted_at.map(|dt| dt.fixed_offset())),
        })
        .filter(Column::Id.eq(user.id))
        .exec(&self.db)
        .await
        .map_err(|e| map_write_error(e, "update"))?;

        Ok(User::from(updated))
    }
}
