use crate::{
    domain::user::entities::{User, UserRole, UserSummary},
    entity::{sea_orm_active_enums::UserRole as DbUserRole, users},
};

impl From<DbUserRole> for UserRole {
    fn from(role: DbUserRole) -> Self {
        match role {
            DbUserRole::Admin => UserRole::Admin,
            DbUserRole::Manager => UserRole::Manager,
            DbUserRole::Member => UserRole::Member,
        }
    }
}

impl From<UserRole> for DbUserRole {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Admin => DbUserRole::Admin,
            UserRole::Manager => DbUserRole::Manager,
            UserRole::Member => DbUserRole::Member,
        }
    }
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            username: model.username,
            password_hash: model.password_hash,
            role: model.role.into(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
            deleted_at: model.deleted_at.map(|dt| dt.to_utc()),
        }
    }
}

impl From<&users::Model> for UserSummary {
    fn from(model: &users::Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name.clone(),
            last_name: model.last_name.clone(),
            email: model.email.clone(),
            username: model.username.clone(),
            role: model.role.clone().into(),
        }
    }
}
