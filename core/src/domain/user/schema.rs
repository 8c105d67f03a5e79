use crate::domain::common::query::{
    order::SortDirection,
    schema::{FieldDef, FieldKind, QuerySchema, SearchTarget},
};

/// Queryable user fields. `password_hash` is deliberately absent.
pub static USER_SCHEMA: QuerySchema = QuerySchema {
    table: "users",
    primary_key: "id",
    fields: &[
        FieldDef::new("id", "id", FieldKind::Integer),
        FieldDef::new("firstName", "first_name", FieldKind::String),
        FieldDef::new("lastName", "last_name", FieldKind::String),
        FieldDef::new("email", "email", FieldKind::String),
        FieldDef::new("username", "username", FieldKind::String),
        FieldDef::new("role", "role", FieldKind::Enum),
        FieldDef::new("createdAt", "created_at", FieldKind::Timestamp),
        FieldDef::new("updatedAt", "updated_at", FieldKind::Timestamp),
        FieldDef::new("deletedAt", "deleted_at", FieldKind::Timestamp),
    ],
    associations: &[],
    search: &[
        SearchTarget::Concat(&["firstName", "lastName"]),
        SearchTarget::Field("email"),
        SearchTarget::Field("username"),
        SearchTarget::Field("role"),
    ],
    default_order: ("email", SortDirection::Asc),
};
