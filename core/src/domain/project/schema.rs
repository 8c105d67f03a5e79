use crate::domain::{
    common::query::{
        order::SortDirection,
        schema::{Association, FieldDef, FieldKind, QuerySchema},
    },
    user::schema::USER_SCHEMA,
};

pub static PROJECT_SCHEMA: QuerySchema = QuerySchema {
    table: "projects",
    primary_key: "id",
    fields: &[
        FieldDef::new("id", "id", FieldKind::Integer),
        FieldDef::new("title", "title", FieldKind::String),
        FieldDef::new("code", "code", FieldKind::String),
        FieldDef::new("description", "description", FieldKind::String),
        FieldDef::new("status", "status", FieldKind::Enum),
        FieldDef::new("ownerId", "owner_id", FieldKind::Integer),
        FieldDef::new("createdAt", "created_at", FieldKind::Timestamp),
        FieldDef::new("updatedAt", "updated_at", FieldKind::Timestamp),
        FieldDef::new("deletedAt", "deleted_at", FieldKind::Timestamp),
    ],
    associations: &[Association {
        alias: "Owner",
        join_alias: "owner",
        schema: &USER_SCHEMA,
    }],
    search: &[],
    default_order: ("title", SortDirection::Asc),
};
