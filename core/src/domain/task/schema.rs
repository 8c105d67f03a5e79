use crate::domain::{
    common::query::{
        order::SortDirection,
        schema::{Association, FieldDef, FieldKind, QuerySchema},
    },
    project::schema::PROJECT_SCHEMA,
    user::schema::USER_SCHEMA,
};

pub static TASK_SCHEMA: QuerySchema = QuerySchema {
    table: "tasks",
    primary_key: "id",
    fields: &[
        FieldDef::new("id", "id", FieldKind::Integer),
        FieldDef::new("title", "title", FieldKind::String),
        FieldDef::new("description", "description", FieldKind::String),
        FieldDef::new("type", "type", FieldKind::Enum),
        FieldDef::new("priority", "priority", FieldKind::Enum),
        FieldDef::new("status", "status", FieldKind::Enum),
        FieldDef::new("labels", "labels", FieldKind::StringArray),
        FieldDef::new("dueDate", "due_date", FieldKind::Timestamp),
        FieldDef::new("projectId", "project_id", FieldKind::Integer),
        FieldDef::new("reporterId", "reporter_id", FieldKind::Integer),
        FieldDef::new("assigneeId", "assignee_id", FieldKind::Integer),
        FieldDef::new("createdAt", "created_at", FieldKind::Timestamp),
        FieldDef::new("updatedAt", "updated_at", FieldKind::Timestamp),
        FieldDef::new("deletedAt", "deleted_at", FieldKind::Timestamp),
    ],
    associations: &[
        Association {
            alias: "Reporter",
            join_alias: "reporter",
            schema: &USER_SCHEMA,
        },
        Association {
            alias: "Assignee",
            join_alias: "assignee",
            schema: &USER_SCHEMA,
        },
        Association {
            alias: "Project",
            join_alias: "project",
            schema: &PROJECT_SCHEMA,
        },
    ],
    search: &[],
    default_order: ("title", SortDirection::Asc),
};
