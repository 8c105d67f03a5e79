use std::collections::HashMap;

use sea_orm::{
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QuerySelect, RelationTrait, sea_query::Alias,
};
use tracing::error;

use crate::{
    domain::{
        common::{
            entities::app_errors::CoreError,
            query::{ListCriteria, Paginated},
        },
        project::{
            entities::{Project, ProjectDetails, ProjectSummary},
            ports::ProjectRepository,
            schema::PROJECT_SCHEMA,
            value_objects::NewProject,
        },
    },
    entity::projects::{ActiveModel, Column, Entity, Relation},
    infrastructure::{
        common::{
            condition::{apply_filters, apply_order, apply_pagination, order_uses},
            unique_constraint_error, unique_violation,
        },
        user::repository::load_user_summaries,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresProjectRepository {
    pub db: DatabaseConnection,
}

impl PostgresProjectRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn with_owners(&self, projects: Vec<Project>) -> Result<Vec<ProjectDetails>, CoreError> {
        let owners =
            load_user_summaries(&self.db, projects.iter().map(|p| p.owner_id).collect()).await?;

        Ok(projects
            .into_iter()
            .map(|project| ProjectDetails {
                owner: owners.get(&project.owner_id).cloned(),
                project,
            })
            .collect())
    }

    async fn find_one(&self, column: Column, value: String) -> Result<Option<Project>, CoreError> {
        let project = Entity::find()
            .filter(column.eq(value))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to find project: {}", e);
                CoreError::InternalServerError
            })?
            .map(Project::from);

        Ok(project)
    }
}

/// Summaries for eager loading, archived projects included.
pub(crate) async fn load_project_summaries(
    db: &DatabaseConnection,
    mut project_ids: Vec<i32>,
) -> Result<HashMap<i32, ProjectSummary>, CoreError> {
    project_ids.sort_unstable();
    project_ids.dedup();
    if project_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let projects = Entity::find()
        .filter(Column::Id.is_in(project_ids))
        .all(db)
        .await
        .map_err(|e| {
            error!("Failed to load project summaries: {}", e);
            CoreError::InternalServerError
        })?;

    Ok(projects
        .iter()
        .map(|model| (model.id, ProjectSummary::from(model)))
        .collect())
}

fn map_write_error(e: DbErr, action: &str) -> CoreError {
    if let Some(conflict) = unique_violation(&e).and_then(|m| unique_constraint_error(&m)) {
        return conflict;
    }
    error!("Failed to {} project: {}", action, e);
    CoreError::InternalServerError
}

impl ProjectRepository for PostgresProjectRepository {
    async fn list(&self, criteria: ListCriteria) -> Result<Paginated<ProjectDetails>, CoreError> {
        let query = apply_filters(Entity::find(), &PROJECT_SCHEMA, &criteria);

        let total = query.clone().count(&self.db).await.map_err(|e| {
            error!("Failed to count projects: {}", e);
            CoreError::InternalServerError
        })?;

        let mut query = query;
        if order_uses(&criteria.order, "owner") {
            query = query.join_as(JoinType::LeftJoin, Relation::Owner.def(), Alias::new("owner"));
        }
        let query = apply_order(query, &PROJECT_SCHEMA, &criteria.order);

        let projects = apply_pagination(query, &criteria)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list projects: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Project::from)
            .collect::<Vec<Project>>();

        let items = self.with_owners(projects).await?;
        Ok(Paginated::new(items, criteria.pagination, total))
    }

    async fn get_by_id(
        &self,
        project_id: i32,
        include_deleted: bool,
    ) -> Result<Option<Project>, CoreError> {
        let mut query = Entity::find().filter(Column::Id.eq(project_id));
        if !include_deleted {
            query = query.filter(Column::DeletedAt.is_null());
        }

        let project = query
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get project by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Project::from);

        Ok(project)
    }

    async fn get_details(&self, project_id: i32) -> Result<Option<ProjectDetails>, CoreError> {
        let Some(project) = self.get_by_id(project_id, false).await? else {
            return Ok(None);
        };
        Ok(self.with_owners(vec![project]).await?.pop())
    }

    async fn find_by_title(&self, title: String) -> Result<Option<Project>, CoreError> {
        self.find_one(Column::Title, title).await
    }

    async fn find_by_code(&self, code: String) -> Result<Option<Project>, CoreError> {
        self.find_one(Column::Code, code).await
    }

    async fn create_project(&self, project: NewProject) -> Result<Project, CoreError> {
        let now = chrono::Utc::now().fixed_offset();

        let created = Entity::insert(ActiveModel {
            id: NotSet,
            title: Set(project.title),
            code: Set(project.code),
            description: Set(project.description),
            status: Set(project.status.into()),
            original_status: Set(None),
            owner_id: Set(project.owner_id),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
        })
        .exec_with_returning(&self.db)
        .await
        .map_err(|e| map_write_error(e, "create"))?;

        Ok(Project::from(created))
    }

    async fn update_project(&self, project: Project) -> Result<Project, CoreError> {
        let updated = Entity::update(ActiveModel {
            id: Set(project.id),
            title: Set(project.title),
            code: Set(project.code),
            description: Set(project.description),
            status: Set(project.status.into()),
            original_status: Set(project.original_status.map(Into::into)),
            owner_id: Set(project.owner_id),
            created_at: Set(project.created_at.fixed_offset()),
            updated_at: Set(project.updated_at.fixed_offset()),
            deleted_at: Set(project.deleted_at.map(|dt| dt.fixed_offset())),
        })
        .filter(Column::Id.eq(project.id))
        .exec(&self.db)
        .await
        .map_err(|e| map_write_error(e, "update"))?;

        Ok(Project::from(updated))
    }
}
