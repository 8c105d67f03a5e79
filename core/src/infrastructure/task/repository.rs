use sea_orm::{
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QuerySelect, RelationTrait, sea_query::Alias,
};
use tracing::error;

use crate::{
    domain::{
        common::{
            entities::app_errors::CoreError,
            query::{ListCriteria, Paginated},
        },
        task::{
            entities::{Task, TaskDetails},
            ports::TaskRepository,
            schema::TASK_SCHEMA,
            value_objects::NewTask,
        },
    },
    entity::tasks::{ActiveModel, Column, Entity, Relation},
    infrastructure::{
        common::condition::{apply_filters, apply_order, apply_pagination, order_uses},
        project::repository::load_project_summaries,
        user::repository::load_user_summaries,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pub db: DatabaseConnection,
}

impl PostgresTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads reporter, assignee and project for a page of tasks in two queries.
    async fn with_relations(&self, tasks: Vec<Task>) -> Result<Vec<TaskDetails>, CoreError> {
        let user_ids = tasks
            .iter()
            .flat_map(|t| std::iter::once(t.reporter_id).chain(t.assignee_id))
            .collect();
        let users = load_user_summaries(&self.db, user_ids).await?;
        let projects =
            load_project_summaries(&self.db, tasks.iter().map(|t| t.project_id).collect()).await?;

        Ok(tasks
            .into_iter()
            .map(|task| TaskDetails {
                reporter: users.get(&task.reporter_id).cloned(),
                assignee: task.assignee_id.and_then(|id| users.get(&id).cloned()),
                project: projects.get(&task.project_id).cloned(),
                task,
            })
            .collect())
    }
}

impl TaskRepository for PostgresTaskRepository {
    async fn list(&self, criteria: ListCriteria) -> Result<Paginated<TaskDetails>, CoreError> {
        let query = apply_filters(Entity::find(), &TASK_SCHEMA, &criteria);

        let total = query.clone().count(&self.db).await.map_err(|e| {
            error!("Failed to count tasks: {}", e);
            CoreError::InternalServerError
        })?;

        let mut query = query;
        for (alias, relation) in [
            ("reporter", Relation::Reporter),
            ("assignee", Relation::Assignee),
            ("project", Relation::Project),
        ] {
            if order_uses(&criteria.order, alias) {
                query = query.join_as(JoinType::LeftJoin, relation.def(), Alias::new(alias));
            }
        }
        let query = apply_order(query, &TASK_SCHEMA, &criteria.order);

        let tasks = apply_pagination(query, &criteria)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list tasks: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Task::from)
            .collect::<Vec<Task>>();

        let items = self.with_relations(tasks).await?;
        Ok(Paginated::new(items, criteria.pagination, total))
    }

    async fn get_by_id(
        &self,
        task_id: i32,
        include_deleted: bool,
    ) -> Result<Option<Task>, CoreError> {
        let mut query = Entity::find().filter(Column::Id.eq(task_id));
        if !include_deleted {
            query = query.filter(Column::DeletedAt.is_null());
        }

        let task = query
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get task by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Task::from);

        Ok(task)
    }

    async fn get_details(&self, task_id: i32) -> Result<Option<TaskDetails>, CoreError> {
        let Some(task) = self.get_by_id(task_id, false).await? else {
            return Ok(None);
        };
        Ok(self.with_relations(vec![task]).await?.pop())
    }

    async fn create_task(&self, task: NewTask) -> Result<Task, CoreError> {
        let now = chrono::Utc::now().fixed_offset();

        let created = Entity::insert(ActiveModel {
            id: NotSet,
            title: Set(task.title),
            description: Set(task.description),
            task_type: Set(task.task_type.into()),
            priority: Set(task.priority.into()),
            status: Set(task.status.into()),
            original_status: Set(None),
            labels: Set(task.labels),
            due_date: Set(task.due_date.map(|dt| dt.fixed_offset())),
            project_id: Set(task.project_id),
            reporter_id: Set(task.reporter_id),
            assignee_id: Set(task.assignee_id),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
        })
        .exec_with_returning(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to create task: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Task::from(created))
    }

    async fn update_task(&self, task: Task) -> Result<Task, CoreError> {
        let updated = Entity::update(ActiveModel {
            id: Set(task.id),
            title: Set(task.title),
            description: Set(task.description),
            task_type: Set(task.task_type.into()),
            priority: Set(task.priority.into()),
            status: Set(task.status.into()),
            original_status: Set(task.original_status.map(Into::into)),
            labels: Set(task.labels),
            due_date: Set(task.due_date.map(|dt| dt.fixed_offset())),
            project_id: Set(task.project_id),
            reporter_id: Set(task.reporter_id),
            assignee_id: Set(task.assignee_id),
            created_at: Set(task.created_at.fixed_offset()),
            updated_at: Set(task.updated_at.fixed_offset()),
            deleted_at: Set(task.deleted_at.map(|dt| dt.fixed_offset())),
        })
        .filter(Column::Id.eq(task.id))
        .exec(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to update task: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Task::from(updated))
    }
}
