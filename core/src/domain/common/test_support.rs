//! In-memory implementations of the outbound ports for service tests.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        query::{
            DeletedScope, ListCriteria, Paginated,
            predicate::{Comparison, Operand, Predicate, ScalarValue, Term},
            schema::QuerySchema,
        },
        services::Service,
    },
    crypto::ports::HasherRepository,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
    project::{
        entities::{Project, ProjectDetails, ProjectSummary},
        ports::ProjectRepository,
        schema::PROJECT_SCHEMA,
        value_objects::NewProject,
    },
    task::{
        entities::{Task, TaskDetails},
        ports::TaskRepository,
        schema::TASK_SCHEMA,
        value_objects::NewTask,
    },
    user::{
        entities::{User, UserSummary},
        ports::UserRepository,
        schema::USER_SCHEMA,
        value_objects::NewUser,
    },
};

pub type TestService =
    Service<InMemoryStore, InMemoryStore, InMemoryStore, PlainHasher, StaticHealth>;

#[derive(Clone, Default)]
pub struct InMemoryStore {
    pub users: Arc<Mutex<Vec<User>>>,
    pub projects: Arc<Mutex<Vec<Project>>>,
    pub tasks: Arc<Mutex<Vec<Task>>>,
}

pub fn service() -> (TestService, InMemoryStore) {
    let store = InMemoryStore::default();
    let service = Service::new(
        store.clone(),
        store.clone(),
        store.clone(),
        PlainHasher,
        StaticHealth,
    );
    (service, store)
}

fn in_scope(deleted_at: Option<DateTime<Utc>>, scope: DeletedScope) -> bool {
    match scope {
        DeletedScope::Active => deleted_at.is_none(),
        DeletedScope::OnlyDeleted => deleted_at.is_some(),
        DeletedScope::All => true,
    }
}

fn paginate<T: Clone>(rows: Vec<T>, criteria: &ListCriteria) -> Paginated<T> {
    let total = rows.len() as u64;
    let items = rows
        .into_iter()
        .skip(criteria.pagination.offset as usize)
        .take(criteria.pagination.limit as usize)
        .collect();
    Paginated::new(items, criteria.pagination, total)
}

/// Evaluates a predicate against the JSON form of a row.
pub fn matches(predicate: &Predicate, schema: &QuerySchema, row: &Value) -> bool {
    match predicate {
        Predicate::And(children) => children.iter().all(|c| matches(c, schema, row)),
        Predicate::Or(children) => children.iter().any(|c| matches(c, schema, row)),
        Predicate::Term(term) => matches_term(term, schema, row),
    }
}

fn field_value<'a>(schema: &QuerySchema, column: &str, row: &'a Value) -> &'a Value {
    schema
        .fields
        .iter()
        .find(|f| f.column == column)
        .map(|f| &row[f.name])
        .unwrap_or(&Value::Null)
}

fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn scalar_eq(value: &Value, scalar: &ScalarValue) -> bool {
    match scalar {
        ScalarValue::Text(text) => as_text(value) == *text,
        ScalarValue::Integer(n) => value.as_i64() == Some(*n),
        ScalarValue::Timestamp(ts) => value
            .as_str()
            .and_then(|s| s.parse::<DateTime<Utc>>().ok())
            .is_some_and(|v| v == *ts),
    }
}

fn scalar_cmp(value: &Value, scalar: &ScalarValue) -> Option<std::cmp::Ordering> {
    match scalar {
        ScalarValue::Text(text) => Some(as_text(value).cmp(text)),
        ScalarValue::Integer(n) => value.as_i64().map(|v| v.cmp(n)),
        ScalarValue::Timestamp(ts) => value
            .as_str()
            .and_then(|s| s.parse::<DateTime<Utc>>().ok())
            .map(|v| v.cmp(ts)),
    }
}

fn array(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| items.iter().map(as_text).collect())
        .unwrap_or_default()
}

fn matches_term(term: &Term, schema: &QuerySchema, row: &Value) -> bool {
    let value = match &term.operand {
        Operand::Column(column) => field_value(schema, column.column, row).clone(),
        Operand::Concat(columns) => Value::String(
            columns
                .iter()
                .map(|c| as_text(field_value(schema, c.column, row)))
                .collect::<Vec<_>>()
                .join(" "),
        ),
    };

    match &term.comparison {
        Comparison::ILike(pattern) => {
            let needle = pattern.trim_matches('%').to_lowercase();
            as_text(&value).to_lowercase().contains(&needle)
        }
        Comparison::Eq(scalar) => scalar_eq(&value, scalar),
        Comparison::Ne(scalar) => !scalar_eq(&value, scalar),
        Comparison::In(scalars) => scalars.iter().any(|s| scalar_eq(&value, s)),
        Comparison::Contains(items) => {
            let values = array(&value);
            items.iter().all(|i| values.contains(i))
        }
        Comparison::Overlap(items) => {
            let values = array(&value);
            items.iter().any(|i| values.contains(i))
        }
        Comparison::Between(low, high) => {
            scalar_cmp(&value, low).is_some_and(|o| o.is_ge())
                && scalar_cmp(&value, high).is_some_and(|o| o.is_le())
        }
    }
}

fn filtered<T: serde::Serialize + Clone>(
    rows: &[T],
    deleted_at: impl Fn(&T) -> Option<DateTime<Utc>>,
    schema: &QuerySchema,
    criteria: &ListCriteria,
) -> Vec<T> {
    rows.iter()
        .filter(|row| in_scope(deleted_at(row), criteria.scope))
        .filter(|row| match &criteria.predicate {
            Some(predicate) => serde_json::to_value(row)
                .map(|json| matches(predicate, schema, &json))
                .unwrap_or(false),
            None => true,
        })
        .cloned()
        .collect()
}

impl UserRepository for InMemoryStore {
    async fn list(&self, criteria: ListCriteria) -> Result<Paginated<User>, CoreError> {
        let users = self.users.lock().unwrap();
        let rows = filtered(&users, |u| u.deleted_at, &USER_SCHEMA, &criteria);
        Ok(paginate(rows, &criteria))
    }

    async fn get_by_id(
        &self,
        user_id: i32,
        include_deleted: bool,
    ) -> Result<Option<User>, CoreError> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .find(|u| u.id == user_id && (include_deleted || !u.is_deleted()))
            .cloned())
    }

    async fn find_by_email(&self, email: String) -> Result<Option<User>, CoreError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_username(&self, username: String) -> Result<Option<User>, CoreError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, CoreError> {
        let mut users = self.users.lock().unwrap();
        let now = Utc::now();
        let created = User {
            id: users.len() as i32 + 1,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            username: user.username,
            password_hash: user.password_hash,
            role: user.role,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        users.push(created.clone());
        Ok(created)
    }

    async fn update_user(&self, user: User) -> Result<User, CoreError> {
        let mut users = self.users.lock().unwrap();
        let slot = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(CoreError::UserNotFound)?;
        *slot = user.clone();
        Ok(user)
    }
}

impl InMemoryStore {
    fn user_summary(&self, user_id: Option<i32>) -> Option<UserSummary> {
        let users = self.users.lock().unwrap();
        user_id.and_then(|id| users.iter().find(|u| u.id == id).map(UserSummary::from))
    }

    fn project_details(&self, project: Project) -> ProjectDetails {
        ProjectDetails {
            owner: self.user_summary(Some(project.owner_id)),
            project,
        }
    }

    fn task_details(&self, task: Task) -> TaskDetails {
        let project = {
            let projects = self.projects.lock().unwrap();
            projects
                .iter()
                .find(|p| p.id == task.project_id)
                .map(ProjectSummary::from)
        };
        TaskDetails {
            reporter: self.user_summary(Some(task.reporter_id)),
            assignee: self.user_summary(task.assignee_id),
            project,
            task,
        }
    }
}

impl ProjectRepository for InMemoryStore {
    async fn list(&self, criteria: ListCriteria) -> Result<Paginated<ProjectDetails>, CoreError> {
        let rows = {
            let projects = self.projects.lock().unwrap();
            filtered(&projects, |p| p.deleted_at, &PROJECT_SCHEMA, &criteria)
        };
        Ok(paginate(rows, &criteria).map(|p| self.project_details(p)))
    }

    async fn get_by_id(
        &self,
        project_id: i32,
        include_deleted: bool,
    ) -> Result<Option<Project>, CoreError> {
        let projects = self.projects.lock().unwrap();
        Ok(projects
            .iter()
            .find(|p| p.id == project_id && (include_deleted || !p.is_deleted()))
            .cloned())
    }

    async fn get_details(&self, project_id: i32) -> Result<Option<ProjectDetails>, CoreError> {
        let project = ProjectRepository::get_by_id(self, project_id, false).await?;
        Ok(project.map(|p| self.project_details(p)))
    }

    async fn find_by_title(&self, title: String) -> Result<Option<Project>, CoreError> {
        let projects = self.projects.lock().unwrap();
        Ok(projects.iter().find(|p| p.title == title).cloned())
    }

    async fn find_by_code(&self, code: String) -> Result<Option<Project>, CoreError> {
        let projects = self.projects.lock().unwrap();
        Ok(projects.iter().find(|p| p.code == code).cloned())
    }

    async fn create_project(&self, project: NewProject) -> Result<Project, CoreError> {
        let mut projects = self.projects.lock().unwrap();
        let now = Utc::now();
        let created = Project {
            id: projects.len() as i32 + 1,
            title: project.title,
            code: project.code,
            description: project.description,
            status: project.status,
            original_status: None,
            owner_id: project.owner_id,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        projects.push(created.clone());
        Ok(created)
    }

    async fn update_project(&self, project: Project) -> Result<Project, CoreError> {
        let mut projects = self.projects.lock().unwrap();
        let slot = projects
            .iter_mut()
            .find(|p| p.id == project.id)
            .ok_or(CoreError::ProjectNotFound)?;
        *slot = project.clone();
        Ok(project)
    }
}

impl TaskRepository for InMemoryStore {
    async fn list(&self, criteria: ListCriteria) -> Result<Paginated<TaskDetails>, CoreError> {
        let rows = {
            let tasks = self.tasks.lock().unwrap();
            filtered(&tasks, |t| t.deleted_at, &TASK_SCHEMA, &criteria)
        };
        Ok(paginate(rows, &criteria).map(|t| self.task_details(t)))
    }

    async fn get_by_id(&self, task_id: i32, include_deleted: bool) -> Result<Option<Task>, CoreError> {
        let tasks = self.tasks.lock().unwrap();
        Ok(tasks
            .iter()
            .find(|t| t.id == task_id && (include_deleted || !t.is_deleted()))
            .cloned())
    }

    async fn get_details(&self, task_id: i32) -> Result<Option<TaskDetails>, CoreError> {
        let task = TaskRepository::get_by_id(self, task_id, false).await?;
        Ok(task.map(|t| self.task_details(t)))
    }

    async fn create_task(&self, task: NewTask) -> Result<Task, CoreError> {
        let mut tasks = self.tasks.lock().unwrap();
        let now = Utc::now();
        let created = Task {
            id: tasks.len() as i32 + 1,
            title: task.title,
            description: task.description,
            task_type: task.task_type,
            priority: task.priority,
            status: task.status,
            original_status: None,
            labels: task.labels,
            due_date: task.due_date,
            project_id: task.project_id,
            reporter_id: task.reporter_id,
            assignee_id: task.assignee_id,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        tasks.push(created.clone());
        Ok(created)
    }

    async fn update_task(&self, task: Task) -> Result<Task, CoreError> {
        let mut tasks = self.tasks.lock().unwrap();
        let slot = tasks
            .iter_mut()
            .find(|t| t.id == task.id)
            .ok_or(CoreError::TaskNotFound)?;
        *slot = task.clone();
        Ok(task)
    }
}

/// Stores passwords reversed; good enough to tell hash from plain text.
pub struct PlainHasher;

impl HasherRepository for PlainHasher {
    async fn hash_password(&self, password: String) -> Result<String, CoreError> {
        Ok(password.chars().rev().collect())
    }

    async fn verify_password(&self, password: String, password_hash: String) -> Result<bool, CoreError> {
        Ok(password.chars().rev().collect::<String>() == password_hash)
    }
}

pub struct StaticHealth;

impl HealthCheckRepository for StaticHealth {
    async fn health(&self) -> Result<u64, CoreError> {
        Ok(1)
    }

    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        Ok(DatabaseHealthStatus {
            online: true,
            latency_ms: 1,
        })
    }
}
