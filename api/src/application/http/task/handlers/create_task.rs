use axum::extract::State;
use tasktrack_core::domain::task::{
    entities::TaskDetails, ports::TaskService, value_objects::CreateTaskInput,
};

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::{Envelope, Response},
        },
        app_state::AppState,
    },
    task::validators::CreateTaskValidator,
};

#[utoipa::path(
    post,
    path = "",
    tag = "task",
    summary = "Create task",
    description = "Creates a task. Priority defaults to medium and status to todo.",
    request_body = CreateTaskValidator,
    responses(
        (status = 201, body = Envelope<TaskDetails>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Project, reporter or assignee not found")
    ),
)]
pub async fn create_task(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateTaskValidator>,
) -> Result<Response<TaskDetails>, ApiError> {
    let task = state
        .service
        .create_task(CreateTaskInput {
            title: payload.title,
            description: payload.description,
            task_type: payload.task_type,
            priority: payload.priority,
            status: payload.status,
            labels: payload.labels,
            due_date: payload.due_date,
            project_id: payload.project_id,
            reporter_id: payload.reporter_id,
            assignee_id: payload.assignee_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::created("Task created successfully", task))
}
