use super::handlers::{
    create_task::{__path_create_task, create_task},
    delete_task::{__path_delete_task, delete_task},
    get_task::{__path_get_task, get_task},
    get_tasks::{__path_get_tasks, get_tasks},
    replace_task::{__path_replace_task, replace_task},
    restore_task::{__path_restore_task, restore_task},
    update_task::{__path_update_task, update_task},
};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, patch},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_tasks,
    get_task,
    create_task,
    update_task,
    replace_task,
    delete_task,
    restore_task
))]
pub struct TaskApiDoc;

pub fn task_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/tasks"),
            get(get_tasks).post(create_task),
        )
        .route(
            &format!("{root_path}/tasks/{{id}}"),
            get(get_task)
                .patch(update_task)
                .put(replace_task)
                .delete(delete_task),
        )
        .route(
            &format!("{root_path}/tasks/{{id}}/restore"),
            patch(restore_task),
        )
}
