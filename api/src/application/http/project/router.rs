use super::handlers::{
    create_project::{__path_create_project, create_project},
    delete_project::{__path_delete_project, delete_project},
    get_project::{__path_get_project, get_project},
    get_projects::{__path_get_projects, get_projects},
    restore_project::{__path_restore_project, restore_project},
    update_project::{__path_update_project, update_project},
};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, patch},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_projects,
    get_project,
    create_project,
    update_project,
    delete_project,
    restore_project
))]
pub struct ProjectApiDoc;

pub fn project_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/projects"),
            get(get_projects).post(create_project),
        )
        .route(
            &format!("{root_path}/projects/{{id}}"),
            get(get_project)
                .patch(update_project)
                .delete(delete_project),
        )
        .route(
            &format!("{root_path}/projects/{{id}}/restore"),
            patch(restore_project),
        )
}
