use super::handlers::{
    create_user::{__path_create_user, create_user},
    delete_user::{__path_delete_user, delete_user},
    get_user::{__path_get_user, get_user},
    get_users::{__path_get_users, get_users},
    replace_user::{__path_replace_user, replace_user},
    restore_user::{__path_restore_user, restore_user},
    update_user::{__path_update_user, update_user},
};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, patch},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_users,
    get_user,
    create_user,
    update_user,
    replace_user,
    delete_user,
    restore_user
))]
pub struct UserApiDoc;

pub fn user_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/users"),
            get(get_users).post(create_user),
        )
        .route(
            &format!("{root_path}/users/{{id}}"),
            get(get_user)
                .patch(update_user)
                .put(replace_user)
                .delete(delete_user),
        )
        .route(
            &format!("{root_path}/users/{{id}}/restore"),
            patch(restore_user),
        )
}
