use crate::application::http::{
    authentication::router::AuthenticationApiDoc, health::HealthApiDoc,
    project::router::ProjectApiDoc, task::router::TaskApiDoc, user::router::UserApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "TaskTrack API"
    ),
    nest(
        (path = "/auth", api = AuthenticationApiDoc),
        (path = "/users", api = UserApiDoc),
        (path = "/projects", api = ProjectApiDoc),
        (path = "/tasks", api = TaskApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
