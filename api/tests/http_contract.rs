use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use axum_test::TestServer;
use serde_json::{Value, json};
use tasktrack_api::application::http::{
    path::IdPath,
    query_extractor::ListQueryExtractor,
    server::api_entities::{
        api_error::{ApiError, ValidateJson},
        response::Response,
    },
    user::validators::CreateUserValidator,
};
use tasktrack_core::domain::common::entities::app_errors::CoreError;

async fn echo_id(IdPath(id): IdPath) -> Result<Response<i32>, ApiError> {
    Ok(Response::ok("Found", id))
}

async fn echo_query(
    ListQueryExtractor(query): ListQueryExtractor,
) -> Result<Response<Value>, ApiError> {
    let title = query
        .filter
        .get("title")
        .map(|f| json!({ "operator": f.operator.as_str(), "value": f.value }));

    Ok(Response::ok(
        "Listed",
        json!({
            "title": title,
            "search": query.search,
            "order": query.order,
            "all": query.all,
            "deleted": query.deleted,
            "offset": query.pagination.offset,
            "limit": query.pagination.limit,
        }),
    ))
}

async fn create(
    ValidateJson(payload): ValidateJson<CreateUserValidator>,
) -> Result<Response<String>, ApiError> {
    Ok(Response::created("Created", payload.username))
}

async fn missing() -> Result<Response<()>, ApiError> {
    Err(ApiError::from(CoreError::TaskNotFound))
}

fn server() -> TestServer {
    let app = Router::new()
        .route("/items", get(echo_query))
        .route("/items/{id}", get(echo_id))
        .route("/users", post(create))
        .route("/missing", get(missing));

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn numeric_id_is_wrapped_in_success_envelope() {
    let response = server().get("/items/7").await;

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "status": "success", "message": "Found", "data": 7 })
    );
}

#[tokio::test]
async fn non_numeric_id_is_rejected() {
    let server = server();

    for path in ["/items/abc", "/items/0", "/items/-3"] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body = response.json::<Value>();
        assert_eq!(body["status"], "error");
        assert_eq!(body["error"]["code"], "InvalidIdError");
    }
}

#[tokio::test]
async fn list_query_is_parsed_from_query_string() {
    let response = server()
        .get("/items")
        .add_query_param("filter[title][iLike]", "proj")
        .add_query_param("order", "-createdAt")
        .add_query_param("all", "yes")
        .add_query_param("limit", "0")
        .await;

    response.assert_status(StatusCode::OK);
    let data = response.json::<Value>()["data"].clone();
    assert_eq!(data["title"], json!({ "operator": "iLike", "value": "proj" }));
    assert_eq!(data["order"], "-createdAt");
    assert_eq!(data["all"], true);
    assert_eq!(data["deleted"], false);
    assert_eq!(data["offset"], 0);
    assert_eq!(data["limit"], 1);
}

#[tokio::test]
async fn unknown_filter_operator_is_a_validation_error() {
    let response = server()
        .get("/items")
        .add_query_param("filter[title][like]", "proj")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["code"], "ValidationError");
}

#[tokio::test]
async fn valid_body_is_created() {
    let response = server()
        .post("/users")
        .json(&json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "username": "ada_l",
            "password": "analytical"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["data"], "ada_l");
}

#[tokio::test]
async fn invalid_body_reports_field_errors() {
    let response = server()
        .post("/users")
        .json(&json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "nope",
            "username": "ada_l",
            "password": "short"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["status"], "error");
    assert_eq!(body["error"]["code"], "ValidationError");
    assert!(body["error"]["details"].get("email").is_some());
    assert!(body["error"]["details"].get("password").is_some());
}

#[tokio::test]
async fn core_errors_keep_their_status() {
    let response = server().get("/missing").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "status": "error",
            "message": "Task not found",
            "error": { "code": "TaskNotFoundError", "details": null }
        })
    );
}
