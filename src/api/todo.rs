use crate::domain::todo::driving_ports::TodoError;
use crate::dto::err_resps;
use crate::external_connections::ExternalConnectivity;
use crate::routing_utils::{
    GenericErrorResponse, Json, NotFoundErrorResponse, ValidationErrorResponse,
};
use crate::{AppState, SharedData, domain, dto, persistence};
use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::ErrorResponse;
use axum::routing::{delete, get, patch, post, put};
use std::sync::Arc;
use tracing::{error, info};
use utoipa::OpenApi;
use validator::Validate;

/// Defines the OpenAPI documentation for the todo API
#[derive(OpenApi)]
#[openapi(paths(list_todos, create_todo, update_todo, delete_todo))]
pub struct TodoApi;

/// Constant used to group todo endpoints in OpenAPI documentation
pub const TODO_API_GROUP: &str = "Todos";

/// Adds the CRUD routes for the todo collection to the application router
pub fn todo_routes() -> Router<Arc<SharedData>> {
    Router::new()
        .route(
            "/",
            get(|State(app_state): AppState| async move {
                let mut ext_cxn = app_state.ext_cxn.clone();
                let todo_service = domain::todo::TodoService {};

                list_todos(&mut ext_cxn, &todo_service).await
            }),
        )
        .route(
            "/",
            post(
                |State(app_state): AppState, Json(new_todo): Json<dto::NewTodo>| async move {
                    let mut ext_cxn = app_state.ext_cxn.clone();
                    let todo_service = domain::todo::TodoService {};

                    create_todo(new_todo, &mut ext_cxn, &todo_service).await
                },
            ),
        )
        .route(
            "/:todo_id",
            put(
                |State(app_state): AppState,
                 Path(todo_id): Path<i32>,
                 Json(update): Json<dto::UpdateTodo>| async move {
                    let mut ext_cxn = app_state.ext_cxn.clone();
                    let todo_service = domain::todo::TodoService {};

                    update_todo(todo_id, update, &mut ext_cxn, &todo_service).await
                },
            ),
        )
        .route(
            "/:todo_id",
            patch(
                |State(app_state): AppState,
                 Path(todo_id): Path<i32>,
                 Json(update): Json<dto::UpdateTodo>| async move {
                    let mut ext_cxn = app_state.ext_cxn.clone();
                    let todo_service = domain::todo::TodoService {};

                    update_todo(todo_id, update, &mut ext_cxn, &todo_service).await
                },
            ),
        )
        .route(
            "/:todo_id",
            delete(
                |State(app_state): AppState, Path(todo_id): Path<i32>| async move {
                    let mut ext_cxn = app_state.ext_cxn.clone();
                    let todo_service = domain::todo::TodoService {};

                    delete_todo(todo_id, &mut ext_cxn, &todo_service).await
                },
            ),
        )
}

/// Retrieves every todo in the collection
#[utoipa::path(
    get,
    path = "/api/todos",
    tag = TODO_API_GROUP,
    responses(
        (status = 200, description = "The full todo list", body = Vec<dto::TodoItem>),
        (status = 500, response = err_resps::BasicError500),
    ),
)]
async fn list_todos(
    ext_cxn: &mut impl ExternalConnectivity,
    todo_service: &impl domain::todo::driving_ports::TodoPort,
) -> Result<Json<Vec<dto::TodoItem>>, ErrorResponse> {
    info!("Requested todo list");
    let todo_reader = persistence::db_todo_driven_ports::DbTodoReader {};

    let todos_result = todo_service.all_todos(&mut *ext_cxn, &todo_reader).await;
    match todos_result {
        Ok(todos) => Ok(Json(todos.into_iter().map(dto::TodoItem::from).collect())),
        Err(db_err) => {
            error!("Could not list todos: {db_err}");
            Err(GenericErrorResponse(db_err).into())
        }
    }
}

/// Creates a new todo with the given title
#[utoipa::path(
    post,
    path = "/api/todos",
    tag = TODO_API_GROUP,
    request_body = dto::NewTodo,
    responses(
        (status = 201, description = "Todo was created", body = dto::InsertedTodo),
        (status = 400, response = err_resps::BasicError400),
        (status = 500, response = err_resps::BasicError500),
    ),
)]
async fn create_todo(
    new_todo: dto::NewTodo,
    ext_cxn: &mut impl ExternalConnectivity,
    todo_service: &impl domain::todo::driving_ports::TodoPort,
) -> Result<(StatusCode, Json<dto::InsertedTodo>), ErrorResponse> {
    info!("Attempt to create todo: {new_todo}");
    new_todo.validate().map_err(ValidationErrorResponse::from)?;

    let domain_todo = domain::todo::NewTodo::from(new_todo);
    let todo_writer = persistence::db_todo_driven_ports::DbTodoWriter {};

    let creation_result = todo_service
        .create_todo(&domain_todo, &mut *ext_cxn, &todo_writer)
        .await;
    match creation_result {
        Ok(new_id) => Ok((StatusCode::CREATED, Json(dto::InsertedTodo { id: new_id }))),
        Err(db_err) => {
            error!("Todo create failure: {db_err}");
            Err(GenericErrorResponse(db_err).into())
        }
    }
}

/// Partially updates a todo's title and completion status
#[utoipa::path(
    patch,
    path = "/api/todos/{todo_id}",
    tag = TODO_API_GROUP,
    params(
        ("todo_id" = i32, Path, description = "ID of the todo to update"),
    ),
    request_body = dto::UpdateTodo,
    responses(
        (status = 200, description = "Todo was updated"),
        (status = 400, response = err_resps::BasicError400),
        (status = 404, response = err_resps::BasicError404),
        (status = 500, response = err_resps::BasicError500),
    ),
)]
async fn update_todo(
    todo_id: i32,
    update: dto::UpdateTodo,
    ext_cxn: &mut impl ExternalConnectivity,
    todo_service: &impl domain::todo::driving_ports::TodoPort,
) -> Result<StatusCode, ErrorResponse> {
    info!("Updating todo {todo_id}");
    update.validate().map_err(ValidationErrorResponse::from)?;

    let domain_update = domain::todo::UpdateTodo::from(update);
    let todo_writer = persistence::db_todo_driven_ports::DbTodoWriter {};

    let update_result = todo_service
        .update_todo(todo_id, &domain_update, &mut *ext_cxn, &todo_writer)
        .await;
    match update_result {
        Ok(()) => Ok(StatusCode::OK),
        // Not-found isn't a server fault, so it doesn't get logged as an error
        Err(TodoError::NotFound) => Err(NotFoundErrorResponse.into()),
        Err(TodoError::PortError(db_err)) => {
            error!("Todo update failure: {db_err}");
            Err(GenericErrorResponse(db_err).into())
        }
    }
}

/// Removes a todo from the collection
#[utoipa::path(
    delete,
    path = "/api/todos/{todo_id}",
    tag = TODO_API_GROUP,
    params(
        ("todo_id" = i32, Path, description = "ID of the todo to delete"),
    ),
    responses(
        (status = 200, description = "Todo was deleted"),
        (status = 404, response = err_resps::BasicError404),
        (status = 500, response = err_resps::BasicError500),
    ),
)]
async fn delete_todo(
    todo_id: i32,
    ext_cxn: &mut impl ExternalConnectivity,
    todo_service: &impl domain::todo::driving_ports::TodoPort,
) -> Result<StatusCode, ErrorResponse> {
    info!("Deleting todo {todo_id}");
    let todo_writer = persistence::db_todo_driven_ports::DbTodoWriter {};

    let delete_result = todo_service
        .delete_todo(todo_id, &mut *ext_cxn, &todo_writer)
        .await;
    match delete_result {
        Ok(()) => Ok(StatusCode::OK),
        Err(TodoError::NotFound) => Err(NotFoundErrorResponse.into()),
        Err(TodoError::PortError(db_err)) => {
            error!("Failed to delete todo: {db_err}");
            Err(GenericErrorResponse(db_err).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_util::status_and_body;
    use crate::domain::todo::test_util::MockTodoService;
    use crate::domain::todo::{TodoItem, UpdateTodo};
    use crate::external_connections;
    use anyhow::anyhow;
    use axum::response::IntoResponse;
    use chrono::Utc;
    use serde_json::Value;
    use speculoos::prelude::*;
    use std::sync::Mutex;

    mod list_todos {
        use super::*;

        #[tokio::test]
        async fn happy_path() {
            let mut todo_service_raw = MockTodoService::new();
            let mut ext_cxn = external_connections::test_util::FakeExternalConnectivity::new();

            todo_service_raw.all_todos_result.set_returned_anyhow(Ok(vec![TodoItem {
                id: 1,
                title: "Water the plants".to_owned(),
                completed: false,
                created_at: Utc::now(),
            }]));
            let todo_service = Mutex::new(todo_service_raw);

            let list_response = list_todos(&mut ext_cxn, &todo_service).await;
            let real_response = list_response.into_response();

            let (status, body): (_, Value) = status_and_body(real_response).await;
            assert_eq!(StatusCode::OK, status);
            assert_eq!(1, body.as_array().expect("expected a JSON array").len());
            assert_eq!("Water the plants", body[0]["title"]);
            assert_eq!(false, body[0]["completed"]);
        }

        #[tokio::test]
        async fn returns_500_on_port_failure() {
            let mut todo_service_raw = MockTodoService::new();
            let mut ext_cxn = external_connections::test_util::FakeExternalConnectivity::new();

            todo_service_raw
                .all_todos_result
                .set_returned_anyhow(Err(anyhow!("the database is unreachable")));
            let todo_service = Mutex::new(todo_service_raw);

            let list_response = list_todos(&mut ext_cxn, &todo_service).await;
            let real_response = list_response.into_response();

            let (status, body): (_, Value) = status_and_body(real_response).await;
            assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status);
            assert_eq!("internal_error", body["error_code"]);
        }
    }

    mod create_todo {
        use super::*;

        #[tokio::test]
        async fn happy_path() {
            let mut todo_service_raw = MockTodoService::new();
            let mut ext_cxn = external_connections::test_util::FakeExternalConnectivity::new();

            todo_service_raw.create_todo_result.set_returned_anyhow(Ok(7));
            let todo_service = Mutex::new(todo_service_raw);

            let create_response = create_todo(
                dto::NewTodo {
                    title: "Water the plants".to_owned(),
                },
                &mut ext_cxn,
                &todo_service,
            )
            .await;
            let real_response = create_response.into_response();

            let (status, body): (_, Value) = status_and_body(real_response).await;
            assert_eq!(StatusCode::CREATED, status);
            assert_eq!(7, body["id"]);

            let locked_todo_service = todo_service.lock().expect("todo service mutex poisoned");
            assert!(matches!(
                locked_todo_service.create_todo_result.calls(),
                [created] if created.title == "Water the plants"
            ));
        }

        #[tokio::test]
        async fn returns_400_on_empty_title() {
            let todo_service = Mutex::new(MockTodoService::new());
            let mut ext_cxn = external_connections::test_util::FakeExternalConnectivity::new();

            let create_response = create_todo(
                dto::NewTodo {
                    title: String::new(),
                },
                &mut ext_cxn,
                &todo_service,
            )
            .await;
            let real_response = create_response.into_response();

            let (status, body): (_, Value) = status_and_body(real_response).await;
            assert_eq!(StatusCode::BAD_REQUEST, status);
            assert_eq!("invalid_input", body["error_code"]);
        }

        #[tokio::test]
        async fn returns_500_on_port_failure() {
            let mut todo_service_raw = MockTodoService::new();
            let mut ext_cxn = external_connections::test_util::FakeExternalConnectivity::new();

            todo_service_raw
                .create_todo_result
                .set_returned_anyhow(Err(anyhow!("the database is unreachable")));
            let todo_service = Mutex::new(todo_service_raw);

            let create_response = create_todo(
                dto::NewTodo {
                    title: "Water the plants".to_owned(),
                },
                &mut ext_cxn,
                &todo_service,
            )
            .await;
            let real_response = create_response.into_response();

            let (status, body): (_, Value) = status_and_body(real_response).await;
            assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status);
            assert_eq!("internal_error", body["error_code"]);
        }
    }

    mod update_todo {
        use super::*;

        #[tokio::test]
        async fn happy_path() {
            let mut todo_service_raw = MockTodoService::new();
            let mut ext_cxn = external_connections::test_util::FakeExternalConnectivity::new();

            todo_service_raw.update_todo_result.set_returned_result(Ok(()));
            let todo_service = Mutex::new(todo_service_raw);

            let update_response = update_todo(
                2,
                dto::UpdateTodo {
                    title: None,
                    completed: Some(true),
                },
                &mut ext_cxn,
                &todo_service,
            )
            .await;
            assert_that!(update_response).is_ok_containing(StatusCode::OK);

            let locked_todo_service = todo_service.lock().expect("todo service mutex poisoned");
            assert!(matches!(
                locked_todo_service.update_todo_result.calls(),
                [(
                    2,
                    UpdateTodo {
                        title: None,
                        completed: Some(true),
                    },
                )]
            ));
        }

        #[tokio::test]
        async fn returns_400_on_empty_title() {
            let todo_service = Mutex::new(MockTodoService::new());
            let mut ext_cxn = external_connections::test_util::FakeExternalConnectivity::new();

            let update_response = update_todo(
                2,
                dto::UpdateTodo {
                    title: Some(String::new()),
                    completed: None,
                },
                &mut ext_cxn,
                &todo_service,
            )
            .await;
            let real_response = update_response.into_response();

            let (status, body): (_, Value) = status_and_body(real_response).await;
            assert_eq!(StatusCode::BAD_REQUEST, status);
            assert_eq!("invalid_input", body["error_code"]);
        }

        #[tokio::test]
        async fn returns_404_for_unknown_todo() {
            let mut todo_service_raw = MockTodoService::new();
            let mut ext_cxn = external_connections::test_util::FakeExternalConnectivity::new();

            todo_service_raw
                .update_todo_result
                .set_returned_result(Err(TodoError::NotFound));
            let todo_service = Mutex::new(todo_service_raw);

            let update_response = update_todo(
                42,
                dto::UpdateTodo {
                    title: None,
                    completed: Some(true),
                },
                &mut ext_cxn,
                &todo_service,
            )
            .await;
            let real_response = update_response.into_response();

            let (status, body): (_, Value) = status_and_body(real_response).await;
            assert_eq!(StatusCode::NOT_FOUND, status);
            assert_eq!("not_found", body["error_code"]);
        }

        #[tokio::test]
        async fn returns_500_on_port_failure() {
            let mut todo_service_raw = MockTodoService::new();
            let mut ext_cxn = external_connections::test_util::FakeExternalConnectivity::new();

            todo_service_raw
                .update_todo_result
                .set_returned_result(Err(TodoError::PortError(anyhow!("the database is unreachable"))));
            let todo_service = Mutex::new(todo_service_raw);

            let update_response = update_todo(
                2,
                dto::UpdateTodo {
                    title: None,
                    completed: Some(true),
                },
                &mut ext_cxn,
                &todo_service,
            )
            .await;
            let real_response = update_response.into_response();

            let (status, body): (_, Value) = status_and_body(real_response).await;
            assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status);
            assert_eq!("internal_error", body["error_code"]);
        }
    }

    mod delete_todo {
        use super::*;

        #[tokio::test]
        async fn happy_path() {
            let mut todo_service_raw = MockTodoService::new();
            let mut ext_cxn = external_connections::test_util::FakeExternalConnectivity::new();

            todo_service_raw.delete_todo_result.set_returned_result(Ok(()));
            let todo_service = Mutex::new(todo_service_raw);

            let delete_response = delete_todo(5, &mut ext_cxn, &todo_service).await;
            assert_that!(delete_response).is_ok_containing(StatusCode::OK);

            let locked_todo_service = todo_service.lock().expect("todo service mutex poisoned");
            assert_eq!([5], locked_todo_service.delete_todo_result.calls());
        }

        #[tokio::test]
        async fn returns_404_for_unknown_todo() {
            let mut todo_service_raw = MockTodoService::new();
            let mut ext_cxn = external_connections::test_util::FakeExternalConnectivity::new();

            todo_service_raw
                .delete_todo_result
                .set_returned_result(Err(TodoError::NotFound));
            let todo_service = Mutex::new(todo_service_raw);

            let delete_response = delete_todo(42, &mut ext_cxn, &todo_service).await;
            let real_response = delete_response.into_response();

            let (status, body): (_, Value) = status_and_body(real_response).await;
            assert_eq!(StatusCode::NOT_FOUND, status);
            assert_eq!("not_found", body["error_code"]);
        }

        #[tokio::test]
        async fn returns_500_on_port_failure() {
            let mut todo_service_raw = MockTodoService::new();
            let mut ext_cxn = external_connections::test_util::FakeExternalConnectivity::new();

            todo_service_raw
                .delete_todo_result
                .set_returned_result(Err(TodoError::PortError(anyhow!("the database is unreachable"))));
            let todo_service = Mutex::new(todo_service_raw);

            let delete_response = delete_todo(5, &mut ext_cxn, &todo_service).await;
            let real_response = delete_response.into_response();

            let (status, body): (_, Value) = status_and_body(real_response).await;
            assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status);
            assert_eq!("internal_error", body["error_code"]);
        }
    }
}
