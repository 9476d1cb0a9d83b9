use crate::routing_utils::Json;
use crate::{SharedData, api, dto, logging};
use anyhow::Context;
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::routing::get;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Cross-origin policy for the API: only the deployed frontend may call it,
/// with credentials, using the CRUD verbs and the Content-Type/Authorization
/// headers. Everything else is left for the browser to refuse.
fn cors_policy(frontend_origin: &str) -> Result<CorsLayer, anyhow::Error> {
    let origin: HeaderValue = frontend_origin
        .parse()
        .with_context(|| format!("'{frontend_origin}' is not a usable CORS origin"))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}

/// Assembles the application router: the todo collection under /api/todos,
/// the liveness endpoint, API documentation, the CORS policy, and request
/// tracing.
pub fn build_router(
    shared_data: Arc<SharedData>,
    frontend_origin: &str,
) -> Result<Router, anyhow::Error> {
    let router = Router::new()
        .nest("/api/todos", api::todo::todo_routes())
        .route("/api/init", get(liveness))
        .merge(api::swagger_main::build_documentation())
        .layer(cors_policy(frontend_origin)?)
        .with_state(shared_data);

    Ok(logging::attach_tracing_http(router))
}

/// Liveness endpoint the frontend polls while the hosting platform wakes the
/// server from sleep
async fn liveness() -> Json<dto::InitResponse> {
    Json(dto::InitResponse {
        message: "Server is up and running".to_owned(),
    })
}
