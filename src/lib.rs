pub mod api;
pub mod app_env;
pub mod client;
pub mod domain;
pub mod dto;
pub mod external_connections;
pub mod logging;
pub mod persistence;
pub mod routes;
pub mod routing_utils;

use axum::extract::State;
use std::sync::Arc;

/// State shared by every request handler. The only thing in here is database
/// connectivity, which handlers clone out per request.
pub struct SharedData {
    pub ext_cxn: persistence::PooledConnectivity,
}

/// Extractor alias for the app's shared state
pub type AppState = State<Arc<SharedData>>;
