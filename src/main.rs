use anyhow::Context;
use dotenv::dotenv;
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::sync::Arc;
use taskflow_api::persistence::PooledConnectivity;
use taskflow_api::{SharedData, app_env, logging, routes};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();
    logging::setup_logging(logging::init_env_filter());

    let db_url = env::var(app_env::DB_URL)
        .with_context(|| format!("Could not read the database URL from {}", app_env::DB_URL))?;
    let frontend_origin = env::var(app_env::FRONTEND_URL).with_context(|| {
        format!(
            "Could not read the frontend origin from {}",
            app_env::FRONTEND_URL
        )
    })?;
    let port: u16 = match env::var(app_env::PORT) {
        Ok(raw_port) => raw_port
            .parse()
            .with_context(|| format!("'{raw_port}' is not a usable port number"))?,
        Err(_) => 5000,
    };

    let db_pool = PgPoolOptions::new()
        .max_connections(16)
        .connect(&db_url)
        .await
        .context("Could not connect to the database")?;
    sqlx::migrate!()
        .run(&db_pool)
        .await
        .context("Could not apply database migrations")?;

    let shared_data = Arc::new(SharedData {
        ext_cxn: PooledConnectivity::new(db_pool),
    });
    let router = routes::build_router(shared_data, &frontend_origin)?;

    let listener = TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Could not listen on port {port}"))?;
    tracing::info!("TaskFlow API listening on port {port}.");
    axum::serve(listener, router)
        .await
        .context("Server terminated abnormally")?;

    Ok(())
}
