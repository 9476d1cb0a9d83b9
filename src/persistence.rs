use crate::external_connections::{ConnectionHandle, ExternalConnectivity};
use anyhow::Context;
use sqlx::pool::PoolConnection;
use sqlx::{PgConnection, PgPool, Postgres};

pub mod db_todo_driven_ports;

/// Database connectivity backed by the shared connection pool. Cloning is
/// cheap, so every request handler clones one of these out of the app state.
#[derive(Clone)]
pub struct PooledConnectivity {
    db: PgPool,
}

impl PooledConnectivity {
    pub fn new(db: PgPool) -> PooledConnectivity {
        PooledConnectivity { db }
    }
}

pub struct PoolConnectionHandle {
    active_connection: PoolConnection<Postgres>,
}

impl ConnectionHandle for PoolConnectionHandle {
    fn borrow_connection(&mut self) -> &mut PgConnection {
        &mut self.active_connection
    }
}

impl ExternalConnectivity for PooledConnectivity {
    type Handle<'cxn>
        = PoolConnectionHandle
    where
        Self: 'cxn;

    async fn database_cxn(&mut self) -> Result<PoolConnectionHandle, anyhow::Error> {
        let active_connection = self
            .db
            .acquire()
            .await
            .context("acquiring a connection from the database pool")?;

        Ok(PoolConnectionHandle { active_connection })
    }
}

/// Row shape for `INSERT ... RETURNING id` queries
#[derive(sqlx::FromRow)]
struct NewId {
    id: i32,
}
