use sqlx::PgConnection;

/// A live database connection which queries can be run against
pub trait ConnectionHandle {
    fn borrow_connection(&mut self) -> &mut PgConnection;
}

/// Access to systems external to the process. For TaskFlow that is just the
/// todo database. Driven adapters borrow connections through this seam, which
/// lets unit tests substitute the whole thing.
pub trait ExternalConnectivity: Sync {
    type Handle<'cxn>: ConnectionHandle
    where
        Self: 'cxn;

    /// Borrows a database connection from the underlying source
    async fn database_cxn(&mut self) -> Result<Self::Handle<'_>, anyhow::Error>;
}
