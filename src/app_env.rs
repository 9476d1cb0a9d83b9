/// URL for accessing the PostgreSQL database holding the todo collection
pub const DB_URL: &str = "DATABASE_URL";
/// Origin of the deployed frontend. This is the only origin the CORS policy accepts.
pub const FRONTEND_URL: &str = "FRONTEND_URL";
/// Port the API listens on. Defaults to 5000 when unset.
pub const PORT: &str = "PORT";
/// Log level configuration for the application, in tracing-subscriber's
/// [EnvFilter](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html) syntax
pub const LOG_LEVEL: &str = "LOG_LEVEL";
