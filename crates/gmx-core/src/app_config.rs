#[derive(Clone)]
pub struct AppConfig {
    /// Only the commands that touch Postgres need this; `extract --dry-run`
    /// runs without it.
    pub database_url: Option<String>,
    pub google_api_key: String,
    pub log_level: String,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_acquire_timeout_secs: u64,
    pub places_request_timeout_secs: u64,
    pub places_user_agent: String,
    /// Width of the per-page details fetch window. `1` keeps every listing
    /// strictly sequential.
    pub details_concurrency: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("database_url", &"[redacted]")
            .field("google_api_key", &"[redacted]")
            .field("log_level", &self.log_level)
            .field("db_max_connections", &self.db_max_connections)
            .field("db_min_connections", &self.db_min_connections)
            .field("db_acquire_timeout_secs", &self.db_acquire_timeout_secs)
            .field(
                "places_request_timeout_secs",
                &self.places_request_timeout_secs,
            )
            .field("places_user_agent", &self.places_user_agent)
            .field("details_concurrency", &self.details_concurrency)
            .finish()
    }
}
