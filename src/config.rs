use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub connect_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        Ok(Self::with_database_url(database_url))
    }

    /// Build a config for an explicit URL, taking pool sizing from the environment.
    pub fn with_database_url(database_url: impl Into<String>) -> Self {
        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(10);
        let connect_timeout_secs = env::var("DATABASE_CONNECT_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(8);
        Self {
            database_url: database_url.into(),
            max_connections,
            connect_timeout_secs,
        }
    }
}
