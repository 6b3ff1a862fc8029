use std::env;

use crate::report::Locale;

#[derive(Clone, Debug)]
pub struct Config {
    /// PostgreSQL URL for the plan store. Without it the API runs in offline mode.
    pub database_url: Option<String>,
    /// Upper bound for the connection pool
    pub database_max_connections: u32,
    pub port: u16,
    /// Locale used for currency formatting when a request does not pick one
    pub default_locale: Locale,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(10),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            default_locale: env::var("DEFAULT_LOCALE")
                .ok()
                .and_then(|l| l.parse().ok())
                .unwrap_or_default(),
        }
    }

    /// Check if a plan store is configured
    pub fn persistence_enabled(&self) -> bool {
        self.database_url.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            database_max_connections: 10,
            port: 8080,
            default_locale: Locale::default(),
        }
    }
}
