use std::env;

/// Database used when `DATABASE_URL` is unset: a SQLite file in the working
/// directory, so the server runs with no setup.
const DEFAULT_DATABASE_URL: &str = "items.db";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Database connection string (default: "items.db").
    pub database_url: String,
    /// CORS origin allow-list. `None` allows any origin.
    pub cors_origins: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DATABASE_URL` - connection string: a plain path, a
    ///   `sqlite:`-scheme URL, or `:memory:` (default: "items.db")
    /// - `CORS_ORIGINS` - comma-separated origin allow-list; unset or blank
    ///   allows any origin (dev-friendly default)
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            cors_origins: env::var("CORS_ORIGINS")
                .ok()
                .map(|v| parse_origins(&v))
                .filter(|origins| !origins.is_empty()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Splits a comma-separated origin list, trimming whitespace and dropping
/// empty entries.
fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
