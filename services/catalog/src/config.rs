use serde::Deserialize;

use shelf_core::config::Config;

/// Catalog service configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// PostgreSQL (or SQLite) connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3120). Env var: `CATALOG_PORT`.
    #[serde(default = "default_catalog_port")]
    pub catalog_port: u16,
    /// Open Library API base URL. Env var: `OPEN_LIBRARY_BASE_URL`.
    #[serde(default = "default_open_library_base_url")]
    pub open_library_base_url: String,
    /// Base URL for cover images. Env var: `OPEN_LIBRARY_COVERS_URL`.
    #[serde(default = "default_open_library_covers_url")]
    pub open_library_covers_url: String,
    /// Timeout for a single Open Library request. Env var: `OPEN_LIBRARY_TIMEOUT_SECS`.
    #[serde(default = "default_open_library_timeout_secs")]
    pub open_library_timeout_secs: u64,
    /// Apply pending migrations before serving. Env var: `RUN_MIGRATIONS`.
    #[serde(default)]
    pub run_migrations: bool,
}

impl Config for CatalogConfig {}

fn default_catalog_port() -> u16 {
    3120
}

fn default_open_library_base_url() -> String {
    "https://openlibrary.org".to_owned()
}

fn default_open_library_covers_url() -> String {
    shelf_domain::cover::OPEN_LIBRARY_COVERS_URL.to_owned()
}

fn default_open_library_timeout_secs() -> u64 {
    10
}
