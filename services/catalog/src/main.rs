use std::time::Duration;

use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use shelf_catalog::config::CatalogConfig;
use shelf_catalog::infra::open_library::OpenLibraryClient;
use shelf_catalog::router::build_router;
use shelf_catalog::state::AppState;
use shelf_catalog_migration::Migrator;
use shelf_core::config::Config;
use shelf_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing("shelf_catalog=info,tower_http=info");

    let config = CatalogConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    if config.run_migrations {
        Migrator::up(&db, None)
            .await
            .expect("failed to apply migrations");
        info!("migrations applied");
    }

    let open_library = OpenLibraryClient::new(
        &config.open_library_base_url,
        &config.open_library_covers_url,
        Duration::from_secs(config.open_library_timeout_secs),
    )
    .expect("failed to build Open Library client");

    let state = AppState { db, open_library };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.catalog_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("catalog service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
