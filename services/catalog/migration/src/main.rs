use sea_orm_migration::prelude::*;

use shelf_catalog_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
