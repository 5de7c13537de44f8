use sea_orm_migration::prelude::*;

mod m20250601_000001_create_accounts;
mod m20250601_000002_create_authors;
mod m20250601_000003_create_books;
mod m20250601_000004_create_book_authors;
mod m20250601_000005_create_comments;
mod m20250601_000006_create_favorites;
mod m20250601_000007_add_catalog_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_accounts::Migration),
            Box::new(m20250601_000002_create_authors::Migration),
            Box::new(m20250601_000003_create_books::Migration),
            Box::new(m20250601_000004_create_book_authors::Migration),
            Box::new(m20250601_000005_create_comments::Migration),
            Box::new(m20250601_000006_create_favorites::Migration),
            Box::new(m20250601_000007_add_catalog_indexes::Migration),
        ]
    }
}
