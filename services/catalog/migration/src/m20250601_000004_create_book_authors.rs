use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookAuthors::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(BookAuthors::BookId).integer().not_null())
                    .col(ColumnDef::new(BookAuthors::AuthorId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(BookAuthors::BookId)
                            .col(BookAuthors::AuthorId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(BookAuthors::Table, BookAuthors::BookId)
                            .to(Books::Table, Books::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(BookAuthors::Table, BookAuthors::AuthorId)
                            .to(Authors::Table, Authors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookAuthors::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum BookAuthors {
    Table,
    BookId,
    AuthorId,
}

#[derive(Iden)]
enum Books {
    Table,
    Id,
}

#[derive(Iden)]
enum Authors {
    Table,
    Id,
}
