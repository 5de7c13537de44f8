use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(Books::Table)
                    .col(Books::ExternalKey)
                    .name("idx_books_external_key")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Books::Table)
                    .col(Books::CreatedAt)
                    .name("idx_books_created_at")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(BookAuthors::Table)
                    .col(BookAuthors::AuthorId)
                    .name("idx_book_authors_author_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Comments::Table)
                    .col(Comments::BookId)
                    .col(Comments::CreatedAt)
                    .name("idx_comments_book_id_created_at")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_comments_book_id_created_at")
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(Index::drop().name("idx_book_authors_author_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_books_created_at").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_books_external_key").to_owned())
            .await
    }
}

#[derive(Iden)]
enum Books {
    Table,
    ExternalKey,
    CreatedAt,
}

#[derive(Iden)]
enum BookAuthors {
    Table,
    AuthorId,
}

#[derive(Iden)]
enum Comments {
    Table,
    BookId,
    CreatedAt,
}
