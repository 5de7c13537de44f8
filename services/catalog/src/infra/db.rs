use std::collections::HashMap;

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, ConnectionTrait,
    DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, FromQueryResult, Paginator,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, SelectorTrait, SqlErr,
    TransactionTrait,
    sea_query::{Expr, OnConflict, Query, SelectStatement},
};

use shelf_catalog_schema::{accounts, authors, book_authors, books, comments, favorites};
use shelf_core::sea_ext::icontains;
use shelf_domain::id::{AccountId, AuthorId, BookId, CommentId};
use shelf_domain::pagination::{Page, PageRequest, total_pages};

use crate::domain::repository::{
    AccountRepository, AuthorRepository, BookRepository, CommentRepository, FavoriteRepository,
};
use crate::domain::types::{
    Account, Author, AuthorWithCount, Book, BookWithAuthors, CatalogStats, Comment, Favorite,
    NewBook,
};
use crate::error::CatalogServiceError;

// ── Shared query helpers ─────────────────────────────────────────────────────

fn newest_first(select: Select<books::Entity>) -> Select<books::Entity> {
    select
        .order_by_desc(books::Column::CreatedAt)
        .order_by_desc(books::Column::Id)
}

/// Resolve `page` against the paginator's item count and fetch that page.
/// Returns the items, the resolved page number and the total item count.
async fn fetch_resolved_page<'db, C, S>(
    paginator: Paginator<'db, C, S>,
    page: PageRequest,
) -> Result<(Vec<S::Item>, u64, u64), DbErr>
where
    C: ConnectionTrait,
    S: SelectorTrait + 'db,
{
    let total_items = paginator.num_items().await?;
    let number = page.resolve(total_pages(total_items, page.per_page));
    let items = paginator.fetch_page(number - 1).await?;
    Ok((items, number, total_items))
}

/// Load the authors of every book in one query and attach them, ordered by name.
async fn attach_authors<C: ConnectionTrait>(
    db: &C,
    models: Vec<books::Model>,
) -> Result<Vec<BookWithAuthors>, DbErr> {
    if models.is_empty() {
        return Ok(Vec::new());
    }
    let ids: Vec<i32> = models.iter().map(|m| m.id).collect();
    let links = book_authors::Entity::find()
        .filter(book_authors::Column::BookId.is_in(ids))
        .find_also_related(authors::Entity)
        .order_by_asc(authors::Column::Name)
        .all(db)
        .await?;

    let mut by_book: HashMap<i32, Vec<Author>> = HashMap::new();
    for (link, author) in links {
        if let Some(author) = author {
            by_book
                .entry(link.book_id)
                .or_default()
                .push(author_from_model(author));
        }
    }

    Ok(models
        .into_iter()
        .map(|model| {
            let authors = by_book.remove(&model.id).unwrap_or_default();
            BookWithAuthors {
                book: book_from_model(model),
                authors,
            }
        })
        .collect())
}

async fn attach_authors_one<C: ConnectionTrait>(
    db: &C,
    model: Option<books::Model>,
) -> Result<Option<BookWithAuthors>, DbErr> {
    match model {
        Some(model) => Ok(attach_authors(db, vec![model]).await?.pop()),
        None => Ok(None),
    }
}

async fn paginate_books(
    db: &DatabaseConnection,
    select: Select<books::Entity>,
    page: PageRequest,
) -> Result<Page<BookWithAuthors>, DbErr> {
    let (models, number, total_items) =
        fetch_resolved_page(select.paginate(db, page.per_page), page).await?;
    let items = attach_authors(db, models).await?;
    Ok(Page::new(items, number, page.per_page, total_items))
}

/// `SELECT book_id FROM book_authors WHERE author_id = ?`
fn book_ids_by_author(author_id: i32) -> SelectStatement {
    Query::select()
        .column(book_authors::Column::BookId)
        .from(book_authors::Entity)
        .and_where(book_authors::Column::AuthorId.eq(author_id))
        .to_owned()
}

// ── Book repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbBookRepository {
    pub db: DatabaseConnection,
}

impl BookRepository for DbBookRepository {
    async fn list(
        &self,
        page: PageRequest,
    ) -> Result<Page<BookWithAuthors>, CatalogServiceError> {
        let page = paginate_books(&self.db, newest_first(books::Entity::find()), page)
            .await
            .context("list books")?;
        Ok(page)
    }

    async fn list_all(&self) -> Result<Vec<BookWithAuthors>, CatalogServiceError> {
        let models = newest_first(books::Entity::find())
            .all(&self.db)
            .await
            .context("list all books")?;
        let books = attach_authors(&self.db, models)
            .await
            .context("load authors for all books")?;
        Ok(books)
    }

    async fn find_by_id(
        &self,
        id: BookId,
    ) -> Result<Option<BookWithAuthors>, CatalogServiceError> {
        let model = books::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find book by id")?;
        let book = attach_authors_one(&self.db, model)
            .await
            .context("load book authors")?;
        Ok(book)
    }

    async fn exists(&self, id: BookId) -> Result<bool, CatalogServiceError> {
        let count = books::Entity::find_by_id(id.0)
            .count(&self.db)
            .await
            .context("check book exists")?;
        Ok(count > 0)
    }

    async fn find_by_external_key(
        &self,
        external_key: &str,
    ) -> Result<Option<BookWithAuthors>, CatalogServiceError> {
        let model = books::Entity::find()
            .filter(books::Column::ExternalKey.eq(external_key))
            .order_by_asc(books::Column::Id)
            .one(&self.db)
            .await
            .context("find book by external key")?;
        let book = attach_authors_one(&self.db, model)
            .await
            .context("load book authors")?;
        Ok(book)
    }

    async fn related(
        &self,
        id: BookId,
        limit: u64,
    ) -> Result<Vec<BookWithAuthors>, CatalogServiceError> {
        let shared_authors = Query::select()
            .column(book_authors::Column::AuthorId)
            .from(book_authors::Entity)
            .and_where(book_authors::Column::BookId.eq(id.0))
            .to_owned();
        let related_ids = Query::select()
            .column(book_authors::Column::BookId)
            .from(book_authors::Entity)
            .and_where(book_authors::Column::AuthorId.in_subquery(shared_authors))
            .to_owned();

        let models = newest_first(
            books::Entity::find()
                .filter(books::Column::Id.in_subquery(related_ids))
                .filter(books::Column::Id.ne(id.0)),
        )
        .limit(limit)
        .all(&self.db)
        .await
        .context("find related books")?;
        let books = attach_authors(&self.db, models)
            .await
            .context("load related book authors")?;
        Ok(books)
    }

    async fn list_by_author(
        &self,
        author_id: AuthorId,
        page: PageRequest,
    ) -> Result<Page<BookWithAuthors>, CatalogServiceError> {
        let select = newest_first(
            books::Entity::find()
                .filter(books::Column::Id.in_subquery(book_ids_by_author(author_id.0))),
        );
        let page = paginate_books(&self.db, select, page)
            .await
            .context("list books by author")?;
        Ok(page)
    }

    async fn search(&self, query: &str) -> Result<Vec<BookWithAuthors>, CatalogServiceError> {
        let by_author_name = Query::select()
            .column((book_authors::Entity, book_authors::Column::BookId))
            .from(book_authors::Entity)
            .inner_join(
                authors::Entity,
                Expr::col((authors::Entity, authors::Column::Id))
                    .equals((book_authors::Entity, book_authors::Column::AuthorId)),
            )
            .and_where(icontains(authors::Column::Name, query))
            .to_owned();

        let models = newest_first(
            books::Entity::find().filter(
                Condition::any()
                    .add(icontains(books::Column::Title, query))
                    .add(books::Column::Id.in_subquery(by_author_name)),
            ),
        )
        .all(&self.db)
        .await
        .context("search books")?;
        let books = attach_authors(&self.db, models)
            .await
            .context("load searched book authors")?;
        Ok(books)
    }

    async fn stats(&self) -> Result<CatalogStats, CatalogServiceError> {
        let total_books = books::Entity::find()
            .count(&self.db)
            .await
            .context("count books")?;
        let total_authors = authors::Entity::find()
            .count(&self.db)
            .await
            .context("count authors")?;
        let latest = books::Entity::find()
            .filter(books::Column::PublicationYear.is_not_null())
            .filter(books::Column::PublicationYear.ne(""))
            .order_by_desc(books::Column::PublicationYear)
            .one(&self.db)
            .await
            .context("find latest publication year")?;
        Ok(CatalogStats {
            total_books,
            total_authors,
            latest_year: latest.and_then(|m| m.publication_year),
        })
    }

    async fn create_with_authors(
        &self,
        book: &NewBook,
    ) -> Result<BookWithAuthors, CatalogServiceError> {
        let created = self
            .db
            .transaction::<_, BookWithAuthors, DbErr>(|txn| {
                let book = book.clone();
                Box::pin(async move { insert_book_with_authors(txn, &book).await })
            })
            .await
            .context("create book with authors")?;
        Ok(created)
    }
}

async fn insert_book_with_authors(
    txn: &DatabaseTransaction,
    book: &NewBook,
) -> Result<BookWithAuthors, DbErr> {
    let now = Utc::now();
    let model = books::ActiveModel {
        title: Set(book.title.clone()),
        cover_image: Set(Some(book.cover_image.clone())),
        publication_year: Set(Some(book.publication_year.clone())),
        isbn: Set(Some(book.isbn.clone())),
        description: Set(None),
        external_key: Set(book.external_key.clone()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    let bio = format!("Author of {}", book.title);
    let mut authors = Vec::with_capacity(book.author_names.len());
    for name in &book.author_names {
        let author = get_or_create_author(txn, name, &bio, now).await?;
        book_authors::Entity::insert(book_authors::ActiveModel {
            book_id: Set(model.id),
            author_id: Set(author.id),
        })
        .on_conflict(
            OnConflict::columns([book_authors::Column::BookId, book_authors::Column::AuthorId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(txn)
        .await?;
        authors.push(author_from_model(author));
    }
    authors.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(BookWithAuthors {
        book: book_from_model(model),
        authors,
    })
}

/// Insert the author unless the name is taken, then read back the stored row.
/// Racing importers both end up with the same row.
async fn get_or_create_author<C: ConnectionTrait>(
    db: &C,
    name: &str,
    bio: &str,
    now: DateTime<Utc>,
) -> Result<authors::Model, DbErr> {
    authors::Entity::insert(authors::ActiveModel {
        name: Set(name.to_owned()),
        birth_date: Set(None),
        bio: Set(Some(bio.to_owned())),
        created_at: Set(now),
        ..Default::default()
    })
    .on_conflict(
        OnConflict::column(authors::Column::Name)
            .do_nothing()
            .to_owned(),
    )
    .exec_without_returning(db)
    .await?;

    authors::Entity::find()
        .filter(authors::Column::Name.eq(name))
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("author {name:?}")))
}

fn book_from_model(model: books::Model) -> Book {
    Book {
        id: BookId(model.id),
        title: model.title,
        cover_image: model.cover_image,
        publication_year: model.publication_year,
        isbn: model.isbn,
        description: model.description,
        external_key: model.external_key,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Author repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAuthorRepository {
    pub db: DatabaseConnection,
}

#[derive(Debug, FromQueryResult)]
struct AuthorCountRow {
    id: i32,
    name: String,
    birth_date: Option<String>,
    bio: Option<String>,
    created_at: DateTime<Utc>,
    book_count: i64,
}

impl From<AuthorCountRow> for AuthorWithCount {
    fn from(row: AuthorCountRow) -> Self {
        Self {
            author: Author {
                id: AuthorId(row.id),
                name: row.name,
                birth_date: row.birth_date,
                bio: row.bio,
                created_at: row.created_at,
            },
            book_count: u64::try_from(row.book_count).unwrap_or_default(),
        }
    }
}

/// Authors joined to their links, so authors without books drop out.
fn authors_with_books(name_filter: Option<&str>) -> Select<authors::Entity> {
    let select = authors::Entity::find()
        .column_as(
            Expr::col((book_authors::Entity, book_authors::Column::BookId)).count(),
            "book_count",
        )
        .inner_join(book_authors::Entity)
        .group_by(authors::Column::Id)
        .order_by_asc(authors::Column::Name);
    match name_filter {
        Some(filter) => select.filter(icontains(authors::Column::Name, filter)),
        None => select,
    }
}

impl AuthorRepository for DbAuthorRepository {
    async fn find_by_id(&self, id: AuthorId) -> Result<Option<Author>, CatalogServiceError> {
        let model = authors::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find author by id")?;
        Ok(model.map(author_from_model))
    }

    async fn list_with_books(
        &self,
        name_filter: Option<&str>,
        page: PageRequest,
    ) -> Result<Page<AuthorWithCount>, CatalogServiceError> {
        let paginator = authors_with_books(name_filter)
            .into_model::<AuthorCountRow>()
            .paginate(&self.db, page.per_page);
        let (rows, number, total_items) = fetch_resolved_page(paginator, page)
            .await
            .context("list authors with books")?;
        let items = rows.into_iter().map(AuthorWithCount::from).collect();
        Ok(Page::new(items, number, page.per_page, total_items))
    }

    async fn search_with_books(
        &self,
        query: &str,
    ) -> Result<Vec<AuthorWithCount>, CatalogServiceError> {
        let rows = authors_with_books(Some(query))
            .into_model::<AuthorCountRow>()
            .all(&self.db)
            .await
            .context("search authors")?;
        Ok(rows.into_iter().map(AuthorWithCount::from).collect())
    }
}

fn author_from_model(model: authors::Model) -> Author {
    Author {
        id: AuthorId(model.id),
        name: model.name,
        birth_date: model.birth_date,
        bio: model.bio,
        created_at: model.created_at,
    }
}

// ── Comment repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCommentRepository {
    pub db: DatabaseConnection,
}

impl CommentRepository for DbCommentRepository {
    async fn list_for_book(&self, book_id: BookId) -> Result<Vec<Comment>, CatalogServiceError> {
        let rows = comments::Entity::find()
            .filter(comments::Column::BookId.eq(book_id.0))
            .find_also_related(accounts::Entity)
            .order_by_desc(comments::Column::CreatedAt)
            .order_by_desc(comments::Column::Id)
            .all(&self.db)
            .await
            .context("list comments for book")?;
        Ok(rows
            .into_iter()
            .map(|(comment, account)| {
                let username = account.map(|a| a.username).unwrap_or_default();
                comment_from_model(comment, username)
            })
            .collect())
    }

    async fn create(
        &self,
        book_id: BookId,
        author: &Account,
        content: &str,
    ) -> Result<Comment, CatalogServiceError> {
        let now = Utc::now();
        let model = comments::ActiveModel {
            book_id: Set(book_id.0),
            user_id: Set(author.id.0),
            content: Set(content.to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create comment")?;
        Ok(comment_from_model(model, author.username.clone()))
    }
}

fn comment_from_model(model: comments::Model, username: String) -> Comment {
    Comment {
        id: CommentId(model.id),
        book_id: BookId(model.book_id),
        user_id: AccountId(model.user_id),
        username,
        content: model.content,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Favorite repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbFavoriteRepository {
    pub db: DatabaseConnection,
}

impl FavoriteRepository for DbFavoriteRepository {
    async fn add(
        &self,
        user_id: AccountId,
        book_id: BookId,
    ) -> Result<Favorite, CatalogServiceError> {
        favorites::Entity::insert(favorites::ActiveModel {
            user_id: Set(user_id.0),
            book_id: Set(book_id.0),
            created_at: Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([favorites::Column::UserId, favorites::Column::BookId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await
        .context("insert favorite")?;

        let model = favorites::Entity::find_by_id((user_id.0, book_id.0))
            .one(&self.db)
            .await
            .context("find favorite")?
            .context("favorite missing after insert")?;
        Ok(Favorite {
            user_id: AccountId(model.user_id),
            book_id: BookId(model.book_id),
            created_at: model.created_at,
        })
    }

    async fn remove(
        &self,
        user_id: AccountId,
        book_id: BookId,
    ) -> Result<bool, CatalogServiceError> {
        let result = favorites::Entity::delete_many()
            .filter(favorites::Column::UserId.eq(user_id.0))
            .filter(favorites::Column::BookId.eq(book_id.0))
            .exec(&self.db)
            .await
            .context("delete favorite")?;
        Ok(result.rows_affected > 0)
    }

    async fn list_books(
        &self,
        user_id: AccountId,
        page: PageRequest,
    ) -> Result<Page<BookWithAuthors>, CatalogServiceError> {
        let select = books::Entity::find()
            .inner_join(favorites::Entity)
            .filter(favorites::Column::UserId.eq(user_id.0))
            .order_by_desc(favorites::Column::CreatedAt)
            .order_by_desc(books::Column::Id);
        let page = paginate_books(&self.db, select, page)
            .await
            .context("list favorite books")?;
        Ok(page)
    }
}

// ── Account repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAccountRepository {
    pub db: DatabaseConnection,
}

impl AccountRepository for DbAccountRepository {
    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, CatalogServiceError> {
        let model = accounts::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find account by id")?;
        Ok(model.map(account_from_model))
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, CatalogServiceError> {
        let model = accounts::Entity::find()
            .filter(accounts::Column::Username.eq(username))
            .one(&self.db)
            .await
            .context("find account by username")?;
        Ok(model.map(account_from_model))
    }

    async fn create(&self, account: &Account) -> Result<(), CatalogServiceError> {
        let result = accounts::ActiveModel {
            id: Set(account.id.0),
            username: Set(account.username.clone()),
            first_name: Set(account.first_name.clone()),
            email: Set(account.email.clone()),
            password_hash: Set(account.password_hash.clone()),
            created_at: Set(account.created_at),
        }
        .insert(&self.db)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(CatalogServiceError::AccountAlreadyExists)
            }
            Err(e) => Err(anyhow::Error::new(e).context("create account").into()),
        }
    }
}

fn account_from_model(model: accounts::Model) -> Account {
    Account {
        id: AccountId(model.id),
        username: model.username,
        first_name: model.first_name,
        email: model.email,
        password_hash: model.password_hash,
        created_at: model.created_at,
    }
}
