use shelf_catalog::error::CatalogServiceError;
use shelf_catalog::usecase::author::{GetAuthorBooksUseCase, ListAuthorsUseCase};
use shelf_catalog::usecase::book::{
    GetBookDetailUseCase, ListBookSummariesUseCase, ListBooksUseCase,
};
use shelf_catalog::usecase::search::SearchUseCase;
use shelf_domain::id::{AuthorId, BookId};

use crate::helpers::{MockAuthorRepo, MockBookRepo, MockCommentRepo, new_book};

fn seeded_catalog() -> MockBookRepo {
    let books = MockBookRepo::empty();
    books.seed(&new_book(Some("/works/OL1W"), "Dune", &["Frank Herbert"]));
    books.seed(&new_book(Some("/works/OL2W"), "Dune Messiah", &["Frank Herbert"]));
    books.seed(&new_book(
        Some("/works/OL3W"),
        "Good Omens",
        &["Terry Pratchett", "Neil Gaiman"],
    ));
    books.seed(&new_book(Some("/works/OL4W"), "Coraline", &["Neil Gaiman"]));
    books
}

#[tokio::test]
async fn should_return_nothing_for_blank_query() {
    let books = seeded_catalog();
    let authors = MockAuthorRepo {
        data: books.data_handle(),
    };
    let uc = SearchUseCase { books, authors };

    let results = uc.execute("   ").await.unwrap();

    assert!(results.books.is_empty());
    assert!(results.authors.is_empty());
}

#[tokio::test]
async fn should_match_books_by_title_or_author_name() {
    let books = seeded_catalog();
    let authors = MockAuthorRepo {
        data: books.data_handle(),
    };
    let uc = SearchUseCase { books, authors };

    let results = uc.execute(" gaiman ").await.unwrap();

    let titles: Vec<&str> = results
        .books
        .iter()
        .map(|b| b.book.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Coraline", "Good Omens"]);
    assert_eq!(results.authors.len(), 1);
    assert_eq!(results.authors[0].author.name, "Neil Gaiman");
    assert_eq!(results.authors[0].book_count, 2);
}

#[tokio::test]
async fn should_list_home_page_with_stats() {
    let uc = ListBooksUseCase {
        repo: seeded_catalog(),
    };

    let home = uc.execute(Some("not-a-number")).await.unwrap();

    assert_eq!(home.books.page, 1);
    assert_eq!(home.books.per_page, 10);
    assert_eq!(home.books.items[0].book.title, "Coraline");
    assert_eq!(home.stats.total_books, 4);
    assert_eq!(home.stats.total_authors, 3);
    assert_eq!(home.stats.latest_year.as_deref(), Some("1965"));
}

#[tokio::test]
async fn should_report_no_latest_year_for_empty_catalog() {
    let uc = ListBooksUseCase {
        repo: MockBookRepo::empty(),
    };

    let home = uc.execute(None).await.unwrap();

    assert_eq!(home.books.total_pages, 1);
    assert!(home.books.items.is_empty());
    assert_eq!(home.stats.latest_year, None);
}

#[tokio::test]
async fn should_include_related_books_and_comments_in_detail() {
    let books = seeded_catalog();
    let uc = GetBookDetailUseCase {
        books,
        comments: MockCommentRepo::empty(),
    };

    let detail = uc.execute(BookId(3)).await.unwrap();

    assert_eq!(detail.book.book.title, "Good Omens");
    let related: Vec<&str> = detail
        .related
        .iter()
        .map(|b| b.book.title.as_str())
        .collect();
    assert_eq!(related, vec!["Coraline"]);
    assert!(detail.comments.is_empty());
}

#[tokio::test]
async fn should_return_not_found_for_unknown_book() {
    let uc = GetBookDetailUseCase {
        books: MockBookRepo::empty(),
        comments: MockCommentRepo::empty(),
    };

    let result = uc.execute(BookId(99)).await;

    assert!(
        matches!(result, Err(CatalogServiceError::BookNotFound)),
        "expected BookNotFound, got {:?}",
        result.map(|d| d.book.book.id)
    );
}

#[tokio::test]
async fn should_list_authors_alphabetically_with_filter() {
    let books = seeded_catalog();
    let uc = ListAuthorsUseCase {
        repo: MockAuthorRepo {
            data: books.data_handle(),
        },
    };

    let all = uc.execute(Some("  "), None).await.unwrap();
    let names: Vec<&str> = all.items.iter().map(|a| a.author.name.as_str()).collect();
    assert_eq!(names, vec!["Frank Herbert", "Neil Gaiman", "Terry Pratchett"]);
    assert_eq!(all.per_page, 12);

    let filtered = uc.execute(Some("PRATCH"), None).await.unwrap();
    assert_eq!(filtered.total_items, 1);
    assert_eq!(filtered.items[0].book_count, 1);
}

#[tokio::test]
async fn should_list_author_books_and_clamp_page() {
    let books = seeded_catalog();
    let uc = GetAuthorBooksUseCase {
        authors: MockAuthorRepo {
            data: books.data_handle(),
        },
        books,
    };

    let result = uc.execute(AuthorId(1), Some("7")).await.unwrap();

    assert_eq!(result.author.name, "Frank Herbert");
    assert_eq!(result.books.page, 1);
    let titles: Vec<&str> = result
        .books
        .items
        .iter()
        .map(|b| b.book.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Dune Messiah", "Dune"]);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_author() {
    let books = MockBookRepo::empty();
    let uc = GetAuthorBooksUseCase {
        authors: MockAuthorRepo {
            data: books.data_handle(),
        },
        books,
    };

    let result = uc.execute(AuthorId(5), None).await;

    assert!(matches!(result, Err(CatalogServiceError::AuthorNotFound)));
}

#[tokio::test]
async fn should_summarize_books_with_first_author_alphabetically() {
    let books = seeded_catalog();
    books.seed(&new_book(None, "Anonymous Pamphlet", &[]));
    let uc = ListBookSummariesUseCase { repo: books };

    let summaries = uc.execute().await.unwrap();

    assert_eq!(summaries[0].title, "Anonymous Pamphlet");
    assert_eq!(summaries[0].author_name, "Unknown Author");
    let good_omens = summaries.iter().find(|s| s.title == "Good Omens").unwrap();
    assert_eq!(good_omens.author_name, "Neil Gaiman");
    assert_eq!(good_omens.publication_year.as_deref(), Some("1965"));
}
