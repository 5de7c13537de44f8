use shelf_catalog::domain::types::ImportOutcome;
use shelf_catalog::error::CatalogServiceError;
use shelf_catalog::usecase::import::{IMPORT_SEARCH_LIMIT, ImportBookUseCase};
use shelf_catalog::usecase::open_library::{RemoteDetailsUseCase, SearchRemoteUseCase};

use crate::helpers::{MockBookRepo, MockOpenLibrary, new_book, remote_book};

#[tokio::test]
async fn should_create_nothing_when_remote_has_no_match() {
    let books = MockBookRepo::empty();
    let data = books.data_handle();
    let uc = ImportBookUseCase {
        open_library: MockOpenLibrary::returning(vec![]),
        books,
    };

    let outcome = uc.execute("No Such Book").await.unwrap();

    assert!(outcome.is_none());
    let data = data.lock().unwrap();
    assert!(data.books.is_empty());
    assert!(data.authors.is_empty());
}

#[tokio::test]
async fn should_fail_soft_when_remote_is_unreachable() {
    let books = MockBookRepo::empty();
    let data = books.data_handle();
    let uc = ImportBookUseCase {
        open_library: MockOpenLibrary::failing(),
        books,
    };

    let outcome = uc.execute("Dune").await.unwrap();

    assert!(outcome.is_none());
    assert!(data.lock().unwrap().books.is_empty());
}

#[tokio::test]
async fn should_return_existing_book_for_known_external_key() {
    let books = MockBookRepo::empty();
    let stored = books.seed(&new_book(Some("/works/OL1W"), "Dune", &["Frank Herbert"]));
    let data = books.data_handle();
    let uc = ImportBookUseCase {
        open_library: MockOpenLibrary::returning(vec![remote_book(
            Some("/works/OL1W"),
            "Dune (Deluxe Edition)",
            &["Frank Herbert"],
        )]),
        books,
    };

    let outcome = uc.execute("Dune").await.unwrap().unwrap();

    assert!(matches!(outcome, ImportOutcome::Existing(_)));
    assert_eq!(outcome.book().book.id, stored.book.id);
    assert_eq!(outcome.book().book.title, "Dune");
    assert_eq!(data.lock().unwrap().books.len(), 1);
}

#[tokio::test]
async fn should_create_book_and_authors_for_novel_key() {
    let books = MockBookRepo::empty();
    let data = books.data_handle();
    let uc = ImportBookUseCase {
        open_library: MockOpenLibrary::returning(vec![remote_book(
            Some("/works/OL893415W"),
            "Good Omens",
            &["Terry Pratchett", "Neil Gaiman", "Neil Gaiman"],
        )]),
        books,
    };

    let outcome = uc.execute("good omens").await.unwrap().unwrap();

    assert!(outcome.is_created());
    let created = outcome.book();
    assert_eq!(created.book.title, "Good Omens");
    assert_eq!(created.book.external_key.as_deref(), Some("/works/OL893415W"));
    let names: Vec<&str> = created.authors.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Neil Gaiman", "Terry Pratchett"]);

    let data = data.lock().unwrap();
    assert_eq!(data.books.len(), 1);
    assert_eq!(data.authors.len(), 2);
    assert_eq!(
        data.authors[0].bio.as_deref(),
        Some("Author of Good Omens")
    );
}

#[tokio::test]
async fn should_reuse_existing_authors() {
    let books = MockBookRepo::empty();
    books.seed(&new_book(Some("/works/OL1W"), "Dune", &["Frank Herbert"]));
    let data = books.data_handle();
    let uc = ImportBookUseCase {
        open_library: MockOpenLibrary::returning(vec![remote_book(
            Some("/works/OL2W"),
            "Dune Messiah",
            &["Frank Herbert"],
        )]),
        books,
    };

    let outcome = uc.execute("Dune Messiah").await.unwrap().unwrap();

    assert!(outcome.is_created());
    let data = data.lock().unwrap();
    assert_eq!(data.books.len(), 2);
    assert_eq!(data.authors.len(), 1, "author must be reused, not duplicated");
    assert_eq!(data.authors[0].bio.as_deref(), Some("Author of Dune"));
}

#[tokio::test]
async fn should_fail_soft_when_persistence_fails() {
    let uc = ImportBookUseCase {
        open_library: MockOpenLibrary::returning(vec![remote_book(
            Some("/works/OL3W"),
            "Children of Dune",
            &["Frank Herbert"],
        )]),
        books: MockBookRepo::failing_writes(),
    };

    let outcome = uc.execute("Children of Dune").await.unwrap();

    assert!(outcome.is_none());
}

#[tokio::test]
async fn should_reject_blank_title_without_calling_remote() {
    let open_library = MockOpenLibrary::returning(vec![]);
    let searches = open_library.searches_handle();
    let uc = ImportBookUseCase {
        open_library,
        books: MockBookRepo::empty(),
    };

    let result = uc.execute("   ").await;

    assert!(
        matches!(result, Err(CatalogServiceError::MissingTitle)),
        "expected MissingTitle, got {result:?}"
    );
    assert!(searches.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_search_only_the_top_hit_with_trimmed_title() {
    let open_library = MockOpenLibrary::returning(vec![
        remote_book(Some("/works/OL1W"), "Dune", &["Frank Herbert"]),
        remote_book(Some("/works/OL2W"), "Dune Messiah", &["Frank Herbert"]),
    ]);
    let searches = open_library.searches_handle();
    let books = MockBookRepo::empty();
    let data = books.data_handle();
    let uc = ImportBookUseCase {
        open_library,
        books,
    };

    uc.execute("  Dune ").await.unwrap();

    assert_eq!(
        *searches.lock().unwrap(),
        vec![("Dune".to_owned(), IMPORT_SEARCH_LIMIT)]
    );
    assert_eq!(data.lock().unwrap().books.len(), 1);
}

#[tokio::test]
async fn should_store_keyless_hit_without_external_key() {
    let books = MockBookRepo::empty();
    let data = books.data_handle();
    let uc = ImportBookUseCase {
        open_library: MockOpenLibrary::returning(vec![remote_book(
            None,
            "Pamphlet",
            &[],
        )]),
        books,
    };

    let outcome = uc.execute("Pamphlet").await.unwrap().unwrap();

    assert!(outcome.is_created());
    assert_eq!(outcome.book().book.external_key, None);
    assert!(outcome.book().authors.is_empty());
    assert!(data.lock().unwrap().authors.is_empty());
}

// ── Admin lookups ────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_preview_with_default_and_clamped_limits() {
    let open_library = MockOpenLibrary::returning(vec![
        remote_book(Some("/works/OL1W"), "Dune", &["Frank Herbert"]),
        remote_book(Some("/works/OL2W"), "Dune Messiah", &["Frank Herbert"]),
    ]);
    let searches = open_library.searches_handle();
    let uc = SearchRemoteUseCase { open_library };

    let hits = uc.execute("dune", None).await.unwrap();
    assert_eq!(hits.len(), 2);
    uc.execute("dune", Some(0)).await.unwrap();
    uc.execute("dune", Some(500)).await.unwrap();

    let limits: Vec<u32> = searches.lock().unwrap().iter().map(|(_, l)| *l).collect();
    assert_eq!(limits, vec![5, 1, 20]);
}

#[tokio::test]
async fn should_preview_nothing_when_remote_fails() {
    let uc = SearchRemoteUseCase {
        open_library: MockOpenLibrary::failing(),
    };

    let hits = uc.execute("dune", Some(3)).await.unwrap();

    assert!(hits.is_empty());
}

#[tokio::test]
async fn should_require_title_for_preview() {
    let uc = SearchRemoteUseCase {
        open_library: MockOpenLibrary::returning(vec![]),
    };

    let result = uc.execute("  ", None).await;

    assert!(matches!(result, Err(CatalogServiceError::MissingTitle)));
}

#[tokio::test]
async fn should_fetch_details_for_valid_key_only() {
    let uc = RemoteDetailsUseCase {
        open_library: MockOpenLibrary::returning(vec![]),
    };

    let document = uc.execute(" /works/OL1W ").await.unwrap();
    assert_eq!(document["key"], "/works/OL1W");

    let missing = uc.execute("/works/OL2W").await;
    assert!(matches!(
        missing,
        Err(CatalogServiceError::RemoteRecordNotFound)
    ));

    let invalid = uc.execute("works/OL1W").await;
    assert!(matches!(invalid, Err(CatalogServiceError::InvalidRemoteKey)));
}

#[tokio::test]
async fn should_report_details_failure_as_not_found() {
    let uc = RemoteDetailsUseCase {
        open_library: MockOpenLibrary::failing(),
    };

    let result = uc.execute("/works/OL1W").await;

    assert!(matches!(
        result,
        Err(CatalogServiceError::RemoteRecordNotFound)
    ));
}
