use uuid::Uuid;

use shelf_catalog::error::CatalogServiceError;
use shelf_catalog::usecase::comment::{PostCommentInput, PostCommentUseCase};
use shelf_catalog::usecase::favorite::{
    AddFavoriteUseCase, ListFavoritesUseCase, RemoveFavoriteUseCase,
};
use shelf_domain::id::{AccountId, BookId};

use crate::helpers::{
    MockAccountRepo, MockBookRepo, MockCommentRepo, MockFavoriteRepo, new_book, test_account,
};

fn catalog_with_one_book() -> MockBookRepo {
    let books = MockBookRepo::empty();
    books.seed(&new_book(Some("/works/OL1W"), "Dune", &["Frank Herbert"]));
    books
}

// ── Comments ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_post_trimmed_comment() {
    let account = test_account("reader");
    let comments = MockCommentRepo::empty();
    let stored = comments.comments_handle();
    let uc = PostCommentUseCase {
        books: catalog_with_one_book(),
        accounts: MockAccountRepo::new(vec![account.clone()]),
        comments,
    };

    let comment = uc
        .execute(PostCommentInput {
            book_id: BookId(1),
            user_id: account.id,
            content: "  Loved the sandworms.  ".to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(comment.content, "Loved the sandworms.");
    assert_eq!(comment.username, "reader");
    assert_eq!(stored.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_reject_whitespace_only_comment() {
    let account = test_account("reader");
    let comments = MockCommentRepo::empty();
    let stored = comments.comments_handle();
    let uc = PostCommentUseCase {
        books: catalog_with_one_book(),
        accounts: MockAccountRepo::new(vec![account.clone()]),
        comments,
    };

    let result = uc
        .execute(PostCommentInput {
            book_id: BookId(1),
            user_id: account.id,
            content: " \n\t ".to_owned(),
        })
        .await;

    assert!(matches!(result, Err(CatalogServiceError::EmptyComment)));
    assert!(stored.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_comment_on_missing_book() {
    let account = test_account("reader");
    let uc = PostCommentUseCase {
        books: MockBookRepo::empty(),
        accounts: MockAccountRepo::new(vec![account.clone()]),
        comments: MockCommentRepo::empty(),
    };

    let result = uc
        .execute(PostCommentInput {
            book_id: BookId(42),
            user_id: account.id,
            content: "Hello".to_owned(),
        })
        .await;

    assert!(matches!(result, Err(CatalogServiceError::BookNotFound)));
}

#[tokio::test]
async fn should_reject_comment_from_unknown_account() {
    let uc = PostCommentUseCase {
        books: catalog_with_one_book(),
        accounts: MockAccountRepo::empty(),
        comments: MockCommentRepo::empty(),
    };

    let result = uc
        .execute(PostCommentInput {
            book_id: BookId(1),
            user_id: AccountId(Uuid::now_v7()),
            content: "Hello".to_owned(),
        })
        .await;

    assert!(matches!(result, Err(CatalogServiceError::Unauthorized)));
}

// ── Favorites ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_add_favorite_idempotently() {
    let account = test_account("reader");
    let favorites = MockFavoriteRepo::empty();
    let stored = favorites.favorites_handle();
    let uc = AddFavoriteUseCase {
        books: catalog_with_one_book(),
        accounts: MockAccountRepo::new(vec![account.clone()]),
        favorites,
    };

    let first = uc.execute(account.id, BookId(1)).await.unwrap();
    let second = uc.execute(account.id, BookId(1)).await.unwrap();

    assert_eq!(first.created_at, second.created_at);
    assert_eq!(stored.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_not_favorite_missing_book() {
    let account = test_account("reader");
    let uc = AddFavoriteUseCase {
        books: MockBookRepo::empty(),
        accounts: MockAccountRepo::new(vec![account.clone()]),
        favorites: MockFavoriteRepo::empty(),
    };

    let result = uc.execute(account.id, BookId(3)).await;

    assert!(matches!(result, Err(CatalogServiceError::BookNotFound)));
}

#[tokio::test]
async fn should_not_favorite_for_unknown_account() {
    let uc = AddFavoriteUseCase {
        books: catalog_with_one_book(),
        accounts: MockAccountRepo::empty(),
        favorites: MockFavoriteRepo::empty(),
    };

    let result = uc.execute(AccountId(Uuid::now_v7()), BookId(1)).await;

    assert!(matches!(result, Err(CatalogServiceError::Unauthorized)));
}

#[tokio::test]
async fn should_remove_existing_favorite_and_report_missing_one() {
    let account = test_account("reader");
    let favorites = MockFavoriteRepo::empty();
    let stored = favorites.favorites_handle();
    let add = AddFavoriteUseCase {
        books: catalog_with_one_book(),
        accounts: MockAccountRepo::new(vec![account.clone()]),
        favorites,
    };
    add.execute(account.id, BookId(1)).await.unwrap();

    let remove = RemoveFavoriteUseCase {
        favorites: MockFavoriteRepo {
            favorites: stored.clone(),
        },
    };

    remove.execute(account.id, BookId(1)).await.unwrap();
    assert!(stored.lock().unwrap().is_empty());

    let again = remove.execute(account.id, BookId(1)).await;
    assert!(matches!(again, Err(CatalogServiceError::FavoriteNotFound)));
}

#[tokio::test]
async fn should_list_favorites_with_favorites_page_size() {
    let uc = ListFavoritesUseCase {
        favorites: MockFavoriteRepo::empty(),
    };

    let page = uc
        .execute(AccountId(Uuid::now_v7()), Some("3"))
        .await
        .unwrap();

    assert_eq!(page.per_page, 12);
    assert_eq!(page.page, 1);
    assert!(page.items.is_empty());
}
