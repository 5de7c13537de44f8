use axum::{
    Router,
    routing::{get, post},
};

use shelf_core::health::healthz;
use shelf_core::middleware::{propagate_request_id_layer, request_id_layer, trace_layer};

use crate::handlers::{
    account::{login, register},
    admin::{import_book, open_library_details, search_open_library},
    author::{get_author, list_authors},
    book::{get_book, list_book_summaries, list_books},
    comment::post_comment,
    favorite::{add_favorite, list_favorites, remove_favorite},
    health::readyz,
    search::search,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Books
        .route("/books", get(list_books))
        .route("/books/{book_id}", get(get_book))
        .route("/books/{book_id}/comments", post(post_comment))
        .route(
            "/books/{book_id}/favorite",
            post(add_favorite).delete(remove_favorite),
        )
        .route("/api/books", get(list_book_summaries))
        // Authors
        .route("/authors", get(list_authors))
        .route("/authors/{author_id}", get(get_author))
        // Search
        .route("/search", get(search))
        // Accounts
        .route("/accounts/register", post(register))
        .route("/accounts/login", post(login))
        .route("/users/@me/favorites", get(list_favorites))
        // Admin
        .route("/admin/books/import", post(import_book))
        .route("/admin/open-library/search", get(search_open_library))
        .route("/admin/open-library/details", get(open_library_details))
        .layer(propagate_request_id_layer())
        .layer(trace_layer())
        .layer(request_id_layer())
        .with_state(state)
}
