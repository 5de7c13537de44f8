use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbAccountRepository, DbAuthorRepository, DbBookRepository, DbCommentRepository,
    DbFavoriteRepository,
};
use crate::infra::open_library::OpenLibraryClient;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub open_library: OpenLibraryClient,
}

impl AppState {
    pub fn book_repo(&self) -> DbBookRepository {
        DbBookRepository {
            db: self.db.clone(),
        }
    }

    pub fn author_repo(&self) -> DbAuthorRepository {
        DbAuthorRepository {
            db: self.db.clone(),
        }
    }

    pub fn comment_repo(&self) -> DbCommentRepository {
        DbCommentRepository {
            db: self.db.clone(),
        }
    }

    pub fn favorite_repo(&self) -> DbFavoriteRepository {
        DbFavoriteRepository {
            db: self.db.clone(),
        }
    }

    pub fn account_repo(&self) -> DbAccountRepository {
        DbAccountRepository {
            db: self.db.clone(),
        }
    }

    pub fn open_library(&self) -> OpenLibraryClient {
        self.open_library.clone()
    }
}
