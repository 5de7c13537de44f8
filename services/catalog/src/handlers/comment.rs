use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use shelf_auth_types::identity::IdentityHeaders;
use shelf_domain::id::{AccountId, BookId, CommentId};

use crate::domain::types::Comment;
use crate::error::CatalogServiceError;
use crate::state::AppState;
use crate::usecase::comment::{PostCommentInput, PostCommentUseCase};

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: CommentId,
    pub book_id: BookId,
    pub user_id: AccountId,
    pub username: String,
    pub content: String,
    #[serde(serialize_with = "shelf_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            book_id: comment.book_id,
            user_id: comment.user_id,
            username: comment.username,
            content: comment.content,
            created_at: comment.created_at,
        }
    }
}

#[derive(Deserialize)]
pub struct PostCommentRequest {
    pub content: String,
}

// ── POST /books/{book_id}/comments ───────────────────────────────────────────

pub async fn post_comment(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(book_id): Path<BookId>,
    Json(body): Json<PostCommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), CatalogServiceError> {
    let uc = PostCommentUseCase {
        books: state.book_repo(),
        accounts: state.account_repo(),
        comments: state.comment_repo(),
    };
    let comment = uc
        .execute(PostCommentInput {
            book_id,
            user_id: identity.user_id,
            content: body.content,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(comment.into())))
}
