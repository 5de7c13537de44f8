use shelf_domain::id::{AccountId, BookId};

use crate::domain::repository::{AccountRepository, BookRepository, CommentRepository};
use crate::domain::types::Comment;
use crate::error::CatalogServiceError;

pub struct PostCommentInput {
    pub book_id: BookId,
    pub user_id: AccountId,
    pub content: String,
}

pub struct PostCommentUseCase<B, A, C>
where
    B: BookRepository,
    A: AccountRepository,
    C: CommentRepository,
{
    pub books: B,
    pub accounts: A,
    pub comments: C,
}

impl<B, A, C> PostCommentUseCase<B, A, C>
where
    B: BookRepository,
    A: AccountRepository,
    C: CommentRepository,
{
    pub async fn execute(&self, input: PostCommentInput) -> Result<Comment, CatalogServiceError> {
        let content = input.content.trim();
        if content.is_empty() {
            return Err(CatalogServiceError::EmptyComment);
        }
        if !self.books.exists(input.book_id).await? {
            return Err(CatalogServiceError::BookNotFound);
        }
        let account = self
            .accounts
            .find_by_id(input.user_id)
            .await?
            .ok_or(CatalogServiceError::Unauthorized)?;

        let comment = self
            .comments
            .create(input.book_id, &account, content)
            .await?;
        tracing::info!(book_id = %input.book_id, comment_id = %comment.id, "comment posted");
        Ok(comment)
    }
}
