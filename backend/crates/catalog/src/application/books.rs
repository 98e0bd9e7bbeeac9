//! Book Use Cases

use kernel::id::BookId;
use std::sync::Arc;

use crate::domain::entity::Book;
use crate::domain::repository::BookRepository;
use crate::error::{CatalogError, CatalogResult};

const RESOURCE: &str = "Book";

pub struct BookUseCase<R>
where
    R: BookRepository,
{
    repo: Arc<R>,
}

impl<R> BookUseCase<R>
where
    R: BookRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> CatalogResult<Vec<Book>> {
        const ACTION: &str = "Books - GetBooks";
        tracing::info!(action = ACTION, "Attempted");

        let books = self.repo.find_all().await?;

        tracing::info!(action = ACTION, count = books.len(), "Successful");
        Ok(books)
    }

    pub async fn get(&self, id: i32) -> CatalogResult<Book> {
        const ACTION: &str = "Books - GetBook";
        tracing::info!(action = ACTION, id, "Attempted");

        let Some(book) = self.repo.find_by_id(BookId::from_i32(id)).await? else {
            tracing::warn!(action = ACTION, id, "Not Found");
            return Err(CatalogError::NotFound { resource: RESOURCE, id });
        };

        tracing::info!(action = ACTION, id, "Successful");
        Ok(book)
    }

    pub async fn create(&self, candidate: CatalogResult<Book>) -> CatalogResult<Book> {
        const ACTION: &str = "Books - Create";
        tracing::info!(action = ACTION, "Attempted");

        let mut book = candidate.inspect_err(|e| {
            tracing::warn!(action = ACTION, reason = %e, "Invalid Or Incomplete Data Submitted");
        })?;

        if !self.repo.create(&mut book).await? {
            return Err(CatalogError::OperationFailed(ACTION.to_string()));
        }

        tracing::info!(action = ACTION, id = %book.id, "Successful");
        Ok(book)
    }

    pub async fn update(
        &self,
        id: i32,
        body_id: i32,
        candidate: CatalogResult<Book>,
    ) -> CatalogResult<()> {
        const ACTION: &str = "Books - Update";
        tracing::info!(action = ACTION, id, "Attempted");

        if id < 1 || id != body_id {
            tracing::warn!(action = ACTION, id, body_id, "Missing Data Or Invalid ID");
            return Err(CatalogError::InvalidId);
        }

        let book_id = BookId::from_i32(id);
        if !self.repo.exists(book_id).await? {
            tracing::warn!(action = ACTION, id, "Not Found");
            return Err(CatalogError::NotFound { resource: RESOURCE, id });
        }

        let book = candidate
            .inspect_err(|e| {
                tracing::warn!(action = ACTION, reason = %e, "Invalid Or Incomplete Data Submitted");
            })?
            .with_id(book_id);

        if !self.repo.update(&book).await? {
            return Err(CatalogError::OperationFailed(ACTION.to_string()));
        }

        tracing::info!(action = ACTION, id, "Successful");
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> CatalogResult<()> {
        const ACTION: &str = "Books - Delete";
        tracing::info!(action = ACTION, id, "Attempted");

        if id < 1 {
            tracing::warn!(action = ACTION, id, "Invalid ID");
            return Err(CatalogError::InvalidId);
        }

        let book_id = BookId::from_i32(id);
        if !self.repo.exists(book_id).await? {
            tracing::warn!(action = ACTION, id, "Not Found");
            return Err(CatalogError::NotFound { resource: RESOURCE, id });
        }

        let Some(book) = self.repo.find_by_id(book_id).await? else {
            tracing::warn!(action = ACTION, id, "Not Found");
            return Err(CatalogError::NotFound { resource: RESOURCE, id });
        };

        if !self.repo.delete(&book).await? {
            return Err(CatalogError::OperationFailed(ACTION.to_string()));
        }

        tracing::info!(action = ACTION, id, "Successful");
        Ok(())
    }
}
