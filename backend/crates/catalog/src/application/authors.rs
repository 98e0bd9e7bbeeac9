//! Author Use Cases

use kernel::id::AuthorId;
use std::sync::Arc;

use crate::domain::entity::Author;
use crate::domain::repository::AuthorRepository;
use crate::error::{CatalogError, CatalogResult};

const RESOURCE: &str = "Author";

pub struct AuthorUseCase<R>
where
    R: AuthorRepository,
{
    repo: Arc<R>,
}

impl<R> AuthorUseCase<R>
where
    R: AuthorRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> CatalogResult<Vec<Author>> {
        const ACTION: &str = "Authors - GetAuthors";
        tracing::info!(action = ACTION, "Attempted");

        let authors = self.repo.find_all().await?;

        tracing::info!(action = ACTION, count = authors.len(), "Successful");
        Ok(authors)
    }

    pub async fn get(&self, id: i32) -> CatalogResult<Author> {
        const ACTION: &str = "Authors - GetAuthor";
        tracing::info!(action = ACTION, id, "Attempted");

        let Some(author) = self.repo.find_by_id(AuthorId::from_i32(id)).await? else {
            tracing::warn!(action = ACTION, id, "Not Found");
            return Err(CatalogError::NotFound { resource: RESOURCE, id });
        };

        tracing::info!(action = ACTION, id, "Successful");
        Ok(author)
    }

    /// `candidate` carries the outcome of model validation.
    pub async fn create(&self, candidate: CatalogResult<Author>) -> CatalogResult<Author> {
        const ACTION: &str = "Authors - Create";
        tracing::info!(action = ACTION, "Attempted");

        let mut author = candidate.inspect_err(|e| {
            tracing::warn!(action = ACTION, reason = %e, "Invalid Or Incomplete Data Submitted");
        })?;

        if !self.repo.create(&mut author).await? {
            return Err(CatalogError::OperationFailed(ACTION.to_string()));
        }

        tracing::info!(action = ACTION, id = %author.id, "Successful");
        Ok(author)
    }

    /// Ids are checked before the store is touched; validation runs only
    /// once the author is known to exist.
    pub async fn update(
        &self,
        id: i32,
        body_id: i32,
        candidate: CatalogResult<Author>,
    ) -> CatalogResult<()> {
        const ACTION: &str = "Authors - Update";
        tracing::info!(action = ACTION, id, "Attempted");

        if id < 1 || id != body_id {
            tracing::warn!(action = ACTION, id, body_id, "Missing Data Or Invalid ID");
            return Err(CatalogError::InvalidId);
        }

        let author_id = AuthorId::from_i32(id);
        if !self.repo.exists(author_id).await? {
            tracing::warn!(action = ACTION, id, "Not Found");
            return Err(CatalogError::NotFound { resource: RESOURCE, id });
        }

        let author = candidate
            .inspect_err(|e| {
                tracing::warn!(action = ACTION, reason = %e, "Invalid Or Incomplete Data Submitted");
            })?
            .with_id(author_id);

        if !self.repo.update(&author).await? {
            return Err(CatalogError::OperationFailed(ACTION.to_string()));
        }

        tracing::info!(action = ACTION, id, "Successful");
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> CatalogResult<()> {
        const ACTION: &str = "Authors - Delete";
        tracing::info!(action = ACTION, id, "Attempted");

        if id < 1 {
            tracing::warn!(action = ACTION, id, "Invalid ID");
            return Err(CatalogError::InvalidId);
        }

        let author_id = AuthorId::from_i32(id);
        if !self.repo.exists(author_id).await? {
            tracing::warn!(action = ACTION, id, "Not Found");
            return Err(CatalogError::NotFound { resource: RESOURCE, id });
        }

        let Some(author) = self.repo.find_by_id(author_id).await? else {
            tracing::warn!(action = ACTION, id, "Not Found");
            return Err(CatalogError::NotFound { resource: RESOURCE, id });
        };

        if !self.repo.delete(&author).await? {
            return Err(CatalogError::OperationFailed(ACTION.to_string()));
        }

        tracing::info!(action = ACTION, id, "Successful");
        Ok(())
    }
}
