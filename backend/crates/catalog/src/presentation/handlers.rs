//! HTTP Handlers

use axum::Json;
use axum::extract::{OriginalUri, Path, State};
use axum::http::{StatusCode, Uri, header};
use axum::response::IntoResponse;
use kernel::extract::JsonBody;
use std::sync::Arc;

use crate::application::{AuthorUseCase, BookUseCase};
use crate::domain::repository::{AuthorRepository, BookRepository};
use crate::error::CatalogResult;
use crate::presentation::dto::{
    AuthorCreateDto, AuthorDto, AuthorUpdateDto, BookCreateDto, BookDto, BookUpdateDto,
    CreatedAuthor, CreatedBook,
};

/// Shared state for catalog handlers
pub struct CatalogAppState<R> {
    pub repo: Arc<R>,
}

impl<R> Clone for CatalogAppState<R> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

/// `Location` of a freshly created resource
fn location(uri: &Uri, id: impl std::fmt::Display) -> String {
    format!("{}/{}", uri.path().trim_end_matches('/'), id)
}

// ============================================================================
// Authors
// ============================================================================

/// GET /api/authors
pub async fn list_authors<R>(
    State(state): State<CatalogAppState<R>>,
) -> CatalogResult<Json<Vec<AuthorDto>>>
where
    R: AuthorRepository + Send + Sync + 'static,
{
    let authors = AuthorUseCase::new(state.repo.clone()).list().await?;
    Ok(Json(authors.into_iter().map(AuthorDto::from).collect()))
}

/// GET /api/authors/{id}
pub async fn get_author<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<i32>,
) -> CatalogResult<Json<AuthorDto>>
where
    R: AuthorRepository + Send + Sync + 'static,
{
    let author = AuthorUseCase::new(state.repo.clone()).get(id).await?;
    Ok(Json(author.into()))
}

/// POST /api/authors
pub async fn create_author<R>(
    State(state): State<CatalogAppState<R>>,
    OriginalUri(uri): OriginalUri,
    JsonBody(req): JsonBody<AuthorCreateDto>,
) -> CatalogResult<impl IntoResponse>
where
    R: AuthorRepository + Send + Sync + 'static,
{
    let author = AuthorUseCase::new(state.repo.clone())
        .create(req.into_entity())
        .await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location(&uri, author.id))],
        Json(CreatedAuthor {
            author: author.into(),
        }),
    ))
}

/// PUT /api/authors/{id}
pub async fn update_author<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<i32>,
    JsonBody(req): JsonBody<AuthorUpdateDto>,
) -> CatalogResult<StatusCode>
where
    R: AuthorRepository + Send + Sync + 'static,
{
    let body_id = req.id;
    AuthorUseCase::new(state.repo.clone())
        .update(id, body_id, req.into_entity())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/authors/{id}
pub async fn delete_author<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<i32>,
) -> CatalogResult<StatusCode>
where
    R: AuthorRepository + Send + Sync + 'static,
{
    AuthorUseCase::new(state.repo.clone()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Books
// ============================================================================

/// GET /api/books
pub async fn list_books<R>(
    State(state): State<CatalogAppState<R>>,
) -> CatalogResult<Json<Vec<BookDto>>>
where
    R: BookRepository + Send + Sync + 'static,
{
    let books = BookUseCase::new(state.repo.clone()).list().await?;
    Ok(Json(books.into_iter().map(BookDto::from).collect()))
}

/// GET /api/books/{id}
pub async fn get_book<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<i32>,
) -> CatalogResult<Json<BookDto>>
where
    R: BookRepository + Send + Sync + 'static,
{
    let book = BookUseCase::new(state.repo.clone()).get(id).await?;
    Ok(Json(book.into()))
}

/// POST /api/books
pub async fn create_book<R>(
    State(state): State<CatalogAppState<R>>,
    OriginalUri(uri): OriginalUri,
    JsonBody(req): JsonBody<BookCreateDto>,
) -> CatalogResult<impl IntoResponse>
where
    R: BookRepository + Send + Sync + 'static,
{
    let book = BookUseCase::new(state.repo.clone())
        .create(req.into_entity())
        .await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location(&uri, book.id))],
        Json(CreatedBook { book: book.into() }),
    ))
}

/// PUT /api/books/{id}
pub async fn update_book<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<i32>,
    JsonBody(req): JsonBody<BookUpdateDto>,
) -> CatalogResult<StatusCode>
where
    R: BookRepository + Send + Sync + 'static,
{
    let body_id = req.id;
    BookUseCase::new(state.repo.clone())
        .update(id, body_id, req.into_entity())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/books/{id}
pub async fn delete_book<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<i32>,
) -> CatalogResult<StatusCode>
where
    R: BookRepository + Send + Sync + 'static,
{
    BookUseCase::new(state.repo.clone()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location() {
        let uri: Uri = "/api/books".parse().unwrap();
        assert_eq!(location(&uri, 12), "/api/books/12");

        let uri: Uri = "/api/books/?x=1".parse().unwrap();
        assert_eq!(location(&uri, 12), "/api/books/12");
    }
}
