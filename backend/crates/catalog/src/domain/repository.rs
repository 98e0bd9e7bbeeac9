//! Repository Traits
//!
//! Mutations report success as a boolean (rows affected); absent reads are
//! `None`. Errors are reserved for failures of the store itself.

use kernel::id::{AuthorId, BookId};

use crate::domain::entity::{Author, Book};
use crate::error::CatalogResult;

/// Author repository trait
#[trait_variant::make(AuthorRepository: Send)]
pub trait LocalAuthorRepository {
    /// All authors, each with their books
    async fn find_all(&self) -> CatalogResult<Vec<Author>>;

    /// One author with their books
    async fn find_by_id(&self, id: AuthorId) -> CatalogResult<Option<Author>>;

    async fn exists(&self, id: AuthorId) -> CatalogResult<bool>;

    /// Insert and assign the generated id
    async fn create(&self, author: &mut Author) -> CatalogResult<bool>;

    /// Replace all columns of the row with `author.id`
    async fn update(&self, author: &Author) -> CatalogResult<bool>;

    async fn delete(&self, author: &Author) -> CatalogResult<bool>;
}

/// Book repository trait
#[trait_variant::make(BookRepository: Send)]
pub trait LocalBookRepository {
    /// All books, each with its author
    async fn find_all(&self) -> CatalogResult<Vec<Book>>;

    /// One book with its author
    async fn find_by_id(&self, id: BookId) -> CatalogResult<Option<Book>>;

    async fn exists(&self, id: BookId) -> CatalogResult<bool>;

    /// Insert and assign the generated id
    async fn create(&self, book: &mut Book) -> CatalogResult<bool>;

    /// Replace all columns of the row with `book.id`
    async fn update(&self, book: &Book) -> CatalogResult<bool>;

    async fn delete(&self, book: &Book) -> CatalogResult<bool>;
}
