//! API DTOs (Data Transfer Objects)
//!
//! Request DTOs accept missing fields so that model validation runs at the
//! point the handler chooses; `into_entity` returns the validation outcome.

use kernel::id::{AuthorId, BookId};
use serde::{Deserialize, Serialize};

use crate::domain::entity::{Author, Book, PRICE_LIMIT, SUMMARY_MAX_LENGTH};
use crate::error::{CatalogError, CatalogResult};

// ============================================================================
// Authors
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub bio: Option<String>,
    pub books: Vec<BookDto>,
}

impl From<Author> for AuthorDto {
    fn from(author: Author) -> Self {
        Self {
            id: author.id.as_i32(),
            first_name: author.first_name,
            last_name: author.last_name,
            bio: author.bio,
            books: author.books.into_iter().map(BookDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorCreateDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
}

impl AuthorCreateDto {
    pub fn into_entity(self) -> CatalogResult<Author> {
        Ok(Author::new(
            required(self.first_name, "FirstName")?,
            required(self.last_name, "LastName")?,
            self.bio,
        ))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorUpdateDto {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
}

impl AuthorUpdateDto {
    pub fn into_entity(self) -> CatalogResult<Author> {
        Ok(Author::new(
            required(self.first_name, "FirstName")?,
            required(self.last_name, "LastName")?,
            self.bio,
        )
        .with_id(AuthorId::from_i32(self.id)))
    }
}

/// Body of `201 Created`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedAuthor {
    pub author: AuthorDto,
}

// ============================================================================
// Books
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    pub id: i32,
    pub title: String,
    pub year: Option<i32>,
    pub isbn: String,
    pub summary: Option<String>,
    pub image: Option<String>,
    pub price: f64,
    pub author_id: Option<i32>,
    pub author: Option<AuthorDto>,
}

impl From<Book> for BookDto {
    fn from(book: Book) -> Self {
        Self {
            id: book.id.as_i32(),
            title: book.title,
            year: book.year,
            isbn: book.isbn,
            summary: book.summary,
            image: book.image,
            price: book.price,
            author_id: book.author_id.map(|id| id.as_i32()),
            author: book.author.map(|a| AuthorDto::from(*a)),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookCreateDto {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub isbn: Option<String>,
    pub summary: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
    pub author_id: Option<i32>,
}

impl BookCreateDto {
    pub fn into_entity(self) -> CatalogResult<Book> {
        let title = required(self.title, "Title")?;
        let isbn = required(self.isbn, "ISBN")?;
        let author_id = self
            .author_id
            .ok_or_else(|| CatalogError::validation("The AuthorID field is required"))?;

        Ok(Book {
            year: self.year,
            summary: summary(self.summary)?,
            image: self.image,
            price: price(self.price)?,
            author_id: Some(AuthorId::from_i32(author_id)),
            ..Book::new(title, isbn)
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookUpdateDto {
    pub id: i32,
    pub title: Option<String>,
    pub year: Option<i32>,
    pub isbn: Option<String>,
    pub summary: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
    pub author_id: Option<i32>,
}

impl BookUpdateDto {
    pub fn into_entity(self) -> CatalogResult<Book> {
        let title = required(self.title, "Title")?;
        let isbn = required(self.isbn, "ISBN")?;

        Ok(Book {
            year: self.year,
            summary: summary(self.summary)?,
            image: self.image,
            price: price(self.price)?,
            author_id: self.author_id.map(AuthorId::from_i32),
            ..Book::new(title, isbn).with_id(BookId::from_i32(self.id))
        })
    }
}

/// Body of `201 Created`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedBook {
    pub book: BookDto,
}

// ============================================================================
// Validation helpers
// ============================================================================

fn required(value: Option<String>, field: &str) -> CatalogResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(CatalogError::validation(format!("The {field} field is required"))),
    }
}

fn summary(value: Option<String>) -> CatalogResult<Option<String>> {
    match value {
        Some(s) if s.chars().count() > SUMMARY_MAX_LENGTH => Err(CatalogError::validation(
            format!("The field Summary must be a string with a maximum length of {SUMMARY_MAX_LENGTH}"),
        )),
        other => Ok(other),
    }
}

fn price(value: Option<f64>) -> CatalogResult<f64> {
    let price = value.unwrap_or_default();
    if price.is_finite() && price.abs() < PRICE_LIMIT {
        Ok(price)
    } else {
        Err(CatalogError::validation(format!(
            "The field Price must be less than {PRICE_LIMIT:e} in magnitude"
        )))
    }
}
