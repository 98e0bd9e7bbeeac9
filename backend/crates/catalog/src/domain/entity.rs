//! Catalog Entities

use kernel::id::{AuthorId, BookId};

/// Maximum summary length in characters
pub const SUMMARY_MAX_LENGTH: usize = 500;

/// Exclusive bound on a price's magnitude; the column is `NUMERIC(18, 2)`
pub const PRICE_LIMIT: f64 = 1e16;

/// An author and the books that reference them
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub id: AuthorId,
    pub first_name: String,
    pub last_name: String,
    pub bio: Option<String>,
    /// Loaded when the author is read; ignored on writes
    pub books: Vec<Book>,
}

impl Author {
    pub fn new(first_name: String, last_name: String, bio: Option<String>) -> Self {
        Self {
            id: AuthorId::unassigned(),
            first_name,
            last_name,
            bio,
            books: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: AuthorId) -> Self {
        self.id = id;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub year: Option<i32>,
    pub isbn: String,
    pub summary: Option<String>,
    pub image: Option<String>,
    pub price: f64,
    /// `None` once the author has been deleted
    pub author_id: Option<AuthorId>,
    /// Loaded when the book is read; ignored on writes
    pub author: Option<Box<Author>>,
}

impl Book {
    pub fn new(title: String, isbn: String) -> Self {
        Self {
            id: BookId::unassigned(),
            title,
            year: None,
            isbn,
            summary: None,
            image: None,
            price: 0.0,
            author_id: None,
            author: None,
        }
    }

    pub fn with_id(mut self, id: BookId) -> Self {
        self.id = id;
        self
    }
}
