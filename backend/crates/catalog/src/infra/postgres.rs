//! PostgreSQL Repository Implementations
//!
//! `price` is stored as `NUMERIC(18, 2)` and travels as `float8`.

use kernel::id::{AuthorId, BookId};
use sqlx::PgPool;
use std::collections::HashMap;

use crate::domain::entity::{Author, Book};
use crate::domain::repository::{AuthorRepository, BookRepository};
use crate::error::CatalogResult;

const SELECT_BOOK: &str = r#"
    SELECT id, title, year, isbn, summary, image, price::float8 AS price, author_id
    FROM books
"#;

const SELECT_BOOK_WITH_AUTHOR: &str = r#"
    SELECT
        b.id,
        b.title,
        b.year,
        b.isbn,
        b.summary,
        b.image,
        b.price::float8 AS price,
        b.author_id,
        a.first_name AS author_first_name,
        a.last_name AS author_last_name,
        a.bio AS author_bio
    FROM books b
    LEFT JOIN authors a ON a.id = b.author_id
"#;

/// PostgreSQL-backed catalog (authors and books)
#[derive(Clone)]
pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Books of the given authors, grouped by author id
    async fn books_of(&self, author_ids: &[i32]) -> CatalogResult<HashMap<i32, Vec<Book>>> {
        let sql = format!("{SELECT_BOOK} WHERE author_id = ANY($1) ORDER BY id");
        let rows = sqlx::query_as::<_, BookRow>(&sql)
            .bind(author_ids)
            .fetch_all(&self.pool)
            .await?;

        let mut grouped: HashMap<i32, Vec<Book>> = HashMap::new();
        for row in rows {
            if let Some(author_id) = row.author_id {
                grouped.entry(author_id).or_default().push(row.into_book());
            }
        }
        Ok(grouped)
    }
}

// ============================================================================
// Author Repository Implementation
// ============================================================================

impl AuthorRepository for PgCatalogRepository {
    async fn find_all(&self) -> CatalogResult<Vec<Author>> {
        let rows = sqlx::query_as::<_, AuthorRow>(
            "SELECT id, first_name, last_name, bio FROM authors ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        let ids: Vec<i32> = rows.iter().map(|r| r.id).collect();
        let mut books = self.books_of(&ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let author_books = books.remove(&row.id).unwrap_or_default();
                row.into_author(author_books)
            })
            .collect())
    }

    async fn find_by_id(&self, id: AuthorId) -> CatalogResult<Option<Author>> {
        let row = sqlx::query_as::<_, AuthorRow>(
            "SELECT id, first_name, last_name, bio FROM authors WHERE id = $1",
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let books = self
            .books_of(&[row.id])
            .await?
            .remove(&row.id)
            .unwrap_or_default();
        Ok(Some(row.into_author(books)))
    }

    async fn exists(&self, id: AuthorId) -> CatalogResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM authors WHERE id = $1)")
                .bind(id.as_i32())
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn create(&self, author: &mut Author) -> CatalogResult<bool> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO authors (first_name, last_name, bio)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&author.first_name)
        .bind(&author.last_name)
        .bind(&author.bio)
        .fetch_optional(&self.pool)
        .await?;

        Ok(match id {
            Some(id) => {
                author.id = AuthorId::from_i32(id);
                true
            }
            None => false,
        })
    }

    async fn update(&self, author: &Author) -> CatalogResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE authors
            SET first_name = $2, last_name = $3, bio = $4
            WHERE id = $1
            "#,
        )
        .bind(author.id.as_i32())
        .bind(&author.first_name)
        .bind(&author.last_name)
        .bind(&author.bio)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, author: &Author) -> CatalogResult<bool> {
        // books.author_id is ON DELETE SET NULL
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(author.id.as_i32())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// ============================================================================
// Book Repository Implementation
// ============================================================================

impl BookRepository for PgCatalogRepository {
    async fn find_all(&self) -> CatalogResult<Vec<Book>> {
        let sql = format!("{SELECT_BOOK_WITH_AUTHOR} ORDER BY b.id");
        let rows = sqlx::query_as::<_, BookWithAuthorRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(BookWithAuthorRow::into_book).collect())
    }

    async fn find_by_id(&self, id: BookId) -> CatalogResult<Option<Book>> {
        let sql = format!("{SELECT_BOOK_WITH_AUTHOR} WHERE b.id = $1");
        let row = sqlx::query_as::<_, BookWithAuthorRow>(&sql)
            .bind(id.as_i32())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(BookWithAuthorRow::into_book))
    }

    async fn exists(&self, id: BookId) -> CatalogResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM books WHERE id = $1)")
                .bind(id.as_i32())
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn create(&self, book: &mut Book) -> CatalogResult<bool> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO books (title, year, isbn, summary, image, price, author_id)
            VALUES ($1, $2, $3, $4, $5, $6::float8::numeric(18, 2), $7)
            RETURNING id
            "#,
        )
        .bind(&book.title)
        .bind(book.year)
        .bind(&book.isbn)
        .bind(&book.summary)
        .bind(&book.image)
        .bind(book.price)
        .bind(book.author_id.map(|id| id.as_i32()))
        .fetch_optional(&self.pool)
        .await?;

        Ok(match id {
            Some(id) => {
                book.id = BookId::from_i32(id);
                true
            }
            None => false,
        })
    }

    async fn update(&self, book: &Book) -> CatalogResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = $2,
                year = $3,
                isbn = $4,
                summary = $5,
                image = $6,
                price = $7::float8::numeric(18, 2),
                author_id = $8
            WHERE id = $1
            "#,
        )
        .bind(book.id.as_i32())
        .bind(&book.title)
        .bind(book.year)
        .bind(&book.isbn)
        .bind(&book.summary)
        .bind(&book.image)
        .bind(book.price)
        .bind(book.author_id.map(|id| id.as_i32()))
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, book: &Book) -> CatalogResult<bool> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(book.id.as_i32())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct AuthorRow {
    id: i32,
    first_name: String,
    last_name: String,
    bio: Option<String>,
}

impl AuthorRow {
    fn into_author(self, books: Vec<Book>) -> Author {
        Author {
            id: AuthorId::from_i32(self.id),
            first_name: self.first_name,
            last_name: self.last_name,
            bio: self.bio,
            books,
        }
    }
}

#[derive(sqlx::FromRow)]
struct BookRow {
    id: i32,
    title: String,
    year: Option<i32>,
    isbn: String,
    summary: Option<String>,
    image: Option<String>,
    price: f64,
    author_id: Option<i32>,
}

impl BookRow {
    fn into_book(self) -> Book {
        Book {
            id: BookId::from_i32(self.id),
            title: self.title,
            year: self.year,
            isbn: self.isbn,
            summary: self.summary,
            image: self.image,
            price: self.price,
            author_id: self.author_id.map(AuthorId::from_i32),
            author: None,
        }
    }
}

#[derive(sqlx::FromRow)]
struct BookWithAuthorRow {
    #[sqlx(flatten)]
    book: BookRow,
    author_first_name: Option<String>,
    author_last_name: Option<String>,
    author_bio: Option<String>,
}

impl BookWithAuthorRow {
    fn into_book(self) -> Book {
        let author = match (self.book.author_id, self.author_first_name, self.author_last_name) {
            (Some(id), Some(first_name), Some(last_name)) => Some(Box::new(Author {
                id: AuthorId::from_i32(id),
                first_name,
                last_name,
                bio: self.author_bio,
                books: Vec::new(),
            })),
            _ => None,
        };

        Book {
            author,
            ..self.book.into_book()
        }
    }
}
