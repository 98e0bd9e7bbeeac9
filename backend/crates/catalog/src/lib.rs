//! Catalog Backend Module
//!
//! Authors and their books.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities and repository traits
//! - `application/` - CRUD use cases (one per resource)
//! - `infra/` - PostgreSQL implementation
//! - `presentation/` - DTOs, handlers, router
//!
//! Listing is public, reading a single record needs a bearer token and
//! every write needs the `Administrator` role.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use error::{CatalogError, CatalogResult};
pub use infra::postgres::PgCatalogRepository;
pub use presentation::router::{
    authors_router, authors_router_generic, books_router, books_router_generic,
};
