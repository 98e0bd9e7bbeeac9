//! Application Layer
//!
//! One use case type per resource; each method logs its attempt and outcome.

pub mod authors;
pub mod books;

pub use authors::AuthorUseCase;
pub use books::BookUseCase;
