//! Catalog Routers
//!
//! | Method | Path   | Guard                   |
//! |--------|--------|-------------------------|
//! | GET    | `/`    | none                    |
//! | POST   | `/`    | `require_administrator` |
//! | GET    | `/{id}`| `require_bearer`        |
//! | PUT    | `/{id}`| `require_administrator` |
//! | DELETE | `/{id}`| `require_administrator` |

use auth::{AuthGuard, require_administrator, require_bearer};
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use crate::domain::repository::{AuthorRepository, BookRepository};
use crate::infra::postgres::PgCatalogRepository;
use crate::presentation::handlers::{self, CatalogAppState};

/// Create the authors router with PostgreSQL repository
pub fn authors_router(repo: PgCatalogRepository, guard: AuthGuard) -> Router {
    authors_router_generic(repo, guard)
}

/// Create an authors router for any repository implementation
pub fn authors_router_generic<R>(repo: R, guard: AuthGuard) -> Router
where
    R: AuthorRepository + Send + Sync + 'static,
{
    let state = CatalogAppState {
        repo: Arc::new(repo),
    };
    let bearer = from_fn_with_state(guard.clone(), require_bearer);
    let administrator = from_fn_with_state(guard, require_administrator);

    Router::new()
        .route(
            "/",
            get(handlers::list_authors::<R>).merge(
                post(handlers::create_author::<R>).route_layer(administrator.clone()),
            ),
        )
        .route(
            "/{id}",
            get(handlers::get_author::<R>).route_layer(bearer).merge(
                put(handlers::update_author::<R>)
                    .merge(delete(handlers::delete_author::<R>))
                    .route_layer(administrator),
            ),
        )
        .with_state(state)
}

/// Create the books router with PostgreSQL repository
pub fn books_router(repo: PgCatalogRepository, guard: AuthGuard) -> Router {
    books_router_generic(repo, guard)
}

/// Create a books router for any repository implementation
pub fn books_router_generic<R>(repo: R, guard: AuthGuard) -> Router
where
    R: BookRepository + Send + Sync + 'static,
{
    let state = CatalogAppState {
        repo: Arc::new(repo),
    };
    let bearer = from_fn_with_state(guard.clone(), require_bearer);
    let administrator = from_fn_with_state(guard, require_administrator);

    Router::new()
        .route(
            "/",
            get(handlers::list_books::<R>)
                .merge(post(handlers::create_book::<R>).route_layer(administrator.clone())),
        )
        .route(
            "/{id}",
            get(handlers::get_book::<R>).route_layer(bearer).merge(
                put(handlers::update_book::<R>)
                    .merge(delete(handlers::delete_book::<R>))
                    .route_layer(administrator),
            ),
        )
        .with_state(state)
}
